pub mod calculator;
pub mod consistency;
pub mod constants;

pub use calculator::{calculate, round_to};
pub use consistency::{
    validate, validate_messages, validate_with, ConsistencyTolerances, Divergence,
};
pub use constants::*;
