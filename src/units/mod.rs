pub mod aliases;
pub mod batch;
pub mod constants;
pub mod normalizer;
pub mod resolver;

pub use aliases::{alias_table, AliasEntry, Matching, UnitFamily};
pub use batch::{
    convert_batch, convert_usage, validate_recipe_ingredients, BatchConversion, BatchWarning,
};
pub use constants::*;
pub use normalizer::{normalize, validate_price_measure};
pub use resolver::{match_alias, normalize_unit, resolve, resolve_grams, suggest_unit, Resolution};
