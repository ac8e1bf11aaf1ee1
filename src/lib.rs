pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod models;
pub mod storage;
pub mod units;
pub mod validation;

pub use error::{MenuCostError, Result};
pub use models::{
    ConvertedUsage, MenuCostParameters, MenuFinancialResult, NormalizedMeasure, PriceMeasure,
    RecipeIngredientUsage,
};
