pub mod measure;
pub mod menu;
pub mod usage;

pub use measure::{ConversionDetails, ConversionResult, NormalizedMeasure, PriceMeasure};
pub use menu::{MenuCostParameters, MenuFinancialResult};
pub use usage::{ConvertedUsage, RecipeIngredientUsage};
