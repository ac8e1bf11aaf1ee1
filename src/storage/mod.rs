mod export;
mod persistence;

pub use export::write_conversion_csv;
pub use persistence::{load_price_measures, load_usages, save_json};
