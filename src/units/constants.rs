/// The canonical unit every culinary quantity is normalized to.
pub const CANONICAL_UNIT: &str = "Gramas";

/// Grams per kilogram; also grams per liter under the density-of-water assumption.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

pub const GRAMS_PER_MILLIGRAM: f64 = 0.001;

/// Prices above this are flagged as suspicious (warning only).
pub const HIGH_PRICE_WARNING: f64 = 1000.0;

/// Recipe quantities above this are flagged as suspicious (warning only).
pub const HIGH_QUANTITY_WARNING: f64 = 10_000.0;

/// Minimum Jaro-Winkler similarity for a "did you mean" unit suggestion.
pub const SUGGESTION_MIN_SIMILARITY: f64 = 0.8;

/// Thresholds used by the advisory validators.
#[derive(Debug, Clone)]
pub struct ValidationThresholds {
    pub high_price: f64,
    pub high_quantity: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            high_price: HIGH_PRICE_WARNING,
            high_quantity: HIGH_QUANTITY_WARNING,
        }
    }
}
