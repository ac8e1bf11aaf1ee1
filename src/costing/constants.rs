/// Tolerance when comparing monetary totals.
pub const MONEY_EPSILON: f64 = 0.01;

/// Tolerance, in percentage points, when comparing margins.
pub const PERCENTAGE_EPSILON: f64 = 0.1;

/// Margin reported when costs exist but no sell price is set.
pub const NO_PRICE_MARGIN: f64 = -100.0;

/// Decimal places kept on margin and markup.
pub const PERCENTAGE_DECIMALS: u32 = 2;
