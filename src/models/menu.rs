use serde::{Deserialize, Serialize};

/// Inputs for one menu costing calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCostParameters {
    pub total_items: f64,
    pub items_cost: f64,
    pub direct_costs_percentage: f64,
    pub indirect_costs_percentage: f64,
    pub sell_price: f64,
}

/// Full financial breakdown of a menu.
///
/// Margin and markup are percentages rounded to two decimals and may be
/// negative; every monetary field is `>= 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuFinancialResult {
    /// Items the cost was spread over; lets the unit cost be re-derived.
    #[serde(default)]
    pub total_items: f64,
    pub total_cost: f64,
    pub unit_cost: f64,
    pub sell_price: f64,
    pub profit_margin: f64,
    pub markup: f64,
    pub items_cost: f64,
    pub direct_costs: f64,
    pub indirect_costs: f64,
}

impl MenuFinancialResult {
    /// Absolute profit (negative when selling at a loss).
    #[inline]
    pub fn profit(&self) -> f64 {
        self.sell_price - self.total_cost
    }

    #[inline]
    pub fn is_loss(&self) -> bool {
        self.profit_margin < 0.0
    }
}
