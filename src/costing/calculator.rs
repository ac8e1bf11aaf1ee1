use crate::costing::constants::{NO_PRICE_MARGIN, PERCENTAGE_DECIMALS};
use crate::models::{MenuCostParameters, MenuFinancialResult};

/// Round to n decimal places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Profit margin and markup in percent, before rounding.
///
/// Three cases: a priced menu with costs, an unpriced menu with costs
/// (total loss sentinel), and a menu without costs (both zero).
fn margin_and_markup(sell_price: f64, total_cost: f64) -> (f64, f64) {
    if sell_price > 0.0 && total_cost > 0.0 {
        let profit = sell_price - total_cost;
        (profit / sell_price * 100.0, profit / total_cost * 100.0)
    } else if sell_price == 0.0 && total_cost > 0.0 {
        (NO_PRICE_MARGIN, 0.0)
    } else {
        (0.0, 0.0)
    }
}

/// Compute the full financial breakdown of a menu.
///
/// Monetary outputs are clamped to zero; margin and markup may be negative
/// and are the only values rounded.
pub fn calculate(params: &MenuCostParameters) -> MenuFinancialResult {
    let items_cost = params.items_cost;
    let direct_costs = items_cost * params.direct_costs_percentage / 100.0;
    let indirect_costs = items_cost * params.indirect_costs_percentage / 100.0;
    let total_cost = items_cost + direct_costs + indirect_costs;

    // No items means nothing to spread the cost over
    let unit_cost = if params.total_items > 0.0 {
        total_cost / params.total_items
    } else {
        0.0
    };

    // Percentages come from the raw values; clamping only touches money
    let (profit_margin, markup) = margin_and_markup(params.sell_price, total_cost);

    MenuFinancialResult {
        total_items: params.total_items.max(0.0),
        total_cost: total_cost.max(0.0),
        unit_cost: unit_cost.max(0.0),
        sell_price: params.sell_price.max(0.0),
        profit_margin: round_to(profit_margin, PERCENTAGE_DECIMALS),
        markup: round_to(markup, PERCENTAGE_DECIMALS),
        items_cost: items_cost.max(0.0),
        direct_costs: direct_costs.max(0.0),
        indirect_costs: indirect_costs.max(0.0),
    }
}
