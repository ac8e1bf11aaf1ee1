use std::fmt;

use serde::Serialize;

use crate::costing::constants::{MONEY_EPSILON, NO_PRICE_MARGIN, PERCENTAGE_EPSILON};
use crate::models::MenuFinancialResult;

/// Comparison tolerances for the consistency check.
#[derive(Debug, Clone)]
pub struct ConsistencyTolerances {
    pub money: f64,
    pub percentage: f64,
}

impl Default for ConsistencyTolerances {
    fn default() -> Self {
        Self {
            money: MONEY_EPSILON,
            percentage: PERCENTAGE_EPSILON,
        }
    }
}

/// A mismatch between a stored financial result and its recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Divergence {
    TotalCostMismatch { expected: f64, actual: f64 },
    MissingUnitCost { total_cost: f64, unit_cost: f64 },
    UnitCostMismatch { expected: f64, actual: f64 },
    ProfitMarginMismatch { expected: f64, actual: f64 },
    MarkupMismatch { expected: f64, actual: f64 },
}

impl Divergence {
    /// Name of the result field that is out of line.
    pub fn field(&self) -> &'static str {
        match self {
            Divergence::TotalCostMismatch { .. } => "totalCost",
            Divergence::MissingUnitCost { .. } | Divergence::UnitCostMismatch { .. } => "unitCost",
            Divergence::ProfitMarginMismatch { .. } => "profitMargin",
            Divergence::MarkupMismatch { .. } => "markup",
        }
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divergence::TotalCostMismatch { expected, actual } => write!(
                f,
                "Total cost {:.4} does not match items + direct + indirect costs {:.4}",
                actual, expected
            ),
            Divergence::MissingUnitCost {
                total_cost,
                unit_cost,
            } => write!(
                f,
                "Unit cost {:.4} must be positive when total cost is {:.4}",
                unit_cost, total_cost
            ),
            Divergence::UnitCostMismatch { expected, actual } => write!(
                f,
                "Unit cost {:.4} does not match total cost per item {:.4}",
                actual, expected
            ),
            Divergence::ProfitMarginMismatch { expected, actual } => write!(
                f,
                "Profit margin {:.2}% does not match recomputed margin {:.2}%",
                actual, expected
            ),
            Divergence::MarkupMismatch { expected, actual } => write!(
                f,
                "Markup {:.2}% does not match recomputed markup {:.2}%",
                actual, expected
            ),
        }
    }
}

/// Recompute a financial result and report every divergence.
///
/// Advisory only: an empty list means the result is consistent.
pub fn validate(result: &MenuFinancialResult) -> Vec<Divergence> {
    validate_with(result, &ConsistencyTolerances::default())
}

pub fn validate_with(
    result: &MenuFinancialResult,
    tolerances: &ConsistencyTolerances,
) -> Vec<Divergence> {
    let mut divergences = Vec::new();

    let expected_total = result.items_cost + result.direct_costs + result.indirect_costs;
    if (expected_total - result.total_cost).abs() > tolerances.money {
        divergences.push(Divergence::TotalCostMismatch {
            expected: expected_total,
            actual: result.total_cost,
        });
    }

    if result.total_cost > 0.0 && !(result.unit_cost > 0.0) {
        divergences.push(Divergence::MissingUnitCost {
            total_cost: result.total_cost,
            unit_cost: result.unit_cost,
        });
    } else if result.total_items > 0.0 {
        let expected_unit = result.total_cost / result.total_items;
        if (expected_unit - result.unit_cost).abs() > tolerances.money {
            divergences.push(Divergence::UnitCostMismatch {
                expected: expected_unit,
                actual: result.unit_cost,
            });
        }
    }

    // Same three cases as the calculator: priced, unpriced sentinel, no costs
    let expected_percentages = if result.sell_price > 0.0 && result.total_cost > 0.0 {
        let profit = result.sell_price - result.total_cost;
        Some((
            profit / result.sell_price * 100.0,
            profit / result.total_cost * 100.0,
        ))
    } else if result.sell_price == 0.0 && result.total_cost > 0.0 {
        Some((NO_PRICE_MARGIN, 0.0))
    } else {
        None
    };

    if let Some((expected_margin, expected_markup)) = expected_percentages {
        if (expected_margin - result.profit_margin).abs() > tolerances.percentage {
            divergences.push(Divergence::ProfitMarginMismatch {
                expected: expected_margin,
                actual: result.profit_margin,
            });
        }
        if (expected_markup - result.markup).abs() > tolerances.percentage {
            divergences.push(Divergence::MarkupMismatch {
                expected: expected_markup,
                actual: result.markup,
            });
        }
    }

    for divergence in &divergences {
        tracing::warn!(field = divergence.field(), "{}", divergence);
    }

    divergences
}

/// Same check, rendered as human-readable messages.
pub fn validate_messages(result: &MenuFinancialResult) -> Vec<String> {
    validate(result).iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::calculator::calculate;
    use crate::models::MenuCostParameters;

    fn consistent_result() -> MenuFinancialResult {
        calculate(&MenuCostParameters {
            total_items: 2.0,
            items_cost: 40.0,
            direct_costs_percentage: 10.0,
            indirect_costs_percentage: 10.0,
            sell_price: 90.0,
        })
    }

    #[test]
    fn test_consistent_result_has_no_divergence() {
        assert!(validate(&consistent_result()).is_empty());
    }

    #[test]
    fn test_total_cost_drift() {
        let mut result = consistent_result();
        result.total_cost += 1.0;
        let divergences = validate(&result);
        assert!(divergences
            .iter()
            .any(|d| matches!(d, Divergence::TotalCostMismatch { .. })));
    }

    #[test]
    fn test_missing_unit_cost() {
        let mut result = consistent_result();
        result.unit_cost = 0.0;
        let divergences = validate(&result);
        assert_eq!(divergences.len(), 1);
        assert_eq!(divergences[0].field(), "unitCost");
    }

    #[test]
    fn test_margin_drift() {
        let mut result = consistent_result();
        result.profit_margin += 0.5;
        let messages = validate_messages(&result);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Profit margin"));
    }

    #[test]
    fn test_unit_cost_drift() {
        let mut result = consistent_result();
        result.unit_cost += 1.0;
        let divergences = validate(&result);
        assert_eq!(
            divergences,
            vec![Divergence::UnitCostMismatch {
                expected: 24.0,
                actual: 25.0
            }]
        );
    }

    #[test]
    fn test_markup_drift() {
        let mut result = consistent_result();
        result.markup += 50.0;
        let divergences = validate(&result);
        assert_eq!(divergences.len(), 1);
        assert_eq!(divergences[0].field(), "markup");
        assert!(divergences[0].to_string().starts_with("Markup"));
    }

    #[test]
    fn test_unpriced_menu_must_carry_sentinel() {
        let mut result = calculate(&MenuCostParameters {
            total_items: 1.0,
            items_cost: 10.0,
            ..Default::default()
        });
        assert!(validate(&result).is_empty());

        result.profit_margin = 0.0;
        result.markup = 25.0;
        let fields: Vec<_> = validate(&result).iter().map(Divergence::field).collect();
        assert_eq!(fields, vec!["profitMargin", "markup"]);
    }

    #[test]
    fn test_result_without_item_count_skips_unit_check() {
        let mut result = consistent_result();
        result.total_items = 0.0;
        result.unit_cost = 7.0;
        assert!(validate(&result).is_empty());
    }

    #[test]
    fn test_custom_tolerances() {
        let mut result = consistent_result();
        result.profit_margin += 0.5;
        let loose = ConsistencyTolerances {
            money: 0.01,
            percentage: 1.0,
        };
        assert!(validate_with(&result, &loose).is_empty());
    }
}
