use serde::Serialize;

use crate::error::{MenuCostError, Result};
use crate::models::usage::format_quantity;
use crate::models::{ConvertedUsage, RecipeIngredientUsage};
use crate::units::constants::{ValidationThresholds, CANONICAL_UNIT};
use crate::units::normalizer::unrecognized_unit_message;
use crate::units::resolver::{resolve, Resolution};
use crate::validation::ValidationReport;

/// An ingredient that could not be converted and kept its original values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchWarning {
    pub index: usize,
    pub ingredient_id: String,
    pub reason: String,
}

/// Result of converting a whole recipe.
///
/// `items` has the same length and order as the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchConversion {
    pub items: Vec<ConvertedUsage>,
    pub warnings: Vec<BatchWarning>,
}

impl BatchConversion {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Convert one recipe line into its API form.
///
/// Non-gram units are replaced by grams; gram-family and unrecognized
/// units keep the original quantity and unit.
pub fn convert_usage(usage: &RecipeIngredientUsage) -> Result<ConvertedUsage> {
    if !usage.quantity.is_finite() {
        return Err(MenuCostError::NonFiniteQuantity {
            quantity: usage.quantity,
            unit: usage.unit_measure.clone(),
        });
    }

    match resolve(usage.quantity, &usage.unit_measure) {
        Resolution::Recognized { grams, entry } if !entry.family.is_canonical() => {
            // A finite quantity can still overflow once scaled
            if !grams.is_finite() {
                return Err(MenuCostError::NonFiniteQuantity {
                    quantity: grams,
                    unit: CANONICAL_UNIT.to_string(),
                });
            }
            Ok(ConvertedUsage {
                id_ingredient: usage.ingredient_id.clone(),
                quantity_ingredient_recipe: format_quantity(grams),
                unit_amount_use_ingredient: CANONICAL_UNIT.to_string(),
            })
        }
        _ => Ok(ConvertedUsage::unconverted(usage)),
    }
}

/// Convert every line of a recipe, isolating failures per item.
pub fn convert_batch(usages: &[RecipeIngredientUsage]) -> BatchConversion {
    let mut batch = BatchConversion {
        items: Vec::with_capacity(usages.len()),
        warnings: Vec::new(),
    };

    for (index, usage) in usages.iter().enumerate() {
        match convert_usage(usage) {
            Ok(item) => batch.items.push(item),
            // The failed line keeps its slot so output order matches input
            Err(e) => {
                tracing::warn!(
                    index,
                    ingredient_id = %usage.ingredient_id,
                    error = %e,
                    "ingredient conversion failed, keeping original values"
                );
                batch.warnings.push(BatchWarning {
                    index,
                    ingredient_id: usage.ingredient_id.clone(),
                    reason: e.to_string(),
                });
                batch.items.push(ConvertedUsage::unconverted(usage));
            }
        }
    }

    batch
}

/// Structural checks on recipe lines, independent of unit conversion.
pub fn validate_recipe_ingredients(usages: &[RecipeIngredientUsage]) -> ValidationReport {
    validate_recipe_ingredients_with(usages, &ValidationThresholds::default())
}

pub fn validate_recipe_ingredients_with(
    usages: &[RecipeIngredientUsage],
    thresholds: &ValidationThresholds,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (i, usage) in usages.iter().enumerate() {
        let label = if usage.ingredient_name.is_empty() {
            usage.ingredient_id.as_str()
        } else {
            usage.ingredient_name.as_str()
        };

        if usage.ingredient_id.trim().is_empty() {
            report.push_error("ingredientId", Some(i), "Ingredient is required".to_string());
        }

        if !(usage.quantity > 0.0) {
            report.push_error(
                "quantity",
                Some(i),
                format!("Quantity for '{}' must be greater than zero", label),
            );
        } else if usage.quantity > thresholds.high_quantity {
            report.push_warning(
                "quantity",
                Some(i),
                format!(
                    "Quantity {} for '{}' is unusually high",
                    usage.quantity, label
                ),
            );
        }

        if usage.unit_measure.trim().is_empty() {
            report.push_error(
                "unitMeasure",
                Some(i),
                format!("Unit of measure for '{}' is required", label),
            );
        } else if !resolve(usage.quantity, &usage.unit_measure).is_recognized() {
            report.push_warning(
                "unitMeasure",
                Some(i),
                unrecognized_unit_message(&usage.unit_measure),
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(id: &str, quantity: f64, unit: &str) -> RecipeIngredientUsage {
        RecipeIngredientUsage::new(id, format!("Ingredient {id}"), quantity, unit)
    }

    #[test]
    fn test_convert_usage_spoons() {
        let item = convert_usage(&usage("a", 2.0, "colher (sopa)")).unwrap();
        assert_eq!(item.id_ingredient, "a");
        assert_eq!(item.quantity_ingredient_recipe, "30");
        assert_eq!(item.unit_amount_use_ingredient, CANONICAL_UNIT);
    }

    #[test]
    fn test_convert_usage_keeps_grams_and_unknown_units() {
        let grams = convert_usage(&usage("a", 125.5, "Gramas")).unwrap();
        assert_eq!(grams.quantity_ingredient_recipe, "125.5");
        assert_eq!(grams.unit_amount_use_ingredient, "Gramas");

        let unknown = convert_usage(&usage("b", 3.0, "punhado")).unwrap();
        assert_eq!(unknown.quantity_ingredient_recipe, "3");
        assert_eq!(unknown.unit_amount_use_ingredient, "punhado");
    }

    #[test]
    fn test_convert_usage_rejects_nan() {
        let err = convert_usage(&usage("a", f64::NAN, "xícara")).unwrap_err();
        assert!(matches!(err, MenuCostError::NonFiniteQuantity { .. }));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let usages = vec![
            usage("a", 1.0, "xícara"),
            usage("b", f64::INFINITY, "kg"),
            usage("c", 2.0, "dente"),
        ];
        let batch = convert_batch(&usages);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.items[0].quantity_ingredient_recipe, "160");
        assert_eq!(batch.items[1].quantity_ingredient_recipe, "inf");
        assert_eq!(batch.items[1].unit_amount_use_ingredient, "kg");
        assert_eq!(batch.items[2].quantity_ingredient_recipe, "10");

        assert!(!batch.is_clean());
        assert_eq!(batch.warnings.len(), 1);
        assert_eq!(batch.warnings[0].index, 1);
        assert_eq!(batch.warnings[0].ingredient_id, "b");
    }

    #[test]
    fn test_batch_converts_plural_and_prefixed_units() {
        let usages = vec![
            usage("a", 2.0, "colheres (sopa)"),
            usage("b", 1.5, "Kilogramas"),
            usage("c", 1000.0, "miligramas"),
        ];
        let batch = convert_batch(&usages);

        assert!(batch.is_clean());
        let quantities: Vec<_> = batch
            .items
            .iter()
            .map(|item| item.quantity_ingredient_recipe.as_str())
            .collect();
        assert_eq!(quantities, vec!["30", "1500", "1"]);
        assert!(batch
            .items
            .iter()
            .all(|item| item.unit_amount_use_ingredient == CANONICAL_UNIT));
    }

    #[test]
    fn test_validate_recipe_ingredients() {
        let usages = vec![
            usage("", 1.0, "g"),
            usage("b", 0.0, ""),
            usage("c", 20_000.0, "g"),
        ];
        let report = validate_recipe_ingredients(&usages);

        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.errors[0].index, Some(0));
        assert_eq!(report.errors[1].field, "quantity");
        assert_eq!(report.errors[2].field, "unitMeasure");

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].index, Some(2));
    }

    #[test]
    fn test_validate_recipe_ingredients_unknown_unit_warns() {
        let report = validate_recipe_ingredients(&[usage("a", 1.0, "punhado")]);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "unitMeasure");
    }
}
