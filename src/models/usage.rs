use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe form, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientUsage {
    pub ingredient_id: String,

    #[serde(default)]
    pub ingredient_name: String,

    pub quantity: f64,
    pub unit_measure: String,
}

impl RecipeIngredientUsage {
    pub fn new(
        ingredient_id: impl Into<String>,
        ingredient_name: impl Into<String>,
        quantity: f64,
        unit_measure: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            ingredient_name: ingredient_name.into(),
            quantity,
            unit_measure: unit_measure.into(),
        }
    }
}

/// API-ready ingredient line.
///
/// Field names and the string-typed quantity are fixed by the recipe API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedUsage {
    #[serde(rename = "idIngredient")]
    pub id_ingredient: String,

    #[serde(rename = "quantityIngredientRecipe")]
    pub quantity_ingredient_recipe: String,

    #[serde(rename = "unitAmountUseIngredient")]
    pub unit_amount_use_ingredient: String,
}

impl ConvertedUsage {
    /// Build an API line keeping the usage's original quantity and unit.
    pub fn unconverted(usage: &RecipeIngredientUsage) -> Self {
        Self {
            id_ingredient: usage.ingredient_id.clone(),
            quantity_ingredient_recipe: format_quantity(usage.quantity),
            unit_amount_use_ingredient: usage.unit_measure.clone(),
        }
    }
}

/// Serialize a quantity the way the API expects it: shortest decimal form,
/// no trailing `.0` on whole numbers.
pub fn format_quantity(quantity: f64) -> String {
    quantity.to_string()
}
