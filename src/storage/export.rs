use std::path::Path;

use crate::error::Result;
use crate::models::RecipeIngredientUsage;
use crate::units::BatchConversion;

/// Write a converted recipe to CSV, one row per ingredient.
///
/// Rows pair each original line with its API form; `converted` is false
/// for lines that kept their original values after a failure.
pub fn write_conversion_csv(
    usages: &[RecipeIngredientUsage],
    batch: &BatchConversion,
    path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "index",
        "ingredient_id",
        "ingredient_name",
        "original_quantity",
        "original_unit",
        "quantity",
        "unit",
        "converted",
    ])?;

    for (i, (usage, item)) in usages.iter().zip(&batch.items).enumerate() {
        let failed = batch.warnings.iter().any(|w| w.index == i);
        wtr.write_record([
            (i + 1).to_string(),
            item.id_ingredient.clone(),
            usage.ingredient_name.clone(),
            usage.quantity.to_string(),
            usage.unit_measure.clone(),
            item.quantity_ingredient_recipe.clone(),
            item.unit_amount_use_ingredient.clone(),
            (!failed).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
