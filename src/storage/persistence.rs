use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{PriceMeasure, RecipeIngredientUsage};

/// Load recipe ingredient lines from a JSON array.
pub fn load_usages<P: AsRef<Path>>(path: P) -> Result<Vec<RecipeIngredientUsage>> {
    let content = fs::read_to_string(path)?;
    let usages: Vec<RecipeIngredientUsage> = serde_json::from_str(&content)?;
    Ok(usages)
}

/// Load price/measure triads from a JSON array.
pub fn load_price_measures<P: AsRef<Path>>(path: P) -> Result<Vec<PriceMeasure>> {
    let content = fs::read_to_string(path)?;
    let measures: Vec<PriceMeasure> = serde_json::from_str(&content)?;
    Ok(measures)
}

/// Write any serializable value as pretty JSON.
pub fn save_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConvertedUsage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_usages() {
        let json = r#"[
            {"ingredientId": "1", "ingredientName": "Açúcar", "quantity": 2, "unitMeasure": "colher (sopa)"},
            {"ingredientId": "2", "quantity": 500, "unitMeasure": "Gramas"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let usages = load_usages(file.path()).unwrap();
        assert_eq!(usages.len(), 2);
        assert_eq!(usages[0].ingredient_name, "Açúcar");
        assert_eq!(usages[1].unit_measure, "Gramas");
    }

    #[test]
    fn test_load_price_measures_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[{\"price\": 1}]").unwrap();
        assert!(load_price_measures(file.path()).is_err());
    }

    #[test]
    fn test_save_json_uses_api_field_names() {
        let items = vec![ConvertedUsage {
            id_ingredient: "1".to_string(),
            quantity_ingredient_recipe: "30".to_string(),
            unit_amount_use_ingredient: "Gramas".to_string(),
        }];

        let out_file = NamedTempFile::new().unwrap();
        save_json(out_file.path(), &items).unwrap();

        let written = fs::read_to_string(out_file.path()).unwrap();
        assert!(written.contains("\"quantityIngredientRecipe\": \"30\""));
        assert!(written.contains("\"idIngredient\": \"1\""));
    }
}
