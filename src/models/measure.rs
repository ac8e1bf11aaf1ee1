use serde::{Deserialize, Serialize};

/// "This much money buys this much of this unit."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMeasure {
    pub price: f64,
    pub quantity: f64,
    pub unit_measure: String,
}

impl PriceMeasure {
    pub fn new(price: f64, quantity: f64, unit_measure: impl Into<String>) -> Self {
        Self {
            price,
            quantity,
            unit_measure: unit_measure.into(),
        }
    }
}

/// A price/quantity/unit triad after normalization.
///
/// When a conversion applies the unit is always the canonical literal
/// `"Gramas"`; otherwise the fields mirror the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub price: f64,
    pub quantity: f64,
    pub unit_measure: String,
}

impl ConversionResult {
    /// Price of a single unit of the converted quantity.
    #[inline]
    pub fn price_per_gram(&self) -> f64 {
        if self.quantity > 0.0 {
            self.price / self.quantity
        } else {
            0.0
        }
    }
}

impl From<&PriceMeasure> for ConversionResult {
    fn from(measure: &PriceMeasure) -> Self {
        Self {
            price: measure.price,
            quantity: measure.quantity,
            unit_measure: measure.unit_measure.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionDetails {
    /// Quantity as entered, in the original unit.
    pub original_grams: f64,
    pub converted_grams: f64,
    pub conversion_factor: f64,
}

/// Output of the price/measure normalizer.
///
/// The original triad is kept alongside the converted one so callers can
/// audit or log what changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMeasure {
    pub original: PriceMeasure,
    pub converted: ConversionResult,
    pub conversion_applied: bool,

    /// Whether the unit was found in the alias table at all.
    pub recognized: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_details: Option<ConversionDetails>,
}

impl NormalizedMeasure {
    /// Human-readable summary of what the normalizer did.
    pub fn describe(&self) -> String {
        match (&self.conversion_details, self.recognized) {
            (Some(details), _) if self.conversion_applied => format!(
                "Converted {} {} to {} {} (factor {})",
                self.original.quantity,
                self.original.unit_measure,
                details.converted_grams,
                self.converted.unit_measure,
                details.conversion_factor
            ),
            (_, true) => format!(
                "No conversion needed: {} {} is already in grams",
                self.original.quantity, self.original.unit_measure
            ),
            (_, false) => format!(
                "Unrecognized unit '{}': kept {} as entered",
                self.original.unit_measure, self.original.quantity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_per_gram() {
        let result = ConversionResult {
            price: 10.0,
            quantity: 500.0,
            unit_measure: "Gramas".to_string(),
        };
        assert!((result.price_per_gram() - 0.02).abs() < 1e-9);

        let empty = ConversionResult {
            quantity: 0.0,
            ..result
        };
        assert_eq!(empty.price_per_gram(), 0.0);
    }

    #[test]
    fn test_price_measure_json_field_names() {
        let measure = PriceMeasure::new(5.0, 100.0, "Gramas");
        let json = serde_json::to_value(&measure).unwrap();
        assert_eq!(json["unitMeasure"], "Gramas");
        assert_eq!(json["price"], 5.0);

        let parsed: PriceMeasure =
            serde_json::from_str(r#"{"price": 3.5, "quantity": 2, "unitMeasure": "xícara"}"#)
                .unwrap();
        assert_eq!(parsed.unit_measure, "xícara");
        assert_eq!(parsed.quantity, 2.0);
    }
}
