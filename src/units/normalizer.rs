use crate::models::{ConversionDetails, ConversionResult, NormalizedMeasure, PriceMeasure};
use crate::units::constants::{ValidationThresholds, CANONICAL_UNIT};
use crate::units::resolver::{resolve, suggest_unit, Resolution};
use crate::validation::ValidationReport;

/// Convert a price/quantity/unit triad into its canonical-unit equivalent.
///
/// Recognized non-gram units (including factor-1 units such as `ml`) are
/// always relabelled as grams. Gram-family and unrecognized units pass
/// through unchanged; `recognized` says which of the two happened.
pub fn normalize(measure: &PriceMeasure) -> NormalizedMeasure {
    let passthrough = |recognized: bool| NormalizedMeasure {
        original: measure.clone(),
        converted: ConversionResult::from(measure),
        conversion_applied: false,
        recognized,
        conversion_details: None,
    };

    match resolve(measure.quantity, &measure.unit_measure) {
        Resolution::Recognized { grams, entry } if !entry.family.is_canonical() => {
            let conversion_factor = if measure.quantity != 0.0 {
                grams / measure.quantity
            } else {
                entry.grams_per_unit
            };

            NormalizedMeasure {
                original: measure.clone(),
                converted: ConversionResult {
                    price: measure.price,
                    quantity: grams,
                    unit_measure: CANONICAL_UNIT.to_string(),
                },
                conversion_applied: true,
                recognized: true,
                conversion_details: Some(ConversionDetails {
                    original_grams: measure.quantity,
                    converted_grams: grams,
                    conversion_factor,
                }),
            }
        }
        Resolution::Recognized { .. } => passthrough(true),
        Resolution::Unrecognized { .. } => passthrough(false),
    }
}

/// Advisory checks on a price/measure triad, with default thresholds.
pub fn validate_price_measure(measure: &PriceMeasure) -> ValidationReport {
    validate_price_measure_with(measure, &ValidationThresholds::default())
}

pub fn validate_price_measure_with(
    measure: &PriceMeasure,
    thresholds: &ValidationThresholds,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !(measure.price > 0.0) {
        report.push_error("price", None, "Price must be greater than zero".to_string());
    }

    if !(measure.quantity > 0.0) {
        report.push_error(
            "quantity",
            None,
            "Quantity must be greater than zero".to_string(),
        );
    }

    if measure.unit_measure.trim().is_empty() {
        report.push_error("unitMeasure", None, "Unit of measure is required".to_string());
    } else if !resolve(measure.quantity, &measure.unit_measure).is_recognized() {
        report.push_warning(
            "unitMeasure",
            None,
            unrecognized_unit_message(&measure.unit_measure),
        );
    }

    if measure.price > thresholds.high_price {
        report.push_warning(
            "price",
            None,
            format!(
                "Price {:.2} is unusually high, please double-check",
                measure.price
            ),
        );
    }

    report
}

pub(crate) fn unrecognized_unit_message(unit: &str) -> String {
    match suggest_unit(unit) {
        Some(alias) => format!(
            "Unit '{}' is not recognized and will be kept as entered (did you mean '{}'?)",
            unit, alias
        ),
        None => format!(
            "Unit '{}' is not recognized and will be kept as entered",
            unit
        ),
    }
}
