use crate::costing::Divergence;
use crate::models::{MenuFinancialResult, NormalizedMeasure, RecipeIngredientUsage};
use crate::units::{AliasEntry, BatchConversion};
use crate::validation::ValidationReport;

/// Format a value as Brazilian reais: `R$ 1.234,56`.
pub fn format_currency(value: f64) -> String {
    // Sign from the rounded value so tiny negatives print as "R$ 0,00"
    let rounded = (value * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Format a percentage with one decimal.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Display a menu's financial breakdown.
pub fn display_menu_result(result: &MenuFinancialResult, divergences: &[Divergence]) {
    println!();
    println!("=== Menu Costing ===");
    println!();
    println!("Items cost:      {:>14}", format_currency(result.items_cost));
    println!("Direct costs:    {:>14}", format_currency(result.direct_costs));
    println!("Indirect costs:  {:>14}", format_currency(result.indirect_costs));
    println!("Total cost:      {:>14}", format_currency(result.total_cost));
    println!("Unit cost:       {:>14}", format_currency(result.unit_cost));
    println!("Sell price:      {:>14}", format_currency(result.sell_price));
    println!();
    println!("Profit margin:   {:>14}", format_percentage(result.profit_margin));
    println!("Markup:          {:>14}", format_percentage(result.markup));

    if result.is_loss() {
        println!();
        println!("Selling at a loss of {}.", format_currency(-result.profit()));
    }

    if !divergences.is_empty() {
        println!();
        println!("--- Consistency warnings ---");
        for divergence in divergences {
            println!("  ! {}", divergence);
        }
    }
    println!();
}

/// Display the outcome of normalizing a price/measure triad.
pub fn display_normalized(normalized: &NormalizedMeasure) {
    println!("{}", normalized.describe());
    println!(
        "  {} for {} {} ({} per gram)",
        format_currency(normalized.converted.price),
        normalized.converted.quantity,
        normalized.converted.unit_measure,
        format_currency(normalized.converted.price_per_gram())
    );
}

/// Display validation errors and warnings, if any.
pub fn display_report(report: &ValidationReport) {
    for error in &report.errors {
        println!("  error: {}", error);
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
}

/// Display a converted recipe next to its original lines.
pub fn display_batch(usages: &[RecipeIngredientUsage], batch: &BatchConversion) {
    if batch.is_empty() {
        println!("No ingredients to convert.");
        return;
    }

    let max_name_len = usages
        .iter()
        .map(|u| u.ingredient_name.chars().count())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Recipe Ingredients ===");
    println!();

    for (i, (usage, item)) in usages.iter().zip(&batch.items).enumerate() {
        println!(
            "{:>3}. {:<width$} {:>8} {:<16} => {:>8} {}",
            i + 1,
            usage.ingredient_name,
            usage.quantity,
            usage.unit_measure,
            item.quantity_ingredient_recipe,
            item.unit_amount_use_ingredient,
            width = max_name_len
        );
    }

    if !batch.warnings.is_empty() {
        println!();
        for warning in &batch.warnings {
            println!(
                "  ! item {} ({}): {}",
                warning.index + 1,
                warning.ingredient_id,
                warning.reason
            );
        }
    }
    println!();
}

/// Display the alias table.
pub fn display_aliases(entries: &[AliasEntry]) {
    println!();
    println!("=== Unit Aliases ({} entries) ===", entries.len());
    println!();
    for entry in entries {
        println!(
            "  {:<22} {:>8} g  ({})",
            entry.alias,
            entry.grams_per_unit,
            entry.family.name()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(9.65), "R$ 9,65");
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(-50.0), "-R$ 50,00");
    }

    #[test]
    fn test_format_currency_drops_sign_of_values_that_round_to_zero() {
        assert_eq!(format_currency(-0.001), "R$ 0,00");
        assert_eq!(format_currency(-0.004), "R$ 0,00");
        assert_eq!(format_currency(-0.006), "-R$ 0,01");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(37.2), "37.2%");
        assert_eq!(format_percentage(-100.0), "-100.0%");
    }
}
