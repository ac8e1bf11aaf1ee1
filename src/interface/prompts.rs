use dialoguer::{Confirm, Input};

use crate::error::{MenuCostError, Result};
use crate::models::{MenuCostParameters, PriceMeasure};
use crate::units::{match_alias, suggest_unit};

/// Prompt for a non-negative number, accepting a comma as decimal separator.
pub fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| MenuCostError::InvalidInput(format!("Invalid number: {}", input)))?;

    if value < 0.0 || !value.is_finite() {
        return Err(MenuCostError::InvalidInput(format!(
            "{} must be a non-negative number",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for a unit of measure, offering the closest known alias when the
/// entry is not recognized.
pub fn prompt_unit() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Unit of measure")
        .default("Gramas".to_string())
        .interact_text()?;

    let input = input.trim().to_string();
    if match_alias(&input).is_some() {
        return Ok(input);
    }

    if let Some(alias) = suggest_unit(&input) {
        let confirm = Confirm::new()
            .with_prompt(format!("Unit '{}' is not recognized. Did you mean '{}'?", input, alias))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(alias.to_string());
        }
    }

    Ok(input)
}

/// Prompt for a price/quantity/unit triad.
pub fn prompt_price_measure() -> Result<PriceMeasure> {
    let price = prompt_number("Price paid", "0")?;
    let quantity = prompt_number("Quantity bought", "1")?;
    let unit_measure = prompt_unit()?;
    Ok(PriceMeasure {
        price,
        quantity,
        unit_measure,
    })
}

/// Menu parameters given on the command line; missing ones are prompted.
#[derive(Debug, Clone, Default)]
pub struct MenuParameterOverrides {
    pub total_items: Option<f64>,
    pub items_cost: Option<f64>,
    pub direct_costs_percentage: Option<f64>,
    pub indirect_costs_percentage: Option<f64>,
    pub sell_price: Option<f64>,
}

impl MenuParameterOverrides {
    /// Parameters when every value was supplied up front.
    pub fn complete(&self) -> Option<MenuCostParameters> {
        Some(MenuCostParameters {
            total_items: self.total_items?,
            items_cost: self.items_cost?,
            direct_costs_percentage: self.direct_costs_percentage?,
            indirect_costs_percentage: self.indirect_costs_percentage?,
            sell_price: self.sell_price?,
        })
    }
}

fn value_or_prompt(value: Option<f64>, prompt: &str, default: &str) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => prompt_number(prompt, default),
    }
}

/// Collect the menu costing parameters, prompting only for missing values.
pub fn collect_menu_parameters(overrides: &MenuParameterOverrides) -> Result<MenuCostParameters> {
    if let Some(params) = overrides.complete() {
        return Ok(params);
    }

    Ok(MenuCostParameters {
        total_items: value_or_prompt(overrides.total_items, "Number of items in the menu", "1")?,
        items_cost: value_or_prompt(overrides.items_cost, "Cost of all items", "0")?,
        direct_costs_percentage: value_or_prompt(
            overrides.direct_costs_percentage,
            "Direct costs (%)",
            "0",
        )?,
        indirect_costs_percentage: value_or_prompt(
            overrides.indirect_costs_percentage,
            "Indirect costs (%)",
            "0",
        )?,
        sell_price: value_or_prompt(overrides.sell_price, "Sell price", "0")?,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
