pub mod prompts;
pub mod render;

pub use prompts::{
    collect_menu_parameters, prompt_number, prompt_price_measure, prompt_unit, prompt_yes_no,
    MenuParameterOverrides,
};
pub use render::{
    display_aliases, display_batch, display_menu_result, display_normalized, display_report,
    format_currency, format_percentage,
};
