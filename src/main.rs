use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

use menu_cost_engine_rs::cli::{Cli, Command};
use menu_cost_engine_rs::costing::{calculate, validate};
use menu_cost_engine_rs::error::Result;
use menu_cost_engine_rs::interface::{
    collect_menu_parameters, display_aliases, display_batch, display_menu_result,
    display_normalized, display_report, prompt_price_measure, prompt_yes_no,
    MenuParameterOverrides,
};
use menu_cost_engine_rs::models::PriceMeasure;
use menu_cost_engine_rs::storage::{
    load_price_measures, load_usages, save_json, write_conversion_csv,
};
use menu_cost_engine_rs::units::{
    alias_table, convert_batch, normalize, resolve, validate_price_measure,
    validate_recipe_ingredients,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    // Warnings by default so batch failures and divergences still surface
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve { quantity, unit } => cmd_resolve(quantity, &unit),
        Command::Normalize {
            price,
            quantity,
            unit,
            file,
            json,
        } => cmd_normalize(price, quantity, unit, file, json),
        Command::ConvertRecipe { file, out, csv } => cmd_convert_recipe(&file, out, csv),
        Command::Menu {
            total_items,
            items_cost,
            direct,
            indirect,
            sell_price,
            json,
        } => {
            let overrides = MenuParameterOverrides {
                total_items,
                items_cost,
                direct_costs_percentage: direct,
                indirect_costs_percentage: indirect,
                sell_price,
            };
            cmd_menu(&overrides, json)
        }
        Command::Aliases => {
            display_aliases(alias_table());
            Ok(())
        }
    }
}

/// Convert a single quantity to grams.
fn cmd_resolve(quantity: f64, unit: &str) -> Result<()> {
    let resolution = resolve(quantity, unit);

    match resolution.entry() {
        Some(entry) => println!(
            "{} {} = {} g (alias '{}', {} g per unit)",
            quantity,
            unit,
            resolution.grams_or_quantity(),
            entry.alias,
            entry.grams_per_unit
        ),
        // Unknown units are never an error, the quantity just passes through
        None => println!("Unit '{}' is not recognized; {} kept as entered.", unit, quantity),
    }
    Ok(())
}

/// Normalize one triad (flags or prompts) or a whole JSON file of triads.
fn cmd_normalize(
    price: Option<f64>,
    quantity: Option<f64>,
    unit: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    // A file wins; otherwise all three flags are needed, else prompt
    let measures = match (file, price, quantity, unit) {
        (Some(path), ..) => load_price_measures(path)?,
        (None, Some(price), Some(quantity), Some(unit)) => {
            vec![PriceMeasure::new(price, quantity, unit)]
        }
        _ => vec![prompt_price_measure()?],
    };

    let normalized: Vec<_> = measures.iter().map(normalize).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&normalized)?);
        return Ok(());
    }

    for (measure, result) in measures.iter().zip(&normalized) {
        let report = validate_price_measure(measure);
        display_normalized(result);
        display_report(&report);
    }

    Ok(())
}

/// Validate and convert a recipe, then write the API payload.
fn cmd_convert_recipe(file: &Path, out: Option<PathBuf>, csv: Option<PathBuf>) -> Result<()> {
    let usages = load_usages(file)?;
    println!("Loaded {} ingredient lines", usages.len());

    // Structural errors block the payload; warnings are only shown
    let report = validate_recipe_ingredients(&usages);
    display_report(&report);
    if !report.is_valid() {
        println!("Recipe has {} error(s); nothing was written.", report.errors.len());
        return Ok(());
    }

    let batch = convert_batch(&usages);
    display_batch(&usages, &batch);
    if !batch.is_clean() {
        println!(
            "{} line(s) kept their original values.",
            batch.warnings.len()
        );
    }

    if let Some(path) = csv {
        write_conversion_csv(&usages, &batch, &path)?;
        println!("Wrote conversion report to {:?}", path);
    }

    match out {
        Some(path) => {
            // Ask before clobbering an earlier payload
            if path.exists() && !prompt_yes_no(&format!("Overwrite {:?}?", path), false)? {
                return Ok(());
            }
            save_json(&path, &batch.items)?;
            println!("Wrote API payload to {:?}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&batch.items)?),
    }

    Ok(())
}

/// Compute and display a menu's financial breakdown.
fn cmd_menu(overrides: &MenuParameterOverrides, json: bool) -> Result<()> {
    let params = collect_menu_parameters(overrides)?;
    let result = calculate(&params);
    // Advisory only: divergences are shown, never fatal
    let divergences = validate(&result);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "result": result,
                "divergences": divergences,
            }))?
        );
        return Ok(());
    }

    display_menu_result(&result, &divergences);
    Ok(())
}
