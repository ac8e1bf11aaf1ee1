use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Menu cost engine: converts culinary units to grams and costs menus.
#[derive(Parser, Debug)]
#[command(name = "menu_cost_engine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a quantity in any known unit to grams.
    Resolve {
        quantity: f64,

        /// Free-text unit, e.g. "colher (chá)" or "Quilogramas".
        unit: String,
    },

    /// Normalize a price/quantity/unit triad to grams.
    Normalize {
        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        quantity: Option<f64>,

        #[arg(long)]
        unit: Option<String>,

        /// JSON array of {price, quantity, unitMeasure} objects.
        #[arg(long, conflicts_with_all = ["price", "quantity", "unit"])]
        file: Option<PathBuf>,

        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Convert a recipe's ingredient lines into the API payload.
    ConvertRecipe {
        /// JSON array of {ingredientId, ingredientName, quantity, unitMeasure}.
        file: PathBuf,

        /// Where to write the API-ready JSON payload.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Optional CSV report of the conversion.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compute a menu's costs, margin and markup.
    Menu {
        #[arg(long)]
        total_items: Option<f64>,

        #[arg(long)]
        items_cost: Option<f64>,

        /// Direct costs as a percentage of the items cost.
        #[arg(long)]
        direct: Option<f64>,

        /// Indirect costs as a percentage of the items cost.
        #[arg(long)]
        indirect: Option<f64>,

        #[arg(long)]
        sell_price: Option<f64>,

        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List every recognized unit alias.
    Aliases,
}
