use anyhow::Result;
use clap::{Parser, Subcommand};

use bitmask_array::BinaryOp;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "bitmask-cmd")]
#[command(about = "Command-line utility for bit-packed boolean masks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a text file of 0/1 characters into a mask state file
    Pack {
        /// Text file with one 0 or 1 character per element (whitespace is ignored)
        input: String,

        /// Output file for the mask state (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a mask and display summary information
    Inspect {
        /// Increase verbosity (-v also prints the bits)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Mask state file to inspect
        mask: String,
    },

    /// Invert every element of a mask
    Invert {
        /// Mask state file to invert
        mask: String,

        /// Output file for the inverted mask (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Combine two masks of equal length element-wise
    Combine {
        /// Operation to apply: and, or, xor
        op: BinaryOp,

        /// Left-hand mask state file
        lhs: String,

        /// Right-hand mask state file
        rhs: String,

        /// Output file for the combined mask (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the elements selected by positions or a slice
    Select {
        /// Mask state file to select from
        mask: String,

        /// Position to select, negative counting from the end (can be specified multiple times)
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "slice")]
        index: Vec<isize>,

        /// Slice to select, as start:stop[:step]
        #[arg(short, long, allow_hyphen_values = true)]
        slice: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { input, output } => commands::pack::run(input, output),
        Commands::Inspect { verbose, mask } => commands::inspect::run(verbose, mask),
        Commands::Invert { mask, output } => commands::invert::run(mask, output),
        Commands::Combine {
            op,
            lhs,
            rhs,
            output,
        } => commands::combine::run(op, lhs, rhs, output),
        Commands::Select { mask, index, slice } => commands::select::run(mask, index, slice),
    }
}
