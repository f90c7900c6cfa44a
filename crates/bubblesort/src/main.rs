use anyhow::{Context, Result};
use bubblesort::{
    format_report, initialization_demo, sort_report, SortOptions, Strategy, DEFAULT_VALUES,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// bubblesort — stable in-place bubble sort demo and uninitialized-read demo.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Sort integers and print them before and after
    Sort {
        /// Values to sort (defaults to 60 7 8 3 20)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,

        /// Stop after the first pass without an exchange
        #[arg(long)]
        early_exit: bool,

        /// Print pass, comparison and exchange counters
        #[arg(long)]
        stats: bool,
    },
    /// Show reads before initialization on a checked stack frame
    Uninit,
}

impl Default for Command {
    fn default() -> Self {
        Command::Sort {
            values: Vec::new(),
            early_exit: false,
            stats: false,
        }
    }
}

fn run_sort(values: Vec<i32>, early_exit: bool, stats: bool) -> String {
    let values = if values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        values
    };
    let options = SortOptions {
        strategy: if early_exit {
            Strategy::EarlyExit
        } else {
            Strategy::FullPasses
        },
        show_stats: stats,
    };
    info!(len = values.len(), strategy = ?options.strategy, "bubblesort: sorting");

    let report = sort_report(&values, &options);
    info!(
        passes = report.stats.passes,
        exchanges = report.stats.exchanges,
        "bubblesort: sort complete"
    );
    format_report(&report, &options)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    info!(?command, "bubblesort: starting");

    let text = match command {
        Command::Sort {
            values,
            early_exit,
            stats,
        } => run_sort(values, early_exit, stats),
        Command::Uninit => initialization_demo().context("initialization demo failed")?,
    };

    // Reference output has no trailing newline after the sorted line.
    print!("{text}");
    Ok(())
}
