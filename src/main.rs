use anyhow::{Context, Result};
use award_intervals::{load_csv, producer_award_intervals};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "award-intervals")]
#[command(about = "Min/max intervals between consecutive award wins")]
#[command(version)]
struct Args {
    /// `;`-delimited record file
    #[arg(short, long, default_value = "data/movielist.csv", env = "AWARDS_DATA_FILE")]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the award-interval report as JSON (default)
    Report,
    /// Print dataset counts
    Stats,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "award_intervals=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let store = load_csv(&args.data)
        .with_context(|| format!("Failed to load records from {}", args.data.display()))?;

    match args.command.unwrap_or(Command::Report) {
        Command::Report => {
            let report = producer_award_intervals(&store).context("Failed to compute award intervals")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Stats => {
            println!("Works:     {}", store.work_count());
            println!("Producers: {}", store.individual_count());
            println!("Credits:   {}", store.credit_count());
            println!(
                "Winners:   {}",
                store.works().iter().filter(|w| w.is_winner).count()
            );
        }
    }

    Ok(())
}
