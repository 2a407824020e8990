use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use banboard::corpus::{load_corpus, read_children_csv};
use banboard::export::{write_ban_csv, write_ban_json};
use banboard::models::StatusSummary;
use banboard::project::Projector;
use banboard::store::CorpusStore;
use banboard::summary::{risk_distribution, summarize_children};

#[derive(Parser)]
#[command(
    name = "banboard",
    version,
    about = "Normalizes product-safety ban records for the review dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a raw corpus file into canonical JSON
    Normalize {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Flatten a raw corpus file into a review CSV
    Export {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print risk counts for a corpus, plus optional child collections
    Summary {
        input: PathBuf,
        #[arg(long)]
        listings: Option<PathBuf>,
        #[arg(long)]
        investigations: Option<PathBuf>,
    },
}

fn corpus_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "corpus".to_string())
}

fn print_children(kind: &str, summary: &StatusSummary) {
    println!("{}: {} total", kind, summary.total);
    for (status, count) in &summary.by_status {
        println!("  {}: {}", status, count);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let projector = Projector::new();

    match cli.command {
        Command::Normalize { input, output } => {
            let records = load_corpus(&input)?;
            write_ban_json(&records, &projector, &output)?;
        }
        Command::Export { input, output } => {
            let records = load_corpus(&input)?;
            write_ban_csv(&records, &projector, &output)?;
        }
        Command::Summary {
            input,
            listings,
            investigations,
        } => {
            let records = load_corpus(&input)?;
            let store = CorpusStore::new();
            let meta = store.insert(&corpus_name(&input), &records, &projector);
            let bans = store.bans(&meta.id)?;
            let distribution = risk_distribution(&bans);
            println!(
                "{}: {} records ({} high / {} medium / {} low risk)",
                meta.name, meta.total_records, distribution.high, distribution.medium, distribution.low
            );
            if let Some(path) = listings {
                let children = read_children_csv(&path)?;
                print_children("listings", &summarize_children(Some(&children)));
            }
            if let Some(path) = investigations {
                let children = read_children_csv(&path)?;
                print_children("investigations", &summarize_children(Some(&children)));
            }
        }
    }
    Ok(())
}
