//! spanview CLI: terminal viewer for recorded trace documents

use clap::{Parser, Subcommand};
use spanview_engine::TraceDocument;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Terminal viewer for recorded trace documents
#[derive(Parser)]
#[command(name = "spanview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a trace in the interactive viewer
    View {
        /// Path to the trace document (JSON)
        trace: PathBuf,
    },

    /// Print a per-timeline summary of a trace
    Dump {
        /// Path to the trace document (JSON)
        trace: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View { trace } => cmd_view(&trace).await,
        Commands::Dump { trace, json } => cmd_dump(&trace, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn cmd_view(trace: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let scene = TraceDocument::load(trace)?.into_scene();
    spanview_tui::run_tui(scene).await
}

fn cmd_dump(trace: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; only useful outside the raw-mode TUI.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let document = TraceDocument::load(trace)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    for timeline in &document.timelines {
        let entries = document
            .panels
            .iter()
            .find(|p| p.id == timeline.details)
            .map_or(0, |p| p.entries.len());
        println!(
            "{}  [{} - {}]  {} entries",
            timeline.name, timeline.start, timeline.end, entries
        );
    }

    Ok(())
}
