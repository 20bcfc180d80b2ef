//! `fleetcard` — the fleetcard CLI.
//!
//! Renders card documents from local JSON without a server, and
//! checks a running server's health.

mod commands;

use clap::{Parser, Subcommand};

/// Fleetcard CLI tool.
#[derive(Parser, Debug)]
#[command(name = "fleetcard", about = "SVG status card CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a card document from local JSON.
    Render {
        #[command(subcommand)]
        what: RenderWhat,
    },

    /// Check server status.
    Status {
        /// Server base URL.
        #[arg(long)]
        server: String,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum RenderWhat {
    /// Device list card from a JSON array.
    Devices {
        /// Input JSON file, or `-` for stdin.
        #[arg(short = 'i', long = "input", default_value = "-")]
        input: String,

        /// Theme: light or dark.
        #[arg(long, default_value = "light")]
        theme: String,

        /// Output file (default: stdout).
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },

    /// Usage summary card from a JSON object.
    Summary {
        /// Input JSON file, or `-` for stdin.
        #[arg(short = 'i', long = "input", default_value = "-")]
        input: String,

        /// Theme: light or dark.
        #[arg(long, default_value = "light")]
        theme: String,

        /// Output file (default: stdout).
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { what } => match what {
            RenderWhat::Devices { input, theme, output } => {
                commands::render::devices(&input, &theme, output.as_deref())?;
            }
            RenderWhat::Summary { input, theme, output } => {
                commands::render::summary(&input, &theme, output.as_deref())?;
            }
        },

        Commands::Status { server } => {
            commands::status::check(&server)?;
        }

        Commands::Version => {
            println!("fleetcard cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
