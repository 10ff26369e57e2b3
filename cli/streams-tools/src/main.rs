//! streams-tools CLI — build-time codegen chores for the flow solver's
//! Python binding.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "streams-tools",
    version,
    about = "Build-time codegen tools for the flow solver's Python binding"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate the f2py signature file with symbol binding directives
    Annotate {
        /// Input .pyf file (default: libstreams.pyf)
        #[arg(long)]
        input: Option<String>,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    /// Generate the deallocate_all subroutine from the resource catalog
    Dealloc {
        /// Catalog TOML file (default: the built-in solver inventory)
        #[arg(long)]
        catalog: Option<String>,
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Annotate { input, report } => {
            commands::annotate::run(input.as_deref(), report.as_deref())
        }
        Commands::Dealloc { catalog, output } => {
            commands::dealloc::run(catalog.as_deref(), output.as_deref())
        }
    }
}
