mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::generate;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "macrodoc", version, about = "Generate PHP IDE helper stubs for macro methods")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the IDE helper file from the class map and macro manifest
    Generate {
        /// Project root (defaults to the current directory)
        #[arg(long, default_value = ".")]
        base_path: PathBuf,
        /// Config file (defaults to macrodoc.yaml under the project root)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Class map location, relative to the project root
        #[arg(long)]
        class_map: Option<PathBuf>,
        /// Macro manifest location, relative to the project root
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Output file, relative to the project root
        #[arg(long)]
        output: Option<PathBuf>,
        /// Additional namespace prefix to document (repeatable)
        #[arg(long = "namespace")]
        namespaces: Vec<String>,
        /// Additional class to skip (repeatable)
        #[arg(long = "reject")]
        rejects: Vec<String>,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            base_path,
            config,
            class_map,
            manifest,
            output,
            namespaces,
            rejects,
        } => generate::run(generate::GenerateOptions {
            base_path,
            config,
            class_map,
            manifest,
            output,
            namespaces,
            rejects,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}

/// Respects `RUST_LOG`; stays quiet below `warn` otherwise so the progress
/// lines remain the only normal output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
