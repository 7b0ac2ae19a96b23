use clap::{Parser, Subcommand};
use csrboard::cli;
use csrboard::config::Config;
use csrboard::error::BoardResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csrboard")]
#[command(about = "CSR program reporting from the office's Excel workbooks.")]
#[command(long_about = "csrboard - CSR workbook table store

Loads every sheet from the two program-office workbooks into named tables
and answers lookups from the terminal.

COMMANDS:
  sheets   - List every loaded sheet with its composite key
  show     - Print one table by its exact key
  program  - Resolve a loose program label to its table
  masters  - List master-data sheets
  summary  - Headline figures for one program

EXAMPLES:
  csrboard sheets
  csrboard show \"CSR_MIS_State Master\"
  csrboard program Kishori_Express --limit 20
  csrboard summary JindalArogym --json

Docs: https://github.com/royalbit/csrboard")]
#[command(version)]
struct Cli {
    /// YAML file with workbook paths
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the CSR MIS workbook path
    #[arg(long, global = true, value_name = "PATH")]
    csr_mis: Option<PathBuf>,

    /// Override the JSPL data-input workbook path
    #[arg(long, global = true, value_name = "PATH")]
    jspl_input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every loaded sheet with its composite key
    Sheets,

    /// Print one table by its exact composite key
    Show {
        /// Composite key, e.g. "CSR_MIS_State Master"
        key: String,

        /// Maximum data rows to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print the full table as JSON instead of a preview
        #[arg(long)]
        json: bool,
    },

    /// Resolve a program label and print its table
    Program {
        /// Program label, e.g. "Kishori_Express" or "swasti"
        name: String,

        /// Maximum data rows to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print the full table as JSON instead of a preview
        #[arg(long)]
        json: bool,
    },

    /// List master-data sheets
    Masters,

    /// Headline figures for one program
    Summary {
        /// Program label
        name: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> BoardResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("csrboard=warn")),
        )
        .init();

    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(path) = args.csr_mis {
        config.csr_mis = path;
    }
    if let Some(path) = args.jspl_input {
        config.jspl_input = path;
    }

    match args.command {
        Commands::Sheets => cli::sheets(&config),
        Commands::Show { key, limit, json } => cli::show(&config, &key, limit, json),
        Commands::Program { name, limit, json } => cli::program(&config, &name, limit, json),
        Commands::Masters => cli::masters(&config),
        Commands::Summary { name, json } => cli::summary(&config, &name, json),
    }
}
