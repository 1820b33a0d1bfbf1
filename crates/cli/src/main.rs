//! FMSim CLI - compliance rule evaluation from the command line
//!
//! Usage:
//! ```bash
//! fmsim rules list --domain Transfers
//! fmsim rules show ADA-01
//! fmsim rules lint --rules rules.yaml
//! fmsim evaluate --context transfer.json --domain Transfers
//! fmsim scan --records billings.json --format markdown --output scan.md
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod catalog;
mod commands;

use commands::{evaluate, rules, scan};

/// FMSim - business-rule compliance checks for simulated financial workflows
#[derive(Parser)]
#[command(name = "fmsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rule file (JSON or YAML). Uses the built-in catalog when omitted.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the rule set
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },

    /// Evaluate rules against one context file
    Evaluate {
        /// JSON file holding the context object
        #[arg(long, short)]
        context: PathBuf,
        /// Only rules of this domain
        #[arg(long, short)]
        domain: Option<String>,
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Scan many records against the rule set
    Scan {
        /// JSON file: a list of { id, label, context } records
        #[arg(long)]
        records: PathBuf,
        #[arg(long, short)]
        domain: Option<String>,
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum RulesAction {
    /// List rules
    List {
        #[arg(long, short)]
        domain: Option<String>,
        /// Hide inactive rules
        #[arg(long)]
        active_only: bool,
    },
    /// Show one rule by code
    Show {
        /// Rule code (e.g., ADA-01)
        code: String,
    },
    /// Report suspicious rule definitions
    Lint,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

/// Exit code when a Critical rule fires
const EXIT_BLOCKED: u8 = 2;

fn main() -> Result<ExitCode> {
    // Reports go to stdout, diagnostics to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let registry = catalog::load(cli.rules.as_deref())?;

    let blocked = match cli.command {
        Commands::Rules { action } => {
            rules::handle(&registry, action)?;
            false
        }

        Commands::Evaluate {
            context,
            domain,
            format,
            output,
        } => evaluate::run(&registry, &context, domain.as_deref(), format, output.as_deref())?,

        Commands::Scan {
            records,
            domain,
            format,
            output,
        } => scan::run(&registry, &records, domain.as_deref(), format, output.as_deref())?,
    };

    Ok(if blocked {
        ExitCode::from(EXIT_BLOCKED)
    } else {
        ExitCode::SUCCESS
    })
}
