use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use netfile_core::{extract_terms, validate_file, NetworkSummary, ValidationError};
use tracing_subscriber::EnvFilter;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Transportation network file validator.
#[derive(Parser)]
#[command(name = "netfile", version, about = "Transportation network file validator")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log validation progress to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file and report the first error
    Validate {
        /// Path to the network file
        file: PathBuf,
    },

    /// List the terms a function formula references
    Terms {
        /// Formula text, e.g. "t0*(1+0.15*(f/cap)^4)"
        formula: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate { file } => {
            cmd_validate(&file, cli.output, cli.quiet);
        }
        Commands::Terms { formula } => {
            cmd_terms(&formula, cli.output, cli.quiet);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "netfile_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(file: &Path, output: OutputFormat, quiet: bool) {
    match validate_file(file) {
        Ok(summary) => report_success(file, &summary, output, quiet),
        Err(e) => {
            report_validation_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

fn report_success(file: &Path, summary: &NetworkSummary, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file":      file.display().to_string(),
                "valid":     true,
                "functions": summary.functions,
                "nodes":     summary.nodes,
                "edges":     summary.edges,
                "od_pairs":  summary.od_pairs,
            });
            let pretty = serde_json::to_string_pretty(&value)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => {
            if !quiet {
                println!("The network file {} is correct!", file.display());
            }
        }
    }
}

fn report_validation_error(e: &ValidationError, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("{}", e);
            }
        }
    }
}

fn cmd_terms(formula: &str, output: OutputFormat, quiet: bool) {
    let terms = match extract_terms(formula) {
        Ok(t) => t,
        Err(e) => {
            report_error(&format!("invalid formula: {}", e), output, quiet);
            process::exit(1);
        }
    };
    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({ "terms": terms });
            println!("{}", value);
        }
        OutputFormat::Text => {
            for t in &terms {
                println!("{}", t);
            }
        }
    }
}

fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
