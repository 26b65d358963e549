//! CLI Application logic

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use impldoc_core::{generate_report, OUTPUT_FILE};

/// Log directives; the environment is not consulted
const LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "impldoc")]
#[command(
    author,
    version,
    about = "Write the OOP implementation report as a Word document",
    long_about = None
)]
struct Cli {}

/// Run the command-line interface
pub fn run_cli() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(std::io::stderr)
        .init();

    generate_command(Path::new(OUTPUT_FILE))?;
    println!("Document created successfully: {}", OUTPUT_FILE);
    Ok(())
}

/// Assemble the full report and write it to `output`
pub fn generate_command(output: &Path) -> Result<()> {
    debug!(version = impldoc_core::VERSION, "generating report");
    generate_report(output)
        .with_context(|| format!("Failed to create document {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_arguments() {
        assert!(Cli::try_parse_from(["impldoc"]).is_ok());
        assert!(Cli::try_parse_from(["impldoc", "report.docx"]).is_err());
    }

    #[test]
    fn test_log_filter_parses() {
        assert!(EnvFilter::try_new(LOG_FILTER).is_ok());
    }
}
