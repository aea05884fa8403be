//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, schema_json};
use crate::error::{Error, Result};
use crate::exporter::{ExportStats, FileExporter};
use crate::types::Slice;
use anyhow::Context as _;
use serde_json::{json, Value};
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, error};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Schema => {
                self.output_message(&schema_json());
                Ok(())
            }
            Commands::Validate { config } => self.validate(config),
            Commands::Export {
                config,
                input,
                worker_name,
            } => {
                let stats = self.export(config, input, worker_name.as_deref()).await?;
                self.output_message(&json!({
                    "type": "SUMMARY",
                    "slices": stats.slices,
                    "records": stats.records,
                    "bytes": stats.bytes,
                    "files": stats.files,
                }));
                Ok(())
            }
        }
    }

    /// Validate a config file
    fn validate(&self, path: &Path) -> Result<()> {
        let config = load_config(path)?;
        self.output_message(&json!({
            "type": "CONFIG",
            "valid": true,
            "config": config,
        }));
        Ok(())
    }

    /// Run the export stage over every slice in the input
    pub async fn export(
        &self,
        config_path: &Path,
        input: &Path,
        worker_name: Option<&str>,
    ) -> Result<ExportStats> {
        let config = load_config(config_path)?;
        let mut exporter = FileExporter::new(config, worker_name).await?;
        let mut lines = open_input(input).await?.lines();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            if line.trim().is_empty() {
                continue;
            }

            let slice: Slice = serde_json::from_str(&line)
                .with_context(|| format!("Input line {line_no} is not a JSON array of records"))?;

            if let Err(e) = exporter.process_slice(&slice).await {
                // Keep what earlier slices wrote before surfacing the failure
                error!("Slice on input line {} failed: {}", line_no, e);
                exporter.shutdown().await?;
                return Err(e);
            }
        }

        debug!("Read {} input lines", line_no);
        exporter.shutdown().await
    }

    fn output_message(&self, msg: &Value) {
        println!("{}", serde_json::to_string(msg).unwrap_or_default());
    }
}

/// Open the slice input, `-` meaning stdin
async fn open_input(input: &Path) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    if input.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }

    let file = tokio::fs::File::open(input).await.map_err(|e| {
        Error::config(format!(
            "Failed to open input file '{}': {}",
            input.display(),
            e
        ))
    })?;
    Ok(Box::new(BufReader::new(file)))
}
