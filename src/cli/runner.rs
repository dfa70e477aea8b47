//! CLI runner - executes commands

use crate::cli::commands::Cli;
use crate::client::PgDataClient;
use crate::config::Settings;
use crate::error::Result;
use crate::types::{OutputFormat, Record};
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing records to stdout
    pub async fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out).await?;
        out.flush()?;
        Ok(())
    }

    /// Run the CLI command, writing records to `out`
    pub async fn run_to(&self, out: &mut impl Write) -> Result<()> {
        // Validate arguments before any network traffic
        let query = self.cli.command.to_query()?;
        let client = PgDataClient::new(self.settings()?.into_client_config()?)?;

        let start = Instant::now();
        let session = client.session().await?;
        let records = session.fetch(query.clone()).await?;

        info!(
            resource = %query.resource,
            records = records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Download complete"
        );

        write_records(out, &records, self.cli.format)
    }

    /// Settings from the config file with command-line overrides applied
    fn settings(&self) -> Result<Settings> {
        let base = match &self.cli.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(base.merge(self.cli.settings_overrides()))
    }
}

/// Render records in the requested format
pub fn write_records(out: &mut impl Write, records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
