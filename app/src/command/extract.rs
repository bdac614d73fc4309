//! Extract fields from one text document and report them.

use loanform_core::ExtractionResult;
use loanform_extraction::process;
use loanform_storage::{JsonRecordSink, SummaryFileSink, deliver, document_name};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// Text file to read, `-` for stdin
    pub input: PathBuf,
    /// Print the full result as JSON instead of the report
    pub json: bool,
    /// Skip the configured record and summary sinks
    pub no_store: bool,
}

/// Strategy for executing the Extract command.
///
/// Reads text that an upstream tool already pulled out of the scanned form,
/// runs the field library over it, prints the result and hands it to the
/// storage sinks.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, library) = super::load_library()?;

        let text = read_input(&input.input).await?;
        if text.trim().is_empty() {
            warn!("Input text is empty, every field will use its default");
        }

        let result = process(&text, &library);
        debug!("Extracted fields: {:?}", result.fields());

        if input.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_report(&result);
        }

        if input.no_store || !config.storage.enabled {
            info!("Storage disabled, results not saved");
            return Ok(());
        }

        let document = document_name(&input.input);
        let records = JsonRecordSink::new(&config.storage.json_dir);
        let narrator = SummaryFileSink::new(&config.storage.summary_dir);
        deliver(&document, &text, &result, &records, &narrator).await?;

        Ok(())
    }
}

async fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text);
    }

    info!("Reading {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))
}

fn print_report(result: &ExtractionResult) {
    let fields = result.fields();
    let width = fields.names().map(str::len).max().unwrap_or(0);

    println!("=== Extracted Fields ===\n");
    for (name, value) in fields.iter() {
        let shown = if value.is_empty() { "(not found)" } else { value };
        println!("  {name:<width$}  {shown}");
    }
    println!();

    println!("=== Summary ===\n");
    println!("{}", result.summary());
}
