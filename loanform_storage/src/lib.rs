#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Sinks that receive extraction results outside the core.

mod json;
mod memory;
pub mod record;
mod text;

pub use json::JsonRecordSink;
pub use memory::MemorySink;
pub use record::{StoredRecord, content_hash, document_name};
pub use text::SummaryFileSink;

use loanform_core::{ExtractionResult, NarrationSink, RecordSink};
use tracing::info;
use uuid::Uuid;

/// Hand one result to both collaborators.
pub async fn deliver(
    document: &str,
    source_text: &str,
    result: &ExtractionResult,
    records: &dyn RecordSink,
    narrator: &dyn NarrationSink,
) -> anyhow::Result<Uuid> {
    let id = records.store(document, source_text, result.fields()).await?;
    narrator.narrate(document, result.summary()).await?;
    info!("Delivered document {} as record {}", document, id);
    Ok(id)
}
