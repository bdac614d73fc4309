//! Collaborator interfaces for handing results out of the core.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{FieldMap, Summary};

/// Persists the field map of one extracted document.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Store `fields` for the document named `document`.
    ///
    /// `source_text` is the text the fields were extracted from; sinks may
    /// fingerprint it but should not need to keep it.
    async fn store(
        &self,
        document: &str,
        source_text: &str,
        fields: &FieldMap,
    ) -> anyhow::Result<Uuid>;
}

/// Receives the rendered summary of one document.
#[async_trait]
pub trait NarrationSink: Send + Sync {
    async fn narrate(&self, document: &str, summary: &Summary) -> anyhow::Result<()>;
}
