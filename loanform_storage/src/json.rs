use async_trait::async_trait;
use loanform_core::{FieldMap, RecordSink};
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;

use crate::record::{StoredRecord, safe_component};

/// Writes each record as pretty JSON to `<dir>/<document>.json`.
///
/// A later record for the same document replaces the earlier file.
#[derive(Debug, Clone)]
pub struct JsonRecordSink {
    dir: PathBuf,
}

impl JsonRecordSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, document: &str) -> PathBuf {
        self.dir.join(format!("{}.json", safe_component(document)))
    }

    /// Read back a record written by this sink.
    pub async fn load(&self, document: &str) -> anyhow::Result<StoredRecord> {
        let path = self.path_for(document);
        let content = tokio::fs::read_to_string(&path).await?;
        let record: StoredRecord = serde_json::from_str(&content)?;
        Ok(record)
    }
}

#[async_trait]
impl RecordSink for JsonRecordSink {
    async fn store(
        &self,
        document: &str,
        source_text: &str,
        fields: &FieldMap,
    ) -> anyhow::Result<Uuid> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let record = StoredRecord::new(document, source_text, fields.clone());
        let path = self.path_for(document);
        let json = serde_json::to_string_pretty(&record)?;
        tokio::fs::write(&path, json).await?;

        debug!("Stored fields: {:?}", record.fields);
        info!("Saved record {} to {}", record.id, path.display());
        Ok(record.id)
    }
}
