use async_trait::async_trait;
use loanform_core::{FieldMap, NarrationSink, RecordSink, Summary};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::record::StoredRecord;

/// Keeps records and summaries in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<StoredRecord>>,
    summaries: Mutex<Vec<(String, Summary)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().await.clone()
    }

    pub async fn summaries(&self) -> Vec<(String, Summary)> {
        self.summaries.lock().await.clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn store(
        &self,
        document: &str,
        source_text: &str,
        fields: &FieldMap,
    ) -> anyhow::Result<Uuid> {
        let record = StoredRecord::new(document, source_text, fields.clone());
        let id = record.id;
        self.records.lock().await.push(record);
        Ok(id)
    }
}

#[async_trait]
impl NarrationSink for MemorySink {
    async fn narrate(&self, document: &str, summary: &Summary) -> anyhow::Result<()> {
        self.summaries
            .lock()
            .await
            .push((document.to_string(), summary.clone()));
        Ok(())
    }
}
