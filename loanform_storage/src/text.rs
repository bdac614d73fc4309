use async_trait::async_trait;
use loanform_core::{NarrationSink, Summary};
use std::path::PathBuf;
use tracing::info;

use crate::record::safe_component;

/// Writes the summary text to `<dir>/<document>.txt` for a downstream narrator.
#[derive(Debug, Clone)]
pub struct SummaryFileSink {
    dir: PathBuf,
}

impl SummaryFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, document: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", safe_component(document)))
    }
}

#[async_trait]
impl NarrationSink for SummaryFileSink {
    async fn narrate(&self, document: &str, summary: &Summary) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(document);
        let mut text = summary.text();
        text.push('\n');
        tokio::fs::write(&path, text).await?;

        info!("Saved summary ({} lines) to {}", summary.len(), path.display());
        Ok(())
    }
}
