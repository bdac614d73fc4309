//! Persisted form of one extraction.

use chrono::{DateTime, Utc};
use loanform_core::FieldMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use uuid::Uuid;

/// One stored field map with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    /// Document name the record was stored under.
    pub document: String,
    /// Hex SHA-256 of the text the fields came from.
    pub source_sha256: String,
    pub extracted_at: DateTime<Utc>,
    pub fields: FieldMap,
}

impl StoredRecord {
    #[must_use]
    pub fn new(document: &str, source_text: &str, fields: FieldMap) -> Self {
        Self {
            id: Uuid::now_v7(),
            document: document.to_string(),
            source_sha256: content_hash(source_text),
            extracted_at: Utc::now(),
            fields,
        }
    }
}

/// Hex-encoded SHA-256 of `text`.
#[must_use]
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Document name for an input path: its file stem, or `stdin` for `-`.
#[must_use]
pub fn document_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        return "stdin".to_string();
    }
    path.file_stem()
        .map_or_else(|| "document".to_string(), |s| safe_component(&s.to_string_lossy()))
}

/// Reduce `name` to a single file-name component.
#[must_use]
pub fn safe_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned.to_string()
    }
}
