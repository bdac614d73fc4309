//! Integration tests for the result sinks.
//!
//! These tests verify that:
//! - JSON records round-trip with the exact field map
//! - summary files hold the newline-joined lines
//! - `deliver` feeds both collaborators

use loanform_core::{ExtractionResult, FieldMap, NarrationSink, RecordSink, Summary};
use loanform_storage::{
    JsonRecordSink, MemorySink, SummaryFileSink, content_hash, deliver,
};

fn sample_fields() -> FieldMap {
    [
        ("address", "12 Main St."),
        ("land_area", ""),
        ("loan_requested", "45,000"),
    ]
    .into_iter()
    .collect()
}

fn sample_summary() -> Summary {
    Summary::from_lines(vec![
        "Address: 12 Main St.".to_string(),
        "Loan Requested: 45,000".to_string(),
    ])
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_json_record_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let sink = JsonRecordSink::new(dir.path().join("json_files"));

    let id = sink
        .store("form_01", "source text", &sample_fields())
        .await
        .expect("record should be stored");

    let record = sink.load("form_01").await.expect("record should load");
    assert_eq!(record.id, id);
    assert_eq!(record.document, "form_01");
    assert_eq!(record.fields, sample_fields());
    assert_eq!(record.source_sha256, content_hash("source text"));

    let raw = std::fs::read_to_string(sink.path_for("form_01")).expect("file should exist");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("file should be JSON");
    assert_eq!(json["fields"]["loan_requested"], "45,000");
    assert_eq!(json["fields"]["land_area"], "");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_json_record_keys_keep_field_order() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let sink = JsonRecordSink::new(dir.path());
    sink.store("ordered", "", &sample_fields())
        .await
        .expect("record should be stored");

    let raw = std::fs::read_to_string(sink.path_for("ordered")).expect("file should exist");
    let address = raw.find("\"address\"").expect("address key");
    let land = raw.find("\"land_area\"").expect("land_area key");
    let loan = raw.find("\"loan_requested\"").expect("loan_requested key");
    assert!(address < land && land < loan);
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_summary_file_contents() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let sink = SummaryFileSink::new(dir.path().join("summaries"));

    sink.narrate("form_01", &sample_summary())
        .await
        .expect("summary should be written");

    let text = std::fs::read_to_string(sink.path_for("form_01")).expect("file should exist");
    assert_eq!(text, "Address: 12 Main St.\nLoan Requested: 45,000\n");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_document_name_cannot_escape_directory() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let sink = JsonRecordSink::new(dir.path());

    sink.store("../outside", "", &sample_fields())
        .await
        .expect("record should be stored");

    let path = sink.path_for("../outside");
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(path.exists());
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_deliver_feeds_both_sinks() {
    let sink = MemorySink::new();
    let result = ExtractionResult::new(sample_fields(), sample_summary());

    let id = deliver("doc", "raw text", &result, &sink, &sink)
        .await
        .expect("delivery should succeed");

    let records = sink.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(&records[0].fields, result.fields());

    let summaries = sink.summaries().await;
    assert_eq!(summaries, vec![("doc".to_string(), sample_summary())]);
}
