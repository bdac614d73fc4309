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

//! Pattern-based field extraction for scanned loan-application forms.
//!
//! Text goes through a [`PatternLibrary`] to produce a [`FieldMap`], which the
//! [`SummaryComposer`] turns into a [`Summary`]. No I/O happens here.

pub mod engine;
pub mod error;
pub mod library;
pub mod summary;

pub use engine::{FieldExtractor, extract};
pub use error::LibraryError;
pub use library::{FieldDef, FieldSpec, Normalize, PatternLibrary, default_fields};
pub use loanform_core::{ExtractionResult, FieldMap, Summary};
pub use summary::{SummaryComposer, compose};

/// Extract fields from `text` and compose their summary.
#[must_use]
pub fn process(text: &str, library: &PatternLibrary) -> ExtractionResult {
    let fields = extract(text, library);
    let summary = compose(&fields);
    ExtractionResult::new(fields, summary)
}
