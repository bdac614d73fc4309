//! Field extraction over plain document text.
//!
//! The extractor applies every rule of a [`PatternLibrary`] to the same
//! read-only text. Rules never consume input, so the result does not depend on
//! rule order, and absent fields resolve to their defaults instead of errors.

use loanform_core::FieldMap;

use crate::library::PatternLibrary;

/// Applies a pattern library to document text.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'a> {
    library: &'a PatternLibrary,
}

impl<'a> FieldExtractor<'a> {
    #[must_use]
    pub const fn new(library: &'a PatternLibrary) -> Self {
        Self { library }
    }

    /// Extract one value per library field.
    ///
    /// The returned map holds exactly the library's field names, in library
    /// order. Empty or whitespace-only text yields an all-default map.
    #[must_use]
    pub fn extract(&self, text: &str) -> FieldMap {
        let mut map = FieldMap::with_capacity(self.library.len());
        for spec in self.library {
            map.insert(spec.name(), spec.resolve(text));
        }
        map
    }
}

/// Shorthand for `FieldExtractor::new(library).extract(text)`.
#[must_use]
pub fn extract(text: &str, library: &PatternLibrary) -> FieldMap {
    FieldExtractor::new(library).extract(text)
}
