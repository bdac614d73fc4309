//! Compiled field catalogue.
//!
//! A [`PatternLibrary`] is built once from [`FieldDef`]s and never mutated
//! afterwards, so it can be shared freely between concurrent extractions.

use once_cell::sync::OnceCell;
use regex::Regex;
use std::collections::HashSet;

use crate::error::LibraryError;

pub mod patterns;

pub use patterns::{FieldDef, Normalize, default_fields};

static STANDARD: OnceCell<PatternLibrary> = OnceCell::new();

/// A compiled field rule.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    pattern: Regex,
    default: String,
    normalize: Normalize,
}

impl FieldSpec {
    pub(crate) const fn new(
        name: String,
        pattern: Regex,
        default: String,
        normalize: Normalize,
    ) -> Self {
        Self {
            name,
            pattern,
            default,
            normalize,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    #[must_use]
    pub const fn normalize(&self) -> Normalize {
        self.normalize
    }

    /// Normalized first capture group of the earliest match, if any.
    ///
    /// `Some("")` means the label was found with nothing after it, which is
    /// different from `None` (label not found).
    #[must_use]
    pub fn capture(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        caps.get(1).map(|m| self.normalize.apply(m.as_str()))
    }

    /// Captured value, or the default when the pattern does not match.
    #[must_use]
    pub fn resolve(&self, text: &str) -> String {
        self.capture(text).unwrap_or_else(|| self.default.clone())
    }
}

/// Ordered, immutable set of field rules with unique names.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    specs: Vec<FieldSpec>,
}

impl PatternLibrary {
    /// Compile `defs`, keeping their order.
    ///
    /// # Errors
    /// Fails on the first definition that does not compile or whose name was
    /// already used.
    pub fn build(defs: &[FieldDef]) -> Result<Self, LibraryError> {
        let mut seen = HashSet::with_capacity(defs.len());
        let mut specs = Vec::with_capacity(defs.len());

        for def in defs {
            let spec = def.build()?;
            if !seen.insert(def.name.clone()) {
                return Err(LibraryError::DuplicateName(def.name.clone()));
            }
            specs.push(spec);
        }

        Ok(Self { specs })
    }

    /// The compiled-in catalogue, built on first use and shared afterwards.
    ///
    /// # Errors
    /// Only if the compiled-in definitions are broken.
    pub fn standard() -> Result<&'static Self, LibraryError> {
        STANDARD.get_or_try_init(|| Self::build(&default_fields()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(FieldSpec::name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternLibrary {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
