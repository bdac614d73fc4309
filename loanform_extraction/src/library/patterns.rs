//! Field definitions for loan-application forms.
//!
//! Definitions are plain strings so they can be shipped in configuration and
//! compiled into a [`super::PatternLibrary`] at startup.

use loanform_core::fields;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::LibraryError;
use crate::library::FieldSpec;

/// Post-processing applied to a captured value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Normalize {
    /// Strip leading and trailing whitespace.
    #[default]
    Trim,
    /// Trim, then fold every internal whitespace run (newlines included) into one space.
    CollapseWhitespace,
}

impl Normalize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::CollapseWhitespace => "collapse_whitespace",
        }
    }

    #[must_use]
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Trim => raw.trim().to_string(),
            Self::CollapseWhitespace => raw.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

/// Definition of a single extracted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Unique field name, used as the key in the field map.
    pub name: String,

    /// Regex whose first capture group is the value.
    pub pattern: String,

    /// Value stored when the pattern does not match.
    #[serde(default)]
    pub default: String,

    #[serde(default)]
    pub normalize: Normalize,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            default: String::new(),
            normalize: Normalize::Trim,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub const fn collapsed(mut self) -> Self {
        self.normalize = Normalize::CollapseWhitespace;
        self
    }

    /// Compile into a [`FieldSpec`].
    ///
    /// Patterns are compiled with `.` matching newlines, so a value may sit on
    /// the line after its label.
    ///
    /// # Errors
    /// Returns an error if the name is empty, the regex is invalid, or the
    /// regex has no capture group.
    pub fn build(&self) -> Result<FieldSpec, LibraryError> {
        if self.name.trim().is_empty() {
            return Err(LibraryError::EmptyName);
        }

        let regex = RegexBuilder::new(&self.pattern)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| LibraryError::InvalidPattern {
                name: self.name.clone(),
                source,
            })?;

        // Group 0 is the whole match.
        if regex.captures_len() < 2 {
            return Err(LibraryError::MissingCaptureGroup {
                name: self.name.clone(),
            });
        }

        Ok(FieldSpec::new(
            self.name.clone(),
            regex,
            self.default.clone(),
            self.normalize,
        ))
    }
}

/// Value shapes shared by several fields.
const AMOUNT: &str = r"(\d[\d,]*)";
const DIGITS: &str = r"(\d+)";
/// Lazy value running up to the `03.` section header.
const UNTIL_SECTION_03: &str = r"(.*?)\s*\n\s*03\s*\.";

const ADDRESS_LABEL: &str = "ADDRESS OF THE PLOT / FLAT / HOUSE";
const SELLER_LABEL: &str = "NAMES AND ADDRESS OF THE SELLER / BUILDER";
const AGE_LABEL: &str = "AGE OF FLAT / HOUSE IN CASE OF PURCHASE";

const AREA_LABELS: [(&str, &str); 3] = [
    (fields::LAND_AREA, "Land Area (sq. ft.)"),
    (fields::BUILT_UP_AREA, "Built up Area (sq. ft.)"),
    (fields::CARPET_AREA, "Carpet Area (sq. ft.)"),
];

const AMOUNT_LABELS: [(&str, &str); 11] = [
    (fields::LOAN_REQUESTED, "Loan requested"),
    // Printed forms split this label as "Incident al".
    (fields::INCIDENTAL_COSTS, "Incident al costs"),
    (
        fields::COST_OF_PURCHASE_CONSTRUCTION,
        "Cost of purchase /construction/repairs/improvement/extension.",
    ),
    (fields::REGISTRATION_FEES, "Registration fees"),
    (fields::STAMP_DUTY, "Stamp Duty"),
    (fields::OTHER_COSTS, "Any other costs"),
    (fields::LOAN_FROM_RELATIVES, "Loan from relatives"),
    (fields::INSURANCE, "Insurance"),
    (fields::SAVINGS_IN_BANK, "Savings in Bank"),
    (fields::ENCASHABLE_INVESTMENTS, "Encashable investments"),
    (fields::AMOUNT_ALREADY_SPENT, "Amount already spent"),
];

/// Multi-line value that ends at the first line opening a numbered section
/// header (`02.`) or one of the `stops` labels, at a blank line, or at the end
/// of the text.
///
/// Blank lines right after the label are skipped. The header and label
/// terminators are anchored at line starts, so an empty value stops at the
/// next section instead of reading into it.
fn until_next_section(stops: &str) -> String {
    format!(r"[ \t]*(?:\n[ \t]*)*(.*?)(?:(?m:^)[ \t]*(?:\d{{2}}\s*\.|{stops})|\n[ \t]*\n|\z)")
}

/// Turn a printed label into a regex that tolerates reflowed whitespace.
///
/// Words and punctuation become separate tokens joined by `\s*`, and periods
/// are optional because OCR drops them often.
fn label(phrase: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut word = String::new();

    for ch in phrase.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
            continue;
        }
        if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
        if ch == '.' {
            tokens.push(r"\.?".to_string());
        } else if !ch.is_whitespace() {
            tokens.push(regex::escape(&ch.to_string()));
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens.join(r"\s*")
}

fn amount_field(name: &str, phrase: &str) -> FieldDef {
    FieldDef::new(name, format!(r"{}\s*{AMOUNT}", label(phrase)))
}

/// The field catalogue for the standard loan-application form.
#[must_use]
pub fn default_fields() -> Vec<FieldDef> {
    let stops = [SELLER_LABEL, AGE_LABEL]
        .into_iter()
        .chain(AREA_LABELS.iter().chain(&AMOUNT_LABELS).map(|(_, phrase)| *phrase))
        .map(label)
        .collect::<Vec<_>>()
        .join("|");

    let mut defs = Vec::with_capacity(2 + AREA_LABELS.len() + 1 + AMOUNT_LABELS.len());
    defs.push(
        FieldDef::new(
            fields::ADDRESS,
            format!("{}{}", label(ADDRESS_LABEL), until_next_section(&stops)),
        )
        .collapsed(),
    );
    defs.push(
        FieldDef::new(
            fields::SELLER_BUILDER,
            format!("{}{UNTIL_SECTION_03}", label(SELLER_LABEL)),
        )
        .collapsed(),
    );
    defs.extend(
        AREA_LABELS
            .iter()
            .map(|(name, phrase)| amount_field(name, phrase)),
    );
    defs.push(FieldDef::new(
        fields::PROPERTY_AGE,
        format!(r"{}\s*{DIGITS}", label(AGE_LABEL)),
    ));
    defs.extend(
        AMOUNT_LABELS
            .iter()
            .map(|(name, phrase)| amount_field(name, phrase)),
    );
    defs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn capture(name: &str, text: &str) -> Option<String> {
        let def = default_fields()
            .into_iter()
            .find(|d| d.name == name)
            .expect("field should be in the catalogue");
        def.build().expect("catalogue field should build").capture(text)
    }

    #[test]
    fn label_joins_tokens_with_optional_whitespace() {
        assert_eq!(label("Loan requested"), r"Loan\s*requested");
        assert_eq!(label("A / B"), r"A\s*/\s*B");
        assert_eq!(label("(sq. ft.)"), r"\(\s*sq\s*\.?\s*ft\s*\.?\s*\)");
    }

    #[test]
    fn normalize_modes() {
        assert_eq!(Normalize::Trim.apply("  a \n b  "), "a \n b");
        assert_eq!(Normalize::CollapseWhitespace.apply("  a \n  b  "), "a b");
        assert_eq!(Normalize::CollapseWhitespace.apply(" \n "), "");
    }

    #[test]
    fn catalogue_names_are_unique() {
        let defs = default_fields();
        let mut names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), defs.len());
        assert_eq!(defs.len(), 17);
    }

    #[test]
    fn address_runs_to_next_section_header() {
        let text = "01. ADDRESS OF THE PLOT / FLAT / HOUSE\n  Flat 4B, Lake View\n  \
                    Andheri East, Mumbai-400069\n02. NAMES AND ADDRESS OF THE SELLER";
        assert_eq!(
            capture(fields::ADDRESS, text).as_deref(),
            Some("Flat 4B, Lake View Andheri East, Mumbai-400069")
        );
    }

    #[test]
    fn address_value_on_following_line_is_trimmed() {
        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n  12 Main St.  \n";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some("12 Main St."));
    }

    #[test]
    fn address_label_tolerates_reflowed_spacing() {
        let text = "ADDRESS  OF\nTHE PLOT/FLAT /HOUSE 7 Hill Road\n\nOther text";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some("7 Hill Road"));
    }

    #[test]
    fn address_with_empty_value_before_header() {
        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n02. NAMES";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some(""));
    }

    #[test]
    fn address_stops_at_next_field_label() {
        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n12 Main St\n\
                    Land Area (sq. ft.) 1200\nLoan requested 45,000";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some("12 Main St"));
    }

    #[test]
    fn address_skips_blank_lines_after_label() {
        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n\n12 Main St\n02. NAMES";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some("12 Main St"));

        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n  \n\n  12 Main St\n  Pune\n\nNotes";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some("12 Main St Pune"));
    }

    #[test]
    fn empty_address_does_not_read_into_next_section() {
        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n\n02. NAMES AND ADDRESS OF THE \
                    SELLER / BUILDER\nShree Builders\n03.";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some(""));

        let text = "ADDRESS OF THE PLOT / FLAT / HOUSE\n\nStamp Duty 2,000";
        assert_eq!(capture(fields::ADDRESS, text).as_deref(), Some(""));
    }

    #[test]
    fn amounts_keep_separators_as_printed() {
        assert_eq!(
            capture(fields::STAMP_DUTY, "Stamp Duty 2,25,000, paid").as_deref(),
            Some("2,25,000,")
        );
        assert_eq!(
            capture(fields::REGISTRATION_FEES, "Registration fees 1,2,3").as_deref(),
            Some("1,2,3")
        );
    }

    #[test]
    fn seller_builder_stops_at_section_three() {
        let text = "02. NAMES AND ADDRESS OF THE SELLER / BUILDER\nMr. R. K.\nGandhi \n03. \
                    AGE OF FLAT / HOUSE IN CASE OF PURCHASE 5\n04. Notes 03. again";
        assert_eq!(
            capture(fields::SELLER_BUILDER, text).as_deref(),
            Some("Mr. R. K. Gandhi")
        );
    }

    #[test]
    fn seller_builder_without_section_marker_does_not_match() {
        let text = "NAMES AND ADDRESS OF THE SELLER / BUILDER Gandhi Builders";
        assert_eq!(capture(fields::SELLER_BUILDER, text), None);
    }

    #[test]
    fn area_labels_accept_dot_variants() {
        let text = "Land Area (sq. ft.) 1200\nBuilt up Area (sq.ft.)\n950\nCarpet Area (sq ft) 800";
        assert_eq!(capture(fields::LAND_AREA, text).as_deref(), Some("1200"));
        assert_eq!(capture(fields::BUILT_UP_AREA, text).as_deref(), Some("950"));
        assert_eq!(capture(fields::CARPET_AREA, text).as_deref(), Some("800"));
    }

    #[test]
    fn property_age_takes_digits() {
        let text = "AGE OF FLAT / HOUSE IN CASE OF PURCHASE\n 12 years";
        assert_eq!(capture(fields::PROPERTY_AGE, text).as_deref(), Some("12"));
    }

    #[test]
    fn amounts_keep_thousands_separators() {
        assert_eq!(
            capture(fields::LOAN_REQUESTED, "Loan requested   45,000").as_deref(),
            Some("45,000")
        );
        assert_eq!(
            capture(fields::LOAN_REQUESTED, "Loan requested 4,50,000, payable").as_deref(),
            Some("4,50,000")
        );
    }

    #[test]
    fn incidental_costs_matches_split_and_joined_label() {
        assert_eq!(
            capture(fields::INCIDENTAL_COSTS, "Incident al costs 300").as_deref(),
            Some("300")
        );
        assert_eq!(
            capture(fields::INCIDENTAL_COSTS, "Incidental costs 1200").as_deref(),
            Some("1200")
        );
    }

    #[test]
    fn cost_of_purchase_label_with_slashes() {
        let text = "Cost of purchase /construction/repairs/improvement/extension. 2500000";
        assert_eq!(
            capture(fields::COST_OF_PURCHASE_CONSTRUCTION, text).as_deref(),
            Some("2500000")
        );
        let reflowed = "Cost of purchase / construction /repairs/\nimprovement/extension\n2,500,000";
        assert_eq!(
            capture(fields::COST_OF_PURCHASE_CONSTRUCTION, reflowed).as_deref(),
            Some("2,500,000")
        );
    }

    #[test]
    fn remaining_amount_fields() {
        let text = "Registration fees 4000\nStamp Duty 15000\nAny other costs 700\n\
                    Loan from relatives 50000\nInsurance 900\nSavings in Bank 120000\n\
                    Encashable investments 30000\nAmount already spent 10000";
        assert_eq!(capture(fields::REGISTRATION_FEES, text).as_deref(), Some("4000"));
        assert_eq!(capture(fields::STAMP_DUTY, text).as_deref(), Some("15000"));
        assert_eq!(capture(fields::OTHER_COSTS, text).as_deref(), Some("700"));
        assert_eq!(capture(fields::LOAN_FROM_RELATIVES, text).as_deref(), Some("50000"));
        assert_eq!(capture(fields::INSURANCE, text).as_deref(), Some("900"));
        assert_eq!(capture(fields::SAVINGS_IN_BANK, text).as_deref(), Some("120000"));
        assert_eq!(capture(fields::ENCASHABLE_INVESTMENTS, text).as_deref(), Some("30000"));
        assert_eq!(capture(fields::AMOUNT_ALREADY_SPENT, text).as_deref(), Some("10000"));
    }

    #[test]
    fn amount_label_without_number_does_not_match() {
        assert_eq!(capture(fields::INSURANCE, "Insurance: pending"), None);
    }

    #[test]
    fn build_rejects_bad_definitions() {
        assert!(matches!(
            FieldDef::new("bad", r"(unclosed").build(),
            Err(LibraryError::InvalidPattern { .. })
        ));
        assert!(matches!(
            FieldDef::new("nogroup", r"Loan\s*\d+").build(),
            Err(LibraryError::MissingCaptureGroup { .. })
        ));
        assert!(matches!(
            FieldDef::new("  ", r"(x)").build(),
            Err(LibraryError::EmptyName)
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn field_def_serialization_defaults() {
        let def: FieldDef = serde_json::from_str(r#"{"name":"x","pattern":"x(\\d+)"}"#)
            .expect("valid JSON should deserialize");
        assert_eq!(def.default, "");
        assert_eq!(def.normalize, Normalize::Trim);

        let json = serde_json::to_string(&def.clone().collapsed()).expect("def should serialize");
        assert!(json.contains("collapse_whitespace"));
    }
}
