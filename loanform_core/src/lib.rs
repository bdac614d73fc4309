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

//! Data contract shared by the loan-form extraction workspace.
//!
//! Nothing in this crate performs I/O. The extraction engine produces the
//! types defined here and external collaborators consume them through the
//! sink traits in [`sink`].

use serde::{Deserialize, Serialize};

pub mod field_map;
pub mod sink;
pub mod summary;

pub use field_map::FieldMap;
pub use sink::{NarrationSink, RecordSink};
pub use summary::Summary;

/// Names of the fields the summary and the standard catalogue refer to.
pub mod fields {
    pub const ADDRESS: &str = "address";
    pub const SELLER_BUILDER: &str = "seller_builder";
    pub const LAND_AREA: &str = "land_area";
    pub const BUILT_UP_AREA: &str = "built_up_area";
    pub const CARPET_AREA: &str = "carpet_area";
    pub const PROPERTY_AGE: &str = "property_age";
    pub const LOAN_REQUESTED: &str = "loan_requested";
    pub const INCIDENTAL_COSTS: &str = "incidental_costs";
    pub const COST_OF_PURCHASE_CONSTRUCTION: &str = "cost_of_purchase_construction";
    pub const REGISTRATION_FEES: &str = "registration_fees";
    pub const STAMP_DUTY: &str = "stamp_duty";
    pub const OTHER_COSTS: &str = "other_costs";
    pub const LOAN_FROM_RELATIVES: &str = "loan_from_relatives";
    pub const INSURANCE: &str = "insurance";
    pub const SAVINGS_IN_BANK: &str = "savings_in_bank";
    pub const ENCASHABLE_INVESTMENTS: &str = "encashable_investments";
    pub const AMOUNT_ALREADY_SPENT: &str = "amount_already_spent";
}

/// A field map paired with the summary derived from it.
///
/// This is the snapshot handed to presentation, persistence and narration
/// collaborators. It is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    fields: FieldMap,
    summary: Summary,
}

impl ExtractionResult {
    #[must_use]
    pub const fn new(fields: FieldMap, summary: Summary) -> Self {
        Self { fields, summary }
    }

    #[must_use]
    pub const fn fields(&self) -> &FieldMap {
        &self.fields
    }

    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub fn into_parts(self) -> (FieldMap, Summary) {
        (self.fields, self.summary)
    }
}
