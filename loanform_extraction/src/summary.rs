//! Human-readable summary of an extracted loan form.

use loanform_core::{FieldMap, Summary, fields};

/// Shown in place of an empty value.
pub const NOT_AVAILABLE: &str = "N/A";
/// Replaces the area block when any area value is missing.
pub const AREA_NOT_FOUND: &str = "Area details not found.";

/// Renders a [`FieldMap`] as a fixed sequence of report lines.
///
/// Line order never changes. The three area lines are reported together or
/// not at all, so a partial set of figures is never shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryComposer;

impl SummaryComposer {
    #[must_use]
    pub fn compose(map: &FieldMap) -> Summary {
        let mut lines = Vec::with_capacity(8);

        lines.push(format!("Address: {}", or_na(map, fields::ADDRESS)));
        lines.push(format!(
            "Seller/Builder: {}",
            or_na(map, fields::SELLER_BUILDER)
        ));

        let areas = [fields::LAND_AREA, fields::BUILT_UP_AREA, fields::CARPET_AREA];
        if areas.iter().all(|name| map.is_present(name)) {
            lines.push(format!(
                "Land Area (sq ft): {}",
                map.value(fields::LAND_AREA)
            ));
            lines.push(format!(
                "Built Up Area (sq ft): {}",
                map.value(fields::BUILT_UP_AREA)
            ));
            lines.push(format!(
                "Carpet Area (sq ft): {}",
                map.value(fields::CARPET_AREA)
            ));
        } else {
            lines.push(AREA_NOT_FOUND.to_string());
        }

        lines.push(format!(
            "Property Age: {} years",
            or_na(map, fields::PROPERTY_AGE)
        ));
        lines.push(format!(
            "Loan Requested: {}",
            or_na(map, fields::LOAN_REQUESTED)
        ));
        lines.push(format!(
            "Incidental Costs: {}",
            or_na(map, fields::INCIDENTAL_COSTS)
        ));

        Summary::from_lines(lines)
    }
}

/// Shorthand for [`SummaryComposer::compose`].
#[must_use]
pub fn compose(map: &FieldMap) -> Summary {
    SummaryComposer::compose(map)
}

fn or_na<'a>(map: &'a FieldMap, name: &str) -> &'a str {
    let value = map.value(name);
    if value.is_empty() { NOT_AVAILABLE } else { value }
}
