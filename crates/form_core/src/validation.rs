//! Field rules applied when the user attempts a submission.

use std::collections::BTreeMap;

use shared::{
    domain::{Dimensions, MAX_WEIGHT_KG, MIN_DIMENSION, MIN_WEIGHT_KG},
    protocol::ConsignmentPayload,
};

use crate::draft::{parse_measure, ConsignmentDraft, Field};

pub const SOURCE_REQUIRED: &str = "Source is required";
pub const SOURCE_SAME_AS_DESTINATION: &str = "Source and destination cannot be the same";
pub const DESTINATION_REQUIRED: &str = "Destination is required";
pub const DESTINATION_SAME_AS_SOURCE: &str = "Destination and source cannot be the same";
pub const WEIGHT_REQUIRED: &str = "Weight is required";
pub const WEIGHT_MINIMUM: &str = "Minimum weight is 1kg";
pub const WEIGHT_MAXIMUM: &str = "Maximum weight is 1000kg";
pub const DIMENSION_MINIMUM: &str = "Minimum is 1";

/// Per-field error messages; a field absent from the map passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn record(&mut self, field: Field, message: Option<String>) {
        if let Some(message) = message {
            self.messages.insert(field, message);
        }
    }
}

pub fn validate(draft: &ConsignmentDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    errors.record(
        Field::Source,
        check_location(
            &draft.source,
            &draft.destination,
            SOURCE_REQUIRED,
            SOURCE_SAME_AS_DESTINATION,
        ),
    );
    errors.record(
        Field::Destination,
        check_location(
            &draft.destination,
            &draft.source,
            DESTINATION_REQUIRED,
            DESTINATION_SAME_AS_SOURCE,
        ),
    );
    errors.record(Field::Weight, check_weight(&draft.weight));

    // Bound follows the units selected right now, not when the value was typed.
    let max_dimension = draft.units.max_dimension();
    for field in Field::DIMENSIONS {
        errors.record(
            field,
            check_dimension(field, draft.value(field), max_dimension),
        );
    }

    errors
}

/// Validates the draft and, when every rule passes, builds the submission body.
pub fn compose_payload(draft: &ConsignmentDraft) -> Result<ConsignmentPayload, FieldErrors> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    let (Some(weight), Some(width), Some(height), Some(depth)) = (
        draft.measure(Field::Weight),
        draft.measure(Field::Width),
        draft.measure(Field::Height),
        draft.measure(Field::Depth),
    ) else {
        return Err(errors);
    };

    Ok(ConsignmentPayload {
        source: draft.source.clone(),
        destination: draft.destination.clone(),
        weight,
        width,
        height,
        depth,
        units: draft.units,
        dimensions: Dimensions {
            width,
            height,
            depth,
        },
    })
}

fn check_location(
    value: &str,
    other: &str,
    required: &str,
    same: &str,
) -> Option<String> {
    if value.is_empty() {
        Some(required.to_string())
    } else if value == other {
        Some(same.to_string())
    } else {
        None
    }
}

fn check_weight(raw: &str) -> Option<String> {
    match parse_measure(raw) {
        None => Some(WEIGHT_REQUIRED.to_string()),
        Some(weight) if weight < f64::from(MIN_WEIGHT_KG) => Some(WEIGHT_MINIMUM.to_string()),
        Some(weight) if weight > f64::from(MAX_WEIGHT_KG) => Some(WEIGHT_MAXIMUM.to_string()),
        Some(_) => None,
    }
}

fn check_dimension(field: Field, raw: &str, max: u32) -> Option<String> {
    match parse_measure(raw) {
        None => Some(format!("{} is required", field.name())),
        Some(value) if value < f64::from(MIN_DIMENSION) => Some(DIMENSION_MINIMUM.to_string()),
        Some(value) if value > f64::from(max) => Some(format!("Maximum is {max}")),
        Some(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
