use std::fmt;

use shared::domain::Units;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Source,
    Destination,
    Weight,
    Width,
    Height,
    Depth,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Source,
        Field::Destination,
        Field::Weight,
        Field::Width,
        Field::Height,
        Field::Depth,
    ];

    pub const DIMENSIONS: [Field; 3] = [Field::Width, Field::Height, Field::Depth];

    pub fn name(self) -> &'static str {
        match self {
            Field::Source => "source",
            Field::Destination => "destination",
            Field::Weight => "weight",
            Field::Width => "width",
            Field::Height => "height",
            Field::Depth => "depth",
        }
    }

    pub fn is_location(self) -> bool {
        matches!(self, Field::Source | Field::Destination)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Working state of the form. Numeric fields keep the raw text as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsignmentDraft {
    pub source: String,
    pub destination: String,
    pub weight: String,
    pub width: String,
    pub height: String,
    pub depth: String,
    pub units: Units,
}

impl ConsignmentDraft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Source => &self.source,
            Field::Destination => &self.destination,
            Field::Weight => &self.weight,
            Field::Width => &self.width,
            Field::Height => &self.height,
            Field::Depth => &self.depth,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Source => &mut self.source,
            Field::Destination => &mut self.destination,
            Field::Weight => &mut self.weight,
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
            Field::Depth => &mut self.depth,
        };
        *slot = value.into();
    }

    /// Parsed numeric value of a field, `None` when blank or not a finite number.
    pub fn measure(&self, field: Field) -> Option<f64> {
        parse_measure(self.value(field))
    }
}

pub(crate) fn parse_measure(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
