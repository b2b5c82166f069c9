use thiserror::Error;

use crate::draft::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} cannot be changed while locations are loading")]
    LocationsLoading { field: Field },
    #[error("unknown location '{location}' for {field}")]
    UnknownLocation { field: Field, location: String },
}
