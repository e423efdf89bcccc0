//! Request parameters, the field normalizer and the validator.

pub mod fields;
pub mod params;
pub mod record;
pub mod validation;

pub use fields::normalize;
pub use params::{ParamValue, ParameterSet};
pub use record::{RecordType, ZoneType};
pub use validation::{FieldViolation, ValidationOutcome, ViolationKind, validate};
