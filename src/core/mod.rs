pub mod check;
pub mod digits;
pub mod integer;

pub use crate::domain::model::{QualifierValue, ValueEntry, ValueType};
pub use crate::domain::ports::QualifierType;
pub use crate::utils::error::Result;
