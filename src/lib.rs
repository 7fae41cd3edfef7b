pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::values_file::ValuesFile;
pub use core::{
    check::{CheckOutcome, CheckReport, ValueCheck},
    integer::IntegerQualifier,
};
pub use domain::model::{QualifierValue, ValueEntry, ValueType};
pub use domain::ports::QualifierType;
pub use utils::error::{QualifierError, Result};
