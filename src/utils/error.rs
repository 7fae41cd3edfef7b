use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualifierError {
    #[error("Invalid integer text: {text:?}")]
    InvalidIntegerText { text: String },

    #[error("Unknown value type: {name}")]
    UnknownValueType { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, QualifierError>;
