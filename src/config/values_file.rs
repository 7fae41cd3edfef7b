use crate::domain::model::{ValueEntry, ValueType};
use crate::utils::error::{QualifierError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use serde::Deserialize;
use std::path::Path;

fn default_value_type() -> ValueType {
    ValueType::Integer
}

/// A TOML file of named field texts to check against one qualifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuesFile {
    #[serde(default = "default_value_type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub values: Vec<ValueEntry>,
}

impl ValuesFile {
    /// 從 TOML 檔案載入並驗證
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading values file: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(QualifierError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ValuesFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }
}

impl Validate for ValuesFile {
    fn validate(&self) -> Result<()> {
        for entry in &self.values {
            validate_non_empty_string("values.name", &entry.name)?;
        }
        validate_unique("values.name", self.values.iter().map(|e| e.name.as_str()))?;

        Ok(())
    }
}
