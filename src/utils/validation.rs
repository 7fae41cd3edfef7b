use crate::utils::error::{QualifierError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QualifierError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(QualifierError::ValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate entry: {}", value),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "lease-time").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", " \t ").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("values.name", ["a", "b", "c"]).is_ok());
        assert!(validate_unique("values.name", Vec::<&str>::new()).is_ok());

        let err = validate_unique("values.name", ["a", "b", "a"]).unwrap_err();
        assert!(err.to_string().contains("Duplicate entry: a"));
    }
}
