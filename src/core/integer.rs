use crate::core::digits::decimal_digit;
use crate::core::{QualifierType, QualifierValue, ValueType};
use crate::utils::error::{QualifierError, Result};

/// Qualifier for fields holding a signed 32-bit integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerQualifier;

impl IntegerQualifier {
    pub const fn new() -> Self {
        IntegerQualifier
    }

    /// Parses `text` as a base-10 `i32` after trimming, reporting why it was
    /// rejected.
    ///
    /// Everything at or below U+0020 counts as surrounding whitespace. The
    /// remainder must be an optional `+`/`-` followed by decimal digits of
    /// any script.
    pub fn try_parse(&self, text: &str) -> Result<i32> {
        let trimmed = text.trim_matches(|c: char| c <= '\u{20}');

        // Out of range and malformed input share one error kind.
        parse_decimal(trimmed).ok_or_else(|| QualifierError::InvalidIntegerText {
            text: text.to_string(),
        })
    }
}

/// Accumulates negatively so `i32::MIN` fits.
fn parse_decimal(text: &str) -> Option<i32> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() {
        return None;
    }

    let mut acc: i32 = 0;
    for c in digits.chars() {
        let digit = decimal_digit(c)? as i32;
        acc = acc.checked_mul(10)?.checked_sub(digit)?;
    }

    if negative {
        Some(acc)
    } else {
        acc.checked_neg()
    }
}

impl QualifierType for IntegerQualifier {
    fn parse_value(&self, text: Option<&str>) -> Option<QualifierValue> {
        let text = text?;
        match self.try_parse(text) {
            Ok(n) => Some(QualifierValue::Integer(n)),
            Err(e) => {
                tracing::trace!("Rejected qualifier text: {}", e);
                None
            }
        }
    }

    fn value_type(&self) -> ValueType {
        ValueType::Integer
    }
}
