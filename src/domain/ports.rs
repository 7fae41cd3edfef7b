use crate::domain::model::{QualifierValue, ValueType};

/// A pluggable strategy for one configuration field's textual form.
///
/// `None` from `parse_value` or `format_value` is the rejection signal:
/// the text does not hold a valid value for this qualifier.
pub trait QualifierType: Send + Sync {
    fn parse_value(&self, text: Option<&str>) -> Option<QualifierValue>;

    /// Canonical text for `text`, or `None` when it does not parse.
    fn format_value(&self, text: Option<&str>) -> Option<String> {
        self.parse_value(text).map(|value| value.to_string())
    }

    fn value_type(&self) -> ValueType;
}
