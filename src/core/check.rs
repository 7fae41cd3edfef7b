use crate::core::{QualifierType, ValueType};
use crate::domain::model::ValueEntry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub input: Option<String>,
    pub canonical: Option<String>,
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub value_type: ValueType,
    pub outcomes: Vec<CheckOutcome>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl CheckReport {
    pub fn is_all_valid(&self) -> bool {
        self.invalid_count == 0
    }

    pub fn invalid(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.valid)
    }
}

/// Runs named textual values through a qualifier and collects the results.
pub struct ValueCheck<Q: QualifierType> {
    qualifier: Q,
}

impl<Q: QualifierType> ValueCheck<Q> {
    pub fn new(qualifier: Q) -> Self {
        Self { qualifier }
    }

    pub fn check(&self, entries: &[ValueEntry]) -> CheckReport {
        let value_type = self.qualifier.value_type();
        tracing::debug!("Checking {} {} value(s)", entries.len(), value_type);

        let outcomes: Vec<CheckOutcome> = entries
            .iter()
            .map(|entry| {
                let canonical = self.qualifier.format_value(entry.text.as_deref());
                let valid = canonical.is_some();
                if !valid {
                    tracing::debug!(
                        "Value '{}' is not a valid {}: {:?}",
                        entry.name,
                        value_type,
                        entry.text
                    );
                }
                CheckOutcome {
                    name: entry.name.clone(),
                    input: entry.text.clone(),
                    canonical,
                    valid,
                }
            })
            .collect();

        let valid_count = outcomes.iter().filter(|outcome| outcome.valid).count();
        let invalid_count = outcomes.len() - valid_count;
        tracing::info!(
            "Checked {} value(s): {} valid, {} invalid",
            outcomes.len(),
            valid_count,
            invalid_count
        );

        CheckReport {
            value_type,
            outcomes,
            valid_count,
            invalid_count,
        }
    }
}
