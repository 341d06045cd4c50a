//! Field descriptors

use serde::Serialize;

/// Semantic type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Numeric,
    Text,
}

/// Input granularity hint for numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Free decimal entry
    Any,
    /// Fixed increment
    By(f64),
}

/// Typed descriptor of one input or output field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub value_type: ValueType,
    /// `None` means the default increment of 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
}

impl FieldSpec {
    /// Numeric input field
    pub const fn numeric(key: &'static str, label: &'static str) -> Self {
        Self { key, label, value_type: ValueType::Numeric, step: None }
    }

    /// Free-text input field
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self { key, label, value_type: ValueType::Text, step: None }
    }

    /// Output field. Outputs are always rendered text.
    pub const fn output(key: &'static str, label: &'static str) -> Self {
        Self { key, label, value_type: ValueType::Text, step: None }
    }

    /// Builder: set the step hint
    pub const fn with_step(mut self, step: Step) -> Self {
        self.step = Some(step);
        self
    }
}
