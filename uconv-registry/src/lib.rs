//! uconv Registry
//!
//! The catalog model for uconv:
//! - `FieldSpec`: typed input and output descriptors
//! - `Conversion`: a named formula with its fields
//! - `Category`: an ordered group of conversions
//! - `ConversionRegistry`: ordered categories, lookup and evaluation

mod field;
mod conversion;
mod registry;
mod error;

pub use field::{FieldSpec, Step, ValueType};
pub use conversion::{Category, CategorySummary, Conversion, EvaluateFn, FieldDescription};
pub use registry::ConversionRegistry;
pub use error::{CatalogError, LookupError};

/// Re-export core types for catalog authors
pub mod prelude {
    pub use crate::{
        Category, Conversion, ConversionRegistry, FieldSpec, Step, ValueType,
    };
    pub use uconv_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_spec_serialization() {
        let field = FieldSpec::numeric("decimalVal", "Decimal").with_step(Step::Any);
        assert_eq!(
            serde_json::to_value(field).unwrap(),
            json!({"key": "decimalVal", "label": "Decimal", "value_type": "numeric", "step": "any"})
        );
    }

    #[test]
    fn test_default_step_omitted() {
        let value = serde_json::to_value(FieldSpec::text("bin", "Binary")).unwrap();
        assert_eq!(value["value_type"], "text");
        assert!(value.get("step").is_none());
    }

    #[test]
    fn test_fixed_step_serialization() {
        let value = serde_json::to_value(Step::By(0.5)).unwrap();
        assert_eq!(value, json!({"by": 0.5}));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = CategorySummary { name: "Time", conversions: vec!["Seconds to Minutes"] };
        assert_eq!(
            serde_json::to_value(summary).unwrap(),
            json!({"name": "Time", "conversions": ["Seconds to Minutes"]})
        );
    }
}
