//! Conversion and category records

use crate::FieldSpec;
use serde::Serialize;
use std::fmt;
use tracing::warn;
use uconv_core::{InputBag, OutputBag};

/// Pure transform from form values to results
pub type EvaluateFn = fn(&InputBag) -> OutputBag;

/// A named conversion: typed inputs, typed outputs and one pure formula
#[derive(Clone, Copy)]
pub struct Conversion {
    pub name: &'static str,
    pub input_fields: &'static [FieldSpec],
    pub output_fields: &'static [FieldSpec],
    pub formula: EvaluateFn,
}

impl Conversion {
    pub const fn new(
        name: &'static str,
        input_fields: &'static [FieldSpec],
        output_fields: &'static [FieldSpec],
        formula: EvaluateFn,
    ) -> Self {
        Self { name, input_fields, output_fields, formula }
    }

    /// Run the formula and return exactly the declared output keys.
    ///
    /// Declared keys the formula left out map to `""`; undeclared keys are
    /// dropped.
    pub fn evaluate(&self, inputs: &InputBag) -> OutputBag {
        let mut outputs = (self.formula)(inputs);

        if outputs.keys().any(|k| self.output_field(k).is_none()) {
            warn!(conversion = self.name, "formula returned undeclared output keys");
            outputs.retain(|k| self.output_field(k).is_some());
        }
        for field in self.output_fields {
            if !outputs.contains_key(field.key) {
                outputs.insert(field.key, "");
            }
        }
        outputs
    }

    /// Output bag with every declared key blank
    pub fn blank_outputs(&self) -> OutputBag {
        OutputBag::blank(self.output_fields.iter().map(|f| f.key))
    }

    pub fn input_field(&self, key: &str) -> Option<&FieldSpec> {
        self.input_fields.iter().find(|f| f.key == key)
    }

    pub fn output_field(&self, key: &str) -> Option<&FieldSpec> {
        self.output_fields.iter().find(|f| f.key == key)
    }

    /// Field descriptors for rendering, without evaluating anything
    pub fn describe(&self) -> FieldDescription {
        FieldDescription {
            name: self.name,
            input_fields: self.input_fields,
            output_fields: self.output_fields,
        }
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("name", &self.name)
            .field("input_fields", &self.input_fields)
            .field("output_fields", &self.output_fields)
            .finish_non_exhaustive()
    }
}

/// Input and output descriptors of one conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDescription {
    pub name: &'static str,
    pub input_fields: &'static [FieldSpec],
    pub output_fields: &'static [FieldSpec],
}

/// A named, ordered group of conversions
#[derive(Debug, Clone)]
pub struct Category {
    pub name: &'static str,
    conversions: Vec<Conversion>,
}

impl Category {
    pub fn new(name: &'static str) -> Self {
        Self { name, conversions: Vec::new() }
    }

    /// Builder: append a conversion
    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversions.push(conversion);
        self
    }

    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }

    pub fn conversion(&self, name: &str) -> Option<&Conversion> {
        self.conversions.iter().find(|c| c.name == name)
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            name: self.name,
            conversions: self.conversions.iter().map(|c| c.name).collect(),
        }
    }
}

/// Catalog browse entry: a category and its conversion names, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub conversions: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    static INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("x", "X")];
    static OUTPUTS: [FieldSpec; 2] = [FieldSpec::output("double", "Double"), FieldSpec::output("half", "Half")];

    fn double_only(inputs: &InputBag) -> OutputBag {
        match inputs.number("x") {
            Some(x) => {
                let mut out = OutputBag::single("double", (x * 2.0).to_string());
                out.insert("stray", "1");
                out
            }
            None => OutputBag::new(),
        }
    }

    static DOUBLE: Conversion = Conversion::new("Double", &INPUTS, &OUTPUTS, double_only);

    #[test]
    fn test_evaluate_fills_missing_outputs() {
        let out = DOUBLE.evaluate(&InputBag::new());
        assert_eq!(out.len(), 2);
        assert!(out.is_blank());
    }

    #[test]
    fn test_evaluate_drops_undeclared_outputs() {
        let out = DOUBLE.evaluate(&InputBag::new().with("x", 4));
        assert_eq!(out.get("double"), Some("8"));
        assert_eq!(out.get("half"), Some(""));
        assert!(!out.contains_key("stray"));
    }

    #[test]
    fn test_describe() {
        let desc = DOUBLE.describe();
        assert_eq!(desc.name, "Double");
        assert_eq!(desc.input_fields[0].key, "x");
        assert_eq!(desc.output_fields.len(), 2);
    }

    #[test]
    fn test_category_summary_keeps_order() {
        let cat = Category::new("Math")
            .with_conversion(DOUBLE)
            .with_conversion(Conversion::new("Other", &INPUTS, &OUTPUTS, double_only));
        let summary = cat.summary();
        assert_eq!(summary.conversions, vec!["Double", "Other"]);
        assert!(cat.conversion("Other").is_some());
        assert!(cat.conversion("Missing").is_none());
    }
}
