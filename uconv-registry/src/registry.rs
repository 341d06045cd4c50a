//! Conversion Registry

use crate::{CatalogError, Category, CategorySummary, Conversion, FieldDescription, FieldSpec, LookupError};
use std::collections::HashSet;
use tracing::debug;
use uconv_core::{InputBag, OutputBag};

/// Ordered catalog of categories
#[derive(Debug, Clone, Default)]
pub struct ConversionRegistry {
    categories: Vec<Category>,
}

impl ConversionRegistry {
    pub fn new() -> Self {
        Self { categories: Vec::new() }
    }

    /// Builder: append a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn conversion_count(&self) -> usize {
        self.categories.iter().map(|c| c.conversions().len()).sum()
    }

    pub fn category(&self, name: &str) -> Result<&Category, LookupError> {
        self.categories.iter().find(|c| c.name == name).ok_or_else(|| {
            debug!(category = name, "category lookup failed");
            LookupError::CategoryNotFound {
                category: name.to_string(),
                suggestions: find_similar(name, self.categories.iter().map(|c| c.name)),
            }
        })
    }

    /// Every category with its conversion names, in display order
    pub fn list_categories(&self) -> Vec<CategorySummary> {
        self.categories.iter().map(Category::summary).collect()
    }

    pub fn get_conversion(&self, category: &str, conversion: &str) -> Result<&Conversion, LookupError> {
        let cat = self.category(category)?;
        cat.conversion(conversion).ok_or_else(|| {
            debug!(category, conversion, "conversion lookup failed");
            LookupError::ConversionNotFound {
                category: category.to_string(),
                conversion: conversion.to_string(),
                suggestions: find_similar(conversion, cat.conversions().iter().map(|c| c.name)),
            }
        })
    }

    pub fn describe_fields(&self, conversion: &Conversion) -> FieldDescription {
        conversion.describe()
    }

    /// Evaluate a conversion against the full current input bag
    pub fn evaluate(&self, conversion: &Conversion, inputs: &InputBag) -> OutputBag {
        let outputs = conversion.evaluate(inputs);
        debug!(
            conversion = conversion.name,
            inputs = inputs.len(),
            blank = outputs.is_blank(),
            "evaluated conversion"
        );
        outputs
    }

    /// Look up a conversion by name and evaluate it
    pub fn evaluate_named(
        &self,
        category: &str,
        conversion: &str,
        inputs: &InputBag,
    ) -> Result<OutputBag, LookupError> {
        let conv = self.get_conversion(category, conversion)?;
        Ok(self.evaluate(conv, inputs))
    }

    /// Check the uniqueness rules of the catalog
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_names = HashSet::new();
        for category in &self.categories {
            if !category_names.insert(category.name) {
                return Err(CatalogError::DuplicateCategory(category.name.to_string()));
            }

            let mut conversion_names = HashSet::new();
            for conversion in category.conversions() {
                if !conversion_names.insert(conversion.name) {
                    return Err(CatalogError::DuplicateConversion {
                        category: category.name.to_string(),
                        conversion: conversion.name.to_string(),
                    });
                }
                if conversion.output_fields.is_empty() {
                    return Err(CatalogError::NoOutputs(conversion.name.to_string()));
                }
                check_unique_keys(conversion.name, "input", conversion.input_fields)?;
                check_unique_keys(conversion.name, "output", conversion.output_fields)?;
            }
        }
        Ok(())
    }
}

fn check_unique_keys(conversion: &str, side: &'static str, fields: &[FieldSpec]) -> Result<(), CatalogError> {
    let mut keys = HashSet::new();
    for field in fields {
        if !keys.insert(field.key) {
            return Err(CatalogError::DuplicateField {
                conversion: conversion.to_string(),
                side,
                key: field.key.to_string(),
            });
        }
    }
    Ok(())
}

/// Names similar to `query`, best match first (at most five)
fn find_similar<'a>(query: &str, candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut matches: Vec<(&str, usize)> = candidates
        .filter_map(|name| {
            let score = similarity_score(&query_lower, &name.to_lowercase());
            if score > 0 {
                Some((name, score))
            } else {
                None
            }
        })
        .collect();

    // Sort by similarity score (higher = more similar)
    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.into_iter().take(5).map(|(name, _)| name.to_string()).collect()
}

/// Calculate similarity score between two lowercase strings
fn similarity_score(query: &str, candidate: &str) -> usize {
    if query.is_empty() {
        return 0;
    }
    let mut score = 0;

    // Exact prefix match is best
    if candidate.starts_with(query) {
        score += 100;
    }
    // Contains the query
    else if candidate.contains(query) {
        score += 50;
    }
    // Query contains the candidate
    else if query.contains(candidate) {
        score += 30;
    }

    let query_chars: HashSet<char> = query.chars().filter(|c| c.is_alphanumeric()).collect();
    let candidate_chars: HashSet<char> = candidate.chars().filter(|c| c.is_alphanumeric()).collect();
    let common = query_chars.intersection(&candidate_chars).count();

    // A couple of shared letters is noise, not similarity
    if score == 0 && common * 2 < query_chars.len() {
        return 0;
    }
    score += common * 2;

    // Penalize length difference
    let len_diff = query.len().abs_diff(candidate.len());
    if len_diff < 5 && score > 0 {
        score += 5 - len_diff;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    static INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("x", "X")];
    static OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("y", "Y")];
    static DUPLICATE_INPUTS: [FieldSpec; 2] = [FieldSpec::numeric("x", "X"), FieldSpec::numeric("x", "Also X")];

    fn negate(inputs: &InputBag) -> OutputBag {
        match inputs.number("x") {
            Some(x) => OutputBag::single("y", (-x).to_string()),
            None => OutputBag::blank(["y"]),
        }
    }

    fn conversion(name: &'static str) -> Conversion {
        Conversion::new(name, &INPUTS, &OUTPUTS, negate)
    }

    fn registry() -> ConversionRegistry {
        ConversionRegistry::new()
            .with_category(Category::new("Signs").with_conversion(conversion("Negate")))
            .with_category(
                Category::new("Temperature")
                    .with_conversion(conversion("Celsius to Fahrenheit"))
                    .with_conversion(conversion("Celsius to Kelvin")),
            )
    }

    #[test]
    fn test_list_categories_in_order() {
        let list = registry().list_categories();
        let names: Vec<_> = list.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Signs", "Temperature"]);
        assert_eq!(list[1].conversions, vec!["Celsius to Fahrenheit", "Celsius to Kelvin"]);
    }

    #[test]
    fn test_get_conversion() {
        let reg = registry();
        let conv = reg.get_conversion("Signs", "Negate").unwrap();
        assert_eq!(conv.name, "Negate");
    }

    #[test]
    fn test_unknown_category_is_distinct_error() {
        let reg = registry();
        let err = reg.get_conversion("NoSuchCategory", "x").unwrap_err();
        assert!(matches!(err, LookupError::CategoryNotFound { .. }));
    }

    #[test]
    fn test_unknown_conversion_suggests_similar() {
        let reg = registry();
        let err = reg.get_conversion("Temperature", "Celsius to").unwrap_err();
        match &err {
            LookupError::ConversionNotFound { conversion, .. } => assert_eq!(conversion, "Celsius to"),
            other => panic!("Expected ConversionNotFound, got {:?}", other),
        }
        assert_eq!(err.suggestions().len(), 2);
    }

    #[test]
    fn test_category_suggestion() {
        let err = registry().category("temp").unwrap_err();
        assert_eq!(err.suggestions().first().map(String::as_str), Some("Temperature"));
    }

    #[test]
    fn test_evaluate_named() {
        let reg = registry();
        let out = reg.evaluate_named("Signs", "Negate", &InputBag::new().with("x", 3)).unwrap();
        assert_eq!(out.get("y"), Some("-3"));
        assert!(reg.evaluate_named("Signs", "Nope", &InputBag::new()).is_err());
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(registry().validate(), Ok(()));
        assert_eq!(registry().conversion_count(), 3);
    }

    #[test]
    fn test_validate_duplicate_category() {
        let reg = registry().with_category(Category::new("Signs"));
        assert_eq!(reg.validate(), Err(CatalogError::DuplicateCategory("Signs".to_string())));
    }

    #[test]
    fn test_validate_duplicate_conversion() {
        let reg = ConversionRegistry::new().with_category(
            Category::new("Signs")
                .with_conversion(conversion("Negate"))
                .with_conversion(conversion("Negate")),
        );
        assert!(matches!(reg.validate(), Err(CatalogError::DuplicateConversion { .. })));
    }

    #[test]
    fn test_validate_duplicate_field() {
        let reg = ConversionRegistry::new().with_category(
            Category::new("Signs").with_conversion(Conversion::new("Bad", &DUPLICATE_INPUTS, &OUTPUTS, negate)),
        );
        match reg.validate() {
            Err(CatalogError::DuplicateField { side, key, .. }) => {
                assert_eq!(side, "input");
                assert_eq!(key, "x");
            }
            other => panic!("Expected DuplicateField, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_error_to_uconv_error() {
        let err = registry().category("temp").unwrap_err();
        let uerr: uconv_core::UconvError = err.into();
        assert_eq!(uerr.code, uconv_core::codes::CATEGORY_NOT_FOUND);
        assert!(uerr.suggestion.unwrap().contains("Temperature"));
    }
}
