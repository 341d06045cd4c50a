//! Lookup and catalog errors

use thiserror::Error;
use uconv_core::UconvError;

/// A category or conversion name that does not exist.
///
/// This is a caller bug (a stale or mistyped selection), never a user-input
/// state, so it is reported instead of being turned into empty output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown category '{category}'")]
    CategoryNotFound {
        category: String,
        suggestions: Vec<String>,
    },

    #[error("unknown conversion '{conversion}' in category '{category}'")]
    ConversionNotFound {
        category: String,
        conversion: String,
        suggestions: Vec<String>,
    },
}

impl LookupError {
    /// Similar names, best match first
    pub fn suggestions(&self) -> &[String] {
        match self {
            LookupError::CategoryNotFound { suggestions, .. }
            | LookupError::ConversionNotFound { suggestions, .. } => suggestions,
        }
    }
}

/// A catalog that breaks the uniqueness rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate conversion '{conversion}' in category '{category}'")]
    DuplicateConversion { category: String, conversion: String },

    #[error("duplicate {side} field '{key}' in conversion '{conversion}'")]
    DuplicateField {
        conversion: String,
        side: &'static str,
        key: String,
    },

    #[error("conversion '{0}' declares no outputs")]
    NoOutputs(String),
}

impl From<LookupError> for UconvError {
    fn from(err: LookupError) -> Self {
        let base = match &err {
            LookupError::CategoryNotFound { category, .. } => {
                UconvError::category_not_found(category)
            }
            LookupError::ConversionNotFound { category, conversion, .. } => {
                UconvError::conversion_not_found(category, conversion)
            }
        };
        match err.suggestions() {
            [] => base,
            similar => base.with_suggestion(format!("Similar: {}", similar.join(", "))),
        }
    }
}

impl From<CatalogError> for UconvError {
    fn from(err: CatalogError) -> Self {
        UconvError::invalid_catalog(err.to_string())
    }
}
