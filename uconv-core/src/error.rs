//! Structured errors for API consumers
//!
//! Conversions never fail: bad input becomes empty output. These errors
//! cover the remaining failure kinds (unknown names, a malformed catalog,
//! malformed requests) and carry a machine-readable code.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const CATEGORY_NOT_FOUND: &str = "CATEGORY_NOT_FOUND";
    pub const CONVERSION_NOT_FOUND: &str = "CONVERSION_NOT_FOUND";
    pub const INVALID_CATALOG: &str = "INVALID_CATALOG";
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Structured error with code, message and optional suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UconvError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl UconvError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn category_not_found(name: &str) -> Self {
        Self::new(codes::CATEGORY_NOT_FOUND, format!("Unknown category: {}", name))
            .with_suggestion("Use list_categories to see available categories")
    }

    pub fn conversion_not_found(category: &str, name: &str) -> Self {
        Self::new(
            codes::CONVERSION_NOT_FOUND,
            format!("Unknown conversion '{}' in category '{}'", name, category),
        )
        .with_suggestion(format!("Use list_categories to see conversions in '{}'", category))
    }

    pub fn invalid_catalog(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_CATALOG, format!("Invalid catalog: {}", details.into()))
    }

    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_PARAMS, format!("Invalid parameters: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for UconvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for UconvError {}
