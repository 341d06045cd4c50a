//! uconv - Unit Conversion Engine
//!
//! Ties the standard catalog to the registry behind one shareable handle.
//! A presentation layer picks a category and a conversion, then calls
//! [`Converter::evaluate`] with the full input bag on every change.

use std::sync::Arc;
use tracing::debug;

pub use uconv_core::{InputBag, OutputBag, RawValue, UconvError};
pub use uconv_registry::{
    CatalogError, Category, CategorySummary, Conversion, ConversionRegistry, FieldDescription,
    FieldSpec, LookupError, Step, ValueType,
};

/// Main conversion engine
#[derive(Debug, Clone)]
pub struct Converter {
    registry: Arc<ConversionRegistry>,
}

impl Converter {
    pub fn new(registry: ConversionRegistry) -> Self {
        debug!(
            categories = registry.categories().len(),
            conversions = registry.conversion_count(),
            "converter ready"
        );
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn with_standard_catalog() -> Self {
        Self::new(uconv_catalog::standard_registry())
    }

    pub fn registry(&self) -> &ConversionRegistry {
        &self.registry
    }

    /// Shared handle to the registry
    pub fn shared_registry(&self) -> Arc<ConversionRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn list_categories(&self) -> Vec<CategorySummary> {
        self.registry.list_categories()
    }

    pub fn get_conversion(&self, category: &str, conversion: &str) -> Result<&Conversion, LookupError> {
        self.registry.get_conversion(category, conversion)
    }

    pub fn describe_fields(&self, conversion: &Conversion) -> FieldDescription {
        self.registry.describe_fields(conversion)
    }

    pub fn evaluate(&self, conversion: &Conversion, inputs: &InputBag) -> OutputBag {
        self.registry.evaluate(conversion, inputs)
    }

    pub fn evaluate_named(
        &self,
        category: &str,
        conversion: &str,
        inputs: &InputBag,
    ) -> Result<OutputBag, LookupError> {
        self.registry.evaluate_named(category, conversion, inputs)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_standard_catalog()
    }
}

/// Build an [`InputBag`] from `key: value` pairs.
///
/// Keys are identifiers or string literals; values are anything that
/// converts into a [`RawValue`].
#[macro_export]
macro_rules! inputs {
    {} => { $crate::InputBag::new() };
    { $($key:tt : $value:expr),* $(,)? } => {{
        let mut bag = $crate::InputBag::new();
        $(
            bag.insert($crate::__input_key!($key), $crate::RawValue::from($value));
        )*
        bag
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __input_key {
    ($key:ident) => { stringify!($key) };
    ($key:literal) => { $key };
}
