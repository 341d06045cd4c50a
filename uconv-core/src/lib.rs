//! uconv Core - Fundamental types
//!
//! This crate provides the core types used throughout uconv:
//! - `RawValue`: a field value as typed or sent (number or text)
//! - `InputBag` / `OutputBag`: per-interaction form values and results
//! - `to_fixed` / `display_number`: number formatting with stable digits
//! - `UconvError`: structured errors for API consumers

mod number;
mod value;
mod error;

pub use number::{display_number, parse_number, to_fixed};
pub use value::{InputBag, OutputBag, RawValue};
pub use error::{UconvError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{InputBag, OutputBag, RawValue, UconvError};
    pub use crate::{display_number, to_fixed};
    pub use crate::error::codes;
}
