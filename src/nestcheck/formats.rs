//! Report rendering for scan results
//!
//! This module provides a pluggable registry system for report serialization
//! formats. Each format implements the `Formatter` trait and can be registered
//! with `FormatRegistry`.

pub mod json;
pub mod registry;
pub mod simple;

pub use json::JsonFormatter;
pub use registry::{default_registry, FormatError, FormatRegistry, Formatter};
pub use simple::SimpleFormatter;
