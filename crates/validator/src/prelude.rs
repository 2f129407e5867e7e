//! Prelude module for convenient imports.
//!
//! Provides a single `use tagcheck::prelude::*;` import that brings in the
//! entry points, the field model and the error types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagcheck::prelude::*;
//!
//! #[derive(Record)]
//! pub struct App {
//!     #[validate("len:5")]
//!     pub version: String,
//! }
//!
//! assert!(validate(&App { version: "1.0.0".into() }).is_ok());
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::walker::{Validator, validate};

// ============================================================================
// FOUNDATION: Field model and errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, Error, FailureKind, FieldDescriptor, FieldKind, FieldValue, Inspect, Record,
    RuleError, RuleResult, ValidationError, ValidationErrors,
};

// ============================================================================
// RULES: Registry for custom rules
// ============================================================================

pub use crate::rules::{Check, RuleRegistry, RuleRegistryBuilder};

// ============================================================================
// DERIVE-GATED: #[derive(Record)]
// ============================================================================

#[cfg(feature = "derive")]
pub use tagcheck_macros::Record;
