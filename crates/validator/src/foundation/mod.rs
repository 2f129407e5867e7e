//! Core types of the validation engine
//!
//! - **Field model**: [`FieldKind`], [`FieldValue`], [`Inspect`], [`Record`],
//!   [`FieldDescriptor`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConfigError`],
//!   [`RuleError`], [`Error`]
//!
//! # Architecture
//!
//! Rust has no runtime reflection over struct tags, so the engine asks each
//! value for a kind-tagged view instead. A record lists its fields together
//! with their rule tags; every field value reports one closed [`FieldKind`],
//! and that kind (together with the rule name) selects the validator function.
//!
//! ```rust,ignore
//! use tagcheck::foundation::{FieldKind, Inspect};
//!
//! assert_eq!(42_u32.field_value().kind(), FieldKind::Int);
//! assert_eq!(vec!["a", "b"].field_value().kind(), FieldKind::Sequence);
//! ```

pub mod error;
pub mod record;
pub mod value;

pub use error::{
    ConfigError, Error, FailureKind, RuleError, RuleResult, ValidationError, ValidationErrors,
};
pub use record::{FieldDescriptor, Record};
pub use value::{FieldKind, FieldValue, Inspect};
