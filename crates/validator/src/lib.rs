//! # tagcheck
//!
//! Tag-driven struct validation: rules are written next to each field as a
//! compact tag, checked at runtime, and every failure is reported at once.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagcheck::{Record, validate};
//!
//! #[derive(Record)]
//! pub struct User {
//!     #[validate("len:36")]
//!     pub id: String,
//!     #[validate("min:18|max:50")]
//!     pub age: u32,
//!     #[validate(rules = "regexp:^\\w+@\\w+\\.\\w+$", name = "Email")]
//!     pub email: String,
//!     #[validate("len:11")]
//!     pub phones: Vec<String>,
//! }
//!
//! let err = validate(&user).unwrap_err();
//! println!("{err}"); // age: cannot be greater 50
//! ```
//!
//! ## Tag Grammar
//!
//! `rule:condition` segments joined with `|`, e.g. `"min:18|max:50"`. The
//! bare marker `nested` on a record field (or a sequence of records) turns
//! on recursive validation.
//!
//! ## Built-in Rules
//!
//! - **String**: `len:N`, `regexp:PATTERN`, `in:a,b,c`
//! - **Integer**: `min:N`, `max:N`, `in:1,2,3`
//! - **Float**: `min:N`, `max:N`
//!
//! Custom rules are added through [`RuleRegistry::builder`](rules::RuleRegistry::builder)
//! and used with a [`Validator`].
//!
//! ## Outcomes
//!
//! [`validate`] returns `Ok(())`, [`Error::Rejected`] carrying every failed
//! rule, or [`Error::Config`] when a tag or condition is broken.

#![warn(missing_docs)]

pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod validators;
mod walker;

pub use foundation::{
    ConfigError, Error, FailureKind, FieldDescriptor, FieldKind, FieldValue, Inspect, Record,
    RuleError, RuleResult, ValidationError, ValidationErrors,
};
pub use walker::{Validator, validate};

#[cfg(feature = "derive")]
pub use tagcheck_macros::Record;
