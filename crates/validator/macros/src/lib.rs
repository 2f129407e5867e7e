//! # tagcheck-macros
//!
//! Derive macro for `tagcheck` records.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Record`](derive@Record) | Implements `Record` and `Inspect` from field rule tags |
//!
//! ## Examples
//!
//! ```ignore
//! use tagcheck::Record;
//!
//! #[derive(Record)]
//! pub struct User {
//!     #[validate("len:36")]
//!     pub id: String,
//!
//!     #[validate(rules = "min:18|max:50", name = "Age")]
//!     pub age: u32,
//!
//!     #[validate("nested")]
//!     pub meta: UserMeta,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Also implements `Inspect`, so the type can be validated directly and
/// used as a nested field of another record.
///
/// # Field attributes
///
/// - `#[validate("rule:cond|...")]` - The rule tag of the field
/// - `#[validate(rules = "...")]` - Same, key-value form
/// - `#[validate(name = "...")]` - Name stamped on errors (default: the field identifier)
///
/// Only `pub` fields are validated. Other fields are listed as private and
/// never inspected, so their types need not implement `Inspect`; the same
/// holds for `pub` fields without a tag.
///
/// The tag itself is checked when validation runs, not at compile time.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct Response {
///     #[validate("in:200,404,500")]
///     pub code: i32,
///
///     pub body: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
