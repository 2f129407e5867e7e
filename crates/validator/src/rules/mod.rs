//! Rule tags and the rule registry
//!
//! - [`grammar`]: parses a tag such as `"min:18|max:50"` into
//!   [`RuleDescriptor`]s.
//! - [`registry`]: maps (field kind, rule name) to a validator function.

pub mod grammar;
pub mod registry;

pub use grammar::{FieldRuleSet, NESTED_MARKER, RuleDescriptor, parse};
pub use registry::{
    BoolCheck, Check, FloatCheck, IntCheck, RuleRegistry, RuleRegistryBuilder, StrCheck,
};
