//! String validator functions
//!
//! Lengths are measured in Unicode scalar values (chars), not bytes.

use crate::foundation::{ConfigError, FailureKind, RuleError, RuleResult};
use crate::validators::parse_condition;

pub mod pattern;

pub use pattern::regexp;

/// `len:N`: the string has exactly `N` chars.
pub fn len(value: &str, condition: &str) -> RuleResult {
    let expected: usize = parse_condition("len", condition)?;

    if value.chars().count() == expected {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::LenNotEqual, condition))
    }
}

/// `in:a,b,c`: the string equals one of the comma-separated members.
///
/// Comparison is exact and case-sensitive.
pub fn one_of(value: &str, condition: &str) -> RuleResult {
    if condition.is_empty() {
        return Err(ConfigError::invalid_condition("in", condition).into());
    }

    if condition.split(',').any(|member| member == value) {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::StrNotInList, condition))
    }
}
