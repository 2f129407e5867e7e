//! Built-in validator functions
//!
//! Every function has the shape `fn(value, condition) -> RuleResult` and
//! trusts that the value already has the kind it was registered for.
//!
//! | kind   | rule          | passes when                                   |
//! |--------|---------------|-----------------------------------------------|
//! | string | `len:N`       | the string has exactly `N` chars              |
//! | string | `regexp:P`    | `P` matches somewhere in the string           |
//! | string | `in:a,b`      | the string equals one of the members          |
//! | int    | `min:N`       | value ≥ `N`                                   |
//! | int    | `max:N`       | value ≤ `N`                                   |
//! | int    | `in:1,2`      | value equals one of the members               |
//! | float  | `min:N`       | value ≥ `N`                                   |
//! | float  | `max:N`       | value ≤ `N`                                   |
//!
//! A condition that cannot be parsed is a [`ConfigError::InvalidCondition`],
//! never a rejection.

use std::str::FromStr;

use crate::foundation::ConfigError;

pub mod numeric;
pub mod string;

const LIST_SEPARATOR: char = ',';

/// Parses a single-valued condition such as `len:36` or `min:18`.
pub(crate) fn parse_condition<T: FromStr>(
    rule: &'static str,
    condition: &str,
) -> Result<T, ConfigError> {
    condition
        .parse()
        .map_err(|_| ConfigError::invalid_condition(rule, condition))
}

/// Splits a list condition such as `in:200,404,500` into its members.
///
/// An empty condition is invalid; every member must parse.
pub(crate) fn parse_list<T: FromStr>(
    rule: &'static str,
    condition: &str,
) -> Result<Vec<T>, ConfigError> {
    if condition.is_empty() {
        return Err(ConfigError::invalid_condition(rule, condition));
    }

    condition
        .split(LIST_SEPARATOR)
        .map(|member| parse_condition(rule, member))
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::invalid_condition(rule, condition))
}
