//! Regular expression validator function

use regex::Regex;

use crate::foundation::{ConfigError, FailureKind, RuleError, RuleResult};

/// `regexp:PATTERN`: the pattern matches somewhere in the string.
///
/// The match is a search, not a full-string match; anchor the pattern with
/// `^…$` to require the whole string.
pub fn regexp(value: &str, condition: &str) -> RuleResult {
    if condition.is_empty() {
        return Err(ConfigError::invalid_condition("regexp", condition).into());
    }

    let pattern = Regex::new(condition).map_err(|e| ConfigError::RegexCompile {
        pattern: condition.to_owned(),
        message: e.to_string(),
    })?;

    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::RegexpNotMatch, condition))
    }
}
