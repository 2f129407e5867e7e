//! Numeric validator functions
//!
//! Integers of every width arrive widened to `i128`; conditions are parsed
//! at the same width so `u64::MAX` bounds work.

use crate::foundation::{ConfigError, FailureKind, RuleError, RuleResult};
use crate::validators::{parse_condition, parse_list};

// ============================================================================
// INTEGER
// ============================================================================

/// `min:N`: value ≥ `N`.
pub fn int_min(value: i128, condition: &str) -> RuleResult {
    let min: i128 = parse_condition("min", condition)?;

    if value >= min {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::CantBeLess, condition))
    }
}

/// `max:N`: value ≤ `N`.
pub fn int_max(value: i128, condition: &str) -> RuleResult {
    let max: i128 = parse_condition("max", condition)?;

    if value <= max {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::CantBeGreater, condition))
    }
}

/// `in:1,2,3`: value equals one of the members.
pub fn int_one_of(value: i128, condition: &str) -> RuleResult {
    let members: Vec<i128> = parse_list("in", condition)?;

    if members.contains(&value) {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::IntNotInList, condition))
    }
}

// ============================================================================
// FLOAT
// ============================================================================

fn parse_bound(rule: &'static str, condition: &str) -> Result<f64, ConfigError> {
    let bound: f64 = parse_condition(rule, condition)?;
    if bound.is_finite() {
        Ok(bound)
    } else {
        Err(ConfigError::invalid_condition(rule, condition))
    }
}

/// `min:N`: value ≥ `N`. NaN never passes.
pub fn float_min(value: f64, condition: &str) -> RuleResult {
    let min = parse_bound("min", condition)?;

    if value >= min {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::CantBeLess, condition))
    }
}

/// `max:N`: value ≤ `N`. NaN never passes.
pub fn float_max(value: f64, condition: &str) -> RuleResult {
    let max = parse_bound("max", condition)?;

    if value <= max {
        Ok(())
    } else {
        Err(RuleError::rejected(FailureKind::CantBeGreater, condition))
    }
}

// ============================================================================
// TESTS
// ============================================================================
