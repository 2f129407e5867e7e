//! Rule registry: (field kind, rule name) → validator function
//!
//! The registry is assembled once with [`RuleRegistryBuilder`] and is
//! read-only afterwards, so one instance can be shared across threads
//! without locking. [`RuleRegistry::standard`] is the process-wide instance
//! holding the built-in rules.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagcheck::rules::{Check, RuleRegistry};
//! use tagcheck::foundation::{FailureKind, RuleError, RuleResult};
//!
//! fn even(value: i128, _condition: &str) -> RuleResult {
//!     if value % 2 == 0 {
//!         Ok(())
//!     } else {
//!         Err(RuleError::rejected(FailureKind::IntNotInList, "even"))
//!     }
//! }
//!
//! let registry = RuleRegistry::builder()
//!     .with_standard_rules()
//!     .rule("even", Check::Int(even))
//!     .build();
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::foundation::{ConfigError, FieldKind, FieldValue, RuleResult};
use crate::validators;

// ============================================================================
// CHECK
// ============================================================================

/// Validator function for string values.
pub type StrCheck = fn(&str, &str) -> RuleResult;
/// Validator function for integer values.
pub type IntCheck = fn(i128, &str) -> RuleResult;
/// Validator function for float values.
pub type FloatCheck = fn(f64, &str) -> RuleResult;
/// Validator function for boolean values.
pub type BoolCheck = fn(bool, &str) -> RuleResult;

/// A validator function, typed by the kind of value it accepts.
///
/// The registry files every check under the kind it accepts, so a lookup
/// hit always receives a value of the right type.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Checks a string.
    Str(StrCheck),
    /// Checks an integer.
    Int(IntCheck),
    /// Checks a float.
    Float(FloatCheck),
    /// Checks a boolean.
    Bool(BoolCheck),
}

impl Check {
    /// The field kind this check accepts.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Str(_) => FieldKind::String,
            Self::Int(_) => FieldKind::Int,
            Self::Float(_) => FieldKind::Float,
            Self::Bool(_) => FieldKind::Bool,
        }
    }

    /// Runs the check against `value` with the rule's `condition`.
    ///
    /// A value of another kind is a [`ConfigError::KindMismatch`]; it cannot
    /// happen for checks obtained from [`RuleRegistry::lookup`].
    pub fn run(&self, rule: &str, value: &FieldValue<'_>, condition: &str) -> RuleResult {
        match (self, value) {
            (Self::Str(check), FieldValue::Str(s)) => check(s, condition),
            (Self::Int(check), FieldValue::Int(n)) => check(*n, condition),
            (Self::Float(check), FieldValue::Float(n)) => check(*n, condition),
            (Self::Bool(check), FieldValue::Bool(b)) => check(*b, condition),
            _ => Err(ConfigError::KindMismatch {
                rule: rule.to_owned(),
                expected: self.kind(),
                actual: value.kind(),
            }
            .into()),
        }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

static STANDARD: LazyLock<RuleRegistry> =
    LazyLock::new(|| RuleRegistry::builder().with_standard_rules().build());

/// Immutable table of validator functions keyed by field kind and rule name.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    tables: BTreeMap<FieldKind, BTreeMap<String, Check>>,
}

impl RuleRegistry {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// The process-wide registry with the built-in rules.
    ///
    /// Built on first use and never modified.
    #[must_use]
    pub fn standard() -> &'static RuleRegistry {
        &STANDARD
    }

    /// Finds the validator function for `rule` on values of `kind`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::KindHasNoRules`] if `kind` has no rule table.
    /// - [`ConfigError::UnknownRule`] if the table has no such rule.
    pub fn lookup(&self, kind: FieldKind, rule: &str) -> Result<Check, ConfigError> {
        let table = self
            .tables
            .get(&kind)
            .ok_or(ConfigError::KindHasNoRules { kind })?;

        table
            .get(rule)
            .copied()
            .ok_or_else(|| ConfigError::UnknownRule {
                kind,
                rule: rule.to_owned(),
            })
    }

    /// Returns true if `rule` is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: FieldKind, rule: &str) -> bool {
        self.tables
            .get(&kind)
            .is_some_and(|table| table.contains_key(rule))
    }

    /// Kinds that have a rule table, in a stable order.
    pub fn kinds(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.tables.keys().copied()
    }

    /// Rule names registered for `kind`, sorted.
    pub fn rule_names(&self, kind: FieldKind) -> impl Iterator<Item = &str> + '_ {
        self.tables
            .get(&kind)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Assembles a [`RuleRegistry`]. Consumed by [`RuleRegistryBuilder::build`].
#[derive(Debug, Default)]
#[must_use = "builder methods must be chained or built"]
pub struct RuleRegistryBuilder {
    tables: BTreeMap<FieldKind, BTreeMap<String, Check>>,
}

impl RuleRegistryBuilder {
    /// Registers `check` under `name` for the kind it accepts.
    ///
    /// Registering the same (kind, name) twice keeps the last check.
    pub fn rule(mut self, name: impl Into<String>, check: Check) -> Self {
        self.tables
            .entry(check.kind())
            .or_default()
            .insert(name.into(), check);
        self
    }

    /// Adds the built-in rules.
    ///
    /// | kind   | rules                 |
    /// |--------|-----------------------|
    /// | string | `len`, `regexp`, `in` |
    /// | int    | `min`, `max`, `in`    |
    /// | float  | `min`, `max`          |
    pub fn with_standard_rules(self) -> Self {
        self.rule("len", Check::Str(validators::string::len))
            .rule("regexp", Check::Str(validators::string::regexp))
            .rule("in", Check::Str(validators::string::one_of))
            .rule("min", Check::Int(validators::numeric::int_min))
            .rule("max", Check::Int(validators::numeric::int_max))
            .rule("in", Check::Int(validators::numeric::int_one_of))
            .rule("min", Check::Float(validators::numeric::float_min))
            .rule("max", Check::Float(validators::numeric::float_max))
    }

    /// Freezes the registry.
    pub fn build(self) -> RuleRegistry {
        RuleRegistry {
            tables: self.tables,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
