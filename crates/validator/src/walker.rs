//! Field walker: drives validation of a record
//!
//! The walker enumerates a record's fields, parses each field's rule tag and
//! routes the value to the right path:
//!
//! | value                           | action                                   |
//! |---------------------------------|------------------------------------------|
//! | private field                   | skipped, never inspected                 |
//! | no rules                        | skipped                                  |
//! | `Nil` (e.g. `None`)             | skipped                                  |
//! | record + `nested` marker        | validated recursively                    |
//! | record without the marker       | skipped                                  |
//! | sequence                        | every rule applied to every element      |
//! | scalar                          | rules looked up by kind and run in order |
//!
//! Rejections are collected across the whole record (no short-circuit). The
//! first configuration fault aborts the walk and is returned as is.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tagcheck::{Record, Validator};
//! use tagcheck::rules::RuleRegistry;
//!
//! #[derive(Record)]
//! pub struct Response {
//!     #[validate("in:200,404,500")]
//!     pub code: i32,
//! }
//!
//! let validator = Validator::new(Arc::new(RuleRegistry::builder().with_standard_rules().build()));
//! assert!(validator.validate(&Response { code: 200 }).is_ok());
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::foundation::{
    ConfigError, Error, FieldValue, Inspect, Record, RuleError, ValidationErrors,
};
use crate::rules::{FieldRuleSet, RuleRegistry};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records against the rules of a [`RuleRegistry`].
///
/// Cloning is cheap; the registry is shared.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
}

impl Validator {
    /// Creates a validator over `registry`.
    #[must_use]
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// The registry rules are looked up in.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validates `value`, which must be a record (or nil).
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `value` is not a record, or a field's tag or
    ///   condition is broken.
    /// - [`Error::Rejected`] with every failed rule of every field.
    pub fn validate<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), Error> {
        Walker::new(&self.registry).validate(value)
    }
}

impl Default for Validator {
    /// A validator over the built-in rules.
    fn default() -> Self {
        Self::new(Arc::new(RuleRegistry::standard().clone()))
    }
}

/// Validates `value` against the built-in rules.
///
/// Shorthand for [`Validator::validate`] over [`RuleRegistry::standard`].
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<T: Inspect + ?Sized>(value: &T) -> Result<(), Error> {
    Walker::new(RuleRegistry::standard()).validate(value)
}

// ============================================================================
// WALKER
// ============================================================================

struct Walker<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> Walker<'r> {
    const fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    fn validate<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), Error> {
        match value.field_value() {
            FieldValue::Nil => Ok(()),
            FieldValue::Record(record) => {
                let errors = self.validate_record(record).inspect_err(|error| {
                    debug!(record = record.type_name(), %error, "validation aborted");
                })?;
                if errors.has_errors() {
                    debug!(
                        record = record.type_name(),
                        errors = errors.len(),
                        "record rejected"
                    );
                }
                errors.into_result().map_err(Error::from)
            }
            other => Err(ConfigError::RequireStruct { kind: other.kind() }.into()),
        }
    }

    fn validate_record(&self, record: &dyn Record) -> Result<ValidationErrors, ConfigError> {
        let mut errors = ValidationErrors::new();

        for field in record.fields() {
            if !field.visible {
                continue;
            }

            let rules = FieldRuleSet::from_tag(field.name, field.tag)?;
            if rules.is_empty() {
                continue;
            }

            trace!(
                record = record.type_name(),
                field = field.name,
                kind = %field.value.kind(),
                rules = rules.len(),
                "validating field"
            );

            self.validate_field(&field.value, &rules, &mut errors)?;
        }

        Ok(errors)
    }

    fn validate_field(
        &self,
        value: &FieldValue<'_>,
        rules: &FieldRuleSet<'_>,
        errors: &mut ValidationErrors,
    ) -> Result<(), ConfigError> {
        match value {
            FieldValue::Nil => Ok(()),
            FieldValue::Record(record) => {
                if rules.has_nested() {
                    errors.append(self.validate_record(*record)?);
                }
                Ok(())
            }
            FieldValue::Seq(items) => {
                for item in items {
                    self.validate_element(item, rules, errors)?;
                }
                Ok(())
            }
            scalar => self.validate_value(scalar, rules, errors),
        }
    }

    fn validate_element(
        &self,
        item: &FieldValue<'_>,
        rules: &FieldRuleSet<'_>,
        errors: &mut ValidationErrors,
    ) -> Result<(), ConfigError> {
        match item {
            FieldValue::Nil => Ok(()),
            FieldValue::Record(record) if rules.has_nested() => {
                errors.append(self.validate_record(*record)?);
                Ok(())
            }
            other => self.validate_value(other, rules, errors),
        }
    }

    fn validate_value(
        &self,
        value: &FieldValue<'_>,
        rules: &FieldRuleSet<'_>,
        errors: &mut ValidationErrors,
    ) -> Result<(), ConfigError> {
        let kind = value.kind();

        for rule in &rules.rules {
            let check = self.registry.lookup(kind, rule.name)?;

            match check.run(rule.name, value, rule.condition) {
                Ok(()) => {}
                Err(RuleError::Rejected(error)) => {
                    errors.add(error.with_field(rules.field_name));
                }
                Err(RuleError::Config(error)) => return Err(error),
            }
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
