//! Error types for tag-driven validation
//!
//! Two disjoint families live here:
//!
//! - [`ConfigError`]: the rule schema itself is broken (bad grammar, unknown
//!   rule, bad condition). Never aggregated; the first one aborts validation.
//! - [`ValidationError`] / [`ValidationErrors`]: the data failed a rule.
//!   Collected across the whole record before returning.
//!
//! [`RuleError`] is the three-way outcome of a single validator function and
//! [`Error`] is what the public entry point returns.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::FieldKind;

// ============================================================================
// FAILURE KIND
// ============================================================================

/// What kind of check failed.
///
/// The message text is stable and is combined with the rule condition when
/// an error is rendered, e.g. `cannot be greater 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// String length (in chars) differs from `len:N`.
    LenNotEqual,
    /// String has no match for `regexp:PATTERN`.
    RegexpNotMatch,
    /// String is not one of `in:a,b,c`.
    StrNotInList,
    /// Number is below `min:N`.
    CantBeLess,
    /// Number is above `max:N`.
    CantBeGreater,
    /// Integer is not one of `in:1,2,3`.
    IntNotInList,
}

impl FailureKind {
    /// Machine-readable code for this failure.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LenNotEqual => "len_not_equal",
            Self::RegexpNotMatch => "regexp_not_match",
            Self::StrNotInList => "str_not_in_list",
            Self::CantBeLess => "cant_be_less",
            Self::CantBeGreater => "cant_be_greater",
            Self::IntNotInList => "int_not_in_list",
        }
    }

    /// Human-readable message (without the condition).
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LenNotEqual => "length of the string not equal to",
            Self::RegexpNotMatch => {
                "string does not contain any matches to the regular expression"
            }
            Self::StrNotInList => "string is not in the list",
            Self::CantBeLess => "cannot be less",
            Self::CantBeGreater => "cannot be greater",
            Self::IntNotInList => "int is not in the list",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed check on one field.
///
/// Validator functions create it with an empty field; the walker stamps the
/// field name before it reaches the caller.
///
/// # Examples
///
/// ```rust,ignore
/// use tagcheck::{FailureKind, ValidationError};
///
/// let error = ValidationError::new(FailureKind::CantBeGreater, "50").with_field("Age");
/// assert_eq!(error.to_string(), "Age: cannot be greater 50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the field that failed. Empty until stamped by the walker.
    pub field: Cow<'static, str>,

    /// Which check failed.
    pub kind: FailureKind,

    /// The rule condition the value was checked against, verbatim.
    pub condition: String,
}

impl ValidationError {
    /// Creates a field-less validation error.
    pub fn new(kind: FailureKind, condition: impl Into<String>) -> Self {
        Self {
            field: Cow::Borrowed(""),
            kind,
            condition: condition.into(),
        }
    }

    /// Sets the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = field.into();
        self
    }

    /// Returns true once the walker has stamped a field name.
    #[must_use]
    pub fn has_field(&self) -> bool {
        !self.field.is_empty()
    }

    /// The failure detail without the field prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        format!("{} {}", self.kind, self.condition)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{} {}", self.kind, self.condition)
        } else {
            write!(f, "{}: {} {}", self.field, self.kind, self.condition)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every data rejection found in one record, in field order.
///
/// An empty collection means "no error": [`ValidationErrors::into_result`]
/// never turns it into an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends all errors from another collection.
    pub fn append(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors stamped with the given field name.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// The rule schema is broken. Always a caller bug, never a data problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The top-level value is not a record.
    #[error("validation requires a struct, got {kind}")]
    RequireStruct {
        /// Kind of the value that was passed in.
        kind: FieldKind,
    },

    /// A `|`-separated segment of the tag is empty.
    #[error("the rule cannot be empty in tag '{tag}'")]
    EmptyRule {
        /// The whole (trimmed) tag.
        tag: String,
    },

    /// A segment does not split into exactly `name:condition`.
    #[error("malformed rule '{rule}', expected 'name:condition'")]
    MalformedRule {
        /// The offending segment.
        rule: String,
    },

    /// No rule table exists for this field kind.
    #[error("no validation rules for {kind} fields")]
    KindHasNoRules {
        /// Kind of the field value.
        kind: FieldKind,
    },

    /// The kind has rules, but not this one.
    #[error("unknown rule '{rule}' for {kind} fields")]
    UnknownRule {
        /// Kind of the field value.
        kind: FieldKind,
        /// Requested rule name.
        rule: String,
    },

    /// The rule's condition cannot be parsed.
    #[error("'{condition}' is not a valid condition for rule '{rule}'")]
    InvalidCondition {
        /// Rule name.
        rule: &'static str,
        /// The condition as written in the tag.
        condition: String,
    },

    /// A `regexp` condition failed to compile.
    #[error("'{pattern}' regex compilation error: {message}")]
    RegexCompile {
        /// The pattern as written in the tag.
        pattern: String,
        /// The compiler's diagnostic.
        message: String,
    },

    /// A registered check was handed a value of another kind.
    #[error("rule '{rule}' expects {expected} values, got {actual}")]
    KindMismatch {
        /// Rule name.
        rule: String,
        /// Kind the check was registered for.
        expected: FieldKind,
        /// Kind of the value it received.
        actual: FieldKind,
    },
}

impl ConfigError {
    /// Creates an [`ConfigError::InvalidCondition`].
    pub fn invalid_condition(rule: &'static str, condition: impl Into<String>) -> Self {
        Self::InvalidCondition {
            rule,
            condition: condition.into(),
        }
    }
}

// ============================================================================
// RULE OUTCOME
// ============================================================================

/// The failing outcome of a single validator function.
///
/// `Ok(())` means the value passed. `Rejected` is recorded and checking
/// continues; `Config` aborts the whole validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The value failed the check.
    Rejected(ValidationError),
    /// The rule or its condition is broken.
    Config(ConfigError),
}

impl RuleError {
    /// Shorthand for a field-less rejection.
    pub fn rejected(kind: FailureKind, condition: impl Into<String>) -> Self {
        Self::Rejected(ValidationError::new(kind, condition))
    }
}

impl From<ConfigError> for RuleError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<ValidationError> for RuleError {
    fn from(error: ValidationError) -> Self {
        Self::Rejected(error)
    }
}

/// Result type returned by validator functions.
pub type RuleResult = Result<(), RuleError>;

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The schema is broken; validation was aborted.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The data failed one or more rules.
    #[error(transparent)]
    Rejected(#[from] ValidationErrors),
}

impl Error {
    /// Returns true for a configuration fault.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true for a data rejection.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The collected rejections, if this is a data rejection.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::Config(_) => None,
        }
    }

    /// The configuration fault, if this is one.
    #[must_use]
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(error) => Some(error),
            Self::Rejected(_) => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
