//! Rule tag grammar
//!
//! ```text
//! tag  := "" | rule ("|" rule)*
//! rule := name ":" condition | "nested"
//! ```
//!
//! The whole tag is trimmed before parsing. Whitespace inside a name or a
//! condition is kept as written, since conditions such as regular
//! expressions depend on it. Parsing stops at the first bad segment and
//! returns only the error.

use crate::foundation::ConfigError;

/// Name of the marker that turns on recursion into a nested record.
///
/// The marker is a pseudo-rule: it is written like a rule but never looked up
/// in the registry for record fields.
pub const NESTED_MARKER: &str = "nested";

const RULE_SEPARATOR: char = '|';
const CONDITION_SEPARATOR: char = ':';

// ============================================================================
// RULE DESCRIPTOR
// ============================================================================

/// One parsed `name:condition` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleDescriptor<'a> {
    /// Rule name, e.g. `len`.
    pub name: &'a str,
    /// Rule condition, e.g. `36`. Empty for the `nested` marker.
    pub condition: &'a str,
}

impl<'a> RuleDescriptor<'a> {
    /// Creates a descriptor.
    pub const fn new(name: &'a str, condition: &'a str) -> Self {
        Self { name, condition }
    }

    /// Returns true for the recursion marker.
    #[must_use]
    pub fn is_nested_marker(&self) -> bool {
        self.name == NESTED_MARKER
    }
}

// ============================================================================
// FIELD RULE SET
// ============================================================================

/// The ordered rules of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRuleSet<'a> {
    /// The field the rules belong to; stamped on every rejection.
    pub field_name: &'static str,
    /// Rules in tag order.
    pub rules: Vec<RuleDescriptor<'a>>,
}

impl<'a> FieldRuleSet<'a> {
    /// Parses `tag` into the rule set of `field_name`.
    pub fn from_tag(field_name: &'static str, tag: &'a str) -> Result<Self, ConfigError> {
        Ok(Self {
            field_name,
            rules: parse(tag)?,
        })
    }

    /// Returns true if the field has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the recursion marker is present.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        self.rules.iter().any(RuleDescriptor::is_nested_marker)
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Parses a rule tag into descriptors.
///
/// An empty (or all-whitespace) tag yields no rules and no error.
///
/// # Errors
///
/// - [`ConfigError::EmptyRule`] for an empty segment (`"a:1||b:2"`, `"|"`).
/// - [`ConfigError::MalformedRule`] for a segment that does not split into
///   exactly two parts on `:`.
pub fn parse(tag: &str) -> Result<Vec<RuleDescriptor<'_>>, ConfigError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Ok(Vec::new());
    }

    tag.split(RULE_SEPARATOR)
        .map(|segment| parse_segment(tag, segment))
        .collect()
}

fn parse_segment<'a>(tag: &str, segment: &'a str) -> Result<RuleDescriptor<'a>, ConfigError> {
    if segment.is_empty() {
        return Err(ConfigError::EmptyRule {
            tag: tag.to_owned(),
        });
    }

    if segment == NESTED_MARKER {
        return Ok(RuleDescriptor::new(NESTED_MARKER, ""));
    }

    let mut parts = segment.split(CONDITION_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(condition), None) => Ok(RuleDescriptor::new(name, condition)),
        _ => Err(ConfigError::MalformedRule {
            rule: segment.to_owned(),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
