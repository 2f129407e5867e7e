//! Records and their field descriptors

use crate::foundation::FieldValue;

/// A struct whose fields carry rule tags.
///
/// Normally implemented with `#[derive(Record)]`. A manual implementation
/// lists every field in declaration order:
///
/// ```rust,ignore
/// impl Record for Response {
///     fn type_name(&self) -> &'static str {
///         "Response"
///     }
///
///     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
///         vec![
///             FieldDescriptor::public("Code", "in:200,404,500", self.code.field_value()),
///             FieldDescriptor::untagged("Body"),
///         ]
///     }
/// }
/// ```
pub trait Record {
    /// Name of the record type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// All fields, in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

/// One field of a record as seen by the walker.
#[derive(Debug, Clone)]
pub struct FieldDescriptor<'a> {
    /// Name stamped onto validation errors for this field.
    pub name: &'static str,
    /// The raw rule tag, e.g. `"min:18|max:50"`. Empty when untagged.
    pub tag: &'static str,
    /// Whether the field is externally visible (`pub`).
    pub visible: bool,
    /// The field's value. [`FieldValue::Opaque`] for private or untagged fields.
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// A visible, tagged field.
    pub fn public(name: &'static str, tag: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            tag,
            visible: true,
            value,
        }
    }

    /// A visible field without rules. Its value is never looked at.
    pub fn untagged(name: &'static str) -> Self {
        Self {
            name,
            tag: "",
            visible: true,
            value: FieldValue::Opaque,
        }
    }

    /// A private field. Its tag and value are never looked at.
    pub fn private(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            visible: false,
            value: FieldValue::Opaque,
        }
    }
}
