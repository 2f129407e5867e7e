//! Kind-tagged views of field values
//!
//! The engine never reflects over arbitrary types. Instead every value that
//! can appear in a validated field implements [`Inspect`], which hands back a
//! borrowed [`FieldValue`] tagged with a closed [`FieldKind`]. The kind is
//! resolved once per field and used as half of the registry key.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::Record;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The closed set of value kinds the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// Text.
    String,
    /// Any primitive integer up to 64 bits, signed or unsigned.
    Int,
    /// `f32` / `f64`.
    Float,
    /// `bool`.
    Bool,
    /// A list, array or slice of values.
    Sequence,
    /// A struct implementing [`Record`].
    Record,
    /// A value the engine does not look into.
    Opaque,
    /// An absent value (`None`).
    Nil,
}

impl FieldKind {
    /// Lower-case name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Sequence => "sequence",
            Self::Record => "record",
            Self::Opaque => "opaque",
            Self::Nil => "nil",
        }
    }

    /// Returns true for kinds that validator functions can be registered for.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::String | Self::Int | Self::Float | Self::Bool)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed view of one value, tagged with its kind.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// Absent value.
    Nil,
    /// Text.
    Str(&'a str),
    /// Integer, widened so that `u64` and `i64` both fit.
    Int(i128),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Elements of a sequence, in order.
    Seq(Vec<FieldValue<'a>>),
    /// A nested record.
    Record(&'a dyn Record),
    /// Not inspected: private or untagged fields, foreign types.
    Opaque,
}

impl FieldValue<'_> {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Nil => FieldKind::Nil,
            Self::Str(_) => FieldKind::String,
            Self::Int(_) => FieldKind::Int,
            Self::Float(_) => FieldKind::Float,
            Self::Bool(_) => FieldKind::Bool,
            Self::Seq(_) => FieldKind::Sequence,
            Self::Record(_) => FieldKind::Record,
            Self::Opaque => FieldKind::Opaque,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}

// ============================================================================
// INSPECT CAPABILITY
// ============================================================================

/// Capability of exposing a value to the validation engine.
///
/// Implemented for the standard scalar and collection types. Records get it
/// from `#[derive(Record)]`; domain newtypes delegate to their inner value:
///
/// ```rust,ignore
/// struct UserRole(String);
///
/// impl Inspect for UserRole {
///     fn field_value(&self) -> FieldValue<'_> {
///         self.0.field_value()
///     }
/// }
/// ```
pub trait Inspect {
    /// A kind-tagged view of this value.
    fn field_value(&self) -> FieldValue<'_>;
}

impl Inspect for str {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl Inspect for String {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl Inspect for Cow<'_, str> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

macro_rules! inspect_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(*self as i128)
                }
            }
        )*
    };
}

inspect_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Inspect for f32 {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl Inspect for bool {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.field_value(),
            None => FieldValue::Nil,
        }
    }
}

impl<T: Inspect> Inspect for [T] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.iter().map(|item| item.field_value()).collect())
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        self.as_slice().field_value()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn field_value(&self) -> FieldValue<'_> {
        self.as_slice().field_value()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.iter().map(|item| item.field_value()).collect())
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

// ============================================================================
// TESTS
// ============================================================================
