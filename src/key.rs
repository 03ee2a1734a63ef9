use std::rc::Rc;

use crate::{Error, Symbol, Value};

/// Selects a field of a record, either by its position or by its name.
///
/// Strings and symbols both select by name; `record.get("x")` and `record.get(Symbol::new("x"))`
/// are the same lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Position in declaration order. Negative indices count from the end.
    Index(isize),
    /// Field name.
    Name(Symbol),
}

macro_rules! key_from_integer {
    ($T:ty) => {
        impl From<$T> for Key {
            fn from(index: $T) -> Self {
                Key::Index(index as isize)
            }
        }
    };
}

/// Indices that don't fit in an `isize` saturate, so they stay out of range instead of
/// wrapping around to count from the end.
macro_rules! key_from_wide_integer {
    ($T:ty) => {
        impl From<$T> for Key {
            fn from(index: $T) -> Self {
                Key::Index(isize::try_from(index).unwrap_or(isize::MAX))
            }
        }
    };
}

key_from_integer!(i8);
key_from_integer!(i16);
key_from_integer!(i32);
key_from_integer!(isize);

key_from_wide_integer!(i64);
key_from_wide_integer!(u8);
key_from_wide_integer!(u16);
key_from_wide_integer!(u32);
key_from_wide_integer!(u64);
key_from_wide_integer!(usize);

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(Symbol::new(name))
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(Symbol::new(name))
    }
}

impl From<Rc<str>> for Key {
    fn from(name: Rc<str>) -> Self {
        Self::Name(Symbol::from(name))
    }
}

impl From<Symbol> for Key {
    fn from(name: Symbol) -> Self {
        Self::Name(name)
    }
}

impl From<&Symbol> for Key {
    fn from(name: &Symbol) -> Self {
        Self::Name(name.clone())
    }
}

impl TryFrom<&Value> for Key {
    type Error = Error;

    /// Integral numbers become indices, strings and symbols become names.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) if n.fract() == 0.0 => Ok(Key::Index(*n as isize)),
            Value::String(s) => Ok(Key::from(Rc::clone(s))),
            Value::Symbol(s) => Ok(Key::Name(s.clone())),
            other => Err(Error::TypeMismatch {
                expected: "Integer, String or Symbol".into(),
                got: other.type_name().to_string().into(),
            }),
        }
    }
}
