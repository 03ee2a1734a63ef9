mod function;
mod symbol;

use std::{borrow::Cow, fmt, rc::Rc};

pub use function::*;
pub use symbol::*;

use crate::{Error, Key, Record};

/// A dynamically typed value stored in a record field.
#[derive(Clone)]
pub enum Value {
    /// The absent value. Fields that were never assigned hold `Nil`.
    Nil,
    /// The `false` literal.
    False,
    /// The `true` literal.
    ///
    /// Do note that despite booleans using two different enum variants, they have the same type.
    True,
    /// A `Number` value.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// An interned-by-value identifier, such as a field name.
    Symbol(Symbol),
    /// An immutable list of values.
    List(Rc<[Value]>),
    /// A record instance.
    Record(Record),
    /// A callable function.
    Function(Function),
}

impl Value {
    /// Returns the name of this value's type.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Nil => "Nil",
            Value::False => "False",
            Value::True => "True",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::List(_) => "List",
            Value::Record(r) => r.record_type().pretty_name(),
            Value::Function(_) => "Function",
        }
    }

    /// Returns whether the value is `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns whether the value is falsy. The only falsy values are `Nil` and `False`.
    pub fn is_falsy(&self) -> bool {
        matches!(self, Self::Nil | Self::False)
    }

    /// Returns whether the value is truthy.
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    /// Descends into nested records and lists following `keys`.
    ///
    /// With no keys this returns the value itself. Reaching `Nil` midway stops the descent and
    /// yields `Nil`; trying to descend into anything that is not a record or a list is an error.
    pub fn dig(&self, keys: &[Key]) -> Result<Value, Error> {
        let Some((first, rest)) = keys.split_first() else {
            return Ok(self.clone());
        };
        match self {
            Value::Record(record) => record.dig(first.clone(), rest),
            Value::List(list) => {
                let index = match first {
                    Key::Index(index) => *index,
                    Key::Name(name) => {
                        return Err(Error::TypeMismatch {
                            expected: "Integer".into(),
                            got: format!("Symbol {name:?}").into(),
                        })
                    }
                };
                match resolve_index(index, list.len()).map(|i| &list[i]) {
                    None | Some(Value::Nil) => Ok(Value::Nil),
                    Some(value) => value.dig(rest),
                }
            }
            other => Err(Error::NotDiggable { type_name: other.type_name().to_string().into() }),
        }
    }
}

/// Maps a possibly negative index onto `0..len`. Negative indices count from the end.
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let index = if index < 0 { len.checked_sub(index.unsigned_abs())? } else { index as usize };
    (index < len).then_some(index)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) | (Self::False, Self::False) | (Self::True, Self::True) => true,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::False => f.write_str("false"),
            Value::True => f.write_str("true"),
            Value::Number(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => fmt::Debug::fmt(s, f),
            Value::List(list) => f.debug_list().entries(list.iter()).finish(),
            Value::Record(r) => fmt::Debug::fmt(r, f),
            Value::Function(func) => fmt::Debug::fmt(func, f),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Symbol(s) => fmt::Display::fmt(s, f),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Nil
    }
}

/// The unit type translates to `Value::Nil`.
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        match b {
            true => Self::True,
            false => Self::False,
        }
    }
}

macro_rules! value_from_number {
    ($T:ty $(, $doc:literal)?) => {
        $(#[doc = $doc])?
        impl From<$T> for Value {
            fn from(x: $T) -> Self {
                Value::Number(x as f64)
            }
        }
    };
}

value_from_number!(i8);
value_from_number!(i16);
value_from_number!(i32);
value_from_number!(i64,   "**NOTE:** This is a lossy conversion, as an `f64` cannot represent the entire range of an `i64`.");
value_from_number!(isize, "**NOTE:** This is a lossy conversion, as an `f64` cannot represent the entire range of an `isize`.");

value_from_number!(u8);
value_from_number!(u16);
value_from_number!(u32);
value_from_number!(u64,   "**NOTE:** This is a lossy conversion, as an `f64` cannot represent the entire range of a `u64`.");
value_from_number!(usize, "**NOTE:** This is a lossy conversion, as an `f64` cannot represent the entire range of a `usize`.");

value_from_number!(f32);
value_from_number!(f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Rc::from(s))
    }
}

impl From<Rc<str>> for Value {
    fn from(s: Rc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<&Symbol> for Value {
    fn from(s: &Symbol) -> Self {
        Self::Symbol(s.clone())
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Self::Record(r)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Nil,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// Implemented by types that can be constructed from [`Value`]s.
pub trait TryFromValue
where
    Self: Sized,
{
    /// Tries to perform the conversion, returning an [`Error`] on failure.
    fn try_from_value(value: &Value) -> Result<Self, Error>;
}

fn type_mismatch(expected: impl Into<Cow<'static, str>>, got: &Value) -> Error {
    Error::TypeMismatch { expected: expected.into(), got: got.type_name().to_string().into() }
}

impl TryFromValue for Value {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        Ok(value.clone())
    }
}

impl TryFromValue for bool {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::True => Ok(true),
            Value::False => Ok(false),
            _ => Err(type_mismatch("Boolean", value)),
        }
    }
}

macro_rules! try_from_value_numeric {
    ($T:ty) => {
        impl TryFromValue for $T {
            fn try_from_value(value: &Value) -> Result<Self, Error> {
                if let Value::Number(number) = value {
                    Ok(*number as $T)
                } else {
                    Err(type_mismatch("Number", value))
                }
            }
        }
    };
}

try_from_value_numeric!(u8);
try_from_value_numeric!(u16);
try_from_value_numeric!(u32);
try_from_value_numeric!(u64);
try_from_value_numeric!(usize);

try_from_value_numeric!(i8);
try_from_value_numeric!(i16);
try_from_value_numeric!(i32);
try_from_value_numeric!(i64);
try_from_value_numeric!(isize);

try_from_value_numeric!(f32);
try_from_value_numeric!(f64);

impl TryFromValue for Rc<str> {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        if let Value::String(s) = value {
            Ok(Rc::clone(s))
        } else {
            Err(type_mismatch("String", value))
        }
    }
}

impl TryFromValue for String {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        <Rc<str>>::try_from_value(value).map(|s| s.to_string())
    }
}

impl TryFromValue for Symbol {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        if let Value::Symbol(s) = value {
            Ok(s.clone())
        } else {
            Err(type_mismatch("Symbol", value))
        }
    }
}

impl TryFromValue for Record {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        if let Value::Record(r) = value {
            Ok(r.clone())
        } else {
            Err(type_mismatch("any struct", value))
        }
    }
}

impl TryFromValue for Function {
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        if let Value::Function(f) = value {
            Ok(f.clone())
        } else {
            Err(type_mismatch("Function", value))
        }
    }
}

impl<T> TryFromValue for Option<T>
where
    T: TryFromValue,
{
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Nil => Ok(None),
            _ => Ok(Some(T::try_from_value(value).map_err(|error| {
                if let Error::TypeMismatch { expected, got } = error {
                    Error::TypeMismatch { expected: format!("{} or Nil", expected).into(), got }
                } else {
                    error
                }
            })?)),
        }
    }
}

impl<T> TryFromValue for Vec<T>
where
    T: TryFromValue,
{
    fn try_from_value(value: &Value) -> Result<Self, Error> {
        if let Value::List(list) = value {
            list.iter().map(T::try_from_value).collect()
        } else {
            Err(type_mismatch("List", value))
        }
    }
}
