//! Error reporting.

use std::{borrow::Cow, fmt};

/// An error.
#[derive(Debug)]
pub enum Error {
    /// More values were passed to a record constructor than the record type has fields.
    Arity {
        /// The number of fields declared by the record type.
        max: usize,
        /// The number of values that was passed.
        got: usize,
    },
    /// A type mismatch occured.
    TypeMismatch {
        /// The name of the expected type.
        expected: Cow<'static, str>,
        /// The name of the actual type obtained.
        got: Cow<'static, str>,
    },
    /// `dig` tried to descend into a value that cannot be dug into.
    NotDiggable {
        /// The name of the value's type.
        type_name: Cow<'static, str>,
    },
    /// A method was called that the record type does not define.
    MethodNotFound {
        /// The name of the record type.
        type_name: Cow<'static, str>,
        /// The name of the method.
        method: Cow<'static, str>,
    },
    /// Incorrect amount of arguments passed to a method.
    ArgumentCount {
        /// The number of arguments that was expected.
        expected: usize,
        /// The actual number of arguments obtained.
        got: usize,
    },
    /// A user-defined error.
    User(Box<dyn std::error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { max, got } => {
                write!(f, "struct size differs, expected at most {max} values but got {got}")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch, expected {expected} but got {got}")
            }
            Self::NotDiggable { type_name } => write!(f, "{type_name} does not have a dig method"),
            Self::MethodNotFound { type_name, method } => {
                write!(f, "method {method} is not defined for {type_name}")
            }
            Self::ArgumentCount { expected, got } => {
                write!(f, "{expected} arguments expected but got {got}")
            }
            Self::User(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {}

/// Extensions for converting [`Result`]s returned from extension functions into [`Error`]s.
pub trait FactoryResultExt<T, E> {
    /// Maps the error in the result to an [`Error`].
    fn factory(self) -> Result<T, Error>;
}

/// Transparent wrapper that implements [`std::error::Error`] for a user-defined error.
#[repr(transparent)]
struct UserError<T>(T);

impl<T> fmt::Debug for UserError<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> fmt::Display for UserError<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> std::error::Error for UserError<T> where T: fmt::Debug + fmt::Display {}

impl<T, E> FactoryResultExt<T, E> for Result<T, E>
where
    E: fmt::Debug + fmt::Display + 'static,
{
    fn factory(self) -> Result<T, Error> {
        self.map_err(|error| Error::User(Box::new(UserError(error))))
    }
}

/// Checks that a method received exactly `expected` arguments.
pub(crate) fn ensure_argument_count<T>(arguments: &[T], expected: usize) -> Result<(), Error> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(Error::ArgumentCount { expected, got: arguments.len() })
    }
}
