use std::{fmt, rc::Rc};

use crate::{Error, Value};

type RawFunction = dyn Fn(&[Value]) -> Result<Value, Error>;

/// A function value, used as the callback for `each`, `each_pair` and `select` when they are
/// called through [`Record::call`][crate::Record::call].
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    f: Rc<RawFunction>,
}

impl Function {
    /// Creates a new anonymous function.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<R, Error> + 'static,
        R: Into<Value>,
    {
        Self::named("<anonymous>", f)
    }

    /// Creates a new function with a name, which shows up in its `Debug` representation.
    pub fn named<F, R>(name: impl Into<Rc<str>>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<R, Error> + 'static,
        R: Into<Value>,
    {
        Self {
            name: name.into(),
            f: Rc::new(move |arguments: &[Value]| f(arguments).map(Into::<Value>::into)),
        }
    }

    /// Returns the name of the function.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function with the given arguments.
    pub fn call(&self, arguments: &[Value]) -> Result<Value, Error> {
        (self.f)(arguments)
    }
}

/// Functions are only equal to themselves.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<func {}>", self.name)
    }
}
