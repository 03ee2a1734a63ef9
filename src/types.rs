use std::{fmt, rc::Rc};

use tracing::trace;

use crate::{DispatchTable, Error, Method, Record, RecordType, StaticMethod, Symbol, Value};

/// The definition context of a record type that's being created.
///
/// Every new record type starts out with a builder that already has the field accessors and the
/// standard struct protocol defined (see [`Record::call`]). Extensions passed to
/// [`Factory::create_with`][crate::Factory::create_with] receive this builder and may add
/// functions of their own; a function added under an existing name replaces the existing one.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use struct_factory::{Factory, Record, TryFromValue, Value};
///
/// let mut factory = Factory::new();
/// let pair = factory.create_with(
///     ["Pair", "a", "b"],
///     |builder| {
///         builder.add_function("sum", |pair: &mut Record, _: &[Value]| {
///             let a = f64::try_from_value(&pair.get("a"))?;
///             let b = f64::try_from_value(&pair.get("b"))?;
///             Ok(a + b)
///         })
///     },
/// )?;
///
/// let mut instance = pair.construct([1, 2])?;
/// assert_eq!(instance.call("sum", &[])?, Value::from(3));
/// # Ok(())
/// # }
/// ```
pub struct TypeBuilder {
    name: Option<Rc<str>>,
    pretty_name: Rc<str>,
    fields: Rc<[Symbol]>,
    type_dtable: DispatchTable<StaticMethod>,
    instance_dtable: DispatchTable<Method>,
}

impl TypeBuilder {
    /// Creates a new builder for a type with the given name and fields. The builder's dispatch
    /// tables start out empty.
    pub(crate) fn new(name: Option<Rc<str>>, fields: Rc<[Symbol]>) -> Self {
        let pretty_name: Rc<str> = match &name {
            Some(name) => Rc::clone(name),
            None => {
                let field_list: Vec<&str> = fields.iter().map(Symbol::as_str).collect();
                Rc::from(format!("Struct{{{}}}", field_list.join(", ")))
            }
        };
        Self {
            type_dtable: DispatchTable::new_for_type(&pretty_name),
            instance_dtable: DispatchTable::new_for_instance(&pretty_name),
            name,
            pretty_name,
            fields,
        }
    }

    /// Returns the name the type is going to be registered under, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the type's fields, in declaration order.
    pub fn fields(&self) -> &[Symbol] {
        &self.fields
    }

    /// Returns whether an instance function with the given name is defined.
    pub fn has_function(&self, name: &str) -> bool {
        self.instance_dtable.contains(name)
    }

    /// Returns whether a static function with the given name is defined.
    pub fn has_static(&self, name: &str) -> bool {
        self.type_dtable.contains(name)
    }

    /// Adds an instance function to the type.
    ///
    /// The function receives the record it's called on and the arguments of the call.
    pub fn add_function<F, R>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&mut Record, &[Value]) -> Result<R, Error> + 'static,
        R: Into<Value>,
    {
        let method: Method = Rc::new(move |record: &mut Record, arguments: &[Value]| {
            f(record, arguments).map(Into::<Value>::into)
        });
        if self.instance_dtable.set_method(name, method).is_some() {
            trace!(type_name = %self.pretty_name, method = name, "instance function overridden");
        }
        self
    }

    /// Adds a static function to the type.
    ///
    /// The function receives the record type it's called on and the arguments of the call.
    pub fn add_static<F, R>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&RecordType, &[Value]) -> Result<R, Error> + 'static,
        R: Into<Value>,
    {
        let method: StaticMethod =
            Rc::new(move |record_type: &RecordType, arguments: &[Value]| {
                f(record_type, arguments).map(Into::<Value>::into)
            });
        if self.type_dtable.set_method(name, method).is_some() {
            trace!(type_name = %self.pretty_name, method = name, "static function overridden");
        }
        self
    }

    /// Finishes defining the type.
    pub(crate) fn build(self) -> RecordType {
        RecordType::new(
            self.name,
            self.pretty_name,
            self.fields,
            self.type_dtable,
            self.instance_dtable,
        )
    }
}

impl fmt::Debug for TypeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeBuilder")
            .field("pretty_name", &self.pretty_name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
