use std::{fmt, rc::Rc};

use hashbrown::HashMap;

use crate::{
    value::resolve_index, DispatchTable, Error, Key, Method, Record, StaticMethod, Symbol, Value,
};

struct RecordTypeInner {
    name: Option<Rc<str>>,
    pretty_name: Rc<str>,
    fields: Rc<[Symbol]>,
    /// Maps field names to slots. With duplicate field names the first declaration wins.
    indices: HashMap<Symbol, usize>,
    type_dtable: DispatchTable<StaticMethod>,
    instance_dtable: DispatchTable<Method>,
}

/// A record type produced by a [`Factory`][crate::Factory].
///
/// This is a cheap, reference-counted handle. Two handles are equal only if they refer to the
/// same type; types built from identical field lists are still distinct.
#[derive(Clone)]
pub struct RecordType(Rc<RecordTypeInner>);

impl RecordType {
    pub(crate) fn new(
        name: Option<Rc<str>>,
        pretty_name: Rc<str>,
        fields: Rc<[Symbol]>,
        type_dtable: DispatchTable<StaticMethod>,
        instance_dtable: DispatchTable<Method>,
    ) -> Self {
        let mut indices = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            indices.entry(field.clone()).or_insert(index);
        }
        Self(Rc::new(RecordTypeInner {
            name,
            pretty_name,
            fields,
            indices,
            type_dtable,
            instance_dtable,
        }))
    }

    /// Returns the name the type was created with, or `None` if the type is anonymous.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Returns a human-readable name of the type. For anonymous types this lists the fields.
    pub fn pretty_name(&self) -> &str {
        &self.0.pretty_name
    }

    /// Returns the names of the fields, in declaration order.
    pub fn members(&self) -> &[Symbol] {
        &self.0.fields
    }

    /// Returns the number of declared fields.
    pub fn size(&self) -> usize {
        self.0.fields.len()
    }

    /// Resolves a key into a slot index, or `None` if there's no such field.
    pub fn index_of(&self, key: &Key) -> Option<usize> {
        match key {
            Key::Index(index) => resolve_index(*index, self.size()),
            Key::Name(name) => self.0.indices.get(name.as_str()).copied(),
        }
    }

    /// Creates a new instance of the type from positional values.
    ///
    /// Fields that don't receive a value are `Nil`. Passing more values than the type has fields
    /// is an [`Error::Arity`].
    ///
    /// # Examples
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use struct_factory::{Factory, Symbol, Value};
    ///
    /// let point = Factory::new().create([Symbol::new("x"), Symbol::new("y")])?;
    /// let origin = point.construct([0])?;
    /// assert_eq!(origin.to_vec(), vec![Value::from(0), Value::Nil]);
    /// assert!(point.construct([1, 2, 3]).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn construct<I, V>(&self, values: I) -> Result<Record, Error>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut fields: Vec<Value> = values.into_iter().map(Into::into).collect();
        if fields.len() > self.size() {
            return Err(Error::Arity { max: self.size(), got: fields.len() });
        }
        fields.resize(self.size(), Value::Nil);
        Ok(Record::new(self.clone(), fields))
    }

    /// Returns whether instances of this type respond to the given method name.
    pub fn responds_to(&self, method: &str) -> bool {
        self.0.instance_dtable.contains(method)
    }

    /// Returns whether the type itself has a static function with the given name.
    pub fn has_static(&self, name: &str) -> bool {
        self.0.type_dtable.contains(name)
    }

    pub(crate) fn instance_method(&self, name: &str) -> Option<Method> {
        self.0.instance_dtable.get_method(name).cloned()
    }

    /// Calls a static function of the type, such as `new` or `members`.
    pub fn call_static(&self, name: &str, arguments: &[Value]) -> Result<Value, Error> {
        let method = self.0.type_dtable.get_method(name).ok_or_else(|| Error::MethodNotFound {
            type_name: self.0.type_dtable.pretty_name.to_string().into(),
            method: name.to_string().into(),
        })?;
        method(self, arguments)
    }

    /// Returns whether the two handles refer to the same type.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for RecordType {}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<[{}]>", self.0.type_dtable.pretty_name)
    }
}
