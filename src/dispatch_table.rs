use std::{fmt, rc::Rc};

use hashbrown::HashMap;

use crate::{Error, Record, RecordType, Value};

/// An instance method. Receives the record it was called on and the call's arguments.
pub type Method = Rc<dyn Fn(&mut Record, &[Value]) -> Result<Value, Error>>;

/// A static method. Receives the record type it was called on and the call's arguments.
pub type StaticMethod = Rc<dyn Fn(&RecordType, &[Value]) -> Result<Value, Error>>;

/// A dispatch table containing functions bound to a record type or its instances.
pub struct DispatchTable<M> {
    /// The pretty name of the type this dispatch table contains functions for.
    pub pretty_name: Rc<str>,
    methods: HashMap<Rc<str>, M>,
}

impl<M> DispatchTable<M> {
    fn new(pretty_name: impl Into<Rc<str>>) -> Self {
        Self { pretty_name: pretty_name.into(), methods: HashMap::new() }
    }

    /// Creates a new, empty type dispatch table with the given type name.
    pub fn new_for_type(type_name: &str) -> Self {
        Self::new(format!("type {type_name}"))
    }

    /// Creates a new, empty instance dispatch table with the given type name.
    pub fn new_for_instance(type_name: &str) -> Self {
        Self::new(type_name)
    }

    /// Returns a reference to the method with the given name.
    pub fn get_method(&self, name: &str) -> Option<&M> {
        self.methods.get(name)
    }

    /// Adds a method into the dispatch table, returning the method it replaced, if any.
    pub fn set_method(&mut self, name: impl Into<Rc<str>>, method: M) -> Option<M> {
        self.methods.insert(name.into(), method)
    }

    /// Returns whether a method with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Returns an iterator over the names of all methods in this dispatch table.
    pub fn method_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.methods.keys().map(|name| &**name)
    }

    /// Returns the number of methods in the table.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns whether the table has no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<M> fmt::Debug for DispatchTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.method_names().collect();
        names.sort_unstable();
        f.debug_struct("DispatchTable")
            .field("pretty_name", &self.pretty_name)
            .field("methods", &names)
            .finish()
    }
}
