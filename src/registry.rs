use std::rc::Rc;

use hashbrown::HashMap;

use crate::RecordType;

/// A namespace of named record types.
///
/// The [`Factory`][crate::Factory] binds every named type it creates here. Binding a name that's
/// already taken replaces the old type; instances of the old type stay valid, but the name no
/// longer resolves to it.
#[derive(Debug, Default)]
pub struct Registry {
    types: HashMap<Rc<str>, RecordType>,
}

impl Registry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a type under the given name, returning the type that was previously bound, if any.
    pub fn bind(
        &mut self,
        name: impl Into<Rc<str>>,
        record_type: RecordType,
    ) -> Option<RecordType> {
        self.types.insert(name.into(), record_type)
    }

    /// Looks up a type by name.
    pub fn get(&self, name: &str) -> Option<&RecordType> {
        self.types.get(name)
    }

    /// Returns whether a type is bound under the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Unbinds the type bound under the given name and returns it.
    pub fn remove(&mut self, name: &str) -> Option<RecordType> {
        self.types.remove(name)
    }

    /// Returns the number of bound names.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns whether no names are bound.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns an iterator over all `(name, type)` bindings, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordType)> + '_ {
        self.types.iter().map(|(name, record_type)| (&**name, record_type))
    }
}
