use std::fmt;

use crate::{Error, Key, RecordType, Symbol, Value};

/// An instance of a [`RecordType`].
///
/// A record holds exactly one value per declared field, in declaration order. Records are plain
/// values: cloning a record copies its fields, and there is no interior mutability, so sharing a
/// record between owners requires the owners to bring their own synchronization.
#[derive(Clone)]
pub struct Record {
    record_type: RecordType,
    fields: Vec<Value>,
}

impl Record {
    pub(crate) fn new(record_type: RecordType, fields: Vec<Value>) -> Self {
        debug_assert_eq!(fields.len(), record_type.size());
        Self { record_type, fields }
    }

    /// Returns the type this record was constructed from.
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Returns the value of a field, or `Nil` if there's no such field.
    ///
    /// # Examples
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use struct_factory::{Factory, Symbol, Value};
    ///
    /// let point = Factory::new().create(["Point", "x", "y"])?;
    /// let p = point.construct([1, 2])?;
    /// assert_eq!(p.get(0), Value::from(1));
    /// assert_eq!(p.get("y"), Value::from(2));
    /// assert_eq!(p.get(Symbol::new("x")), Value::from(1));
    /// assert_eq!(p.get("z"), Value::Nil);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl Into<Key>) -> Value {
        self.get_ref(&key.into()).cloned().unwrap_or(Value::Nil)
    }

    /// Returns a reference to the value of a field, or `None` if there's no such field.
    pub fn get_ref(&self, key: &Key) -> Option<&Value> {
        self.record_type.index_of(key).map(|index| &self.fields[index])
    }

    /// Sets the value of a field. Returns the old value, or `Nil` if there's no such field, in
    /// which case the record is left untouched.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Value {
        match self.record_type.index_of(&key.into()) {
            Some(index) => std::mem::replace(&mut self.fields[index], value.into()),
            None => Value::Nil,
        }
    }

    /// Returns the names of the fields, in declaration order.
    pub fn members(&self) -> &[Symbol] {
        self.record_type.members()
    }

    /// Returns the values of the fields, in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.fields
    }

    /// Returns a copy of the values of the fields, in declaration order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.fields.clone()
    }

    /// Returns the values at the given positions. Positions out of range yield `Nil`.
    pub fn values_at<I>(&self, indices: I) -> Vec<Value>
    where
        I: IntoIterator<Item = isize>,
    {
        indices.into_iter().map(|index| self.get(Key::Index(index))).collect()
    }

    /// Returns an iterator over the values of the fields.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.fields.iter()
    }

    /// Returns an iterator over `(name, value)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Value)> + '_ {
        self.members().iter().zip(&self.fields)
    }

    /// Calls `visit` with each value, in declaration order.
    pub fn each(&self, mut visit: impl FnMut(&Value)) {
        for value in &self.fields {
            visit(value);
        }
    }

    /// Calls `visit` with each field name and its value, in declaration order.
    pub fn each_pair(&self, mut visit: impl FnMut(&Symbol, &Value)) {
        for (name, value) in self.pairs() {
            visit(name, value);
        }
    }

    /// Returns the number of fields.
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    /// Alias for [`Record::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns whether the record type declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Retrieves the field under `key` and then descends into it following `rest`.
    ///
    /// If the field is `Nil`, the result is `Nil` regardless of `rest`. Otherwise the lookup
    /// continues with [`Value::dig`], which fails when it has to descend into a value that is
    /// neither a record nor a list.
    ///
    /// # Examples
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use struct_factory::{Factory, Key, Value};
    ///
    /// let mut factory = Factory::new();
    /// let inner = factory.create(["Inner", "value"])?;
    /// let outer = factory.create(["Outer", "inner"])?;
    ///
    /// let record = outer.construct([inner.construct([42])?])?;
    /// assert_eq!(record.dig("inner", &[Key::from("value")])?, Value::from(42));
    /// # Ok(())
    /// # }
    /// ```
    pub fn dig(&self, key: impl Into<Key>, rest: &[Key]) -> Result<Value, Error> {
        match self.get_ref(&key.into()) {
            None | Some(Value::Nil) => Ok(Value::Nil),
            Some(value) => value.dig(rest),
        }
    }

    /// Returns the values for which `predicate` returns `true`, in declaration order.
    ///
    /// `Nil` values are never part of the result, even if the predicate accepts them.
    pub fn select(&self, mut predicate: impl FnMut(&Value) -> bool) -> Vec<Value> {
        self.fields
            .iter()
            .filter(|&value| predicate(value))
            .filter(|value| !value.is_nil())
            .cloned()
            .collect()
    }

    /// Calls a method on the record by name, using the record type's dispatch table.
    ///
    /// Apart from any functions added when the type was created, every record type responds to
    /// its field accessors (`x` and `x=` for a field `x`) and to `[]`, `[]=`, `members`, `to_a`,
    /// `values_at`, `each`, `each_pair`, `size`, `length`, `dig`, `select`, `==` and `eql?`.
    pub fn call(&mut self, method: &str, arguments: &[Value]) -> Result<Value, Error> {
        let f = self.record_type.instance_method(method).ok_or_else(|| Error::MethodNotFound {
            type_name: self.record_type.pretty_name().to_string().into(),
            method: method.to_string().into(),
        })?;
        f(self, arguments)
    }
}

/// Records are equal when they are instances of the same type and all their fields are equal.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.record_type == other.record_type && self.fields == other.fields
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.record_type.name() {
            write!(f, "{name} ")?;
        }
        if self.fields.is_empty() {
            f.write_str("{}")?;
        } else {
            f.write_str("{ ")?;
            for (i, (name, value)) in self.pairs().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: {value:?}")?;
            }
            f.write_str(" }")?;
        }
        Ok(())
    }
}
