use std::rc::Rc;

use tracing::{debug, warn};

use crate::{corelib, Error, RecordType, Registry, Symbol, TypeBuilder, Value};

/// Options controlling how a [`Factory`] names and registers the types it creates.
#[derive(Debug, Clone, Copy)]
pub struct FactoryOptions {
    /// Set to `true` to capitalize type names: the first character is uppercased, the rest is
    /// lowercased. Defaults to `true`.
    pub capitalize_names: bool,
    /// Set to `true` to bind named types in the factory's [`Registry`]. Defaults to `true`.
    pub register_named_types: bool,
    /// Set to `true` to log a warning when a type name is rebound to a new type. Rebinding is
    /// logged at the debug level otherwise. Defaults to `false`.
    pub warn_on_rebind: bool,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self { capitalize_names: true, register_named_types: true, warn_on_rebind: false }
    }
}

/// **Start here!** Creates record types from lists of field names and keeps track of the named
/// ones.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use struct_factory::{Factory, Symbol, Value};
///
/// let mut factory = Factory::new();
/// let point = factory.create([
///     Value::from("point"),
///     Value::from(Symbol::new("x")),
///     Value::from(Symbol::new("y")),
/// ])?;
/// assert_eq!(point.name(), Some("Point"));
/// assert_eq!(factory.get("Point"), Some(&point));
///
/// let mut p = point.construct([1, 2])?;
/// p.set("y", 5);
/// assert_eq!(p.get(1), Value::from(5));
/// assert_eq!(p.members(), [Symbol::new("x"), Symbol::new("y")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Factory {
    registry: Registry,
    options: FactoryOptions,
}

impl Factory {
    /// Creates a new factory with [`Default`] options and an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new factory with specific options.
    pub fn with_options(options: FactoryOptions) -> Self {
        Self { registry: Registry::new(), options }
    }

    /// Returns the factory's options.
    pub fn options(&self) -> &FactoryOptions {
        &self.options
    }

    /// Returns the registry of named types.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the registry of named types, for binding or unbinding types manually.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Looks up a named type created by this factory.
    pub fn get(&self, name: &str) -> Option<&RecordType> {
        self.registry.get(name)
    }

    /// Creates a new record type.
    ///
    /// If the first argument is a string, it is taken as the type's name. The name is capitalized
    /// and the type is bound under it in the factory's registry. All the other arguments (or all
    /// arguments, if the first one is a symbol) are field names and must be strings or symbols.
    pub fn create<I, A>(&mut self, arguments: I) -> Result<RecordType, Error>
    where
        I: IntoIterator<Item = A>,
        A: Into<Value>,
    {
        self.create_with(arguments, |builder| builder)
    }

    /// Creates a new record type, like [`Factory::create`], and lets `extension` add functions
    /// to it before it's finished.
    ///
    /// See [`TypeBuilder`] for an example.
    pub fn create_with<I, A, E>(&mut self, arguments: I, extension: E) -> Result<RecordType, Error>
    where
        I: IntoIterator<Item = A>,
        A: Into<Value>,
        E: FnOnce(TypeBuilder) -> TypeBuilder,
    {
        let mut arguments = arguments.into_iter().map(Into::<Value>::into).peekable();
        let name = match arguments.next_if(|argument| matches!(argument, Value::String(_))) {
            Some(Value::String(name)) => self.type_name(&name),
            _ => None,
        };
        let fields =
            arguments.map(|argument| field_name(&argument)).collect::<Result<Rc<[_]>, _>>()?;

        debug!(name = name.as_deref(), fields = fields.len(), "defining record type");
        let builder = corelib::define(TypeBuilder::new(name.clone(), fields));
        let record_type = extension(builder).build();

        if let Some(name) = name.filter(|_| self.options.register_named_types) {
            self.register(name, record_type.clone());
        }
        Ok(record_type)
    }

    /// Turns the name argument of `create` into a type name. Empty names leave the type anonymous.
    fn type_name(&self, name: &str) -> Option<Rc<str>> {
        if name.is_empty() {
            return None;
        }
        if self.options.capitalize_names {
            Some(Rc::from(capitalize(name)))
        } else {
            Some(Rc::from(name))
        }
    }

    fn register(&mut self, name: Rc<str>, record_type: RecordType) {
        if let Some(previous) = self.registry.bind(Rc::clone(&name), record_type) {
            if self.options.warn_on_rebind {
                warn!(%name, ?previous, "record type name rebound");
            } else {
                debug!(%name, ?previous, "record type name rebound");
            }
        }
    }
}

fn field_name(argument: &Value) -> Result<Symbol, Error> {
    match argument {
        Value::String(name) => Ok(Symbol::from(Rc::clone(name))),
        Value::Symbol(name) => Ok(name.clone()),
        other => Err(Error::TypeMismatch {
            expected: "Symbol or String".into(),
            got: other.type_name().to_string().into(),
        }),
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
