//! Tests around creating record types.

use struct_factory::{Error, Factory, FactoryOptions, Symbol, Value};

use super::{create_factory, RevealResultExt};

fn symbols(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|&name| Symbol::new(name)).collect()
}

#[test]
fn string_first_argument_names_the_type() {
    let mut factory = create_factory();

    let point = factory.create(["point", "x", "y"]).reveal();
    assert_eq!(point.name(), Some("Point"));
    assert_eq!(point.members(), symbols(&["x", "y"]));
    assert_eq!(factory.get("Point"), Some(&point));
}

#[test]
fn symbol_first_argument_is_a_field() {
    let mut factory = create_factory();

    let anonymous = factory.create([Symbol::new("x"), Symbol::new("y")]).reveal();
    assert_eq!(anonymous.name(), None);
    assert_eq!(anonymous.pretty_name(), "Struct{x, y}");
    assert_eq!(anonymous.members(), symbols(&["x", "y"]));
    assert!(factory.registry().is_empty());

    let p = anonymous.construct([1, 2]).reveal();
    assert_eq!(p.get("y"), Value::from(2));
}

#[test]
fn fields_can_mix_strings_and_symbols() {
    let mut factory = create_factory();

    let record_type = factory
        .create([Value::from("Mixed"), Value::from("a"), Value::from(Symbol::new("b"))])
        .reveal();
    assert_eq!(record_type.members(), symbols(&["a", "b"]));
}

#[test]
fn non_name_fields_are_rejected() {
    let mut factory = create_factory();

    let result = factory.create([Value::from("Broken"), Value::from(1)]);
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    assert!(!factory.registry().contains("Broken"));
}

#[test]
fn recreating_a_named_type_rebinds_the_name() {
    let mut factory = create_factory();

    let first = factory.create(["Point", "x", "y"]).reveal();
    let old = first.construct([1, 2]).reveal();

    let second = factory.create(["Point", "x", "y", "z"]).reveal();
    assert_eq!(factory.get("Point"), Some(&second));
    assert_ne!(first, second);
    assert_eq!(factory.registry().len(), 1);

    // Instances of the old type keep working.
    assert_eq!(old.size(), 2);
    assert_eq!(old.record_type(), &first);
}

#[test]
fn type_without_fields() {
    let mut factory = create_factory();

    let empty = factory.create(["Empty"]).reveal();
    assert_eq!(empty.size(), 0);
    let instance = empty.construct(Vec::<Value>::new()).reveal();
    assert!(instance.is_empty());
    assert!(matches!(empty.construct([1]), Err(Error::Arity { max: 0, got: 1 })));
}

#[test]
fn empty_name_leaves_the_type_anonymous() {
    let mut factory = create_factory();

    let record_type = factory.create(["", "a"]).reveal();
    assert_eq!(record_type.name(), None);
    assert_eq!(record_type.members(), symbols(&["a"]));
    assert!(factory.registry().is_empty());
}

#[test]
fn options_control_naming_and_registration() {
    let mut factory = Factory::with_options(FactoryOptions {
        capitalize_names: false,
        register_named_types: false,
        ..Default::default()
    });

    let record_type = factory.create(["pOint", "x"]).reveal();
    assert_eq!(record_type.name(), Some("pOint"));
    assert!(factory.get("pOint").is_none());
}

#[test]
fn registry_can_be_managed_manually() {
    let mut factory = create_factory();

    let anonymous = factory.create([Symbol::new("a")]).reveal();
    factory.registry_mut().bind("Alias", anonymous.clone());
    assert_eq!(factory.get("Alias"), Some(&anonymous));

    let removed = factory.registry_mut().remove("Alias");
    assert_eq!(removed, Some(anonymous));
    assert!(factory.get("Alias").is_none());
}

#[test]
fn static_functions() {
    let mut factory = create_factory();

    let point = factory.create(["Point", "x", "y"]).reveal();
    let p = point.call_static("new", &[Value::from(3), Value::from(4)]).reveal();
    assert_eq!(p, Value::from(point.construct([3, 4]).reveal()));
    assert_eq!(
        point.call_static("members", &[]).reveal(),
        Value::from(vec![Symbol::new("x"), Symbol::new("y")])
    );
    assert_eq!(point.call_static("size", &[]).reveal(), Value::from(2));
    assert!(matches!(
        point.call_static("new", &[Value::from(1), Value::from(2), Value::from(3)]),
        Err(Error::Arity { max: 2, got: 3 })
    ));
    assert!(matches!(point.call_static("nope", &[]), Err(Error::MethodNotFound { .. })));
}
