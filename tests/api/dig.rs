//! Tests around `dig`.

use struct_factory::{Error, Key, Value};

use super::{create_factory, RevealResultExt};

#[test]
fn digging_through_nested_records() {
    let mut factory = create_factory();

    let address = factory.create(["Address", "city", "zip"]).reveal();
    let person = factory.create(["Person", "name", "address"]).reveal();

    let home = address.construct(["Kraków", "30-001"]).reveal();
    let alice = person.construct([Value::from("Alice"), Value::from(home)]).reveal();

    assert_eq!(alice.dig("address", &[Key::from("city")]).reveal(), Value::from("Kraków"));
    assert_eq!(alice.dig(1, &[Key::from(-1)]).reveal(), Value::from("30-001"));
    assert_eq!(alice.dig("address", &[Key::from("country")]).reveal(), Value::Nil);
}

#[test]
fn digging_without_a_path_is_get() {
    let mut factory = create_factory();

    let pair = factory.create(["Pair", "a", "b"]).reveal();
    let record = pair.construct([1, 2]).reveal();
    assert_eq!(record.dig("b", &[]).reveal(), Value::from(2));
    assert_eq!(record.dig("c", &[]).reveal(), Value::Nil);
}

#[test]
fn digging_into_nil_yields_nil() {
    let mut factory = create_factory();

    let pair = factory.create(["Pair", "a", "b"]).reveal();
    let record = pair.construct([1]).reveal();
    let deep = [Key::from(0), Key::from("x"), Key::from(3)];
    assert_eq!(record.dig("b", &deep).reveal(), Value::Nil);
    assert_eq!(record.dig("nope", &deep).reveal(), Value::Nil);
}

#[test]
fn digging_into_lists() {
    let mut factory = create_factory();

    let bag = factory.create(["Bag", "items"]).reveal();
    let record = bag.construct([Value::from(vec!["a", "b"])]).reveal();
    assert_eq!(record.dig("items", &[Key::from(1)]).reveal(), Value::from("b"));
    assert_eq!(record.dig("items", &[Key::from(9)]).reveal(), Value::Nil);
    assert!(matches!(
        record.dig("items", &[Key::from("first")]),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn digging_into_plain_values_fails() {
    let mut factory = create_factory();

    let pair = factory.create(["Pair", "a", "b"]).reveal();
    let record = pair.construct([1, 2]).reveal();
    let error = record.dig("a", &[Key::from(0)]).unwrap_err();
    assert!(matches!(error, Error::NotDiggable { .. }));
    assert_eq!(error.to_string(), "Number does not have a dig method");
}

#[test]
fn nested_dig_errors_propagate_unchanged() {
    let mut factory = create_factory();

    let inner = factory.create(["Inner", "n"]).reveal();
    let outer = factory.create(["Outer", "inner"]).reveal();
    let record = outer.construct([inner.construct([5]).reveal()]).reveal();

    let error = record.dig("inner", &[Key::from("n"), Key::from(0)]).unwrap_err();
    assert!(matches!(error, Error::NotDiggable { .. }));
}
