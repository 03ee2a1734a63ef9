//! Tests around the typed record API.

use struct_factory::{Error, Key, Symbol, Value};

use super::{create_factory, RevealResultExt};

#[test]
fn point_scenario() {
    let mut factory = create_factory();

    let point = factory.create(["Point", "x", "y"]).reveal();
    let mut p = point.construct([1, 2]).reveal();
    assert_eq!(p.to_vec(), vec![Value::from(1), Value::from(2)]);
    assert_eq!(p.get(Symbol::new("x")), Value::from(1));

    p.set(Symbol::new("y"), 5);
    assert_eq!(p.get(1), Value::from(5));
    assert_eq!(p.members(), [Symbol::new("x"), Symbol::new("y")]);
}

#[test]
fn missing_values_default_to_nil() {
    let mut factory = create_factory();

    let record_type = factory.create(["Triple", "a", "b", "c"]).reveal();
    for given in 0..=3 {
        let values: Vec<Value> = (0..given).map(Value::from).collect();
        let record = record_type.construct(values.clone()).reveal();

        let mut expected = values;
        expected.resize(3, Value::Nil);
        assert_eq!(record.to_vec(), expected);
    }
}

#[test]
fn too_many_values_is_an_arity_error() {
    let mut factory = create_factory();

    let record_type = factory.create(["Pair", "a", "b"]).reveal();
    let error = record_type.construct([1, 2, 3]).unwrap_err();
    assert!(matches!(error, Error::Arity { max: 2, got: 3 }));
    assert_eq!(error.to_string(), "struct size differs, expected at most 2 values but got 3");
}

#[test]
fn index_and_name_access_agree() {
    let mut factory = create_factory();

    let record_type = factory.create(["Abc", "a", "b", "c"]).reveal();
    let record = record_type.construct(["one", "two", "three"]).reveal();
    for (i, name) in record.members().iter().enumerate() {
        assert_eq!(record.get(i), record.get(name));
        assert_eq!(record.get(i), record.get(name.as_str()));
    }
    assert_eq!(record.get(-1), Value::from("three"));
}

#[test]
fn unknown_keys_are_forgiving() {
    let mut factory = create_factory();

    let record_type = factory.create(["Pair", "a", "b"]).reveal();
    let mut record = record_type.construct([1, 2]).reveal();

    assert_eq!(record.get("missing"), Value::Nil);
    assert_eq!(record.get(2), Value::Nil);
    assert_eq!(record.get(-3), Value::Nil);

    assert_eq!(record.set("missing", 3), Value::Nil);
    assert_eq!(record.set(7, 3), Value::Nil);
    assert_eq!(record.size(), 2);
    assert_eq!(record.to_vec(), vec![Value::from(1), Value::from(2)]);
}

#[test]
fn huge_indices_are_out_of_range() {
    let mut factory = create_factory();

    let record_type = factory.create(["Pair", "a", "b"]).reveal();
    let mut record = record_type.construct([1, 2]).reveal();

    assert_eq!(record.get(usize::MAX), Value::Nil);
    assert_eq!(record.get(u64::MAX), Value::Nil);
    assert_eq!(record.set(usize::MAX, 99), Value::Nil);
    assert_eq!(record.to_vec(), vec![Value::from(1), Value::from(2)]);
}

#[test]
fn set_returns_the_previous_value() {
    let mut factory = create_factory();

    let record_type = factory.create(["Cell", "value"]).reveal();
    let mut record = record_type.construct(["old"]).reveal();
    assert_eq!(record.set("value", "new"), Value::from("old"));
    assert_eq!(record.get(0), Value::from("new"));
}

#[test]
fn values_at_uses_positions() {
    let mut factory = create_factory();

    let record_type = factory.create(["Abc", "a", "b", "c"]).reveal();
    let record = record_type.construct([10, 20, 30]).reveal();
    assert_eq!(
        record.values_at([2, 0, 5, -1]),
        vec![Value::from(30), Value::from(10), Value::Nil, Value::from(30)]
    );
}

#[test]
fn enumeration_follows_declaration_order() {
    let mut factory = create_factory();

    let record_type = factory.create(["Abc", "c", "a", "b"]).reveal();
    let mut record = record_type.construct([3, 1, 2]).reveal();
    record.set("a", 100);

    let mut visited = Vec::new();
    record.each(|value| visited.push(value.clone()));
    assert_eq!(visited, vec![Value::from(3), Value::from(100), Value::from(2)]);

    let mut names = Vec::new();
    record.each_pair(|name, value| names.push(format!("{name}={value}")));
    assert_eq!(names, ["c=3", "a=100", "b=2"]);

    assert_eq!(record.members(), [Symbol::new("c"), Symbol::new("a"), Symbol::new("b")]);
    assert_eq!(record.size(), record.members().len());
    assert_eq!(record.len(), 3);
}

#[test]
fn select_keeps_order_and_drops_nil() {
    let mut factory = create_factory();

    let record_type = factory.create(["Mixed", "a", "b", "c", "d", "e"]).reveal();
    let record =
        record_type.construct([Value::from(1), Value::Nil, Value::from(3), Value::False]).reveal();

    assert_eq!(record.select(|_| true), vec![Value::from(1), Value::from(3), Value::False]);
    assert_eq!(
        record.select(|value| matches!(value, Value::Number(n) if *n > 1.0)),
        vec![Value::from(3)]
    );
    assert!(record.select(|_| false).is_empty());
}

#[test]
fn equality_is_per_type_and_per_field() {
    let mut factory = create_factory();

    let point = factory.create(["Point", "x", "y"]).reveal();
    let lookalike = factory.create(["Vector", "x", "y"]).reveal();

    let a = point.construct([1, 2]).reveal();
    let mut b = point.construct([1, 2]).reveal();
    assert_eq!(a, b);

    b.set("y", 3);
    assert_ne!(a, b);

    let c = lookalike.construct([1, 2]).reveal();
    assert_ne!(a, c);
    assert_eq!(a.to_vec(), c.to_vec());
}

#[test]
fn keys_work_through_get_ref() {
    let mut factory = create_factory();

    let record_type = factory.create(["Pair", "a", "b"]).reveal();
    let record = record_type.construct([1]).reveal();
    assert_eq!(record.get_ref(&Key::from("b")), Some(&Value::Nil));
    assert_eq!(record.get_ref(&Key::from("c")), None);
}

#[test]
fn debug_output() {
    let mut factory = create_factory();

    let point = factory.create(["Point", "x", "y"]).reveal();
    let p = point.construct([Value::from(1), Value::from("two")]).reveal();
    assert_eq!(format!("{p:?}"), r#"Point { x: 1, y: "two" }"#);

    let anonymous = factory.create([Symbol::new("a")]).reveal();
    let q = anonymous.construct([Symbol::new("z")]).reveal();
    assert_eq!(format!("{q:?}"), "{ a: :z }");
}
