use std::slice;

use crate::{
    error::ensure_argument_count, Error, Function, Key, Record, TryFromValue, TypeBuilder, Value,
};

pub(crate) fn define(mut builder: TypeBuilder) -> TypeBuilder {
    let fields = builder.fields().to_vec();
    for name in fields {
        let setter_name = format!("{name}=");
        let getter_key = Key::from(&name);
        let setter_key = Key::from(&name);
        builder = builder
            .add_function(name.as_str(), move |record, arguments| {
                ensure_argument_count(arguments, 0)?;
                Ok(record.get(getter_key.clone()))
            })
            .add_function(&setter_name, move |record, arguments| {
                ensure_argument_count(arguments, 1)?;
                record.set(setter_key.clone(), arguments[0].clone());
                Ok(arguments[0].clone())
            });
    }

    builder
        .add_function("[]", |record, arguments| {
            ensure_argument_count(arguments, 1)?;
            Ok(record.get(Key::try_from(&arguments[0])?))
        })
        .add_function("[]=", |record, arguments| {
            ensure_argument_count(arguments, 2)?;
            record.set(Key::try_from(&arguments[0])?, arguments[1].clone());
            Ok(arguments[1].clone())
        })
        .add_function("members", |record, arguments| {
            ensure_argument_count(arguments, 0)?;
            Ok(Value::from(record.members().to_vec()))
        })
        .add_function("to_a", |record, arguments| {
            ensure_argument_count(arguments, 0)?;
            Ok(Value::from(record.to_vec()))
        })
        .add_function("values_at", |record, arguments| {
            let indices =
                arguments.iter().map(isize::try_from_value).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::from(record.values_at(indices)))
        })
        .add_function("each", each)
        .add_function("each_pair", each_pair)
        .add_function("size", size)
        .add_function("length", size)
        .add_function("dig", dig)
        .add_function("select", select)
        .add_function("==", equals)
        .add_function("eql?", equals)
}

/// Returns the visitor's results, in declaration order.
fn each(record: &mut Record, arguments: &[Value]) -> Result<Value, Error> {
    ensure_argument_count(arguments, 1)?;
    let visit = Function::try_from_value(&arguments[0])?;
    let results = record
        .iter()
        .map(|value| visit.call(slice::from_ref(value)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::from(results))
}

fn each_pair(record: &mut Record, arguments: &[Value]) -> Result<Value, Error> {
    ensure_argument_count(arguments, 1)?;
    let visit = Function::try_from_value(&arguments[0])?;
    let results = record
        .pairs()
        .map(|(name, value)| visit.call(&[Value::from(name), value.clone()]))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::from(results))
}

fn size(record: &mut Record, arguments: &[Value]) -> Result<usize, Error> {
    ensure_argument_count(arguments, 0)?;
    Ok(record.size())
}

fn dig(record: &mut Record, arguments: &[Value]) -> Result<Value, Error> {
    let (first, rest) =
        arguments.split_first().ok_or(Error::ArgumentCount { expected: 1, got: 0 })?;
    let rest = rest.iter().map(Key::try_from).collect::<Result<Vec<_>, _>>()?;
    record.dig(Key::try_from(first)?, &rest)
}

/// The predicate's result only has to be truthy. `Nil` fields are dropped from the result even
/// when the predicate accepts them.
fn select(record: &mut Record, arguments: &[Value]) -> Result<Value, Error> {
    ensure_argument_count(arguments, 1)?;
    let predicate = Function::try_from_value(&arguments[0])?;
    let mut selected = Vec::new();
    for value in record.iter() {
        if predicate.call(slice::from_ref(value))?.is_truthy() && !value.is_nil() {
            selected.push(value.clone());
        }
    }
    Ok(Value::from(selected))
}

fn equals(record: &mut Record, arguments: &[Value]) -> Result<bool, Error> {
    ensure_argument_count(arguments, 1)?;
    Ok(matches!(&arguments[0], Value::Record(other) if *other == *record))
}
