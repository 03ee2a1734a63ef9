//! The default protocol every record type starts out with.

use crate::{error::ensure_argument_count, RecordType, TypeBuilder, Value};

mod record;

/// Defines the field accessors, the instance protocol, and the static functions of a new type.
pub(crate) fn define(builder: TypeBuilder) -> TypeBuilder {
    let builder = record::define(builder);
    define_statics(builder)
}

fn define_statics(builder: TypeBuilder) -> TypeBuilder {
    builder
        .add_static("new", |record_type: &RecordType, arguments: &[Value]| {
            record_type.construct(arguments.iter().cloned())
        })
        .add_static("members", |record_type: &RecordType, arguments: &[Value]| {
            ensure_argument_count(arguments, 0)?;
            Ok(Value::from(record_type.members().to_vec()))
        })
        .add_static("size", |record_type: &RecordType, arguments: &[Value]| {
            ensure_argument_count(arguments, 0)?;
            Ok(record_type.size())
        })
}
