//! Struct-like record types built at runtime.
//!
//! A [`Factory`] takes a list of field names, optionally preceded by a type name, and produces a
//! [`RecordType`]. Instances of that type ([`Record`]s) are constructed from positional values
//! and expose the usual struct protocol: indexed access by position, string or [`Symbol`],
//! enumeration, `dig`, `select` and structural equality.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use struct_factory::{Factory, Value};
//!
//! let mut factory = Factory::new();
//! let point = factory.create(["Point", "x", "y"])?;
//!
//! let mut p = point.construct([1, 2])?;
//! assert_eq!(p.to_vec(), vec![Value::from(1), Value::from(2)]);
//! assert_eq!(p.get("x"), Value::from(1));
//!
//! p.set("y", 5);
//! assert_eq!(p.get(1), Value::from(5));
//! # Ok(())
//! # }
//! ```
//!
//! Types and records are reference counted with [`Rc`][std::rc::Rc] and are thus confined to
//! the thread that created them.

mod corelib;
mod dispatch_table;
mod error;
mod factory;
mod key;
mod record;
mod record_type;
mod registry;
mod types;
mod value;

pub use dispatch_table::*;
pub use error::*;
pub use factory::*;
pub use key::*;
pub use record::*;
pub use record_type::*;
pub use registry::*;
pub use types::*;
pub use value::*;
