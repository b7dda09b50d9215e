//! Record introspection and structural conversion to plain data.
//!
//! A record is a struct with a static schema: a name plus an ordered list
//! of field descriptions. Deriving [`Record`] attaches that schema and a
//! conversion into the [`Value`] model, after which the crate's entry
//! points take over:
//!
//! - [`fields`] reads a record instance back as one flat, ordered
//!   name-to-value mapping, hiding internal fields by default.
//! - [`as_dict`] and [`as_tuple`] recurse through the whole structure,
//!   rebuilding nested records as plain maps or tuples.
//! - [`convert_with`] runs the same recursion with a caller-supplied
//!   reduction for record-shaped nodes.
//!
//! Fields whose name starts with an underscore, or which carry
//! `#[record(internal)]`, are internal: public views skip them, full
//! conversions keep them.
//!
//! ```
//! use unstruct::{as_dict, fields, Record, Value};
//!
//! #[derive(Record)]
//! struct Session {
//!     user: String,
//!     _nonce: i64,
//! }
//!
//! let session = Session { user: "amy".into(), _nonce: 7 };
//! let value = Value::Record(session.to_record());
//!
//! // Public view: the underscored field stays hidden.
//! let view = fields(&value, false)?;
//! assert_eq!(view.len(), 1);
//! assert_eq!(view["user"], Value::String("amy".into()));
//!
//! // Full conversion keeps every field, in declaration order.
//! let dict = as_dict(&value)?;
//! assert_eq!(
//!     serde_json::to_string(&dict).unwrap(),
//!     r#"{"user":"amy","_nonce":7}"#
//! );
//! # Ok::<(), unstruct::RecordError>(())
//! ```

pub use indexmap;

mod convert;
mod record;
mod schema;
mod ser;
mod to_value;
mod value;

pub use convert::{as_dict, as_tuple, convert_with, fields, RecordError};
pub use record::{is_record, is_record_instance, Record, RecordValue};
pub use schema::{filter_fields, FieldSpec, RecordDescriptor, INTERNAL_PREFIX};
pub use to_value::{ToKey, ToValue};
pub use value::{Key, Structured, Value};

#[cfg(feature = "derive")]
pub use unstruct_derive::Record;
