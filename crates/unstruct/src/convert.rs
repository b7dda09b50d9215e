//! Conversion entry points and the structural recursion engine.
//!
//! Three public views over a record instance: [`fields`] reads one flat
//! level, [`as_dict`] and [`as_tuple`] convert the whole reachable
//! structure into plain data. The deep converters share one engine,
//! `recurse_structure`, parameterized by a container reduction: a
//! function folding the ordered (key, value) pairs of every mapping-shaped
//! node into its converted form. [`convert_with`] exposes that reduction to
//! callers directly.

use indexmap::IndexMap;

use crate::record::is_record_instance;
use crate::value::{Key, Value};

/// Error from the conversion entry points.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The argument was not a record instance.
    #[error("not a record instance: got {kind}")]
    NotRecordInstance {
        /// Shape name of the offending value.
        kind: &'static str,
    },
}

/// Return a record instance's fields and their current values, one flat
/// level, in declaration order.
///
/// `internals` selects whether internal fields are included. Nested record
/// values are returned as-is, not expanded.
///
/// ```
/// use unstruct::{Record, ToValue, fields};
///
/// #[derive(Record)]
/// struct Session {
///     user: String,
///     _nonce: i64,
/// }
///
/// let value = Session { user: "amy".to_string(), _nonce: 7 }.to_value();
/// let view = fields(&value, false)?;
/// assert_eq!(view.keys().map(String::as_str).collect::<Vec<_>>(), ["user"]);
/// assert_eq!(fields(&value, true)?.len(), 2);
/// # Ok::<(), unstruct::RecordError>(())
/// ```
pub fn fields(value: &Value, internals: bool) -> Result<IndexMap<String, Value>, RecordError> {
    let Value::Record(record) = value else {
        return Err(RecordError::NotRecordInstance { kind: value.kind() });
    };

    Ok(record
        .descriptor()
        .fields
        .iter()
        .zip(record.values())
        .filter(|(spec, _)| internals || !spec.is_internal())
        .map(|(spec, field_value)| (spec.name.to_string(), field_value.clone()))
        .collect())
}

/// Recursively convert a record instance into plain mappings.
///
/// Records, named field mappings, and mappings all become [`Value::Map`];
/// lists and tuples are rebuilt with converted elements; scalars, strings,
/// and bytes pass through untouched.
pub fn as_dict(value: &Value) -> Result<Value, RecordError> {
    convert_with(value, |pairs| Value::Map(pairs.into_iter().collect()))
}

/// Recursively convert a record instance into nested tuples of values in
/// declaration order, dropping keys.
///
/// The reduction applies to every mapping-shaped node, so mappings nested
/// anywhere in the structure also collapse to tuples of their values.
pub fn as_tuple(value: &Value) -> Result<Value, RecordError> {
    convert_with(value, |pairs| {
        Value::Tuple(pairs.into_iter().map(|(_, v)| v).collect())
    })
}

/// Recursively convert a record instance with a caller-supplied container
/// reduction.
///
/// `reduce` folds the ordered (key, value) pairs of every mapping-shaped
/// node (records, named field mappings, mappings) into its converted form.
/// [`as_dict`] and [`as_tuple`] are the two stock reductions.
pub fn convert_with<F>(value: &Value, reduce: F) -> Result<Value, RecordError>
where
    F: Fn(Vec<(Key, Value)>) -> Value,
{
    if !is_record_instance(value) {
        return Err(RecordError::NotRecordInstance { kind: value.kind() });
    }
    Ok(recurse_structure(value, &reduce))
}

/// Walk a value depth-first, folding every mapping-shaped node with
/// `reduce` and rebuilding sequences in kind.
///
/// Records expand to their full field set here, internal fields included;
/// the public/internal choice applies only to the flat [`fields`] view.
/// Keys are scalars, so recursing into them is the identity and pairs go to
/// `reduce` directly.
fn recurse_structure<F>(value: &Value, reduce: &F) -> Value
where
    F: Fn(Vec<(Key, Value)>) -> Value,
{
    match value {
        Value::Record(record) => {
            let pairs = record
                .descriptor()
                .fields
                .iter()
                .zip(record.values())
                .map(|(spec, field_value)| {
                    (
                        Key::String(spec.name.to_string()),
                        recurse_structure(field_value, reduce),
                    )
                })
                .collect();
            reduce(pairs)
        }
        Value::Named(map) => {
            let pairs = map
                .iter()
                .map(|(name, nested)| {
                    (Key::String(name.clone()), recurse_structure(nested, reduce))
                })
                .collect();
            reduce(pairs)
        }
        Value::Map(map) => {
            let pairs = map
                .iter()
                .map(|(key, nested)| (key.clone(), recurse_structure(nested, reduce)))
                .collect();
            reduce(pairs)
        }
        Value::List(items) => Value::List(
            items
                .iter()
                .map(|item| recurse_structure(item, reduce))
                .collect(),
        ),
        Value::Tuple(items) => Value::Tuple(
            items
                .iter()
                .map(|item| recurse_structure(item, reduce))
                .collect(),
        ),
        other => other.clone(),
    }
}
