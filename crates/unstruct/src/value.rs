//! The closed value model shared by every conversion operation.
//!
//! [`Value`] is the universe of shapes the conversion engine understands:
//! scalar leaves, the two ordered sequence kinds, scalar-keyed mappings,
//! named field mappings, and record instances alongside their type
//! descriptors. Dispatch over shape is a match on this enum; nothing is
//! discovered by probing capabilities at runtime.

use std::fmt;

use indexmap::IndexMap;

use crate::record::RecordValue;
use crate::schema::RecordDescriptor;

/// A structural value: the input and output universe of the conversion
/// engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value. `Option::None` ingests to this.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar. A leaf, never treated as a sequence of characters.
    String(String),
    /// Byte string. Like text, a leaf rather than a sequence of integers.
    Bytes(Vec<u8>),
    /// Ordered sequence rebuilt as a list by the engine.
    List(Vec<Value>),
    /// Ordered sequence rebuilt as a tuple by the engine.
    Tuple(Vec<Value>),
    /// Mapping with scalar keys, insertion order preserved.
    Map(IndexMap<Key, Value>),
    /// A named-tuple-like value: ordered field names to values, without a
    /// registered record type. The engine treats it as a mapping.
    Named(IndexMap<String, Value>),
    /// A record instance carrying its descriptor and current field values.
    Record(RecordValue),
    /// A record type itself, as a value.
    Descriptor(&'static RecordDescriptor),
}

impl Value {
    /// Short diagnostic name for this value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Named(_) => "named",
            Value::Record(_) => "record",
            Value::Descriptor(_) => "record type",
        }
    }

    /// Build a byte-string leaf.
    ///
    /// `Vec<u8>` ingested through [`ToValue`](crate::ToValue) becomes a
    /// `List` of integers; byte strings are opt-in through this constructor.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Bytes(bytes.into())
    }

    /// Build a named field mapping from ordered pairs.
    ///
    /// A repeated name keeps its first position and the last value, the
    /// usual ordered-mapping insert semantics.
    pub fn named<I>(pairs: I) -> Value
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Value::Named(pairs.into_iter().collect())
    }
}

/// A mapping key.
///
/// Keys are scalars by construction, so recursing into one is the identity
/// and every key is hashable and ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Bool(bool),
    Int(i64),
    String(String),
}

impl Key {
    /// Short diagnostic name for this key's shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::String(_) => "string",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::String(s) => f.write_str(s),
        }
    }
}

/// Capability for named-tuple-like types: anything that can decompose into
/// ordered field pairs without declaring a record schema.
///
/// Implementors get the [`Value::Named`] shape, which the conversion engine
/// expands exactly like a mapping. Use this for types from other crates, or
/// for ad-hoc values that do not warrant `#[derive(Record)]`.
pub trait Structured {
    /// Decompose into ordered (field name, value) pairs.
    fn decompose(&self) -> Vec<(String, Value)>;

    /// Build a [`Value::Named`] from the decomposition.
    fn to_named(&self) -> Value {
        Value::named(self.decompose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::Int(1).kind(), "int");
        assert_eq!(Value::String("s".to_string()).kind(), "string");
        assert_eq!(Value::Bytes(vec![0]).kind(), "bytes");
        assert_eq!(Value::List(vec![]).kind(), "list");
        assert_eq!(Value::Tuple(vec![]).kind(), "tuple");
        assert_eq!(Value::Map(IndexMap::new()).kind(), "map");
        assert_eq!(Value::Named(IndexMap::new()).kind(), "named");
    }

    #[test]
    fn test_bytes_constructor() {
        assert_eq!(Value::bytes(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
        assert_eq!(Value::bytes(*b"ok"), Value::Bytes(vec![b'o', b'k']));
    }

    #[test]
    fn test_named_constructor_preserves_order() {
        let named = Value::named(vec![
            ("b".to_string(), Value::Int(1)),
            ("a".to_string(), Value::Int(2)),
        ]);
        let Value::Named(map) = named else {
            panic!("expected a named value");
        };
        let names: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Bool(true).to_string(), "true");
        assert_eq!(Key::Int(-3).to_string(), "-3");
        assert_eq!(Key::String("id".to_string()).to_string(), "id");
    }

    #[test]
    fn test_structured_to_named() {
        struct Version {
            major: i64,
            minor: i64,
        }

        impl Structured for Version {
            fn decompose(&self) -> Vec<(String, Value)> {
                vec![
                    ("major".to_string(), Value::Int(self.major)),
                    ("minor".to_string(), Value::Int(self.minor)),
                ]
            }
        }

        let named = Version { major: 1, minor: 4 }.to_named();
        let Value::Named(map) = named else {
            panic!("expected a named value");
        };
        assert_eq!(map["major"], Value::Int(1));
        assert_eq!(map["minor"], Value::Int(4));
    }
}
