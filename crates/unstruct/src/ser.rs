//! serde support for the value model.
//!
//! Serialization only: converted output is plain data handed to whatever
//! serializer the caller picks. Records serialize as a map of every
//! declared field in order (view filtering belongs to
//! [`fields`](crate::fields)); descriptors serialize as their type name.
//! There is no `Deserialize`; values are produced, never re-ingested.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Key, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(bytes) => serializer.serialize_bytes(bytes),
            Value::List(items) | Value::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::Named(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (name, value) in map {
                    out.serialize_entry(name, value)?;
                }
                out.end()
            }
            Value::Record(record) => {
                let specs = record.descriptor().fields;
                let mut out = serializer.serialize_map(Some(specs.len()))?;
                for (spec, value) in specs.iter().zip(record.values()) {
                    out.serialize_entry(spec.name, value)?;
                }
                out.end()
            }
            Value::Descriptor(descriptor) => serializer.serialize_str(descriptor.name),
        }
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Bool(b) => serializer.serialize_bool(*b),
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::String(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::record::RecordValue;
    use crate::schema::{FieldSpec, RecordDescriptor};
    use crate::value::{Key, Value};

    fn to_json(value: &Value) -> String {
        serde_json::to_string(value).unwrap()
    }

    #[test]
    fn test_scalars_serialize() {
        assert_eq!(to_json(&Value::Null), "null");
        assert_eq!(to_json(&Value::Bool(true)), "true");
        assert_eq!(to_json(&Value::Int(-3)), "-3");
        assert_eq!(to_json(&Value::Float(1.5)), "1.5");
        assert_eq!(to_json(&Value::String("hi".to_string())), "\"hi\"");
        assert_eq!(to_json(&Value::Bytes(vec![1, 2, 3])), "[1,2,3]");
    }

    #[test]
    fn test_sequences_serialize_as_arrays() {
        let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let tuple = Value::Tuple(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(to_json(&list), "[1,2]");
        assert_eq!(to_json(&tuple), "[1,2]");
    }

    #[test]
    fn test_maps_serialize_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert(Key::String("b".to_string()), Value::Int(1));
        map.insert(Key::Int(4), Value::Int(2));
        assert_eq!(to_json(&Value::Map(map)), "{\"b\":1,\"4\":2}");
    }

    #[test]
    fn test_named_serializes_as_object() {
        let named = Value::named(vec![
            ("major".to_string(), Value::Int(1)),
            ("minor".to_string(), Value::Int(4)),
        ]);
        assert_eq!(to_json(&named), "{\"major\":1,\"minor\":4}");
    }

    #[test]
    fn test_record_serializes_every_field() {
        static FIELDS: &[FieldSpec] = &[
            FieldSpec::new("user", "String"),
            FieldSpec::new("_nonce", "i64"),
        ];
        static SESSION: RecordDescriptor = RecordDescriptor::new("Session", FIELDS);

        let record = Value::Record(RecordValue::new(
            &SESSION,
            vec![Value::String("amy".to_string()), Value::Int(7)],
        ));
        assert_eq!(to_json(&record), "{\"user\":\"amy\",\"_nonce\":7}");
        assert_eq!(to_json(&Value::Descriptor(&SESSION)), "\"Session\"");
    }
}
