//! Ingestion from ordinary Rust types into the value model.
//!
//! [`ToValue`] is the one way in: scalars, options, sequences, tuples, and
//! ordered maps convert structurally, and `#[derive(Record)]` adds an impl
//! for every record type. Conversion is infallible; each implementor has
//! exactly one shape in the [`Value`] universe.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::value::{Key, Value};

/// Conversion into a [`Value`].
pub trait ToValue {
    /// Convert to a structural value.
    fn to_value(&self) -> Value;
}

/// Conversion into a mapping [`Key`].
pub trait ToKey {
    /// Convert to a scalar key.
    fn to_key(&self) -> Key;
}

// ============================================================================
// Scalars
// ============================================================================

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToKey for bool {
    fn to_key(&self) -> Key {
        Key::Bool(*self)
    }
}

// Unsigned widths past u32 do not fit `Int(i64)` and have no impl.
macro_rules! impl_to_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(*self as i64)
                }
            }

            impl ToKey for $ty {
                fn to_key(&self) -> Key {
                    Key::Int(*self as i64)
                }
            }
        )*
    };
}

impl_to_value_for_int!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToKey for String {
    fn to_key(&self) -> Key {
        Key::String(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::String((*self).to_string())
    }
}

impl ToKey for &str {
    fn to_key(&self) -> Key {
        Key::String((*self).to_string())
    }
}

// ============================================================================
// Containers
// ============================================================================

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K: ToKey, V: ToValue> ToValue for IndexMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_key(), value.to_value()))
                .collect(),
        )
    }
}

impl<K: ToKey, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_key(), value.to_value()))
                .collect(),
        )
    }
}

macro_rules! impl_to_value_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: ToValue),+> ToValue for ($($name,)+) {
            fn to_value(&self) -> Value {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                Value::Tuple(vec![$($name.to_value()),+])
            }
        }
    };
}

impl_to_value_for_tuple!(A);
impl_to_value_for_tuple!(A, B);
impl_to_value_for_tuple!(A, B, C);
impl_to_value_for_tuple!(A, B, C, D);
impl_to_value_for_tuple!(A, B, C, D, E);
impl_to_value_for_tuple!(A, B, C, D, E, F);
impl_to_value_for_tuple!(A, B, C, D, E, F, G);
impl_to_value_for_tuple!(A, B, C, D, E, F, G, H);

// ============================================================================
// Passthrough
// ============================================================================

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToKey for Key {
    fn to_key(&self) -> Key {
        self.clone()
    }
}
