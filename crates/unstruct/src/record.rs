//! Record instances and the predicates over them.
//!
//! The record-defining mechanism itself lives in `#[derive(Record)]`; this
//! module is the runtime surface it targets: a trait tying a type to its
//! static descriptor, the [`RecordValue`] carrier pairing that descriptor
//! with current field values, and the two shape predicates.

use crate::schema::RecordDescriptor;
use crate::value::Value;

/// Types that declare a record schema and can decompose into one.
///
/// Implemented by `#[derive(Record)]`, which also implements
/// [`ToValue`](crate::ToValue) so record fields nest uniformly.
pub trait Record {
    /// The static descriptor shared by every instance of this type.
    fn descriptor() -> &'static RecordDescriptor;

    /// Decompose into a record value carrying current field values.
    fn to_record(&self) -> RecordValue;
}

/// A record instance: a descriptor plus one current value per declared
/// field, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    descriptor: &'static RecordDescriptor,
    values: Vec<Value>,
}

impl RecordValue {
    /// Pair a descriptor with current field values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the declared field count; the
    /// two are matched by position.
    pub fn new(descriptor: &'static RecordDescriptor, values: Vec<Value>) -> Self {
        assert_eq!(
            values.len(),
            descriptor.fields.len(),
            "record `{}` declares {} fields, got {} values",
            descriptor.name,
            descriptor.fields.len(),
            values.len()
        );
        Self { descriptor, values }
    }

    /// The record's type descriptor.
    pub fn descriptor(&self) -> &'static RecordDescriptor {
        self.descriptor
    }

    /// Current field values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Current value of the named field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.descriptor.field_index(name).map(|i| &self.values[i])
    }
}

/// True if the value came out of the record mechanism: either a record
/// instance or a record type itself.
pub fn is_record(value: &Value) -> bool {
    matches!(value, Value::Record(_) | Value::Descriptor(_))
}

/// True if the value is a record instance, not the record type itself.
pub fn is_record_instance(value: &Value) -> bool {
    matches!(value, Value::Record(_))
}
