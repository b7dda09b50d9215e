//! Static schema descriptions for record types.
//!
//! Every record type carries a [`RecordDescriptor`]: its name plus an
//! ordered slice of [`FieldSpec`]s, one per declared field. Descriptors are
//! plain `'static` data, built in consts by the derive macro; the field
//! classifier reads them instead of inspecting anything at runtime.
//!
//! A field is *internal* when its spec carries the explicit internal tag or
//! its name starts with [`INTERNAL_PREFIX`]. Internal fields are excluded
//! from default views but still present in the descriptor, so deep
//! conversion can reach them.

/// Name prefix marking a field as internal regardless of tags.
pub const INTERNAL_PREFIX: char = '_';

/// Declared metadata for a single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name, after any rename.
    pub name: &'static str,
    /// The declared type, for diagnostics.
    pub type_name: &'static str,
    /// Explicit internal tag. [`FieldSpec::is_internal`] is the full rule.
    pub internal: bool,
}

impl FieldSpec {
    /// Create a public field spec.
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            internal: false,
        }
    }

    /// Tag this field as internal.
    pub const fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    /// True if the field is excluded from default views: explicitly tagged
    /// internal, or named with the reserved prefix.
    pub fn is_internal(&self) -> bool {
        self.internal || self.name.starts_with(INTERNAL_PREFIX)
    }
}

/// Static description of a record type: its name and declared fields in
/// definition order.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordDescriptor {
    /// The record type name.
    pub name: &'static str,
    /// Field specs in declaration order.
    pub fields: &'static [FieldSpec],
}

impl RecordDescriptor {
    /// Create a descriptor over a static field slice.
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Position of a field in declaration order.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }
}

/// Filter a record's field specs for the requested view.
///
/// With `internals` set this is the identity: every spec, declaration order
/// intact. Otherwise internal fields are dropped and the order of the rest
/// is preserved. Empty input yields empty output.
pub fn filter_fields(fields: &'static [FieldSpec], internals: bool) -> Vec<&'static FieldSpec> {
    fields
        .iter()
        .filter(|spec| internals || !spec.is_internal())
        .collect()
}
