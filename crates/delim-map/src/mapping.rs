//! Field mapping resolution.

use std::collections::HashMap;
use std::fmt;

use delim_model::{FieldDescriptor, Record, RecordType};
use tracing::debug;

use crate::error::{MappingError, Result};

/// A field paired with its resolved external name and order.
pub struct MappedField<R: 'static> {
    field: &'static FieldDescriptor<R>,
    external_name: String,
    order: i32,
}

impl<R: 'static> MappedField<R> {
    pub fn field(&self) -> &'static FieldDescriptor<R> {
        self.field
    }

    /// Column header text for this field.
    pub fn external_name(&self) -> &str {
        &self.external_name
    }

    pub fn declared_name(&self) -> &'static str {
        self.field.name()
    }

    pub fn order(&self) -> i32 {
        self.order
    }
}

impl<R: 'static> Clone for MappedField<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            external_name: self.external_name.clone(),
            order: self.order,
        }
    }
}

impl<R: 'static> fmt::Debug for MappedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedField")
            .field("declared_name", &self.field.name())
            .field("external_name", &self.external_name)
            .field("order", &self.order)
            .finish()
    }
}

impl<R: 'static> PartialEq for MappedField<R> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.field, other.field)
            && self.external_name == other.external_name
            && self.order == other.order
    }
}

/// Ordered column contract for a record type, shared by reads and writes.
pub struct FieldMapping<R: 'static> {
    record: &'static str,
    entries: Vec<MappedField<R>>,
}

impl<R: Record> FieldMapping<R> {
    /// Resolves the mapping of `R`'s cached record type.
    pub fn for_record() -> Result<Self> {
        Self::resolve(R::record_type())
    }
}

impl<R: 'static> FieldMapping<R> {
    /// Resolves external names and orders for every field of `record_type`.
    ///
    /// - A binding with a non-blank name is used verbatim.
    /// - A binding with a blank name keeps its order and takes the declared name.
    /// - A field without a binding takes its declared name and declaration index.
    ///
    /// Entries are sorted by resolved order; equal orders keep declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::DuplicateExternalName`] when two fields resolve
    /// to the same external name.
    pub fn resolve(record_type: &'static RecordType<R>) -> Result<Self> {
        let record = record_type.name();
        let mut entries: Vec<MappedField<R>> = record_type
            .fields()
            .iter()
            .map(|field| resolve_field(record, field))
            .collect();
        entries.sort_by_key(|entry| (entry.order, entry.field.index()));

        let mut seen: HashMap<&str, &'static str> = HashMap::with_capacity(entries.len());
        for entry in &entries {
            if let Some(first) = seen.insert(entry.external_name.as_str(), entry.declared_name()) {
                return Err(MappingError::DuplicateExternalName {
                    record,
                    name: entry.external_name.clone(),
                    first,
                    second: entry.declared_name(),
                });
            }
        }

        debug!(record, fields = entries.len(), "resolved field mapping");
        Ok(Self { record, entries })
    }

    pub fn record_name(&self) -> &'static str {
        self.record
    }

    /// Entries in resolved order.
    pub fn entries(&self) -> &[MappedField<R>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappedField<R>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn external_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(MappedField::external_name)
    }

    pub fn by_external_name(&self, name: &str) -> Option<&MappedField<R>> {
        self.entries.iter().find(|entry| entry.external_name == name)
    }

    pub fn by_declared_name(&self, name: &str) -> Option<&MappedField<R>> {
        self.entries.iter().find(|entry| entry.declared_name() == name)
    }

    /// Finds the field a header token refers to: external name first, then
    /// declared name.
    pub fn resolve_column(&self, token: &str) -> Option<&MappedField<R>> {
        self.by_external_name(token)
            .or_else(|| self.by_declared_name(token))
    }
}

impl<R: 'static> Clone for FieldMapping<R> {
    fn clone(&self) -> Self {
        Self {
            record: self.record,
            entries: self.entries.clone(),
        }
    }
}

impl<R: 'static> fmt::Debug for FieldMapping<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("record", &self.record)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<R: 'static> PartialEq for FieldMapping<R> {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record && self.entries == other.entries
    }
}

impl<'a, R: 'static> IntoIterator for &'a FieldMapping<R> {
    type Item = &'a MappedField<R>;
    type IntoIter = std::slice::Iter<'a, MappedField<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn resolve_field<R: 'static>(
    record: &'static str,
    field: &'static FieldDescriptor<R>,
) -> MappedField<R> {
    match field.binding() {
        Some(binding) => {
            let external_name = match binding.external_name() {
                Some(name) => name.to_string(),
                None => {
                    debug!(
                        record,
                        field = field.name(),
                        order = binding.order,
                        "binding has a blank column name, using declared name"
                    );
                    field.name().to_string()
                }
            };
            MappedField {
                field,
                external_name,
                order: binding.order,
            }
        }
        None => MappedField {
            field,
            external_name: field.name().to_string(),
            order: i32::try_from(field.index()).unwrap_or(i32::MAX),
        },
    }
}

#[cfg(test)]
mod tests {
    use delim_model::impl_record;

    use super::*;

    #[derive(Debug, Default)]
    struct Pair {
        a: String,
        b: String,
    }

    impl_record!(Pair {
        a => ("Alpha", 2),
        b => ("Beta", 1),
    });

    #[derive(Debug, Default)]
    struct Clash {
        first: i32,
        second: i32,
    }

    impl_record!(Clash {
        first => ("Code", 0),
        second => ("Code", 1),
    });

    #[derive(Debug, Default)]
    struct Shadow {
        name: String,
        label: String,
    }

    impl_record!(Shadow {
        name,
        label => ("name", 5),
    });

    #[test]
    fn bound_fields_sort_by_order() {
        let mapping = FieldMapping::<Pair>::for_record().unwrap();
        let names: Vec<_> = mapping.external_names().collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);
        assert_eq!(mapping.entries()[0].declared_name(), "b");
        assert_eq!(mapping.entries()[1].order(), 2);
        assert_eq!(mapping.record_name(), "Pair");
    }

    #[test]
    fn resolve_column_prefers_external_name() {
        let mapping = FieldMapping::<Pair>::for_record().unwrap();
        assert_eq!(mapping.resolve_column("Alpha").unwrap().declared_name(), "a");
        assert_eq!(mapping.resolve_column("b").unwrap().declared_name(), "b");
        assert!(mapping.resolve_column("Gamma").is_none());
    }

    #[test]
    fn duplicate_external_names_rejected() {
        let err = FieldMapping::<Clash>::for_record().unwrap_err();
        assert_eq!(
            err,
            MappingError::DuplicateExternalName {
                record: "Clash",
                name: "Code".to_string(),
                first: "first",
                second: "second",
            }
        );
    }

    #[test]
    fn external_name_colliding_with_declared_name_rejected() {
        let err = FieldMapping::<Shadow>::for_record().unwrap_err();
        assert!(matches!(
            err,
            MappingError::DuplicateExternalName { ref name, .. } if name == "name"
        ));
    }
}
