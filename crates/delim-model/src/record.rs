//! Typed record descriptions.
//!
//! A [`RecordType`] is the accessor table for one record type: the fields in
//! declaration order, each with its declared type, an optional external
//! binding and a pair of type-erased get/set closures. It is built once per
//! type (usually through [`impl_record!`](crate::impl_record)) and reused for
//! every read and write.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoerceError;
use crate::scalar::{FieldValue, ScalarType};

/// Explicit external binding attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Column header text. Empty or whitespace-only means "use the declared name".
    pub name: String,
    pub order: i32,
}

impl FieldBinding {
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    /// Returns the external name if it carries any non-whitespace text.
    pub fn external_name(&self) -> Option<&str> {
        if self.name.trim().is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

type Reader<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;
type Writer<R> = Box<dyn Fn(&mut R, &str) -> Result<(), CoerceError> + Send + Sync>;

/// One field of a record type.
pub struct FieldDescriptor<R> {
    name: &'static str,
    index: usize,
    scalar: ScalarType,
    nullable: bool,
    binding: Option<FieldBinding>,
    read: Reader<R>,
    write: Writer<R>,
}

impl<R> FieldDescriptor<R> {
    /// Declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Zero-based declaration index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar
    }

    /// True when the field is an `Option<T>` and empty text reads as absent.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn binding(&self) -> Option<&FieldBinding> {
        self.binding.as_ref()
    }

    /// Renders the field's current value, `None` when the value is absent.
    pub fn read(&self, record: &R) -> Option<String> {
        (self.read)(record)
    }

    /// Coerces `text` to the declared type and stores it in `record`.
    pub fn write(&self, record: &mut R, text: &str) -> Result<(), CoerceError> {
        (self.write)(record, text)
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("scalar", &self.scalar)
            .field("nullable", &self.nullable)
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

/// Ordered field descriptors of a record type.
#[derive(Debug)]
pub struct RecordType<R> {
    name: &'static str,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R: 'static> RecordType<R> {
    pub fn builder(name: &'static str) -> RecordTypeBuilder<R> {
        RecordTypeBuilder {
            name,
            fields: Vec::new(),
        }
    }
}

impl<R> RecordType<R> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }

    /// Looks up a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<R>> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`RecordType`]. Fields are recorded in call order, which
/// becomes the declaration order.
pub struct RecordTypeBuilder<R> {
    name: &'static str,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R: 'static> RecordTypeBuilder<R> {
    /// Adds a field given a shared and a mutable projection to its storage.
    pub fn field<T, G, M>(mut self, name: &'static str, get: G, get_mut: M) -> Self
    where
        T: FieldValue + 'static,
        G: Fn(&R) -> &T + Send + Sync + 'static,
        M: Fn(&mut R) -> &mut T + Send + Sync + 'static,
    {
        let read: Reader<R> = Box::new(move |record: &R| get(record).to_text());
        let write: Writer<R> =
            Box::new(move |record: &mut R, text: &str| -> Result<(), CoerceError> {
                *get_mut(record) = T::from_text(text)?;
                Ok(())
            });
        let index = self.fields.len();
        self.fields.push(FieldDescriptor {
            name,
            index,
            scalar: T::SCALAR,
            nullable: T::NULLABLE,
            binding: None,
            read,
            write,
        });
        self
    }

    /// Attaches an external binding to the most recently added field.
    ///
    /// Has no effect before the first call to [`field`](Self::field).
    pub fn bind(mut self, name: impl Into<String>, order: i32) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.binding = Some(FieldBinding::new(name, order));
        }
        self
    }

    pub fn build(self) -> RecordType<R> {
        RecordType {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// A record type the codec can instantiate and populate.
///
/// Implementations return a cached [`RecordType`]; see
/// [`impl_record!`](crate::impl_record).
pub trait Record: Default + 'static {
    fn record_type() -> &'static RecordType<Self>;
}

/// Implements [`Record`] for a struct with named fields.
///
/// Each listed field may carry an external binding `=> ("Name", order)`.
/// Fields are declared in the order they are listed.
///
/// ```
/// use delim_model::{Record, impl_record};
///
/// #[derive(Debug, Default)]
/// struct Reading {
///     sensor: String,
///     value: f64,
///     note: Option<String>,
/// }
///
/// impl_record!(Reading {
///     sensor => ("Sensor", 0),
///     value => ("Value", 1),
///     note,
/// });
///
/// let ty = Reading::record_type();
/// assert_eq!(ty.len(), 3);
/// assert_eq!(ty.field("note").unwrap().index(), 2);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($record:ident { $( $field:ident $( => ($name:expr, $order:expr) )? ),* $(,)? }) => {
        impl $crate::Record for $record {
            fn record_type() -> &'static $crate::RecordType<Self> {
                static RECORD_TYPE: ::std::sync::OnceLock<$crate::RecordType<$record>> =
                    ::std::sync::OnceLock::new();
                RECORD_TYPE.get_or_init(|| {
                    $crate::RecordType::builder(stringify!($record))
                        $(
                            .field(
                                stringify!($field),
                                |record: &$record| &record.$field,
                                |record: &mut $record| &mut record.$field,
                            )
                            $( .bind($name, $order) )?
                        )*
                        .build()
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        label: String,
        count: u32,
        ratio: Option<f64>,
    }

    crate::impl_record!(Sample {
        label => ("Label", 3),
        count,
        ratio => ("  ", 1),
    });

    #[test]
    fn builder_preserves_declaration_order() {
        let ty = Sample::record_type();
        let names: Vec<_> = ty.fields().iter().map(FieldDescriptor::name).collect();
        assert_eq!(names, vec!["label", "count", "ratio"]);
        assert_eq!(ty.name(), "Sample");
        assert_eq!(ty.field("count").unwrap().index(), 1);
        assert!(ty.field("missing").is_none());
    }

    #[test]
    fn descriptors_carry_types_and_bindings() {
        let ty = Sample::record_type();
        let ratio = ty.field("ratio").unwrap();
        assert_eq!(ratio.scalar_type(), ScalarType::F64);
        assert!(ratio.is_nullable());
        assert_eq!(ratio.binding().unwrap().external_name(), None);
        assert_eq!(ty.field("count").unwrap().binding(), None);
        assert_eq!(
            ty.field("label").unwrap().binding(),
            Some(&FieldBinding::new("Label", 3))
        );
    }

    #[test]
    fn accessors_read_and_write() {
        let ty = Sample::record_type();
        let mut sample = Sample::default();
        ty.field("label").unwrap().write(&mut sample, "abc").unwrap();
        ty.field("count").unwrap().write(&mut sample, "12").unwrap();
        ty.field("ratio").unwrap().write(&mut sample, "").unwrap();
        assert_eq!(
            sample,
            Sample {
                label: "abc".to_string(),
                count: 12,
                ratio: None,
            }
        );
        assert_eq!(ty.field("count").unwrap().read(&sample).as_deref(), Some("12"));
        assert_eq!(ty.field("ratio").unwrap().read(&sample), None);
    }

    #[test]
    fn failed_write_leaves_field_untouched() {
        let ty = Sample::record_type();
        let mut sample = Sample {
            count: 5,
            ..Sample::default()
        };
        let err = ty.field("count").unwrap().write(&mut sample, "five").unwrap_err();
        assert_eq!(err.target, ScalarType::U32);
        assert_eq!(sample.count, 5);
    }

    #[test]
    fn record_type_is_cached() {
        assert!(std::ptr::eq(Sample::record_type(), Sample::record_type()));
    }

    #[test]
    fn bind_before_field_is_ignored() {
        let ty = RecordType::<Sample>::builder("Sample")
            .bind("Nothing", 0)
            .field("count", |s: &Sample| &s.count, |s: &mut Sample| &mut s.count)
            .build();
        assert_eq!(ty.len(), 1);
        assert!(ty.fields()[0].binding().is_none());
    }
}
