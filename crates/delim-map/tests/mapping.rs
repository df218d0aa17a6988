//! Integration tests for field mapping resolution.

use delim_map::FieldMapping;
use delim_model::{RecordType, impl_record};
use proptest::prelude::*;

#[derive(Debug, Default)]
struct Plain {
    id: u32,
    name: String,
    score: f64,
}

impl_record!(Plain { id, name, score });

#[derive(Debug, Default)]
struct Partial {
    first: String,
    second: String,
    third: String,
}

impl_record!(Partial {
    first,
    second => ("", 0),
    third => ("Third", 0),
});

#[derive(Debug, Default)]
struct Negative {
    late: i64,
    early: i64,
}

impl_record!(Negative {
    late => ("Late", 10),
    early => ("Early", -3),
});

#[test]
fn unbound_fields_use_declared_names_and_indices() {
    let mapping = FieldMapping::<Plain>::for_record().unwrap();
    let resolved: Vec<(&str, &str, i32)> = mapping
        .iter()
        .map(|entry| (entry.declared_name(), entry.external_name(), entry.order()))
        .collect();
    assert_eq!(
        resolved,
        vec![("id", "id", 0), ("name", "name", 1), ("score", "score", 2)]
    );
}

#[test]
fn blank_binding_name_keeps_binding_order() {
    let mapping = FieldMapping::<Partial>::for_record().unwrap();
    let resolved: Vec<(&str, i32)> = mapping
        .iter()
        .map(|entry| (entry.external_name(), entry.order()))
        .collect();
    // "first" (index 0), "second" (order 0), "Third" (order 0) tie; declaration
    // order breaks the tie.
    assert_eq!(resolved, vec![("first", 0), ("second", 0), ("Third", 0)]);
}

#[test]
fn negative_orders_sort_first() {
    let mapping = FieldMapping::<Negative>::for_record().unwrap();
    assert_eq!(
        mapping.external_names().collect::<Vec<_>>(),
        vec!["Early", "Late"]
    );
}

#[test]
fn resolution_is_deterministic() {
    let first = FieldMapping::<Partial>::for_record().unwrap();
    let second = FieldMapping::<Partial>::for_record().unwrap();
    assert_eq!(first, second);
}

#[derive(Debug, Default)]
struct Slot {
    value: String,
}

fn leak_name(name: String) -> &'static str {
    Box::leak(name.into_boxed_str())
}

/// Builds a record type whose fields all share one storage slot; only the
/// descriptors matter for resolution.
fn synthetic_type(bindings: &[Option<(bool, i32)>]) -> &'static RecordType<Slot> {
    let mut builder = RecordType::<Slot>::builder("Slot");
    for (index, binding) in bindings.iter().enumerate() {
        builder = builder.field(
            leak_name(format!("field{index}")),
            |slot: &Slot| &slot.value,
            |slot: &mut Slot| &mut slot.value,
        );
        if let Some((named, order)) = binding {
            let name = if *named {
                format!("Column{index}")
            } else {
                " ".to_string()
            };
            builder = builder.bind(name, *order);
        }
    }
    Box::leak(Box::new(builder.build()))
}

proptest! {
    #[test]
    fn resolved_orders_are_sorted_and_complete(
        bindings in prop::collection::vec(prop::option::of((any::<bool>(), -50i32..50)), 0..12)
    ) {
        let record_type = synthetic_type(&bindings);
        let mapping = FieldMapping::resolve(record_type).unwrap();
        prop_assert_eq!(mapping.len(), bindings.len());

        let keys: Vec<(i32, usize)> = mapping
            .iter()
            .map(|entry| (entry.order(), entry.field().index()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(&keys, &sorted);

        for entry in &mapping {
            let index = entry.field().index();
            match bindings[index] {
                Some((true, order)) => {
                    prop_assert_eq!(entry.external_name(), format!("Column{index}"));
                    prop_assert_eq!(entry.order(), order);
                }
                Some((false, order)) => {
                    prop_assert_eq!(entry.external_name(), entry.declared_name());
                    prop_assert_eq!(entry.order(), order);
                }
                None => {
                    prop_assert_eq!(entry.external_name(), entry.declared_name());
                    prop_assert_eq!(entry.order(), index as i32);
                }
            }
        }
    }
}
