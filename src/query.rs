//! Pure lookups over a [`Document`]: namespace filtering, modifier access
//! with defaults, ordering and grouping by source anchor.

use core::hash::BuildHasherDefault;
use std::cmp::Ordering;
use std::collections::HashMap;

use seahash::SeaHasher;

use crate::construct::{Document, Statement};
use crate::datatype::{DataType, Value};

pub type OtherHasher = BuildHasherDefault<SeaHasher>;

/// Modifier key read by [`sort_by_order`].
pub const ORDER: &str = "order";

/// Order given to statements without a numeric `order` modifier.
pub const DEFAULT_ORDER: f64 = 999.0;

/// Which anchor of a statement a namespace filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    Source,
    Target,
    #[default]
    Either,
}

/// Statements whose selected anchor namespace equals `namespace` exactly,
/// in document order.
pub fn filter_by_namespace<'d>(doc: &'d Document, namespace: &str, field: Field) -> Vec<&'d Statement> {
    doc.statements()
        .iter()
        .filter(|s| match field {
            Field::Source => s.source().in_namespace(namespace),
            Field::Target => s.target().in_namespace(namespace),
            Field::Either => s.source().in_namespace(namespace) || s.target().in_namespace(namespace),
        })
        .collect()
}

/// Statements whose source anchor is exactly `raw`, in document order.
pub fn by_source<'d>(doc: &'d Document, raw: &str) -> Vec<&'d Statement> {
    doc.statements()
        .iter()
        .filter(|s| s.source().raw() == raw)
        .collect()
}

pub fn get_mod<'s>(statement: &'s Statement, key: &str) -> Option<&'s Value> {
    statement.modifier(key)
}

pub fn get_mod_as<T: DataType>(statement: &Statement, key: &str) -> Option<T> {
    statement.modifier_as(key)
}

/// Present values win even when they are `false` or `0`.
pub fn get_mod_or<T: DataType>(statement: &Statement, key: &str, default: T) -> T {
    statement.modifier_as(key).unwrap_or(default)
}

pub fn order_of(statement: &Statement) -> f64 {
    statement
        .modifier(ORDER)
        .and_then(Value::as_number)
        .unwrap_or(DEFAULT_ORDER)
}

/// Stable ascending sort on the `order` modifier. Statements without a
/// numeric order sort as [`DEFAULT_ORDER`] and keep their relative order.
pub fn sort_by_order<'d>(mut statements: Vec<&'d Statement>) -> Vec<&'d Statement> {
    statements.sort_by(|a, b| {
        order_of(a)
            .partial_cmp(&order_of(b))
            .unwrap_or(Ordering::Equal)
    });
    statements
}

/// Groups statements sharing an identical source anchor. Groups appear in
/// order of first appearance and keep document order internally.
pub fn group_by_source<'d, I>(statements: I) -> Vec<(&'d str, Vec<&'d Statement>)>
where
    I: IntoIterator<Item = &'d Statement>,
{
    let mut index: HashMap<&'d str, usize, OtherHasher> = HashMap::default();
    let mut groups: Vec<(&'d str, Vec<&'d Statement>)> = Vec::new();
    for statement in statements {
        let raw = statement.source().raw();
        let slot = *index.entry(raw).or_insert_with(|| {
            groups.push((raw, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(statement);
    }
    groups
}
