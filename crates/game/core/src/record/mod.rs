//! Nested numeric records.
//!
//! A [`Record`] is either a base scalar or a set of keyed children, each of
//! which is again a record. Children live behind an [`Arc`] so an update can
//! rebuild only the branch it touches and hand the rest over by reference.
//!
//! ```text
//! Fields ─┬─ Total  ─ Scalar
//!         └─ Nested ─ Fields ─┬─ A ─ Scalar
//!                             └─ B ─ Scalar
//! ```
//!
//! Two operations are built on top:
//! - [`set_path`]: immutable deep update with structural sharing
//! - [`combine`]: structural arithmetic with a caller-supplied operation

mod arith;
mod path;

pub use arith::{Operation, Product, Sum, add_records, combine, combine_with, multiply_records};
pub use path::set_path;

use std::collections::BTreeMap;
use std::sync::Arc;

/// A scalar or a keyed tree of scalars.
#[derive(Clone, Debug, PartialEq)]
pub enum Record<K: Ord> {
    /// Base value.
    Scalar(f64),

    /// Keyed children, shared between records that did not modify them.
    Fields(Arc<BTreeMap<K, Record<K>>>),
}

impl<K: Ord> Record<K> {
    /// Creates a scalar record.
    pub const fn scalar(value: f64) -> Self {
        Record::Scalar(value)
    }

    /// Creates a record from `(key, child)` pairs. Later duplicates win.
    pub fn from_fields(fields: impl IntoIterator<Item = (K, Record<K>)>) -> Self {
        Record::Fields(Arc::new(fields.into_iter().collect()))
    }

    /// Returns true if this record is a base scalar.
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Record::Scalar(_))
    }

    /// Returns the scalar value, or `None` for a record with fields.
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Record::Scalar(value) => Some(*value),
            Record::Fields(_) => None,
        }
    }

    /// Returns the children of a record with fields.
    pub fn fields(&self) -> Option<&BTreeMap<K, Record<K>>> {
        match self {
            Record::Scalar(_) => None,
            Record::Fields(fields) => Some(fields.as_ref()),
        }
    }

    /// Looks up a direct child.
    pub fn get(&self, key: &K) -> Option<&Record<K>> {
        self.fields()?.get(key)
    }

    /// Follows `path` from this record. An empty path returns `self`.
    pub fn get_path(&self, path: &[K]) -> Option<&Record<K>> {
        path.iter().try_fold(self, |current, key| current.get(key))
    }

    /// Reads the scalar at `path`, if the path ends on one.
    pub fn scalar_at(&self, path: &[K]) -> Option<f64> {
        self.get_path(path)?.as_scalar()
    }

    /// Visits every scalar leaf together with the path leading to it.
    pub fn for_each_leaf(&self, mut visit: impl FnMut(&[&K], f64)) {
        fn walk<'a, K: Ord>(
            record: &'a Record<K>,
            prefix: &mut Vec<&'a K>,
            visit: &mut dyn FnMut(&[&K], f64),
        ) {
            match record {
                Record::Scalar(value) => visit(prefix, *value),
                Record::Fields(fields) => {
                    for (key, child) in fields.iter() {
                        prefix.push(key);
                        walk(child, prefix, visit);
                        prefix.pop();
                    }
                }
            }
        }

        walk(self, &mut Vec::new(), &mut visit);
    }
}

impl<K: Ord> From<f64> for Record<K> {
    fn from(value: f64) -> Self {
        Record::Scalar(value)
    }
}
