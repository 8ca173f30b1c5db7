//! Structural arithmetic over records.
//!
//! Operands are combined pairwise, left to right:
//!
//! 1. scalar ∘ scalar → `op(left, right)`
//! 2. scalar ∘ record → the scalar is broadcast onto every leaf of the record
//! 3. record ∘ record → keys are merged; a key missing on one side is treated
//!    as the operation's identity
//!
//! With a commutative operation and its identity element (`+`/0, `×`/1) the
//! result does not depend on how the operands are grouped.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use super::Record;

/// A commutative binary operation on scalars with an identity element.
pub trait Operation {
    /// Value `e` such that `apply(x, e) == x`.
    const IDENTITY: f64;

    fn apply(left: f64, right: f64) -> f64;
}

/// Addition, identity 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl Operation for Sum {
    const IDENTITY: f64 = 0.0;

    fn apply(left: f64, right: f64) -> f64 {
        left + right
    }
}

/// Multiplication, identity 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Product;

impl Operation for Product {
    const IDENTITY: f64 = 1.0;

    fn apply(left: f64, right: f64) -> f64 {
        left * right
    }
}

/// Combines `first` with every operand in `rest` using `op`.
///
/// `identity` must be the identity element of `op`; it stands in for keys
/// that only the left operand carries. A single operand is returned as is.
pub fn combine<K, F>(
    op: F,
    identity: f64,
    first: Record<K>,
    rest: impl IntoIterator<Item = Record<K>>,
) -> Record<K>
where
    K: Ord + Clone,
    F: Fn(f64, f64) -> f64,
{
    rest.into_iter()
        .fold(first, |left, right| combine_pair(&op, identity, left, right))
}

/// [`combine`] specialized to an [`Operation`].
pub fn combine_with<O, K>(first: Record<K>, rest: impl IntoIterator<Item = Record<K>>) -> Record<K>
where
    O: Operation,
    K: Ord + Clone,
{
    combine(O::apply, O::IDENTITY, first, rest)
}

/// Adds records structurally (missing keys count as 0).
pub fn add_records<K>(first: Record<K>, rest: impl IntoIterator<Item = Record<K>>) -> Record<K>
where
    K: Ord + Clone,
{
    combine_with::<Sum, K>(first, rest)
}

/// Multiplies records structurally (missing keys count as 1).
pub fn multiply_records<K>(first: Record<K>, rest: impl IntoIterator<Item = Record<K>>) -> Record<K>
where
    K: Ord + Clone,
{
    combine_with::<Product, K>(first, rest)
}

fn combine_pair<K, F>(op: &F, identity: f64, left: Record<K>, right: Record<K>) -> Record<K>
where
    K: Ord + Clone,
    F: Fn(f64, f64) -> f64,
{
    match (left, right) {
        (Record::Scalar(left), Record::Scalar(right)) => Record::Scalar(op(left, right)),
        // The record side becomes the base of the result.
        (Record::Scalar(scalar), Record::Fields(fields))
        | (Record::Fields(fields), Record::Scalar(scalar)) => {
            broadcast(op, identity, &fields, scalar)
        }
        (Record::Fields(left), Record::Fields(right)) => merge(op, identity, left, &right),
    }
}

fn broadcast<K, F>(op: &F, identity: f64, fields: &BTreeMap<K, Record<K>>, scalar: f64) -> Record<K>
where
    K: Ord + Clone,
    F: Fn(f64, f64) -> f64,
{
    let result = fields
        .iter()
        .map(|(key, child)| {
            let combined = combine_pair(op, identity, child.clone(), Record::Scalar(scalar));
            (key.clone(), combined)
        })
        .collect();

    Record::Fields(Arc::new(result))
}

fn merge<K, F>(
    op: &F,
    identity: f64,
    left: Arc<BTreeMap<K, Record<K>>>,
    right: &BTreeMap<K, Record<K>>,
) -> Record<K>
where
    K: Ord + Clone,
    F: Fn(f64, f64) -> f64,
{
    let mut result = Arc::unwrap_or_clone(left);

    for (key, child) in result.iter_mut() {
        if !right.contains_key(key) {
            let own = std::mem::replace(child, Record::Scalar(identity));
            *child = combine_pair(op, identity, own, Record::Scalar(identity));
        }
    }

    for (key, child) in right {
        match result.entry(key.clone()) {
            Entry::Occupied(mut slot) => {
                let own = std::mem::replace(slot.get_mut(), Record::Scalar(identity));
                *slot.get_mut() = combine_pair(op, identity, own, child.clone());
            }
            // Right-only keys carry over unchanged: combining with the
            // identity would leave them as they are.
            Entry::Vacant(slot) => {
                slot.insert(child.clone());
            }
        }
    }

    Record::Fields(Arc::new(result))
}
