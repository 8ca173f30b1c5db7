//! The bonus record and its arithmetic.
//!
//! A [`Bonus`] is a [`Record`] with a fixed shape:
//!
//! ```text
//! Total
//! Contribution ─┬─ Options  ─ Option(id)     for every OptionId
//!               └─ Equipped ─ Equipment(id)  for every EquipmentId
//! UpgradeContribution ─ Equipment(id)        for every EquipmentId
//! ```
//!
//! Every source (an option, an item's base value, an item's upgrade marker)
//! is expressed as a full `Bonus` with zeros elsewhere, so sources merge with
//! [`add_bonuses`] and scale with [`multiply_bonuses`] without per-field code.
//!
//! `Total` is authoritative. The per-source entries are attribution only:
//! they go through the same nested multiplications as `Total`, so they do not
//! generally sum to it.

mod report;

pub use report::{BonusReport, BonusSource, ContributionReport};

use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::env::{EquipmentId, OptionId};
use crate::record::{Record, add_records, multiply_records, set_path};

/// Field names of the bonus record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BonusKey {
    Total,
    Contribution,
    Options,
    Equipped,
    UpgradeContribution,
    Option(OptionId),
    Equipment(EquipmentId),
}

impl BonusKey {
    pub const TOTAL: [BonusKey; 1] = [BonusKey::Total];

    /// Path of `contribution.options[id]`.
    pub const fn option_path(id: OptionId) -> [BonusKey; 3] {
        [BonusKey::Contribution, BonusKey::Options, BonusKey::Option(id)]
    }

    /// Path of `contribution.equipped[id]`.
    pub const fn equipment_path(id: EquipmentId) -> [BonusKey; 3] {
        [BonusKey::Contribution, BonusKey::Equipped, BonusKey::Equipment(id)]
    }

    /// Path of `upgrade_contribution[id]`.
    pub const fn upgrade_path(id: EquipmentId) -> [BonusKey; 2] {
        [BonusKey::UpgradeContribution, BonusKey::Equipment(id)]
    }
}

static EMPTY: LazyLock<Bonus> = LazyLock::new(|| {
    let zero = || Record::scalar(0.0);
    let options = Record::from_fields(OptionId::iter().map(|id| (BonusKey::Option(id), zero())));
    let equipped =
        Record::from_fields(EquipmentId::iter().map(|id| (BonusKey::Equipment(id), zero())));
    let upgrades =
        Record::from_fields(EquipmentId::iter().map(|id| (BonusKey::Equipment(id), zero())));

    Bonus(Record::from_fields([
        (BonusKey::Total, zero()),
        (
            BonusKey::Contribution,
            Record::from_fields([(BonusKey::Options, options), (BonusKey::Equipped, equipped)]),
        ),
        (BonusKey::UpgradeContribution, upgrades),
    ]))
});

/// Total bonus plus per-source attribution.
#[derive(Clone, Debug, PartialEq)]
pub struct Bonus(Record<BonusKey>);

impl Bonus {
    /// The all-zero bonus, identity of [`add_bonuses`].
    ///
    /// Clones share the same underlying tree.
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    pub fn total(&self) -> f64 {
        self.read(&BonusKey::TOTAL)
    }

    pub fn option_contribution(&self, id: OptionId) -> f64 {
        self.read(&BonusKey::option_path(id))
    }

    pub fn equipment_contribution(&self, id: EquipmentId) -> f64 {
        self.read(&BonusKey::equipment_path(id))
    }

    pub fn upgrade_contribution(&self, id: EquipmentId) -> f64 {
        self.read(&BonusKey::upgrade_path(id))
    }

    /// Returns a copy with `value` stored at `path`, sharing every other
    /// subtree with `self`.
    #[must_use]
    pub fn with(&self, path: &[BonusKey], value: f64) -> Self {
        Bonus(set_path(&self.0, path, Record::scalar(value)))
    }

    /// True if every leaf is zero.
    pub fn is_zero(&self) -> bool {
        let mut zero = true;
        self.0.for_each_leaf(|_, value| zero &= value == 0.0);
        zero
    }

    pub fn as_record(&self) -> &Record<BonusKey> {
        &self.0
    }

    pub fn into_record(self) -> Record<BonusKey> {
        self.0
    }

    /// Plain-data view for presentation.
    pub fn report(&self) -> BonusReport {
        BonusReport::from_bonus(self)
    }

    fn read(&self, path: &[BonusKey]) -> f64 {
        self.0.scalar_at(path).unwrap_or(0.0)
    }
}

impl Default for Bonus {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bonus> for Record<BonusKey> {
    fn from(bonus: Bonus) -> Self {
        bonus.0
    }
}

/// Adds bonuses field by field. Scalars are added onto every field.
///
/// The first operand fixes the shape, so the result is always a `Bonus`.
pub fn add_bonuses<I>(first: Bonus, rest: I) -> Bonus
where
    I: IntoIterator,
    I::Item: Into<Record<BonusKey>>,
{
    Bonus(add_records(first.0, rest.into_iter().map(Into::into)))
}

/// Multiplies bonuses field by field. A scalar scales every field.
pub fn multiply_bonuses<I>(first: Bonus, rest: I) -> Bonus
where
    I: IntoIterator,
    I::Item: Into<Record<BonusKey>>,
{
    Bonus(multiply_records(first.0, rest.into_iter().map(Into::into)))
}
