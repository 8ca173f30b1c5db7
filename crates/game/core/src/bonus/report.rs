//! Plain-data view of a [`Bonus`] for front ends.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use strum::IntoEnumIterator;

use crate::bonus::Bonus;
use crate::env::{EquipmentId, OptionId};

/// A source that can carry attribution in a bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case", tag = "kind", content = "id")
)]
pub enum BonusSource {
    Option(OptionId),
    Equipment(EquipmentId),
}

impl fmt::Display for BonusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusSource::Option(id) => write!(f, "option:{id}"),
            BonusSource::Equipment(id) => write!(f, "equipment:{id}"),
        }
    }
}

/// Per-source contributions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContributionReport {
    pub options: BTreeMap<OptionId, f64>,
    pub equipped: BTreeMap<EquipmentId, f64>,
}

/// Flattened copy of every field of a [`Bonus`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusReport {
    pub total: f64,
    pub contribution: ContributionReport,
    pub upgrade_contribution: BTreeMap<EquipmentId, f64>,
}

impl BonusReport {
    pub fn from_bonus(bonus: &Bonus) -> Self {
        Self {
            total: bonus.total(),
            contribution: ContributionReport {
                options: OptionId::iter()
                    .map(|id| (id, bonus.option_contribution(id)))
                    .collect(),
                equipped: EquipmentId::iter()
                    .map(|id| (id, bonus.equipment_contribution(id)))
                    .collect(),
            },
            upgrade_contribution: EquipmentId::iter()
                .map(|id| (id, bonus.upgrade_contribution(id)))
                .collect(),
        }
    }

    /// Every option and equipment contribution, largest first.
    ///
    /// Ties keep source order (options before equipment, then declaration
    /// order).
    pub fn ranked_sources(&self) -> Vec<(BonusSource, f64)> {
        let mut sources: Vec<(BonusSource, f64)> = self
            .contribution
            .options
            .iter()
            .map(|(id, value)| (BonusSource::Option(*id), *value))
            .chain(
                self.contribution
                    .equipped
                    .iter()
                    .map(|(id, value)| (BonusSource::Equipment(*id), *value)),
            )
            .collect();

        // Stable sort keeps source order among equal values.
        sources.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        sources
    }
}
