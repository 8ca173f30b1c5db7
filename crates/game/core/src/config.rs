use std::collections::BTreeMap;

use crate::env::{EquipmentId, OptionId};

/// Player-supplied selection of options and equipment.
///
/// The configuration is total over every known identifier: an option or
/// equipment without an entry reads as disabled / inactive with no upgrades.
/// Values are never validated beyond clamping upgrade levels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Configuration {
    pub options: BTreeMap<OptionId, bool>,
    pub equipped: BTreeMap<EquipmentId, EquipmentState>,
}

impl Configuration {
    /// Everything disabled and unequipped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables an option (builder pattern).
    #[must_use]
    pub fn with_option(mut self, id: OptionId, enabled: bool) -> Self {
        self.set_option(id, enabled);
        self
    }

    /// Sets the state of one equipment slot (builder pattern).
    #[must_use]
    pub fn with_equipment(mut self, id: EquipmentId, state: EquipmentState) -> Self {
        self.set_equipment(id, state);
        self
    }

    pub fn set_option(&mut self, id: OptionId, enabled: bool) {
        self.options.insert(id, enabled);
    }

    pub fn set_equipment(&mut self, id: EquipmentId, state: EquipmentState) {
        self.equipped.insert(id, state);
    }

    pub fn is_option_enabled(&self, id: OptionId) -> bool {
        self.options.get(&id).copied().unwrap_or(false)
    }

    pub fn equipment(&self, id: EquipmentId) -> EquipmentState {
        self.equipped.get(&id).copied().unwrap_or_default()
    }
}

/// Equip flag and upgrade count of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EquipmentState {
    pub active: bool,
    /// Raw upgrade count as entered; read through [`Self::upgrade_level`].
    pub upgrades: i32,
}

impl EquipmentState {
    /// Highest upgrade level that still adds to the base value.
    pub const MAX_UPGRADES: i32 = 10;

    /// Active with the given upgrade count.
    pub const fn active(upgrades: i32) -> Self {
        Self {
            active: true,
            upgrades,
        }
    }

    /// Not equipped. Upgrades are kept but have no effect.
    pub const fn inactive(upgrades: i32) -> Self {
        Self {
            active: false,
            upgrades,
        }
    }

    /// Upgrade count clamped to `[0, MAX_UPGRADES]`.
    pub const fn upgrade_level(&self) -> i32 {
        if self.upgrades < 0 {
            0
        } else if self.upgrades > Self::MAX_UPGRADES {
            Self::MAX_UPGRADES
        } else {
            self.upgrades
        }
    }
}
