/// Unlockable options that add a flat bonus when enabled.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OptionId {
    /// Trader's Crunch challenge reward
    TradersCrunchChallenge,
    /// Pet trade scroll
    PetScroll,
    /// Unique trade scroll
    UniqueScroll,
    /// Better pets upgrade
    BetterPets,
    /// Better uniques upgrade
    BetterUniques,
}

/// Equippable items whose bonus multiplies everything they depend on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentId {
    Butterflyo,
    Penguino,
    WaterLeaf,
    UniqueLeaf,
    PetLeaf,
}
