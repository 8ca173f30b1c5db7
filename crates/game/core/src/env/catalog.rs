use std::collections::BTreeSet;

use crate::env::{CatalogError, EquipmentId, OptionId};

/// Static data for one unlockable option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionDefinition {
    pub id: OptionId,
    /// Flat bonus added when the option is enabled.
    pub bonus: f64,
}

impl OptionDefinition {
    pub const fn new(id: OptionId, bonus: f64) -> Self {
        Self { id, bonus }
    }
}

/// Static data for one equippable item.
///
/// # Design: Dependency Edges
///
/// The contributions of `equipment_dependencies` and `option_dependencies`
/// are summed with the item's own base value, then the sum is scaled by
/// `bonus`. Edges must form a DAG; the evaluator rejects cycles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquipmentDefinition {
    pub id: EquipmentId,
    /// Multiplier on a 0–1 scale.
    pub bonus: f64,
    pub equipment_dependencies: &'static [EquipmentId],
    pub option_dependencies: &'static [OptionId],
}

impl EquipmentDefinition {
    /// Creates a definition without dependencies.
    pub const fn new(id: EquipmentId, bonus: f64) -> Self {
        Self {
            id,
            bonus,
            equipment_dependencies: &[],
            option_dependencies: &[],
        }
    }

    /// Sets the equipment this item depends on (builder pattern).
    #[must_use]
    pub const fn with_equipment(mut self, dependencies: &'static [EquipmentId]) -> Self {
        self.equipment_dependencies = dependencies;
        self
    }

    /// Sets the options this item depends on (builder pattern).
    #[must_use]
    pub const fn with_options(mut self, dependencies: &'static [OptionId]) -> Self {
        self.option_dependencies = dependencies;
        self
    }
}

/// The option/equipment graph together with the sources summed into the
/// final result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Catalog {
    options: &'static [OptionDefinition],
    equipment: &'static [EquipmentDefinition],
    terminals: &'static [EquipmentId],
    standalone: &'static [OptionId],
}

const STANDARD_OPTIONS: &[OptionDefinition] = &[
    OptionDefinition::new(OptionId::TradersCrunchChallenge, 0.15),
    OptionDefinition::new(OptionId::PetScroll, 0.2),
    OptionDefinition::new(OptionId::UniqueScroll, 0.2),
    OptionDefinition::new(OptionId::BetterPets, 0.3),
    OptionDefinition::new(OptionId::BetterUniques, 0.3),
];

const STANDARD_EQUIPMENT: &[EquipmentDefinition] = &[
    EquipmentDefinition::new(EquipmentId::Butterflyo, 0.2),
    EquipmentDefinition::new(EquipmentId::Penguino, 0.25)
        .with_equipment(&[EquipmentId::PetLeaf, EquipmentId::Butterflyo])
        .with_options(&[OptionId::BetterPets, OptionId::PetScroll]),
    EquipmentDefinition::new(EquipmentId::WaterLeaf, 0.1)
        .with_equipment(&[EquipmentId::UniqueLeaf, EquipmentId::Butterflyo])
        .with_options(&[OptionId::BetterUniques, OptionId::UniqueScroll]),
    EquipmentDefinition::new(EquipmentId::UniqueLeaf, 0.25)
        .with_equipment(&[EquipmentId::Butterflyo]),
    EquipmentDefinition::new(EquipmentId::PetLeaf, 0.2)
        .with_equipment(&[EquipmentId::Butterflyo, EquipmentId::UniqueLeaf]),
];

static STANDARD: Catalog = Catalog {
    options: STANDARD_OPTIONS,
    equipment: STANDARD_EQUIPMENT,
    terminals: &[EquipmentId::WaterLeaf, EquipmentId::Penguino],
    standalone: &[OptionId::TradersCrunchChallenge],
};

impl Catalog {
    /// Builds a catalog from static tables.
    ///
    /// `terminals` and `standalone` name the equipment and options whose
    /// bonuses are summed into the final result. Definitions may be omitted;
    /// reaching an undefined id during evaluation is reported then.
    pub fn new(
        options: &'static [OptionDefinition],
        equipment: &'static [EquipmentDefinition],
        terminals: &'static [EquipmentId],
        standalone: &'static [OptionId],
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            options,
            equipment,
            terminals,
            standalone,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The trade delivery catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    pub fn option(&self, id: OptionId) -> Option<&OptionDefinition> {
        self.options.iter().find(|definition| definition.id == id)
    }

    pub fn equipment(&self, id: EquipmentId) -> Option<&EquipmentDefinition> {
        self.equipment.iter().find(|definition| definition.id == id)
    }

    pub fn options(&self) -> &'static [OptionDefinition] {
        self.options
    }

    pub fn equipment_definitions(&self) -> &'static [EquipmentDefinition] {
        self.equipment
    }

    /// Equipment summed into the final result.
    pub fn terminals(&self) -> &'static [EquipmentId] {
        self.terminals
    }

    /// Options summed into the final result directly.
    pub fn standalone_options(&self) -> &'static [OptionId] {
        self.standalone
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_options = BTreeSet::new();
        for definition in self.options {
            if !seen_options.insert(definition.id) {
                return Err(CatalogError::DuplicateOption(definition.id));
            }
            ensure_finite(definition.id.into(), definition.bonus)?;
        }

        let mut seen_equipment = BTreeSet::new();
        for definition in self.equipment {
            if !seen_equipment.insert(definition.id) {
                return Err(CatalogError::DuplicateEquipment(definition.id));
            }
            ensure_finite(definition.id.into(), definition.bonus)?;
        }

        Ok(())
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::NonFiniteBonus { name, value })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn standard_catalog_is_valid_and_complete() {
        let standard = Catalog::standard();
        assert!(standard.validate().is_ok());

        for id in OptionId::iter() {
            assert!(standard.option(id).is_some(), "missing option {id}");
        }
        for id in EquipmentId::iter() {
            assert!(standard.equipment(id).is_some(), "missing equipment {id}");
        }
    }

    #[test]
    fn standard_catalog_values() {
        let standard = Catalog::standard();

        let penguino = standard.equipment(EquipmentId::Penguino).unwrap();
        assert_eq!(penguino.bonus, 0.25);
        assert_eq!(
            penguino.equipment_dependencies,
            &[EquipmentId::PetLeaf, EquipmentId::Butterflyo]
        );
        assert_eq!(
            penguino.option_dependencies,
            &[OptionId::BetterPets, OptionId::PetScroll]
        );

        let crunch = standard.option(OptionId::TradersCrunchChallenge).unwrap();
        assert_eq!(crunch.bonus, 0.15);

        assert_eq!(
            standard.terminals(),
            &[EquipmentId::WaterLeaf, EquipmentId::Penguino]
        );
        assert_eq!(
            standard.standalone_options(),
            &[OptionId::TradersCrunchChallenge]
        );
    }

    #[test]
    fn rejects_duplicate_definitions() {
        const OPTIONS: &[OptionDefinition] = &[
            OptionDefinition::new(OptionId::PetScroll, 0.2),
            OptionDefinition::new(OptionId::PetScroll, 0.3),
        ];

        let result = Catalog::new(OPTIONS, &[], &[], &[]);
        assert_eq!(result, Err(CatalogError::DuplicateOption(OptionId::PetScroll)));

        const EQUIPMENT: &[EquipmentDefinition] = &[
            EquipmentDefinition::new(EquipmentId::Butterflyo, 0.2),
            EquipmentDefinition::new(EquipmentId::Butterflyo, 0.2),
        ];

        let result = Catalog::new(&[], EQUIPMENT, &[], &[]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateEquipment(EquipmentId::Butterflyo))
        );
    }

    #[test]
    fn rejects_non_finite_bonus() {
        const EQUIPMENT: &[EquipmentDefinition] =
            &[EquipmentDefinition::new(EquipmentId::PetLeaf, f64::INFINITY)];

        let error = Catalog::new(&[], EQUIPMENT, &[], &[]).unwrap_err();
        assert_eq!(
            error,
            CatalogError::NonFiniteBonus {
                name: "pet_leaf",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn partial_catalogs_are_allowed() {
        const EQUIPMENT: &[EquipmentDefinition] =
            &[EquipmentDefinition::new(EquipmentId::Butterflyo, 0.5)];

        let catalog = Catalog::new(&[], EQUIPMENT, &[EquipmentId::Butterflyo], &[]).unwrap();
        assert!(catalog.equipment(EquipmentId::Penguino).is_none());
        assert_eq!(catalog.terminals(), &[EquipmentId::Butterflyo]);
    }
}
