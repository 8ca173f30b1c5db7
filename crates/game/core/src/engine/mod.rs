//! Memoized dependency-graph evaluation.
//!
//! [`BonusEvaluator`] walks the catalog's equipment graph depth-first for one
//! [`Configuration`] and produces the attributed [`Bonus`]. For each active
//! item:
//!
//! ```text
//! dependencies = Σ equipment_bonus(dep) + Σ option_bonus(opt)
//! base         = 1 + 0.1 × clamp(upgrades, 0, 10)
//! item         = bonus_factor × (own(base) + upgrade_marker + dependencies)
//! ```
//!
//! Results are memoized per item within one call, so shared dependencies are
//! computed once. The memo table belongs to a single call and is dropped when
//! it returns: concurrent evaluations never see each other's state.

mod errors;

pub use errors::EvaluateError;

use std::collections::BTreeMap;

use crate::bonus::{Bonus, BonusKey, add_bonuses, multiply_bonuses};
use crate::config::Configuration;
use crate::env::{Catalog, EquipmentDefinition, EquipmentId, OptionId};

/// Base-value increase per upgrade level.
pub const UPGRADE_STEP: f64 = 0.1;

/// Value recorded in `upgrade_contribution` for an active item.
///
/// It marks that the item holds an upgrade slot and does not scale with the
/// upgrade level.
pub const UPGRADE_MARKER: f64 = 0.1;

/// Evaluates configurations against a catalog.
#[derive(Clone, Copy, Debug)]
pub struct BonusEvaluator<'a> {
    catalog: &'a Catalog,
}

impl BonusEvaluator<'static> {
    /// Evaluator over [`Catalog::standard`].
    pub fn standard() -> Self {
        Self::new(Catalog::standard())
    }
}

impl<'a> BonusEvaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Sums the bonuses of the catalog's terminal equipment and standalone
    /// options.
    pub fn evaluate(&self, config: &Configuration) -> Result<Bonus, EvaluateError> {
        let mut pass = Evaluation::new(self.catalog, config);

        let mut sources = Vec::new();
        for &id in self.catalog.terminals() {
            sources.push(pass.equipment_bonus(id)?);
        }
        for &id in self.catalog.standalone_options() {
            sources.push(pass.option_bonus(id)?);
        }

        let bonus = add_bonuses(Bonus::empty(), sources);
        tracing::debug!(
            "evaluated trade bonus: total {} ({} equipment visited)",
            bonus.total(),
            pass.memo.len()
        );

        Ok(bonus)
    }

    /// Bonus of a single item including everything it depends on.
    pub fn equipment_bonus(
        &self,
        config: &Configuration,
        id: EquipmentId,
    ) -> Result<Bonus, EvaluateError> {
        Evaluation::new(self.catalog, config).equipment_bonus(id)
    }

    /// Bonus of a single option: its intrinsic value if enabled, else zero.
    pub fn option_bonus(&self, config: &Configuration, id: OptionId) -> Result<Bonus, EvaluateError> {
        Evaluation::new(self.catalog, config).option_bonus(id)
    }
}

/// Evaluates a configuration against the standard catalog.
pub fn calculate_bonus(config: &Configuration) -> Result<Bonus, EvaluateError> {
    BonusEvaluator::standard().evaluate(config)
}

enum Visit {
    /// On the current depth-first path.
    InProgress,
    Done(Bonus),
}

/// State of one evaluation call.
struct Evaluation<'a> {
    catalog: &'a Catalog,
    config: &'a Configuration,
    memo: BTreeMap<EquipmentId, Visit>,
    path: Vec<EquipmentId>,
}

impl<'a> Evaluation<'a> {
    fn new(catalog: &'a Catalog, config: &'a Configuration) -> Self {
        Self {
            catalog,
            config,
            memo: BTreeMap::new(),
            path: Vec::new(),
        }
    }

    fn option_bonus(&self, id: OptionId) -> Result<Bonus, EvaluateError> {
        if !self.config.is_option_enabled(id) {
            return Ok(Bonus::empty());
        }

        let definition = self
            .catalog
            .option(id)
            .ok_or(EvaluateError::UnknownOption(id))?;

        Ok(Bonus::empty()
            .with(&BonusKey::option_path(id), definition.bonus)
            .with(&BonusKey::TOTAL, definition.bonus))
    }

    fn equipment_bonus(&mut self, id: EquipmentId) -> Result<Bonus, EvaluateError> {
        match self.memo.get(&id) {
            Some(Visit::Done(bonus)) => return Ok(bonus.clone()),
            Some(Visit::InProgress) => {
                let start = self.path.iter().position(|&on_path| on_path == id);
                let mut cycle = self.path[start.unwrap_or(0)..].to_vec();
                cycle.push(id);
                return Err(EvaluateError::CyclicDependency { cycle });
            }
            None => {}
        }

        let state = self.config.equipment(id);
        if !state.active {
            self.memo.insert(id, Visit::Done(Bonus::empty()));
            return Ok(Bonus::empty());
        }

        let definition = *self
            .catalog
            .equipment(id)
            .ok_or(EvaluateError::UnknownEquipment(id))?;

        self.memo.insert(id, Visit::InProgress);
        self.path.push(id);
        let dependencies = self.dependencies_boost(&definition);
        self.path.pop();
        let dependencies = dependencies?;

        let base_value = 1.0 + UPGRADE_STEP * f64::from(state.upgrade_level());
        let own = Bonus::empty()
            .with(&BonusKey::equipment_path(id), base_value)
            .with(&BonusKey::TOTAL, base_value);
        let upgrade = Bonus::empty().with(&BonusKey::upgrade_path(id), UPGRADE_MARKER);

        let bonus = multiply_bonuses(add_bonuses(own, [upgrade, dependencies]), [definition.bonus]);

        tracing::trace!(
            "equipment {} (upgrades {}): total {}",
            id,
            state.upgrade_level(),
            bonus.total()
        );

        self.memo.insert(id, Visit::Done(bonus.clone()));
        Ok(bonus)
    }

    fn dependencies_boost(&mut self, definition: &EquipmentDefinition) -> Result<Bonus, EvaluateError> {
        let mut boost = Bonus::empty();

        for &dependency in definition.equipment_dependencies {
            boost = add_bonuses(boost, [self.equipment_bonus(dependency)?]);
        }
        for &dependency in definition.option_dependencies {
            boost = add_bonuses(boost, [self.option_bonus(dependency)?]);
        }

        Ok(boost)
    }
}
