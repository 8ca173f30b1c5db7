//! Deterministic bonus calculation for trade deliveries.
//!
//! `trade-core` turns a player [`Configuration`] (unlocked options, equipped
//! items and their upgrade levels) into a fully attributed [`Bonus`]. The
//! pieces, leaves first:
//!
//! - [`record`]: nested numeric records with structural arithmetic and an
//!   immutable path updater that shares untouched subtrees.
//! - [`bonus`]: the fixed `Bonus` shape and its add/multiply wrappers.
//! - [`env`]: the static catalog of options and equipment.
//! - [`engine`]: the memoized dependency-graph evaluator.
//!
//! Everything here is pure: no I/O, no shared mutable state.
pub mod bonus;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod record;

pub use bonus::{Bonus, BonusKey, BonusReport, BonusSource, add_bonuses, multiply_bonuses};
pub use config::{Configuration, EquipmentState};
pub use engine::{BonusEvaluator, EvaluateError, calculate_bonus};
pub use env::{
    Catalog, CatalogError, EquipmentDefinition, EquipmentId, OptionDefinition, OptionId,
};
pub use error::{CalculatorError, ErrorSeverity};
pub use record::{Operation, Product, Record, Sum, add_records, combine, multiply_records, set_path};
