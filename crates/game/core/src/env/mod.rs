//! Static game data consumed by the evaluator.
//!
//! The catalog describes which options and equipment exist, their intrinsic
//! bonuses, and the dependency edges between them. It is fixed data: the
//! evaluator only ever reads it.

mod catalog;
mod error;
mod ids;

pub use catalog::{Catalog, EquipmentDefinition, OptionDefinition};
pub use error::CatalogError;
pub use ids::{EquipmentId, OptionId};
