//! Catalog validation errors.

use crate::env::{EquipmentId, OptionId};
use crate::error::{CalculatorError, ErrorSeverity};

/// Errors raised while building a [`Catalog`](crate::env::Catalog) from tables.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Option is defined more than once.
    #[error("option '{0}' is defined more than once")]
    DuplicateOption(OptionId),

    /// Equipment is defined more than once.
    #[error("equipment '{0}' is defined more than once")]
    DuplicateEquipment(EquipmentId),

    /// Bonus value is NaN or infinite.
    #[error("bonus of '{name}' is not finite ({value})")]
    NonFiniteBonus {
        /// Identifier of the offending definition.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl CalculatorError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateOption(_) => "CATALOG_DUPLICATE_OPTION",
            DuplicateEquipment(_) => "CATALOG_DUPLICATE_EQUIPMENT",
            NonFiniteBonus { .. } => "CATALOG_NON_FINITE_BONUS",
        }
    }
}
