//! Error types for bonus evaluation.

use crate::env::{EquipmentId, OptionId};
use crate::error::{CalculatorError, ErrorSeverity};

/// Errors surfaced while evaluating a configuration against a catalog.
///
/// None of these can occur with the standard catalog; they guard catalogs
/// built from other tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    /// An item was reached again while its own bonus was still being computed.
    #[error("cyclic equipment dependency: {}", render_cycle(cycle))]
    CyclicDependency {
        /// Items on the cycle, starting and ending with the revisited item.
        cycle: Vec<EquipmentId>,
    },

    /// Equipment referenced by the graph has no definition.
    #[error("equipment '{0}' is not defined in the catalog")]
    UnknownEquipment(EquipmentId),

    /// Option referenced by the graph has no definition.
    #[error("option '{0}' is not defined in the catalog")]
    UnknownOption(OptionId),
}

impl CalculatorError for EvaluateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CyclicDependency { .. } => "EVALUATE_CYCLIC_DEPENDENCY",
            Self::UnknownEquipment(_) => "EVALUATE_UNKNOWN_EQUIPMENT",
            Self::UnknownOption(_) => "EVALUATE_UNKNOWN_OPTION",
        }
    }
}

fn render_cycle(cycle: &[EquipmentId]) -> String {
    cycle
        .iter()
        .map(|&id| <&'static str>::from(id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_the_path() {
        let error = EvaluateError::CyclicDependency {
            cycle: vec![
                EquipmentId::PetLeaf,
                EquipmentId::UniqueLeaf,
                EquipmentId::PetLeaf,
            ],
        };

        assert_eq!(
            error.to_string(),
            "cyclic equipment dependency: pet_leaf -> unique_leaf -> pet_leaf"
        );
        assert_eq!(error.error_code(), "EVALUATE_CYCLIC_DEPENDENCY");
        assert!(error.severity().is_internal());
    }
}
