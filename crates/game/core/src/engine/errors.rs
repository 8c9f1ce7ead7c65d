//! Error types for engine commands.

use crate::error::{ErrorSeverity, GameError};
use crate::gate::GateFailure;

/// Why an upgrade, perk purchase or equip was rejected. State is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The id is not in the catalog; the action is unavailable.
    #[error("unknown {kind} '{id}'")]
    UnknownDefinition { kind: &'static str, id: String },

    #[error(transparent)]
    Gate(#[from] GateFailure),
}

impl CommandError {
    pub(crate) fn unknown(kind: &'static str, id: &str) -> Self {
        Self::UnknownDefinition {
            kind,
            id: id.to_owned(),
        }
    }
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownDefinition { .. } => ErrorSeverity::Validation,
            Self::Gate(gate) => gate.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownDefinition { .. } => "COMMAND_UNKNOWN_DEFINITION",
            Self::Gate(gate) => gate.error_code(),
        }
    }
}
