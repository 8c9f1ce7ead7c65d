//! Catalog validation errors.
//!
//! A catalog that fails validation cannot be used: every variant is fatal and is
//! reported once, when the catalog is built.

use crate::error::{ErrorSeverity, GameError};
use crate::race::Race;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two definitions of the same kind share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// A definition was registered under the wrong kind (e.g., a perk in the skill list).
    #[error("'{id}' is registered as a {expected} but declares another kind")]
    WrongKind { id: String, expected: &'static str },

    #[error("'{id}' has max rank 0")]
    ZeroMaxRank { id: String },

    /// Perks are single-rank.
    #[error("perk '{id}' has max rank {max_rank} (perks have exactly one rank)")]
    MultiRankPerk { id: String, max_rank: u32 },

    #[error("'{id}' requires unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite { id: String, prerequisite: String },

    /// Prerequisites must be of the same kind as the definition requiring them.
    #[error("'{id}' requires '{prerequisite}' of a different kind")]
    CrossKindPrerequisite { id: String, prerequisite: String },

    /// Includes self-reference.
    #[error("prerequisite cycle through '{id}'")]
    PrerequisiteCycle { id: String },

    #[error("race {race} grants unknown starting perk '{perk}'")]
    UnknownStartingPerk { race: Race, perk: String },

    #[error("enemy '{enemy}' uses unknown attack '{attack}'")]
    UnknownAttack { enemy: String, attack: String },

    #[error("enemy '{enemy}' has {count} moves (max {max})")]
    TooManyMoves {
        enemy: String,
        count: usize,
        max: usize,
    },

    #[error("attack '{attack}' has a probability outside [0, 1]")]
    InvalidProbability { attack: String },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
            WrongKind { .. } => "CATALOG_WRONG_KIND",
            ZeroMaxRank { .. } => "CATALOG_ZERO_MAX_RANK",
            MultiRankPerk { .. } => "CATALOG_MULTI_RANK_PERK",
            UnknownPrerequisite { .. } => "CATALOG_UNKNOWN_PREREQUISITE",
            CrossKindPrerequisite { .. } => "CATALOG_CROSS_KIND_PREREQUISITE",
            PrerequisiteCycle { .. } => "CATALOG_PREREQUISITE_CYCLE",
            UnknownStartingPerk { .. } => "CATALOG_UNKNOWN_STARTING_PERK",
            UnknownAttack { .. } => "CATALOG_UNKNOWN_ATTACK",
            TooManyMoves { .. } => "CATALOG_TOO_MANY_MOVES",
            InvalidProbability { .. } => "CATALOG_INVALID_PROBABILITY",
        }
    }
}
