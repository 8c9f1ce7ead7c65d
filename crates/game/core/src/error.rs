//! Error classification shared by every rules-core error.
//!
//! Each rejection type lives next to the rule it reports on:
//! [`GateFailure`](crate::gate::GateFailure) for unmet requirements,
//! [`CommandError`](crate::engine::CommandError) for engine commands,
//! [`CatalogError`](crate::env::CatalogError) for content validation and
//! [`SnapshotError`](crate::character::SnapshotError) for restores. A rejected command
//! never mutates the character it was aimed at.

/// How a caller should react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A gate is not met yet; the same command may succeed once the character changes.
    ///
    /// Examples: too few skill points, level too low
    Recoverable,

    /// The request itself is wrong and will keep failing as-is.
    ///
    /// Examples: unknown skill id, forbidden race, snapshot from another version
    Validation,

    /// Content is inconsistent; no engine can be built from it.
    ///
    /// Examples: prerequisite cycle, duplicate definition id
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Implemented by every `thiserror` enum in the crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, for logs and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
