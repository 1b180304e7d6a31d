//! Error types for dexopt-core.
//!
//! Every variant is a caller-contract violation detected while decoding raw
//! wire values or validating a request. Scheduler-side failures are not
//! errors: they travel as [`crate::schedule::ScheduleStatus`] values.

use crate::flags::FlagContext;

/// Unified error type for all dexopt-core validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DexoptError {
    /// Raw flag input carries bits the operation does not recognize.
    #[error("Unknown flag bits 0x{bits:x} for {context} flags")]
    UnknownFlagBits { context: FlagContext, bits: u32 },

    /// `FOR_SINGLE_SPLIT` combined with a disallowed facet, or without
    /// `FOR_PRIMARY_DEX`.
    #[error("Invalid single-split flags: {0}")]
    InvalidSingleSplit(String),

    /// A split name was given but `FOR_SINGLE_SPLIT` is not set.
    #[error("Split name \"{0}\" requires FOR_SINGLE_SPLIT")]
    SplitNameWithoutSingleSplit(String),

    /// Raw priority integer outside the known classes.
    #[error("Unknown priority class: {0}")]
    UnknownPriority(i32),

    /// `PriorityClass::None` observed on a live request.
    #[error("Priority class NONE is not valid on a live request")]
    NonePriority,

    /// Raw schedule status integer outside the known outcomes.
    #[error("Unknown schedule status: {0}")]
    UnknownScheduleStatus(i32),

    /// A reason string with no entry in the reason table, where a
    /// fallback does not apply.
    #[error("Unknown reason: \"{0}\"")]
    UnknownReason(String),

    /// The request carries no reason at all.
    #[error("Reason must not be empty")]
    EmptyReason,
}
