//! Reason policy — defaults derived from why an optimization was requested.
//!
//! The policy is a fixed table over the closed [`Reason`] set. It makes no
//! decisions from device state: identical reasons always produce identical
//! flags and priority.
//!
//! Unrecognized reason strings fall back to the broadest flag set
//! (`FOR_PRIMARY_DEX | FOR_SECONDARY_DEX | INCLUDE_DEPENDENCIES`) instead of
//! failing. Callers of older or newer platform versions pass reasons this
//! table has never seen, and those requests must still be served.

pub mod policy;
pub mod types;

pub use policy::{
    default_flags_for, default_optimize_flags, priority_for_reason, priority_for_reason_str,
    FALLBACK_FLAGS,
};
pub use types::Reason;
