//! Dexopt Core — request configuration for background dexopt scheduling.
//!
//! This crate defines the values exchanged between whoever asks for an
//! optimization and the scheduler that runs it: which code to optimize
//! and how ([`flags`]), how urgently ([`priority`]), what happened when a
//! job was enqueued ([`schedule`]), and the defaults implied by why the
//! request was made ([`reason_policy`]).
//!
//! It does not schedule, run or persist anything. Every type is an
//! immutable value and every function is pure.
//!
//! # Module Map
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`constants`] | Raw wire values (flag bits, priority and status integers, reason symbols) |
//! | [`errors`] | `DexoptError` |
//! | [`flags`] | `DexFlag`, `RequestFlags`, `FlagContext`, narrow defaults |
//! | [`priority`] | `PriorityClass` |
//! | [`schedule`] | `ScheduleStatus` |
//! | [`reason_policy`] | `Reason`, reason → default flags and priority |
//! | [`params`] | `OptimizeParams` builder, delete/get-status flag resolution |
//!
//! # Wire Stability
//!
//! Flag bits 0–5, schedule status codes 0/1/2 and the priority integers
//! are persisted and transmitted as plain integers. With the `serde`
//! feature the typed values serialize to exactly those integers.

/// Wire constants — stable across versions.
pub mod constants;

/// Error types for dexopt-core validation.
pub mod errors;

/// Request flags and their per-operation masks.
pub mod flags;

/// Scheduling priority classes.
pub mod priority;

/// Background dexopt scheduling outcomes.
pub mod schedule;

/// Reason symbols and the default-policy tables.
pub mod reason_policy;

/// Validated optimize request parameters.
pub mod params;

pub use errors::DexoptError;
pub use flags::{
    default_delete_flags, default_get_status_flags, DexFlag, FlagContext, RequestFlags,
};
pub use params::{
    resolve_delete_flags, resolve_get_status_flags, OptimizeParams, OptimizeParamsBuilder,
};
pub use priority::PriorityClass;
pub use reason_policy::{default_optimize_flags, Reason};
pub use schedule::ScheduleStatus;
