//! Wire constants — raw integer and string identities.
//!
//! These values are persisted and transmitted as integers (or strings for
//! reasons) by the scheduler, the optimizer and the status store. They are
//! part of the ABI and MUST NOT change across versions. The typed wrappers
//! in [`crate::flags`], [`crate::priority`], [`crate::schedule`] and
//! [`crate::reason_policy`] are built on top of them.

// ── Request flag bits ───────────────────────────────────────────────

/// Whether the operation is applied for primary dex files.
pub const FLAG_FOR_PRIMARY_DEX: u32 = 1 << 0;

/// Whether the operation is applied for secondary dex files.
pub const FLAG_FOR_SECONDARY_DEX: u32 = 1 << 1;

/// Whether to optimize dependency libraries as well.
pub const FLAG_SHOULD_INCLUDE_DEPENDENCIES: u32 = 1 << 2;

/// Skip the optimization unless the target compiler filter is worse than
/// the one of the existing artifacts.
pub const FLAG_SHOULD_DOWNGRADE: u32 = 1 << 3;

/// Optimize regardless of any existing up-to-date artifacts.
pub const FLAG_FORCE: u32 = 1 << 4;

/// Optimize a single named split instead of all splits.
pub const FLAG_FOR_SINGLE_SPLIT: u32 = 1 << 5;

/// Bits recognized by delete operations.
pub const DELETE_FLAGS_MASK: u32 = FLAG_FOR_PRIMARY_DEX | FLAG_FOR_SECONDARY_DEX;

/// Bits recognized by get-status operations.
pub const GET_STATUS_FLAGS_MASK: u32 = FLAG_FOR_PRIMARY_DEX | FLAG_FOR_SECONDARY_DEX;

/// Bits recognized by optimize requests.
pub const OPTIMIZE_FLAGS_MASK: u32 = FLAG_FOR_PRIMARY_DEX
    | FLAG_FOR_SECONDARY_DEX
    | FLAG_SHOULD_INCLUDE_DEPENDENCIES
    | FLAG_SHOULD_DOWNGRADE
    | FLAG_FORCE
    | FLAG_FOR_SINGLE_SPLIT;

// ── Priority classes ────────────────────────────────────────────────

/// Initial value. Never valid on a live request.
pub const PRIORITY_NONE: i32 = -1;

/// The operation blocks boot.
pub const PRIORITY_BOOT: i32 = 100;

/// A human is waiting and the operation is more latency sensitive than usual.
pub const PRIORITY_INTERACTIVE_FAST: i32 = 80;

/// A human is waiting on the result.
pub const PRIORITY_INTERACTIVE: i32 = 60;

/// The operation runs in background.
pub const PRIORITY_BACKGROUND: i32 = 40;

// ── Schedule status ─────────────────────────────────────────────────

/// The job has been successfully scheduled.
pub const SCHEDULE_SUCCESS: i32 = 0;

/// The underlying job scheduler rejected the job.
pub const SCHEDULE_JOB_SCHEDULER_FAILURE: i32 = 1;

/// Background dexopt is disabled by the `pm.dexopt.disable_bg_dexopt`
/// system property.
pub const SCHEDULE_DISABLED_BY_SYSPROP: i32 = 2;

// ── Reasons ─────────────────────────────────────────────────────────

pub const REASON_FIRST_BOOT: &str = "first-boot";
pub const REASON_BOOT_AFTER_OTA: &str = "boot-after-ota";
pub const REASON_INSTALL: &str = "install";
pub const REASON_INSTALL_FAST: &str = "install-fast";
pub const REASON_INSTALL_BULK: &str = "install-bulk";
pub const REASON_INSTALL_BULK_SECONDARY: &str = "install-bulk-secondary";
pub const REASON_INSTALL_BULK_DOWNGRADED: &str = "install-bulk-downgraded";
pub const REASON_INSTALL_BULK_SECONDARY_DOWNGRADED: &str = "install-bulk-secondary-downgraded";
pub const REASON_BG_DEXOPT: &str = "bg-dexopt";
pub const REASON_INACTIVE: &str = "inactive";
pub const REASON_CMDLINE: &str = "cmdline";
