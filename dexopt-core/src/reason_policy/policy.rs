//! Reason policy implementation — fixed default tables.
//!
//! All functions are pure: no IO, no clocks, no global state.

use super::types::Reason;
use crate::errors::DexoptError;
use crate::flags::RequestFlags;
use crate::priority::PriorityClass;

/// Flags used for any reason the table does not recognize.
pub const FALLBACK_FLAGS: RequestFlags = RequestFlags::FOR_PRIMARY_DEX
    .union(RequestFlags::FOR_SECONDARY_DEX)
    .union(RequestFlags::INCLUDE_DEPENDENCIES);

/// Default optimize flags for a known reason.
///
/// | Reason | Flags |
/// |--------|-------|
/// | install family | `FOR_PRIMARY_DEX` |
/// | `inactive` | `FOR_PRIMARY_DEX \| FOR_SECONDARY_DEX \| SHOULD_DOWNGRADE` |
/// | `first-boot`, `boot-after-ota` | `FOR_PRIMARY_DEX \| INCLUDE_DEPENDENCIES` |
/// | `bg-dexopt`, `cmdline` | [`FALLBACK_FLAGS`] |
pub const fn default_flags_for(reason: Reason) -> RequestFlags {
    match reason {
        Reason::Install
        | Reason::InstallFast
        | Reason::InstallBulk
        | Reason::InstallBulkSecondary
        | Reason::InstallBulkDowngraded
        | Reason::InstallBulkSecondaryDowngraded => RequestFlags::FOR_PRIMARY_DEX,
        Reason::Inactive => RequestFlags::FOR_PRIMARY_DEX
            .union(RequestFlags::FOR_SECONDARY_DEX)
            .union(RequestFlags::SHOULD_DOWNGRADE),
        Reason::FirstBoot | Reason::BootAfterOta => {
            RequestFlags::FOR_PRIMARY_DEX.union(RequestFlags::INCLUDE_DEPENDENCIES)
        }
        Reason::BgDexopt | Reason::Cmdline => FALLBACK_FLAGS,
    }
}

/// Default optimize flags for a reason symbol.
///
/// Total: a symbol outside [`Reason::ALL`] yields [`FALLBACK_FLAGS`].
pub fn default_optimize_flags(reason: &str) -> RequestFlags {
    match reason.parse::<Reason>() {
        Ok(known) => default_flags_for(known),
        Err(_) => {
            tracing::debug!(
                reason,
                flags = %FALLBACK_FLAGS,
                "unrecognized reason, using fallback flags"
            );
            FALLBACK_FLAGS
        }
    }
}

/// Priority class a request for `reason` runs at by default.
pub const fn priority_for_reason(reason: Reason) -> PriorityClass {
    match reason {
        Reason::FirstBoot | Reason::BootAfterOta => PriorityClass::Boot,
        Reason::InstallFast => PriorityClass::InteractiveFast,
        Reason::Install | Reason::Cmdline => PriorityClass::Interactive,
        Reason::BgDexopt
        | Reason::Inactive
        | Reason::InstallBulk
        | Reason::InstallBulkSecondary
        | Reason::InstallBulkDowngraded
        | Reason::InstallBulkSecondaryDowngraded => PriorityClass::Background,
    }
}

/// Priority class for a reason symbol.
///
/// # Errors
/// Returns `DexoptError::UnknownReason` for symbols outside [`Reason::ALL`].
/// Unlike flags, there is no fallback priority.
pub fn priority_for_reason_str(reason: &str) -> Result<PriorityClass, DexoptError> {
    reason.parse::<Reason>().map(priority_for_reason)
}
