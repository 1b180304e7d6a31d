//! Request parameters handed to the scheduler collaborator.
//!
//! [`OptimizeParams`] is the validated, immutable configuration of one
//! optimize request. The delete and get-status operations take only flags;
//! [`resolve_delete_flags`] and [`resolve_get_status_flags`] turn optional
//! raw caller input into a checked set.

use crate::errors::DexoptError;
use crate::flags::{default_delete_flags, default_get_status_flags, FlagContext, RequestFlags};
use crate::priority::PriorityClass;
use crate::reason_policy::{default_optimize_flags, priority_for_reason, Reason};

/// Flags for a delete-artifacts call. `None` means "use the default".
///
/// # Errors
/// Returns `DexoptError::UnknownFlagBits` if `raw` has bits other than
/// `FOR_PRIMARY_DEX` and `FOR_SECONDARY_DEX`.
pub fn resolve_delete_flags(raw: Option<u32>) -> Result<RequestFlags, DexoptError> {
    match raw {
        Some(bits) => RequestFlags::from_bits(bits, FlagContext::Delete),
        None => Ok(default_delete_flags()),
    }
}

/// Flags for a get-status call. `None` means "use the default".
///
/// # Errors
/// Returns `DexoptError::UnknownFlagBits` if `raw` has bits other than
/// `FOR_PRIMARY_DEX` and `FOR_SECONDARY_DEX`.
pub fn resolve_get_status_flags(raw: Option<u32>) -> Result<RequestFlags, DexoptError> {
    match raw {
        Some(bits) => RequestFlags::from_bits(bits, FlagContext::GetStatus),
        None => Ok(default_get_status_flags()),
    }
}

/// A validated optimize request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimizeParams {
    reason: String,
    flags: RequestFlags,
    priority: PriorityClass,
    split_name: Option<String>,
}

impl OptimizeParams {
    /// Start a request for `reason`, pre-filled with the reason's default
    /// flags and priority.
    pub fn builder(reason: impl Into<String>) -> OptimizeParamsBuilder {
        OptimizeParamsBuilder::new(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn flags(&self) -> RequestFlags {
        self.flags
    }

    /// Always a live class.
    pub fn priority(&self) -> PriorityClass {
        self.priority
    }

    /// Only set together with `FOR_SINGLE_SPLIT`. `None` with
    /// `FOR_SINGLE_SPLIT` selects the base split.
    pub fn split_name(&self) -> Option<&str> {
        self.split_name.as_deref()
    }
}

/// Builder for [`OptimizeParams`].
///
/// Defaults come from [`crate::reason_policy`]. For a reason outside the
/// known table the flags fall back to the broad set and the priority stays
/// `PriorityClass::None`, so the caller has to pick one before `build()`.
#[derive(Debug, Clone)]
pub struct OptimizeParamsBuilder {
    reason: String,
    flags: RequestFlags,
    priority: PriorityClass,
    split_name: Option<String>,
}

impl OptimizeParamsBuilder {
    fn new(reason: String) -> Self {
        let flags = default_optimize_flags(&reason);
        let priority = reason
            .parse::<Reason>()
            .map(priority_for_reason)
            .unwrap_or(PriorityClass::None);
        Self {
            reason,
            flags,
            priority,
            split_name: None,
        }
    }

    /// Replace all flags.
    pub fn flags(mut self, flags: RequestFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace only the bits selected by `mask`, keeping the rest.
    pub fn flags_masked(mut self, flags: RequestFlags, mask: RequestFlags) -> Self {
        self.flags = self.flags.difference(mask).union(flags.intersection(mask));
        self
    }

    pub fn priority(mut self, priority: PriorityClass) -> Self {
        self.priority = priority;
        self
    }

    pub fn split_name(mut self, split_name: impl Into<String>) -> Self {
        self.split_name = Some(split_name.into());
        self
    }

    /// Validate and freeze the request.
    ///
    /// # Errors
    /// - `DexoptError::EmptyReason` if the reason is empty.
    /// - `DexoptError::NonePriority` if no live priority is set.
    /// - `DexoptError::InvalidSingleSplit` if the flags break the
    ///   single-split contract.
    /// - `DexoptError::SplitNameWithoutSingleSplit` if a split name is set
    ///   without `FOR_SINGLE_SPLIT`.
    pub fn build(self) -> Result<OptimizeParams, DexoptError> {
        self.validate().inspect_err(|err| {
            tracing::debug!(
                reason = %self.reason,
                flags = %self.flags,
                error = %err,
                "rejected optimize params"
            );
        })?;
        Ok(OptimizeParams {
            reason: self.reason,
            flags: self.flags,
            priority: self.priority,
            split_name: self.split_name,
        })
    }

    fn validate(&self) -> Result<(), DexoptError> {
        if self.reason.is_empty() {
            return Err(DexoptError::EmptyReason);
        }
        self.priority.validate_live()?;
        self.flags.validate_single_split()?;
        if let Some(name) = &self.split_name {
            if !self.flags.for_single_split() {
                return Err(DexoptError::SplitNameWithoutSingleSplit(name.clone()));
            }
        }
        Ok(())
    }
}
