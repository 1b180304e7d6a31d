//! Priority class attached to a request.
//!
//! The value tells the scheduler how hard the job may compete for CPU and
//! memory. A higher class may finish faster but contends more with other
//! processes. `None` is the uninitialized marker and never a valid request
//! priority.

use std::fmt;

use crate::constants::{
    PRIORITY_BACKGROUND, PRIORITY_BOOT, PRIORITY_INTERACTIVE, PRIORITY_INTERACTIVE_FAST,
    PRIORITY_NONE,
};
use crate::errors::DexoptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
#[repr(i32)]
pub enum PriorityClass {
    /// Initial value. Not expected on a live request.
    #[default]
    None = PRIORITY_NONE,
    /// The operation blocks boot.
    Boot = PRIORITY_BOOT,
    /// A human is waiting and the operation is more latency sensitive than
    /// usual.
    InteractiveFast = PRIORITY_INTERACTIVE_FAST,
    /// A human is waiting on the result.
    Interactive = PRIORITY_INTERACTIVE,
    /// The operation runs in background.
    Background = PRIORITY_BACKGROUND,
}

impl PriorityClass {
    /// Every class a live request may carry, most urgent first.
    pub const LIVE: [PriorityClass; 4] = [
        PriorityClass::Boot,
        PriorityClass::InteractiveFast,
        PriorityClass::Interactive,
        PriorityClass::Background,
    ];

    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Urgency position: 0 for `None`, then increasing towards `Boot`.
    pub const fn urgency_rank(self) -> u8 {
        match self {
            PriorityClass::None => 0,
            PriorityClass::Background => 1,
            PriorityClass::Interactive => 2,
            PriorityClass::InteractiveFast => 3,
            PriorityClass::Boot => 4,
        }
    }

    /// Accept this class for a request that is about to be scheduled.
    ///
    /// # Errors
    /// Returns `DexoptError::NonePriority` for `PriorityClass::None`.
    pub fn validate_live(self) -> Result<Self, DexoptError> {
        match self {
            PriorityClass::None => Err(DexoptError::NonePriority),
            live => Ok(live),
        }
    }
}

impl TryFrom<i32> for PriorityClass {
    type Error = DexoptError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            PRIORITY_NONE => Ok(PriorityClass::None),
            PRIORITY_BOOT => Ok(PriorityClass::Boot),
            PRIORITY_INTERACTIVE_FAST => Ok(PriorityClass::InteractiveFast),
            PRIORITY_INTERACTIVE => Ok(PriorityClass::Interactive),
            PRIORITY_BACKGROUND => Ok(PriorityClass::Background),
            other => Err(DexoptError::UnknownPriority(other)),
        }
    }
}

impl From<PriorityClass> for i32 {
    fn from(priority: PriorityClass) -> Self {
        priority.as_i32()
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriorityClass::None => "NONE",
            PriorityClass::Boot => "BOOT",
            PriorityClass::InteractiveFast => "INTERACTIVE_FAST",
            PriorityClass::Interactive => "INTERACTIVE",
            PriorityClass::Background => "BACKGROUND",
        })
    }
}
