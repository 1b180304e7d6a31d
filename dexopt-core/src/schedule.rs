//! Outcome of an attempt to schedule background dexopt.
//!
//! Produced by the scheduler collaborator; this crate only fixes the set
//! of outcomes and their integer identity.

use std::fmt;

use crate::constants::{
    SCHEDULE_DISABLED_BY_SYSPROP, SCHEDULE_JOB_SCHEDULER_FAILURE, SCHEDULE_SUCCESS,
};
use crate::errors::DexoptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
#[repr(i32)]
pub enum ScheduleStatus {
    /// The job has been successfully scheduled.
    Success = SCHEDULE_SUCCESS,
    /// The underlying job scheduler rejected the job.
    JobSchedulerFailure = SCHEDULE_JOB_SCHEDULER_FAILURE,
    /// Background dexopt is disabled by system property.
    DisabledBySysprop = SCHEDULE_DISABLED_BY_SYSPROP,
}

impl ScheduleStatus {
    /// All outcomes in wire order.
    pub const ALL: [ScheduleStatus; 3] = [
        ScheduleStatus::Success,
        ScheduleStatus::JobSchedulerFailure,
        ScheduleStatus::DisabledBySysprop,
    ];

    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn is_success(self) -> bool {
        matches!(self, ScheduleStatus::Success)
    }
}

impl TryFrom<i32> for ScheduleStatus {
    type Error = DexoptError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            SCHEDULE_SUCCESS => Ok(ScheduleStatus::Success),
            SCHEDULE_JOB_SCHEDULER_FAILURE => Ok(ScheduleStatus::JobSchedulerFailure),
            SCHEDULE_DISABLED_BY_SYSPROP => Ok(ScheduleStatus::DisabledBySysprop),
            other => Err(DexoptError::UnknownScheduleStatus(other)),
        }
    }
}

impl From<ScheduleStatus> for i32 {
    fn from(status: ScheduleStatus) -> Self {
        status.as_i32()
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScheduleStatus::Success => "SUCCESS",
            ScheduleStatus::JobSchedulerFailure => "JOB_SCHEDULER_FAILURE",
            ScheduleStatus::DisabledBySysprop => "DISABLED_BY_SYSPROP",
        })
    }
}
