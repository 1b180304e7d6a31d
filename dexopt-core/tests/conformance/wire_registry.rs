//! Conformance: wire registry.
//!
//! Exact values and order of every persisted integer and symbol. Drift
//! here breaks stored status and cross-process requests.

use dexopt_core::{DexFlag, FlagContext, PriorityClass, Reason, RequestFlags, ScheduleStatus};

/// Flag bits are positions 0–5 in this order.
#[test]
fn conformance_flag_bit_positions() {
    let expected = [
        (DexFlag::ForPrimaryDex, 0),
        (DexFlag::ForSecondaryDex, 1),
        (DexFlag::IncludeDependencies, 2),
        (DexFlag::ShouldDowngrade, 3),
        (DexFlag::Force, 4),
        (DexFlag::ForSingleSplit, 5),
    ];
    assert_eq!(DexFlag::ALL.len(), expected.len());
    for (flag, position) in expected {
        assert_eq!(flag.bits(), 1u32 << position, "{} drifted", flag.name());
    }
}

#[test]
fn conformance_context_masks() {
    assert_eq!(FlagContext::Delete.mask(), 0b00_0011);
    assert_eq!(FlagContext::GetStatus.mask(), 0b00_0011);
    assert_eq!(FlagContext::Optimize.mask(), 0b11_1111);
}

/// Delete and get-status accept only the dex kind bits.
#[test]
fn conformance_narrow_contexts_reject_optimize_bits() {
    for context in [FlagContext::Delete, FlagContext::GetStatus] {
        for flag in [
            DexFlag::IncludeDependencies,
            DexFlag::ShouldDowngrade,
            DexFlag::Force,
            DexFlag::ForSingleSplit,
        ] {
            assert!(
                RequestFlags::from_bits(flag.bits(), context).is_err(),
                "{context} accepted {}",
                flag.name()
            );
        }
        assert!(RequestFlags::from_bits(0b11, context).is_ok());
    }
}

#[test]
fn conformance_narrow_defaults() {
    assert_eq!(dexopt_core::default_delete_flags().bits(), 0b1);
    assert_eq!(dexopt_core::default_get_status_flags().bits(), 0b1);
    assert_eq!(dexopt_core::resolve_delete_flags(None), Ok(RequestFlags::FOR_PRIMARY_DEX));
    assert_eq!(
        dexopt_core::resolve_get_status_flags(None),
        Ok(RequestFlags::FOR_PRIMARY_DEX)
    );
}

#[test]
fn conformance_schedule_status_codes() {
    let codes: Vec<i32> = ScheduleStatus::ALL.iter().map(|s| s.as_i32()).collect();
    assert_eq!(codes, vec![0, 1, 2]);
    assert_eq!(ScheduleStatus::ALL[0], ScheduleStatus::Success);
    assert_eq!(ScheduleStatus::ALL[1], ScheduleStatus::JobSchedulerFailure);
    assert_eq!(ScheduleStatus::ALL[2], ScheduleStatus::DisabledBySysprop);
}

#[test]
fn conformance_schedule_status_decode() {
    for code in 0..3i32 {
        let status = ScheduleStatus::try_from(code).expect("known code");
        assert_eq!(status.as_i32(), code);
    }
    assert!(ScheduleStatus::try_from(3).is_err());
}

#[test]
fn conformance_priority_values() {
    assert_eq!(PriorityClass::None.as_i32(), -1);
    assert_eq!(PriorityClass::Boot.as_i32(), 100);
    assert_eq!(PriorityClass::InteractiveFast.as_i32(), 80);
    assert_eq!(PriorityClass::Interactive.as_i32(), 60);
    assert_eq!(PriorityClass::Background.as_i32(), 40);
}

/// Only `None` is refused on a live request.
#[test]
fn conformance_live_priority_validation() {
    assert!(PriorityClass::None.validate_live().is_err());
    for priority in [
        PriorityClass::Boot,
        PriorityClass::InteractiveFast,
        PriorityClass::Interactive,
        PriorityClass::Background,
    ] {
        assert!(priority.validate_live().is_ok(), "{priority} rejected");
    }
}

#[test]
fn conformance_reason_symbols() {
    let expected = [
        "first-boot",
        "boot-after-ota",
        "install",
        "install-fast",
        "install-bulk",
        "install-bulk-secondary",
        "install-bulk-downgraded",
        "install-bulk-secondary-downgraded",
        "bg-dexopt",
        "inactive",
        "cmdline",
    ];
    let actual: Vec<&str> = Reason::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(actual, expected);
}

/// Single-split validity as the scheduler will check it.
#[test]
fn conformance_single_split_rules() {
    let valid = RequestFlags::FOR_SINGLE_SPLIT | RequestFlags::FOR_PRIMARY_DEX;
    assert!(valid.validate_single_split().is_ok());

    let invalid = RequestFlags::FOR_SINGLE_SPLIT | RequestFlags::FOR_SECONDARY_DEX;
    assert!(invalid.validate_single_split().is_err());
    assert!((valid | RequestFlags::FOR_SECONDARY_DEX)
        .validate_single_split()
        .is_err());
}
