//! Conformance: error display stability.
//!
//! Error text shows up in scheduler logs and command-line output; tooling
//! greps for it. Each variant's format is pinned here.

use dexopt_core::{DexoptError, FlagContext};

#[test]
fn conformance_dexopt_error_display_format_stable() {
    let cases: Vec<(DexoptError, &str)> = vec![
        (
            DexoptError::UnknownFlagBits {
                context: FlagContext::GetStatus,
                bits: 0x10,
            },
            "Unknown flag bits 0x10 for get-status flags",
        ),
        (
            DexoptError::InvalidSingleSplit("FOR_SINGLE_SPLIT lacks FOR_PRIMARY_DEX".into()),
            "Invalid single-split flags: FOR_SINGLE_SPLIT lacks FOR_PRIMARY_DEX",
        ),
        (
            DexoptError::SplitNameWithoutSingleSplit("config.xxhdpi".into()),
            "Split name \"config.xxhdpi\" requires FOR_SINGLE_SPLIT",
        ),
        (
            DexoptError::UnknownPriority(7),
            "Unknown priority class: 7",
        ),
        (
            DexoptError::NonePriority,
            "Priority class NONE is not valid on a live request",
        ),
        (
            DexoptError::UnknownScheduleStatus(9),
            "Unknown schedule status: 9",
        ),
        (
            DexoptError::UnknownReason("warmup".into()),
            "Unknown reason: \"warmup\"",
        ),
        (DexoptError::EmptyReason, "Reason must not be empty"),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "DexoptError display drift");
    }
}

#[test]
fn conformance_dexopt_error_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DexoptError>();
}

#[test]
fn conformance_dexopt_error_is_std_error() {
    let err = DexoptError::NonePriority;
    let _: &dyn std::error::Error = &err;
}

/// Decoders surface the offending value in the error.
#[test]
fn conformance_decoders_report_offending_value() {
    use dexopt_core::{PriorityClass, RequestFlags, ScheduleStatus};

    assert_eq!(
        RequestFlags::from_bits(0b1100_0001, FlagContext::Optimize),
        Err(DexoptError::UnknownFlagBits {
            context: FlagContext::Optimize,
            bits: 0b1100_0000,
        })
    );
    assert_eq!(
        PriorityClass::try_from(99),
        Err(DexoptError::UnknownPriority(99))
    );
    assert_eq!(
        ScheduleStatus::try_from(-3),
        Err(DexoptError::UnknownScheduleStatus(-3))
    );
}
