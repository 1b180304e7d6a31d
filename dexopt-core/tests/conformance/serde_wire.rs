//! Conformance: serde wire format.
//!
//! Typed values serialize to the same plain integers (or symbols) the
//! constants define, and decoding runs the same checks as `TryFrom`.

use dexopt_core::{OptimizeParams, PriorityClass, Reason, RequestFlags, ScheduleStatus};

#[test]
fn conformance_schedule_status_serializes_as_integer() {
    for (status, json) in [
        (ScheduleStatus::Success, "0"),
        (ScheduleStatus::JobSchedulerFailure, "1"),
        (ScheduleStatus::DisabledBySysprop, "2"),
    ] {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        assert_eq!(serde_json::from_str::<ScheduleStatus>(json).unwrap(), status);
    }
}

#[test]
fn conformance_schedule_status_rejects_unknown_integer() {
    assert!(serde_json::from_str::<ScheduleStatus>("3").is_err());
    assert!(serde_json::from_str::<ScheduleStatus>("\"SUCCESS\"").is_err());
}

#[test]
fn conformance_flags_serialize_as_bits() {
    let flags = RequestFlags::FOR_PRIMARY_DEX | RequestFlags::FORCE;
    assert_eq!(serde_json::to_string(&flags).unwrap(), "17");
    assert_eq!(serde_json::from_str::<RequestFlags>("17").unwrap(), flags);
    assert!(serde_json::from_str::<RequestFlags>("64").is_err());
}

#[test]
fn conformance_priority_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&PriorityClass::Boot).unwrap(), "100");
    assert_eq!(serde_json::to_string(&PriorityClass::None).unwrap(), "-1");
    assert_eq!(
        serde_json::from_str::<PriorityClass>("40").unwrap(),
        PriorityClass::Background
    );
    assert!(serde_json::from_str::<PriorityClass>("41").is_err());
}

#[test]
fn conformance_reason_serializes_as_symbol() {
    assert_eq!(
        serde_json::to_string(&Reason::BootAfterOta).unwrap(),
        "\"boot-after-ota\""
    );
    assert_eq!(
        serde_json::from_str::<Reason>("\"inactive\"").unwrap(),
        Reason::Inactive
    );
    assert!(serde_json::from_str::<Reason>("\"Inactive\"").is_err());
}

#[test]
fn conformance_optimize_params_shape() {
    let params = OptimizeParams::builder("install").build().unwrap();
    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "reason": "install",
            "flags": 1,
            "priority": 60,
            "split_name": null,
        })
    );
}
