#![forbid(unsafe_code)]
use chrono::NaiveDate;
use presence::{
    validate, validate_with, Field, HalfDayPeriod, LeaveBalance, LeavePolicy, LeaveRequestDraft,
    LeaveType,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// mercredi
fn today() -> NaiveDate {
    d(2025, 10, 1)
}

const REASON: &str = "family trip abroad";

#[test]
fn end_before_start_is_reported_on_end_date() {
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, d(2025, 10, 10), d(2025, 10, 8), REASON);
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert!(!v.valid);
    assert_eq!(
        v.error(Field::EndDate),
        Some("End date cannot be before start date")
    );
}

#[test]
fn unpaid_leave_ignores_balance() {
    let balance = LeaveBalance::new()
        .with(LeaveType::Unpaid, 0.0)
        .with(LeaveType::Vacation, 0.0);
    let draft = LeaveRequestDraft::new(LeaveType::Unpaid, d(2025, 10, 10), d(2025, 10, 20), REASON);
    let v = validate(&draft, &balance, today());
    assert!(v.valid, "{:?}", v.errors);
}

#[test]
fn vacation_starting_today_violates_advance_notice() {
    let reason = "a".repeat(11);
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, today(), today(), reason);
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert!(v.has_error(Field::StartDate));
    assert!(!v.has_error(Field::Reason));
    assert!(v
        .error(Field::StartDate)
        .unwrap()
        .contains("2 days advance notice"));
}

#[test]
fn emergency_requires_contact_but_no_notice() {
    let draft = LeaveRequestDraft::new(LeaveType::Emergency, today(), today(), "need to leave")
        .emergency_contact("", "");
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert!(!v.has_error(Field::StartDate));
    assert!(v.has_error(Field::EmergencyContactName));
    assert!(v.has_error(Field::EmergencyContactPhone));

    let rendered = v
        .errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    emergencyContactName: Emergency contact name is required
    emergencyContactPhone: Emergency contact phone is required
    ");
}

#[test]
fn emergency_contact_shape_is_checked() {
    let bad = LeaveRequestDraft::new(LeaveType::Emergency, today(), today(), "need to leave")
        .emergency_contact(" A ", "12-34 abc");
    let v = validate(&bad, &LeaveBalance::new(), today());
    assert_eq!(
        v.error(Field::EmergencyContactName),
        Some("Emergency contact name must be at least 2 characters")
    );
    assert!(v.has_error(Field::EmergencyContactPhone));

    let good = LeaveRequestDraft::new(LeaveType::Emergency, today(), today(), "need to leave")
        .emergency_contact("Jo", "+1 (555) 123-4567");
    assert!(validate(&good, &LeaveBalance::new(), today()).valid);
}

#[test]
fn short_phone_is_rejected() {
    let draft = LeaveRequestDraft::new(LeaveType::Emergency, today(), today(), "need to leave")
        .emergency_contact("Jane Doe", "555-1234");
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert_eq!(v.errors.len(), 1);
    assert!(v.has_error(Field::EmergencyContactPhone));
}

#[test]
fn sick_and_bereavement_skip_advance_notice() {
    for kind in [LeaveType::Sick, LeaveType::Bereavement] {
        let draft = LeaveRequestDraft::new(kind, today(), today(), REASON);
        assert!(validate(&draft, &LeaveBalance::new(), today()).valid);
    }
}

#[test]
fn advance_notice_applies_per_leave_type() {
    let exempt = [LeaveType::Emergency, LeaveType::Sick, LeaveType::Bereavement];
    for kind in LeaveType::ALL {
        let draft = LeaveRequestDraft::new(kind, today(), today(), REASON);
        let v = validate(&draft, &LeaveBalance::new(), today());
        assert_eq!(
            v.has_error(Field::StartDate),
            !exempt.contains(&kind),
            "unexpected advance-notice outcome for {kind}"
        );
        assert_eq!(kind.requires_advance(), !exempt.contains(&kind));
    }
}

#[test]
fn advance_notice_boundary() {
    let ok = LeaveRequestDraft::new(LeaveType::Personal, d(2025, 10, 3), d(2025, 10, 3), REASON);
    assert!(validate(&ok, &LeaveBalance::new(), today()).valid);

    let late = LeaveRequestDraft::new(LeaveType::Personal, d(2025, 10, 2), d(2025, 10, 2), REASON);
    let v = validate(&late, &LeaveBalance::new(), today());
    assert!(v.has_error(Field::StartDate));
}

#[test]
fn insufficient_balance_names_shortfall() {
    let balance = LeaveBalance::new().with(LeaveType::Vacation, 3.0);
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, d(2025, 10, 6), d(2025, 10, 10), REASON);
    let v = validate(&draft, &balance, today());
    let msg = v.error(Field::EndDate).unwrap();
    assert!(msg.contains("only 3 available"), "{msg}");
    assert!(msg.contains("short by 2"), "{msg}");
}

#[test]
fn unknown_balance_is_not_a_constraint() {
    let balance = LeaveBalance::new().with(LeaveType::Sick, 0.0);
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, d(2025, 10, 6), d(2025, 10, 10), REASON);
    assert!(validate(&draft, &balance, today()).valid);
}

#[test]
fn half_day_counts_half_against_balance() {
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, d(2025, 10, 6), d(2025, 10, 6), REASON)
        .half_day(HalfDayPeriod::Morning);

    let enough = LeaveBalance::new().with(LeaveType::Vacation, 0.5);
    assert!(validate(&draft, &enough, today()).valid);

    let empty = LeaveBalance::new().with(LeaveType::Vacation, 0.0);
    assert!(validate(&draft, &empty, today()).has_error(Field::EndDate));
}

#[test]
fn half_day_must_be_single_date() {
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, d(2025, 10, 6), d(2025, 10, 7), REASON)
        .half_day(HalfDayPeriod::Afternoon);
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert!(v.has_error(Field::IsHalfDay));
}

#[test]
fn span_over_a_year_is_rejected() {
    let draft = LeaveRequestDraft::new(LeaveType::Sick, d(2025, 10, 1), d(2026, 10, 1), REASON);
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert_eq!(
        v.error(Field::EndDate),
        Some("Leave cannot exceed 365 days (requested 366)")
    );
}

#[test]
fn empty_draft_reports_every_missing_field() {
    let v = validate(&LeaveRequestDraft::default(), &LeaveBalance::new(), today());
    assert!(!v.valid);
    for field in [Field::Type, Field::StartDate, Field::EndDate, Field::Reason] {
        assert!(v.has_error(field), "missing error on {field}");
    }
}

#[test]
fn reason_length_is_bounded() {
    let long = "x".repeat(501);
    let draft = LeaveRequestDraft::new(LeaveType::Sick, today(), today(), long);
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert!(v.error(Field::Reason).unwrap().contains("cannot exceed 500"));

    let padded = LeaveRequestDraft::new(LeaveType::Sick, today(), today(), "   short    ");
    assert!(validate(&padded, &LeaveBalance::new(), today()).has_error(Field::Reason));
}

#[test]
fn unknown_type_from_json_is_a_type_error() {
    let draft: LeaveRequestDraft = serde_json::from_str(
        r#"{"type":"holiday","startDate":"2025-10-06","endDate":"2025-10-06","reason":"long enough reason"}"#,
    )
    .unwrap();
    assert_eq!(draft.leave_type, None);
    let v = validate(&draft, &LeaveBalance::new(), today());
    assert_eq!(v.errors.len(), 1);
    assert!(v.has_error(Field::Type));
}

#[test]
fn policy_thresholds_can_be_overridden() {
    let policy: LeavePolicy = serde_json::from_str(r#"{"advanceNoticeDays":0}"#).unwrap();
    assert_eq!(policy.max_span_days, 365);
    let draft = LeaveRequestDraft::new(LeaveType::Vacation, today(), today(), REASON);
    assert!(validate_with(&policy, &draft, &LeaveBalance::new(), today()).valid);
}

#[test]
fn validation_serializes_with_form_keys() {
    let draft = LeaveRequestDraft::new(LeaveType::Sick, today(), today(), "short");
    let v = validate(&draft, &LeaveBalance::new(), today());
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["errors"]["reason"],
        "Reason must be at least 10 characters (5 given)"
    );
}
