use super::duration::inclusive_span;
use super::types::{Field, Validation};
use super::util;
use crate::config::LeavePolicy;
use crate::model::{LeaveBalance, LeaveRequestDraft, LeaveType};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Valide un brouillon avec la politique par défaut.
pub fn validate(draft: &LeaveRequestDraft, balance: &LeaveBalance, today: NaiveDate) -> Validation {
    validate_with(&LeavePolicy::default(), draft, balance, today)
}

/// Valide un brouillon de demande de congé.
///
/// Toutes les règles sont évaluées ; chaque champ fautif reçoit un message.
/// Si plusieurs règles touchent le même champ, la première l'emporte.
pub fn validate_with(
    policy: &LeavePolicy,
    draft: &LeaveRequestDraft,
    balance: &LeaveBalance,
    today: NaiveDate,
) -> Validation {
    let mut errors = Errors::default();
    let leave_type = draft.leave_type;

    if leave_type.is_none() {
        errors.report(Field::Type, "Please select a valid leave type");
    }

    if draft.start_date.is_none() {
        errors.report(Field::StartDate, "Start date is required");
    }
    if draft.end_date.is_none() {
        errors.report(Field::EndDate, "End date is required");
    }

    if let (Some(kind), Some(start)) = (leave_type, draft.start_date) {
        check_advance_notice(&mut errors, policy, kind, start, today);
    }

    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if end < start {
            errors.report(Field::EndDate, "End date cannot be before start date");
        } else {
            let span = inclusive_span(start, end);
            if span > i64::from(policy.max_span_days) {
                errors.report(
                    Field::EndDate,
                    format!(
                        "Leave cannot exceed {} days (requested {span})",
                        policy.max_span_days
                    ),
                );
            }
            if let Some(kind) = leave_type {
                check_balance(&mut errors, draft, balance, kind, span);
            }
        }
        if draft.is_half_day && start != end {
            errors.report(
                Field::IsHalfDay,
                "Half-day leave must start and end on the same date",
            );
        }
    }

    check_reason(&mut errors, policy, &draft.reason);

    if leave_type == Some(LeaveType::Emergency) {
        check_emergency_contact(&mut errors, policy, draft);
    }

    Validation::from_errors(errors.0)
}

#[derive(Default)]
struct Errors(BTreeMap<Field, String>);

impl Errors {
    fn report<M: Into<String>>(&mut self, field: Field, message: M) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

fn check_advance_notice(
    errors: &mut Errors,
    policy: &LeavePolicy,
    kind: LeaveType,
    start: NaiveDate,
    today: NaiveDate,
) {
    if !kind.requires_advance() {
        return;
    }
    let earliest = util::add_days(today, policy.advance_notice_days);
    if start < earliest {
        errors.report(
            Field::StartDate,
            format!(
                "{} requires at least {} days advance notice (earliest start: {earliest})",
                kind.label(),
                policy.advance_notice_days
            ),
        );
    }
}

fn check_balance(
    errors: &mut Errors,
    draft: &LeaveRequestDraft,
    balance: &LeaveBalance,
    kind: LeaveType,
    span: i64,
) {
    if kind.is_balance_exempt() {
        return;
    }
    let Some(available) = balance.available(kind) else {
        return;
    };
    let required = if draft.is_half_day { 0.5 } else { span as f64 };
    if required > available {
        errors.report(
            Field::EndDate,
            format!(
                "Insufficient {} balance: {required} day(s) requested but only {available} available (short by {})",
                kind.label(),
                required - available
            ),
        );
    }
}

fn check_reason(errors: &mut Errors, policy: &LeavePolicy, reason: &str) {
    let len = reason.trim().chars().count();
    if len < policy.reason_min_chars {
        errors.report(
            Field::Reason,
            format!(
                "Reason must be at least {} characters ({len} given)",
                policy.reason_min_chars
            ),
        );
    } else if len > policy.reason_max_chars {
        errors.report(
            Field::Reason,
            format!(
                "Reason cannot exceed {} characters ({len} given)",
                policy.reason_max_chars
            ),
        );
    }
}

fn check_emergency_contact(errors: &mut Errors, policy: &LeavePolicy, draft: &LeaveRequestDraft) {
    let name_len = util::non_whitespace_chars(&draft.emergency_contact_name);
    if name_len == 0 {
        errors.report(
            Field::EmergencyContactName,
            "Emergency contact name is required",
        );
    } else if name_len < policy.min_contact_name_chars {
        errors.report(
            Field::EmergencyContactName,
            format!(
                "Emergency contact name must be at least {} characters",
                policy.min_contact_name_chars
            ),
        );
    }

    let phone = draft.emergency_contact_phone.trim();
    if phone.is_empty() {
        errors.report(
            Field::EmergencyContactPhone,
            "Emergency contact phone is required",
        );
    } else if !util::is_phone_like(phone, policy.min_phone_digits) {
        errors.report(
            Field::EmergencyContactPhone,
            format!(
                "Please enter a valid phone number (at least {} digits)",
                policy.min_phone_digits
            ),
        );
    }
}
