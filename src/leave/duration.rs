use crate::model::{HalfDayPeriod, LeaveRequestDraft};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Nombre de jours calendaires, bornes incluses (peut être <= 0 si `end < start`).
pub(crate) fn inclusive_span(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}

/// Jours calendaires demandés : 0.5 pour une demi-journée, sinon
/// `end - start + 1` (0 si la plage est inversée).
pub fn total_days(start: NaiveDate, end: NaiveDate, is_half_day: bool) -> f64 {
    if is_half_day {
        return 0.5;
    }
    inclusive_span(start, end).max(0) as f64
}

/// Jours ouvrés (lundi à vendredi) de la plage `[start, end]`.
pub fn working_days(start: NaiveDate, end: NaiveDate, is_half_day: bool) -> f64 {
    if is_half_day {
        return 0.5;
    }
    let mut count = 0u32;
    let mut current = start;
    while current <= end {
        // 0 = dimanche, 6 = samedi
        let dow = current.weekday().num_days_from_sunday();
        if dow != 0 && dow != 6 {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    f64::from(count)
}

/// Récapitulatif affiché sur le tableau de bord pour une demande.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    pub total_days: f64,
    pub working_days: f64,
    pub half_day_period: Option<HalfDayPeriod>,
}

impl LeaveSummary {
    /// `None` tant que les deux dates ne sont pas renseignées.
    pub fn for_draft(draft: &LeaveRequestDraft) -> Option<Self> {
        let start = draft.start_date?;
        let end = draft.end_date?;
        Some(Self {
            total_days: total_days(start, end, draft.is_half_day),
            working_days: working_days(start, end, draft.is_half_day),
            half_day_period: if draft.is_half_day {
                draft.half_day_period
            } else {
                None
            },
        })
    }
}
