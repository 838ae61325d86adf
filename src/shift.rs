//! Arithmétique des shifts sur des heures locales (sans date).
//!
//! Un shift dont la fin précède le début passe minuit : la fin est reportée
//! au lendemain. Début == fin donne une durée nulle.

use crate::model::ShiftDefinition;
use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub use crate::model::parse_time_of_day;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Durée découpée en heures et minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct ShiftDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl ShiftDuration {
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for ShiftDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}", self.hours, self.minutes)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShiftError {
    #[error("shift name cannot be empty")]
    EmptyName,
    #[error("shift start and end times cannot be equal")]
    EmptyShift,
    #[error("break of {break_minutes} min does not fit in a {shift_minutes} min shift")]
    BreakTooLong {
        break_minutes: u32,
        shift_minutes: u32,
    },
}

/// Ponctualité d'un pointage d'arrivée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum Punctuality {
    OnTime,
    /// Retard compté depuis l'heure de début (au-delà de la tolérance).
    Late { minutes: u32 },
}

/// Durée entre deux heures, fin reportée au lendemain si `end < start`.
pub fn duration(start: NaiveTime, end: NaiveTime) -> ShiftDuration {
    ShiftDuration::from_minutes(span_minutes(start, end))
}

fn span_minutes(start: NaiveTime, end: NaiveTime) -> u32 {
    let start_s = start.num_seconds_from_midnight();
    let mut end_s = end.num_seconds_from_midnight();
    if end < start {
        end_s += SECONDS_PER_DAY;
    }
    (end_s - start_s) / 60
}

fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight() / 60)
}

impl ShiftDefinition {
    pub fn validate(&self) -> Result<(), ShiftError> {
        if self.name.trim().is_empty() {
            return Err(ShiftError::EmptyName);
        }
        if self.start_time == self.end_time {
            return Err(ShiftError::EmptyShift);
        }
        let shift_minutes = self.scheduled().total_minutes();
        if self.break_duration_minutes >= shift_minutes {
            return Err(ShiftError::BreakTooLong {
                break_minutes: self.break_duration_minutes,
                shift_minutes,
            });
        }
        Ok(())
    }

    /// Durée brute, pause comprise.
    pub fn scheduled(&self) -> ShiftDuration {
        duration(self.start_time, self.end_time)
    }

    /// Minutes effectivement travaillées prévues (pause déduite).
    pub fn net_minutes(&self) -> u32 {
        self.scheduled()
            .total_minutes()
            .saturating_sub(self.break_duration_minutes)
    }

    /// Classe un pointage d'arrivée par rapport au début du shift.
    ///
    /// Une arrivée anticipée n'est admise que dans la moitié de la plage hors
    /// service la plus proche du début ; tout autre pointage, y compris après
    /// la fin du shift, est un retard compté depuis le début.
    pub fn punctuality(&self, check_in: NaiveTime) -> Punctuality {
        let gross = i64::from(self.scheduled().total_minutes());
        let offset = (minute_of_day(check_in) - minute_of_day(self.start_time))
            .rem_euclid(MINUTES_PER_DAY);
        let early_window = (MINUTES_PER_DAY - gross) / 2;
        if early_window > 0 && offset >= MINUTES_PER_DAY - early_window {
            return Punctuality::OnTime;
        }
        if offset <= i64::from(self.grace_period_minutes).min(gross) {
            Punctuality::OnTime
        } else {
            Punctuality::Late {
                minutes: u32::try_from(offset).unwrap_or(u32::MAX),
            }
        }
    }

    /// Heures supplémentaires (en minutes) pour un pointage arrivée/départ.
    pub fn overtime_minutes(&self, check_in: NaiveTime, check_out: NaiveTime) -> u32 {
        span_minutes(check_in, check_out)
            .saturating_sub(self.break_duration_minutes)
            .saturating_sub(self.net_minutes())
    }
}
