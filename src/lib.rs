#![forbid(unsafe_code)]
//! Presence : règles RH locales, sans base de données.
//!
//! - Validation des demandes de congés (préavis, soldes, demi-journées).
//! - Jours calendaires / ouvrés d'une demande.
//! - Durée des shifts (passage de minuit), retards, heures supplémentaires.
//! - Réducteur de notifications + store alimenté par une source injectable.
//!
//! Fonctions pures : la date du jour et la politique sont toujours passées
//! explicitement, aucune lecture d'horloge dans la lib.

pub mod config;
pub mod io;
pub mod leave;
pub mod model;
pub mod notification;
pub mod shift;

pub use config::LeavePolicy;
pub use leave::{total_days, validate, validate_with, working_days, Field, LeaveSummary, Validation};
pub use model::{
    parse_time_of_day, HalfDayPeriod, LeaveBalance, LeaveRequestDraft, LeaveType, Notification,
    NotificationId, ParseError, ShiftDefinition,
};
pub use notification::{
    reduce, NotificationAction, NotificationFeed, NotificationState, NotificationStore,
};
pub use shift::{duration, Punctuality, ShiftDuration, ShiftError};
