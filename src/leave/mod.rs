//! Demandes de congés : règles de validation et calcul des durées.

mod duration;
mod rules;
mod types;
mod util;

pub use duration::{total_days, working_days, LeaveSummary};
pub use rules::{validate, validate_with};
pub use types::{Field, Validation};
