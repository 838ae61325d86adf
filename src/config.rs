use serde::{Deserialize, Serialize};

/// Seuils numériques de la politique de congés.
///
/// La liste des types dispensés de préavis reste portée par
/// [`LeaveType::requires_advance`](crate::model::LeaveType::requires_advance) ;
/// seuls les seuils sont surchargeables (fichier JSON partiel accepté).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeavePolicy {
    /// Jours de préavis minimum (date de début >= aujourd'hui + N).
    pub advance_notice_days: u32,
    /// Durée maximale d'une demande, bornes incluses.
    pub max_span_days: u32,
    pub reason_min_chars: usize,
    pub reason_max_chars: usize,
    pub min_contact_name_chars: usize,
    pub min_phone_digits: usize,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            advance_notice_days: 2,
            max_span_days: 365,
            reason_min_chars: 10,
            reason_max_chars: 500,
            min_contact_name_chars: 2,
            min_phone_digits: 10,
        }
    }
}
