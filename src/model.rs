use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Erreurs de lecture des valeurs saisies (type de congé, heures, etc.)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown leave type: {0}")]
    UnknownLeaveType(String),
    #[error("unknown half-day period: {0}")]
    UnknownHalfDayPeriod(String),
    #[error("invalid time of day: {0} (expected HH:MM)")]
    InvalidTimeOfDay(String),
}

/// Types de congés reconnus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
    Emergency,
    Maternity,
    Paternity,
    Bereavement,
    Compensatory,
    Study,
    Unpaid,
}

impl LeaveType {
    pub const ALL: [LeaveType; 10] = [
        LeaveType::Vacation,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Emergency,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Bereavement,
        LeaveType::Compensatory,
        LeaveType::Study,
        LeaveType::Unpaid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Emergency => "emergency",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Bereavement => "bereavement",
            LeaveType::Compensatory => "compensatory",
            LeaveType::Study => "study",
            LeaveType::Unpaid => "unpaid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Vacation => "Vacation Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Personal => "Personal Leave",
            LeaveType::Emergency => "Emergency Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::Paternity => "Paternity Leave",
            LeaveType::Bereavement => "Bereavement Leave",
            LeaveType::Compensatory => "Compensatory Off",
            LeaveType::Study => "Study Leave",
            LeaveType::Unpaid => "Unpaid Leave",
        }
    }

    /// Préavis obligatoire ? (maladie, urgence et deuil en sont dispensés)
    pub fn requires_advance(self) -> bool {
        !matches!(
            self,
            LeaveType::Sick | LeaveType::Emergency | LeaveType::Bereavement
        )
    }

    /// Le congé sans solde ne consomme aucun solde.
    pub fn is_balance_exempt(self) -> bool {
        matches!(self, LeaveType::Unpaid)
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LeaveType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseError::UnknownLeaveType(s.to_string()))
    }
}

/// Demi-journée : matin ou après-midi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfDayPeriod {
    Morning,
    Afternoon,
}

impl fmt::Display for HalfDayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalfDayPeriod::Morning => f.write_str("morning"),
            HalfDayPeriod::Afternoon => f.write_str("afternoon"),
        }
    }
}

impl FromStr for HalfDayPeriod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" | "am" => Ok(HalfDayPeriod::Morning),
            "afternoon" | "pm" => Ok(HalfDayPeriod::Afternoon),
            _ => Err(ParseError::UnknownHalfDayPeriod(s.to_string())),
        }
    }
}

/// Brouillon de demande de congé, tel que saisi dans le formulaire.
///
/// Tous les champs ont une valeur par défaut : un formulaire partiel se
/// désérialise quand même, c'est la validation qui signale les manques.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveRequestDraft {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: String,
    pub is_half_day: bool,
    #[serde(deserialize_with = "lenient")]
    pub half_day_period: Option<HalfDayPeriod>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

impl LeaveRequestDraft {
    pub fn new<R: Into<String>>(
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: R,
    ) -> Self {
        Self {
            leave_type: Some(leave_type),
            start_date: Some(start_date),
            end_date: Some(end_date),
            reason: reason.into(),
            ..Self::default()
        }
    }

    pub fn half_day(mut self, period: HalfDayPeriod) -> Self {
        self.is_half_day = true;
        self.half_day_period = Some(period);
        self
    }

    pub fn emergency_contact<N: Into<String>, P: Into<String>>(mut self, name: N, phone: P) -> Self {
        self.emergency_contact_name = name.into();
        self.emergency_contact_phone = phone.into();
        self
    }
}

/// Valeur inconnue ou vide => `None` (au lieu d'une erreur de désérialisation).
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Soldes de congés restants par type (en jours, demi-journées comprises).
/// Un type absent signifie « solde inconnu ».
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveBalance(BTreeMap<LeaveType, f64>);

impl LeaveBalance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, leave_type: LeaveType, days: f64) -> Self {
        self.set(leave_type, days);
        self
    }

    pub fn set(&mut self, leave_type: LeaveType, days: f64) {
        self.0.insert(leave_type, days);
    }

    pub fn available(&self, leave_type: LeaveType) -> Option<f64> {
        self.0.get(&leave_type).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeaveType, f64)> + '_ {
        self.0.iter().map(|(t, d)| (*t, *d))
    }
}

impl FromIterator<(LeaveType, f64)> for LeaveBalance {
    fn from_iter<I: IntoIterator<Item = (LeaveType, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Définition d'un shift (heures locales, sans date).
/// `end_time < start_time` => le shift passe minuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDefinition {
    pub name: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub break_duration_minutes: u32,
    #[serde(default)]
    pub grace_period_minutes: u32,
}

impl ShiftDefinition {
    pub fn new<N: Into<String>>(name: N, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
            break_duration_minutes: 0,
            grace_period_minutes: 0,
        }
    }
}

/// Lit une heure `HH:MM` (ou `HH:MM:SS`).
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ParseError> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ParseError::InvalidTimeOfDay(raw.to_string()))
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&t.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}

/// Identifiant fort pour Notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Notification affichée dans le panneau.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

fn default_kind() -> String {
    "info".to_string()
}

impl Notification {
    pub fn new<T: Into<String>, M: Into<String>>(
        title: T,
        message: M,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::random(),
            title: title.into(),
            message: message.into(),
            kind: default_kind(),
            read: false,
            created_at,
        }
    }
}
