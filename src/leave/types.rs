use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Champ du formulaire auquel une erreur est rattachée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Type,
    StartDate,
    EndDate,
    Reason,
    IsHalfDay,
    EmergencyContactName,
    EmergencyContactPhone,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Reason => "reason",
            Field::IsHalfDay => "isHalfDay",
            Field::EmergencyContactName => "emergencyContactName",
            Field::EmergencyContactPhone => "emergencyContactPhone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Résultat d'une validation : `valid` ssi `errors` est vide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: BTreeMap<Field, String>,
}

impl Validation {
    pub(super) fn from_errors(errors: BTreeMap<Field, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }
}
