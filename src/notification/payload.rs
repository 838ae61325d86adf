use crate::model::Notification;
use serde::Deserialize;
use serde_json::Value;

/// Liste issue d'une réponse API : tout ce qui n'est pas un tableau donne
/// une liste vide, les entrées illisibles sont ignorées.
pub fn list_from_payload(payload: &Value) -> Vec<Notification> {
    let Some(entries) = payload.as_array() else {
        #[cfg(feature = "logging")]
        tracing::warn!("notification payload is not a list; treating as empty");
        return Vec::new();
    };
    entries.iter().filter_map(item_from_payload).collect()
}

/// Entrée unique : `null` ou illisible => `None`.
pub fn item_from_payload(payload: &Value) -> Option<Notification> {
    if payload.is_null() {
        return None;
    }
    match Notification::deserialize(payload) {
        Ok(item) => Some(item),
        Err(_err) => {
            #[cfg(feature = "logging")]
            tracing::warn!(error = %_err, "skipping malformed notification");
            None
        }
    }
}
