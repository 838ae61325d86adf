use crate::model::{Notification, NotificationId};
use serde::Serialize;

/// État du panneau de notifications.
///
/// `unread_count` est toujours recalculé à partir de `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationState {
    pub items: Vec<Notification>,
    pub unread_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotificationState {
    pub fn find(&self, id: &NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| &n.id == id)
    }
}

/// Actions acceptées par le réducteur.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    /// Remplace la liste (triée du plus récent au plus ancien).
    SetAll(Vec<Notification>),
    /// Ajoute en tête ; `None` ne change rien.
    Add(Option<Notification>),
    MarkRead(NotificationId),
    MarkAllRead,
    Remove(NotificationId),
    Clear,
    SetLoading(bool),
    SetError(Option<String>),
}
