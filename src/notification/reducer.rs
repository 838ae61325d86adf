use super::types::{NotificationAction, NotificationState};
use crate::model::Notification;

/// Transition pure : consomme l'état courant et renvoie le suivant.
pub fn reduce(mut state: NotificationState, action: NotificationAction) -> NotificationState {
    match action {
        NotificationAction::SetAll(mut items) => {
            // tri stable : à date égale, l'ordre reçu est conservé
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            state.items = items;
            state.loading = false;
            state.error = None;
        }
        NotificationAction::Add(None) => return state,
        NotificationAction::Add(Some(item)) => {
            state.items.insert(0, item);
        }
        NotificationAction::MarkRead(id) => {
            if let Some(item) = state.items.iter_mut().find(|n| n.id == id) {
                item.read = true;
            }
        }
        NotificationAction::MarkAllRead => {
            for item in state.items.iter_mut() {
                item.read = true;
            }
        }
        NotificationAction::Remove(id) => {
            state.items.retain(|n| n.id != id);
        }
        NotificationAction::Clear => {
            state.items.clear();
        }
        NotificationAction::SetLoading(loading) => {
            state.loading = loading;
        }
        NotificationAction::SetError(error) => {
            if error.is_some() {
                state.loading = false;
            }
            state.error = error;
        }
    }
    state.unread_count = unread(&state.items);
    state
}

fn unread(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}
