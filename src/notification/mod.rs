//! Centre de notifications : réducteur pur + petit store injectable.

mod payload;
mod reducer;
mod types;

pub use payload::{item_from_payload, list_from_payload};
pub use reducer::reduce;
pub use types::{NotificationAction, NotificationState};

use serde_json::Value;
use std::time::Duration;

/// Période de rafraîchissement conseillée pendant une session active.
/// Le polling lui-même reste à la charge de l'appelant.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Source des notifications (API HTTP, fichier, test...).
pub trait NotificationFeed {
    /// Renvoie la charge utile brute ; elle est normalisée par le store.
    fn fetch(&self) -> anyhow::Result<Value>;
}

impl<T> NotificationFeed for T
where
    T: Fn() -> anyhow::Result<Value>,
{
    fn fetch(&self) -> anyhow::Result<Value> {
        self()
    }
}

/// Store : possède l'état et l'alimente via le réducteur.
#[derive(Debug)]
pub struct NotificationStore<F> {
    feed: F,
    state: NotificationState,
}

impl<F: NotificationFeed> NotificationStore<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            state: NotificationState::default(),
        }
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn unread_count(&self) -> usize {
        self.state.unread_count
    }

    pub fn into_state(self) -> NotificationState {
        self.state
    }

    pub fn dispatch(&mut self, action: NotificationAction) {
        #[cfg(feature = "logging")]
        tracing::debug!(?action, "notification action");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    /// Un cycle de rafraîchissement : chargement, puis liste ou erreur.
    pub fn refresh(&mut self) {
        self.dispatch(NotificationAction::SetLoading(true));
        match self.feed.fetch() {
            Ok(payload) => {
                self.dispatch(NotificationAction::SetAll(list_from_payload(&payload)));
            }
            Err(err) => {
                #[cfg(feature = "logging")]
                tracing::warn!(error = %err, "notification refresh failed");
                self.dispatch(NotificationAction::SetError(Some(format!("{err:#}"))));
            }
        }
    }

    /// Notification poussée individuellement (ex. événement temps réel).
    pub fn push_payload(&mut self, payload: &Value) {
        self.dispatch(NotificationAction::Add(item_from_payload(payload)));
    }
}
