// ============================================================================
// ALERT STORE - Una sola notificación viva, la siguiente la reemplaza
// ============================================================================

use crate::models::Alert;
use crate::state::ReactiveState;

#[derive(Clone)]
pub struct AlertStore {
    alert: ReactiveState<Alert>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self {
            alert: ReactiveState::new(Alert::empty()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        let alert = Alert::success(message);
        log::info!("✅ {}", alert.message);
        self.alert.set(alert);
    }

    pub fn error(&self, message: impl Into<String>) {
        let alert = Alert::error(message);
        log::warn!("❌ {}", alert.message);
        self.alert.set(alert);
    }

    pub fn clear(&self) {
        self.alert.set(Alert::empty());
    }

    pub fn current(&self) -> Alert {
        self.alert.get()
    }

    pub fn state(&self) -> &ReactiveState<Alert> {
        &self.alert
    }
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertKind;

    #[test]
    fn starts_empty() {
        let store = AlertStore::new();
        let alert = store.current();
        assert_eq!(alert.message, "");
        assert_eq!(alert.alert_type(), "");
    }

    #[test]
    fn success_then_clear_returns_to_empty() {
        let store = AlertStore::new();

        store.success("x");
        assert_eq!(store.current().alert_type(), "alert-success");

        store.clear();
        let alert = store.current();
        assert_eq!(alert.message, "");
        assert_eq!(alert.alert_type(), "");
        assert!(alert.is_empty());
    }

    #[test]
    fn next_alert_overwrites_the_previous_one() {
        let store = AlertStore::new();

        store.success("Pet saved");
        store.error("Could not load pets");

        let alert = store.current();
        assert_eq!(alert.message, "Could not load pets");
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(alert.alert_type(), "alert-danger");
    }

    #[test]
    fn clones_share_the_same_alert() {
        let store = AlertStore::new();
        let other = store.clone();

        other.success("shared");

        assert_eq!(store.current().message, "shared");
    }
}
