// ============================================================================
// APP STATE - Contenedor de todos los stores, creado una vez al arrancar
// ============================================================================

use std::rc::Rc;

use crate::maps::MapRenderer;
use crate::services::LostPawApi;
use crate::stores::{AlertStore, MapStore, PetStore, UserStore};

/// Se pasa al árbol de componentes como contexto. Clonar es barato; los
/// clones comparten los mismos stores.
#[derive(Clone)]
pub struct AppState {
    pub alerts: AlertStore,
    pub pets: PetStore,
    pub user: UserStore,
    pub map: MapStore,
}

impl AppState {
    pub fn new(api: Rc<dyn LostPawApi>, renderer: Box<dyn MapRenderer>) -> Self {
        let alerts = AlertStore::new();
        Self {
            pets: PetStore::new(api.clone(), alerts.clone()),
            user: UserStore::new(api, alerts.clone()),
            map: MapStore::new(renderer, alerts.clone()),
            alerts,
        }
    }

    /// Suelta los suscriptores y devuelve cada store a su valor inicial
    pub fn teardown(&self) {
        log::info!("🧹 Cerrando stores");
        self.alerts.state().clear_subscribers();
        self.pets.state().clear_subscribers();
        self.user.state().clear_subscribers();
        self.map.state().clear_subscribers();

        self.alerts.clear();
        self.pets.state().set(Default::default());
        self.user.logout();
        self.map.state().set(Default::default());
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        self.alerts.state().ptr_eq(other.alerts.state())
            && self.pets.state().ptr_eq(other.pets.state())
            && self.user.state().ptr_eq(other.user.state())
            && self.map.state().ptr_eq(other.map.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, LoginResponse, Pet};
    use crate::test_support::{MockApi, RecordingRenderer};
    use futures::executor::block_on;

    fn app_state(api: &Rc<MockApi>) -> AppState {
        let (renderer, _) = RecordingRenderer::new();
        AppState::new(api.clone(), Box::new(renderer))
    }

    #[test]
    fn stores_share_one_alert_channel() {
        let api = MockApi::new();
        let state = app_state(&api);

        let _ = state.pets.delete(12);

        assert_eq!(state.alerts.current().message, "no pet with id 12");
    }

    #[test]
    fn clones_compare_equal_and_fresh_containers_do_not() {
        let api = MockApi::new();
        let state = app_state(&api);

        assert!(state == state.clone());
        assert!(state != app_state(&api));
    }

    #[test]
    fn teardown_resets_everything() {
        let api = MockApi::new();
        api.push_login(Ok(LoginResponse::Done {
            email: "a@b.com".to_string(),
        }));
        let state = app_state(&api);
        block_on(state.user.login()).unwrap();
        state.pets.add(Pet::new(1, Location::new(0.0, 0.0))).unwrap();
        state.alerts.success("saved");
        state.user.state().subscribe(|| {});

        state.teardown();

        assert!(!state.user.is_logged_in());
        assert!(state.pets.pets().is_empty());
        assert!(state.alerts.current().is_empty());
        assert_eq!(state.user.state().subscriber_count(), 0);
    }
}
