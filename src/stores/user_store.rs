// ============================================================================
// USER STORE - Estado de sesión y el ida y vuelta del login
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::{LoginResponse, User};
use crate::services::LostPawApi;
use crate::state::ReactiveState;
use crate::stores::AlertStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    /// `None` es el estado sin sesión
    pub user: Option<User>,
    /// Adónde quiere el proveedor de identidad que vaya el navegador
    pub login_redirect_url: Option<String>,
}

impl UserState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone)]
pub struct UserStore {
    state: ReactiveState<UserState>,
    api: Rc<dyn LostPawApi>,
    alerts: AlertStore,
}

impl UserStore {
    pub fn new(api: Rc<dyn LostPawApi>, alerts: AlertStore) -> Self {
        Self {
            state: ReactiveState::new(UserState::default()),
            api,
            alerts,
        }
    }

    /// Devuelve si la sesión queda autenticada. Con un usuario en caché no se
    /// toca la red.
    pub async fn login(&self) -> Result<bool, AppError> {
        if self.is_logged_in() {
            return Ok(true);
        }

        let response = match self.api.login().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                self.alerts.error(e.user_message());
                return Err(e);
            }
        };

        match response {
            LoginResponse::Done { email } => {
                log::info!("✅ Sesión iniciada: {}", email);
                self.state.update(|state| {
                    state.user = Some(User::new(email));
                    state.login_redirect_url = None;
                });
            }
            LoginResponse::Redirect { url } => {
                log::info!("↪️ El login sigue en {}", url);
                self.state.update(|state| state.login_redirect_url = Some(url));
            }
            LoginResponse::ProvideCredentials => {
                log::warn!("⚠️ El servidor pide credenciales, sin redirección");
            }
        }

        Ok(self.is_logged_in())
    }

    /// Termina un login por redirección con lo que el proveedor de identidad
    /// añadió a `/login/confirm`
    pub async fn confirm_login(&self, state: &str, code: &str) -> Result<User, AppError> {
        match self.api.confirm_login(state, code).await {
            Ok(user) => {
                log::info!("✅ Login confirmado: {}", user.email);
                let confirmed = user.clone();
                self.state.set(UserState {
                    user: Some(confirmed),
                    login_redirect_url: None,
                });
                Ok(user)
            }
            Err(e) => {
                log::error!("❌ Error confirmando login: {}", e);
                self.alerts.error(e.user_message());
                Err(e)
            }
        }
    }

    /// Olvida la sesión local
    pub fn logout(&self) {
        self.state.set(UserState::default());
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with(UserState::is_logged_in)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user.clone())
    }

    pub fn login_redirect_url(&self) -> Option<String> {
        self.state.with(|state| state.login_redirect_url.clone())
    }

    pub fn state(&self) -> &ReactiveState<UserState> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertKind;
    use crate::test_support::MockApi;
    use futures::executor::block_on;

    fn store(api: &Rc<MockApi>) -> (UserStore, AlertStore) {
        let alerts = AlertStore::new();
        (UserStore::new(api.clone(), alerts.clone()), alerts)
    }

    #[test]
    fn cached_user_skips_the_network() {
        let api = MockApi::new();
        let (store, _) = store(&api);
        store.state().set(UserState {
            user: Some(User::new("a@b.com")),
            login_redirect_url: None,
        });

        assert_eq!(block_on(store.login()), Ok(true));
        assert_eq!(api.login_calls.get(), 0);
    }

    #[test]
    fn done_logs_the_user_in() {
        let api = MockApi::new();
        api.push_login(Ok(LoginResponse::Done {
            email: "a@b.com".to_string(),
        }));
        let (store, _) = store(&api);

        assert_eq!(block_on(store.login()), Ok(true));
        assert!(store.is_logged_in());
        assert_eq!(store.user(), Some(User::new("a@b.com")));
        assert_eq!(api.login_calls.get(), 1);
    }

    #[test]
    fn redirect_records_the_target_and_stays_logged_out() {
        let api = MockApi::new();
        api.push_login(Ok(LoginResponse::Redirect {
            url: "/sso".to_string(),
        }));
        let (store, _) = store(&api);

        assert_eq!(block_on(store.login()), Ok(false));
        assert!(!store.is_logged_in());
        assert_eq!(store.login_redirect_url().as_deref(), Some("/sso"));
    }

    #[test]
    fn provide_credentials_is_not_a_login() {
        let api = MockApi::new();
        api.push_login(Ok(LoginResponse::ProvideCredentials));
        let (store, _) = store(&api);

        assert_eq!(block_on(store.login()), Ok(false));
        assert_eq!(store.login_redirect_url(), None);
    }

    #[test]
    fn failed_request_raises_an_error_alert() {
        let api = MockApi::new();
        api.push_login(Err(AppError::Http {
            status: 500,
            message: "boom".to_string(),
        }));
        let (store, alerts) = store(&api);

        let result = block_on(store.login());

        assert!(matches!(result, Err(AppError::Http { status: 500, .. })));
        assert!(!store.is_logged_in());
        assert_eq!(alerts.current().kind, AlertKind::Danger);
    }

    #[test]
    fn confirm_login_stores_the_user_and_drops_the_redirect() {
        let api = MockApi::new();
        api.push_login(Ok(LoginResponse::Redirect {
            url: "https://accounts.example/auth".to_string(),
        }));
        api.push_confirm(Ok(User::new("owner@example.com")));
        let (store, _) = store(&api);
        block_on(store.login()).unwrap();

        let user = block_on(store.confirm_login("csrf", "code-1")).unwrap();

        assert_eq!(user.email, "owner@example.com");
        assert!(store.is_logged_in());
        assert_eq!(store.login_redirect_url(), None);
        assert_eq!(
            *api.confirm_calls.borrow(),
            vec![("csrf".to_string(), "code-1".to_string())]
        );
    }

    #[test]
    fn logout_clears_the_session() {
        let api = MockApi::new();
        api.push_login(Ok(LoginResponse::Done {
            email: "a@b.com".to_string(),
        }));
        let (store, _) = store(&api);
        block_on(store.login()).unwrap();

        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.state().get(), UserState::default());
    }
}
