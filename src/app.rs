// ============================================================================
// APP BOOTSTRAP - Arranque único: logging, stores, iconos, montaje
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{App, AppProps, IconRegistry, DOG};
use crate::config::CONFIG;
use crate::maps::WebMapRenderer;
use crate::services::ApiClient;
use crate::state::AppState;

/// Iconos disponibles para todos los componentes
pub fn default_icons() -> IconRegistry {
    let mut icons = IconRegistry::new();
    icons.register(DOG);
    icons
}

pub fn start() {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🐾 Iniciando LostPaw ({})", CONFIG.environment);

    let state = AppState::new(Rc::new(ApiClient::new()), Box::new(WebMapRenderer::new()));

    if let Err(e) = teardown_on_pagehide(state.clone()) {
        log::warn!("⚠️ No se pudo registrar el cierre: {:?}", e);
    }

    yew::Renderer::<App>::with_props(AppProps {
        state,
        icons: default_icons(),
    })
    .render();
}

/// `pagehide` también salta al entrar en la bfcache: con `persisted` la
/// página vuelve intacta y los stores siguen en uso.
fn on_pagehide(state: &AppState, persisted: bool) {
    if persisted {
        log::debug!("💤 Página en bfcache, stores intactos");
        return;
    }
    state.teardown();
}

fn teardown_on_pagehide(state: AppState) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
        on_pagehide(&state, e.persisted());
    }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>);

    window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
    // Se registra una vez y vive lo que dure la página
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::test_support::{MockApi, RecordingRenderer};

    fn logged_in_state() -> AppState {
        let (renderer, _) = RecordingRenderer::new();
        let state = AppState::new(MockApi::new(), Box::new(renderer));
        state
            .user
            .state()
            .update(|user| user.user = Some(User::new("a@b.com")));
        state.pets.state().subscribe(|| ());
        state
    }

    #[test]
    fn page_kept_in_bfcache_keeps_its_stores() {
        let state = logged_in_state();

        on_pagehide(&state, true);

        assert!(state.user.is_logged_in());
        assert_eq!(state.pets.state().subscriber_count(), 1);
    }

    #[test]
    fn page_unload_tears_the_stores_down() {
        let state = logged_in_state();

        on_pagehide(&state, false);

        assert!(!state.user.is_logged_in());
        assert_eq!(state.pets.state().subscriber_count(), 0);
    }

    #[test]
    fn dog_icon_is_registered_at_start() {
        let icons = default_icons();
        assert_eq!(icons.len(), 1);
        assert!(icons.get("dog").is_some());
    }
}
