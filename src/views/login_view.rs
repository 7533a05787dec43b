use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_state;
use crate::router::Route;

/// Arranca el login en cuanto se muestra
#[function_component(LoginView)]
pub fn login_view() -> Html {
    let app = use_app_state();
    let navigator = use_navigator();
    let failed = use_state(|| false);

    {
        let app = app.clone();
        let failed = failed.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match app.user.login().await {
                    Ok(true) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Ok(false) => match app.user.login_redirect_url() {
                        Some(url) => follow_redirect(&url),
                        None => {
                            app.alerts.error("Login is not available right now");
                            failed.set(true);
                        }
                    },
                    Err(_) => failed.set(true),
                }
            });
            || ()
        });
    }

    html! {
        <section class="login-view">
            if *failed {
                <p>{ "We could not log you in." }</p>
                <Link<Route> to={Route::Home}>{ "Back to the map" }</Link<Route>>
            } else {
                <p>{ "Logging you in…" }</p>
            }
        </section>
    }
}

/// Sale de la app hacia el proveedor de identidad
fn follow_redirect(url: &str) {
    log::info!("↪️ Redirigiendo al proveedor de identidad");
    let result = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|window| {
            window
                .location()
                .set_href(url)
                .map_err(|e| format!("{:?}", e))
        });
    if let Err(e) = result {
        log::error!("❌ No se pudo redirigir: {}", e);
    }
}
