use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_state;
use crate::models::ConfirmLoginQuery;
use crate::router::Route;

/// Página de vuelta del proveedor de identidad (`?state=..&code=..`)
#[function_component(LoginConfirmView)]
pub fn login_confirm_view() -> Html {
    let app = use_app_state();
    let navigator = use_navigator();
    let location = use_location();
    let failed = use_state(|| false);

    {
        let app = app.clone();
        let failed = failed.clone();
        let query = location.and_then(|location| location.query::<ConfirmLoginQuery>().ok());
        use_effect_with((), move |_| {
            match query {
                Some(query) => wasm_bindgen_futures::spawn_local(async move {
                    match app.user.confirm_login(&query.state, &query.code).await {
                        Ok(user) => {
                            app.alerts.success(format!("Welcome, {}", user.email));
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        Err(_) => failed.set(true),
                    }
                }),
                None => {
                    app.alerts.error("The login link is incomplete, please log in again");
                    failed.set(true);
                }
            }
            || ()
        });
    }

    html! {
        <section class="login-view">
            if *failed {
                <p>{ "Login could not be confirmed." }</p>
                <Link<Route> to={Route::Login}>{ "Try again" }</Link<Route>>
            } else {
                <p>{ "Confirming your login…" }</p>
            }
        </section>
    }
}
