// ============================================================================
// ROUTER - Tabla de rutas del cliente y guardia de autenticación
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app_state, use_reactive};
use crate::views::{LoginConfirmView, LoginView, MapView, MissingPetView, PetsView};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pets")]
    Pets,
    #[at("/missing-pet")]
    MissingPet,
    #[at("/login")]
    Login,
    #[at("/login/confirm")]
    ConfirmLogin,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Pets,
        Route::MissingPet,
        Route::Login,
        Route::ConfirmLogin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Pets => "pets",
            Route::MissingPet => "missing-pet",
            Route::Login => "login",
            Route::ConfirmLogin => "confirm-login",
        }
    }

    /// Metadato `auth`: solo accesible con sesión
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Pets | Route::MissingPet)
    }
}

/// Una fila de la tabla de rutas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: String,
    pub auth: bool,
    pub route: Route,
}

pub fn route_table() -> Vec<RouteEntry> {
    Route::ALL
        .iter()
        .map(|route| RouteEntry {
            name: route.name(),
            path: route.to_path(),
            auth: route.requires_auth(),
            route: *route,
        })
        .collect()
}

/// La ruta que realmente se muestra: las protegidas mandan al login a quien
/// no tiene sesión
pub fn guard(route: Route, logged_in: bool) -> Route {
    if route.requires_auth() && !logged_in {
        Route::Login
    } else {
        route
    }
}

pub fn switch(route: Route) -> Html {
    html! { <GuardedRoute {route} /> }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: Route,
}

#[function_component(GuardedRoute)]
fn guarded_route(props: &GuardedRouteProps) -> Html {
    let app = use_app_state();
    let user = use_reactive(app.user.state().clone());

    let target = guard(props.route, user.is_logged_in());
    if target != props.route {
        log::info!("🔒 /{} requiere sesión, redirigiendo a login", props.route.name());
        return html! { <Redirect<Route> to={target} /> };
    }

    match target {
        Route::Home => html! { <MapView /> },
        Route::Pets => html! { <PetsView /> },
        Route::MissingPet => html! { <MissingPetView /> },
        Route::Login => html! { <LoginView /> },
        Route::ConfirmLogin => html! { <LoginConfirmView /> },
    }
}
