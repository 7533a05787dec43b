use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Icon;
use crate::hooks::{use_app_state, use_reactive};
use crate::router::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let app = use_app_state();
    let user = use_reactive(app.user.state().clone());

    let on_logout = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            app.user.logout();
            app.alerts.success("Logged out");
        })
    };

    let session = match &user.user {
        Some(current) => html! {
            <>
                <span class="nav-user">{ current.email.clone() }</span>
                <button class="nav-logout" onclick={on_logout}>{ "Log out" }</button>
            </>
        },
        None => html! {
            <Link<Route> to={Route::Login} classes="nav-link">{ "Log in" }</Link<Route>>
        },
    };

    html! {
        <nav class="nav">
            <Link<Route> to={Route::Home} classes="nav-brand">
                <Icon name="dog" />
                <span>{ "LostPaw" }</span>
            </Link<Route>>
            <Link<Route> to={Route::Pets} classes="nav-link">{ "Pets" }</Link<Route>>
            <Link<Route> to={Route::MissingPet} classes="nav-link">
                { "Report missing pet" }
            </Link<Route>>
            <div class="nav-session">{ session }</div>
        </nav>
    }
}
