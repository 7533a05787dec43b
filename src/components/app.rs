use yew::prelude::*;
use yew_router::prelude::*;

use super::{AlertBanner, IconRegistry, Nav};
use crate::router::{switch, Route};
use crate::state::AppState;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub state: AppState,
    pub icons: IconRegistry,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppState> context={props.state.clone()}>
            <ContextProvider<IconRegistry> context={props.icons.clone()}>
                <BrowserRouter>
                    <Nav />
                    <AlertBanner />
                    <main class="content">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<IconRegistry>>
        </ContextProvider<AppState>>
    }
}
