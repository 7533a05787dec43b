use yew::prelude::*;

use crate::hooks::{use_app_state, use_reactive};

/// Muestra la alerta actual; nada si está vacía
#[function_component(AlertBanner)]
pub fn alert_banner() -> Html {
    let app = use_app_state();
    let alert = use_reactive(app.alerts.state().clone());

    if alert.is_empty() {
        return Html::default();
    }

    let on_dismiss = {
        let alerts = app.alerts.clone();
        Callback::from(move |_: MouseEvent| alerts.clear())
    };

    html! {
        <div class={classes!("alert", alert.alert_type())} role="alert">
            <span class="alert-message">{ alert.message.clone() }</span>
            <button class="alert-close" onclick={on_dismiss} aria-label="Dismiss">{ "×" }</button>
        </div>
    }
}
