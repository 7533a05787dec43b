// ============================================================================
// MAP VIEW - Inicio: todas las mascotas conocidas sobre el mapa
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::SightingPanel;
use crate::config::CONFIG;
use crate::error::AppError;
use crate::hooks::{use_app_state, use_reactive};
use crate::state::AppState;

/// Dibuja la capa con las mascotas de la lista local. Solo se pide la
/// colección al backend cuando la lista está vacía, así los reportes hechos
/// desde el formulario no se pierden al volver al mapa.
pub async fn draw_known_pets(app: &AppState) -> Result<usize, AppError> {
    if app.pets.pets().is_empty() {
        app.pets.get_all().await?;
    }
    app.map.create_pet_layer(&app.pets.pets())?;
    Ok(app.map.state().with(|state| state.layer_size))
}

#[function_component(MapView)]
pub fn map_view() -> Html {
    let app = use_app_state();
    let map = use_reactive(app.map.state().clone());
    let pets = use_reactive(app.pets.state().clone());

    {
        let app = app.clone();
        use_effect_with((), move |_| {
            // Dar un frame al contenedor antes de que Leaflet lo tome
            let timeout = Timeout::new(100, move || {
                if app.map.initialize(&CONFIG.map_config).is_err() {
                    return;
                }
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = draw_known_pets(&app).await;
                });
            });
            move || drop(timeout)
        });
    }

    let status = if map.loading || pets.loading {
        html! { <p class="map-status">{ "Loading map…" }</p> }
    } else if let Some(error) = map.error.clone() {
        html! { <p class="map-status map-error">{ error }</p> }
    } else {
        html! { <p class="map-status">{ format!("{} pets on the map", map.layer_size) }</p> }
    };

    html! {
        <section class="map-view">
            <div id={CONFIG.map_config.container_id.clone()} class="pet-map"></div>
            { status }
            <SightingPanel />
        </section>
    }
}
