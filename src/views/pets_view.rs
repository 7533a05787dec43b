use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_app_state, use_reactive};
use crate::models::{Pet, PetAge};
use crate::services::asset_url;

#[function_component(PetsView)]
pub fn pets_view() -> Html {
    let app = use_app_state();
    let state = use_reactive(app.pets.state().clone());

    // Primera visita: cargar la colección
    {
        let app = app.clone();
        use_effect_with((), move |_| {
            if app.pets.pets().is_empty() {
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = app.pets.get_all().await;
                });
            }
            || ()
        });
    }

    let on_refresh = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = app.pets.get_all().await;
            });
        })
    };

    let rows: Html = state
        .pets
        .iter()
        .map(|pet| {
            let on_delete = {
                let app = app.clone();
                let id = pet.id;
                Callback::from(move |_: MouseEvent| {
                    if let Ok(removed) = app.pets.delete(id) {
                        app.alerts.success(format!("Removed {}", removed.display_name()));
                    }
                })
            };
            html! {
                <li key={pet.id} class="pet-row">
                    { pet_card(pet) }
                    <button class="pet-delete" onclick={on_delete}>{ "Remove" }</button>
                </li>
            }
        })
        .collect();

    html! {
        <section class="pets-view">
            <header class="pets-header">
                <h1>{ "Pets" }</h1>
                <button onclick={on_refresh} disabled={state.loading}>{ "Refresh" }</button>
            </header>
            if state.loading {
                <p class="pets-status">{ "Loading pets…" }</p>
            } else if state.pets.is_empty() {
                <p class="pets-status">{ "No pets reported yet." }</p>
            }
            <ul class="pet-list">{ rows }</ul>
        </section>
    }
}

fn pet_card(pet: &Pet) -> Html {
    let details: Vec<String> = [
        pet.breed.clone(),
        pet.color.clone(),
        pet.size.clone(),
        pet.sex.clone(),
        pet.age.as_ref().map(|age| match age {
            PetAge::Years(years) => format!("{} years", years),
            PetAge::Text(text) => text.clone(),
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    html! {
        <div class="pet-card">
            if let Some(url) = pet.image_url.as_deref() {
                <img class="pet-photo" src={asset_url(CONFIG.backend_url(), url)}
                     alt={pet.display_name()} />
            }
            <div class="pet-info">
                <strong>{ pet.display_name() }</strong>
                <span class="pet-details">{ details.join(" · ") }</span>
                <span class="pet-location">
                    { format!("{:.5}, {:.5}", pet.location.lat, pet.location.lng) }
                </span>
            </div>
        </div>
    }
}
