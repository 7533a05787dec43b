// ============================================================================
// MISSING PET VIEW - Formulario para reportar una mascota perdida
// ============================================================================

use serde_json::{json, Value};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_app_state;
use crate::models::Pet;
use crate::router::Route;

/// Los campos numéricos van como número si parsean; si no, como texto para
/// que la validación nombre el campo incorrecto
fn number_or_text(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    raw.parse::<f64>().map(Value::from).unwrap_or_else(|_| json!(raw))
}

/// Id para el siguiente reporte; `None` si ya no queda ninguno libre
fn next_pet_id(pets: &[Pet]) -> Option<u64> {
    match pets.iter().map(|pet| pet.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(MissingPetView)]
pub fn missing_pet_view() -> Html {
    let app = use_app_state();
    let navigator = use_navigator();

    let name_ref = use_node_ref();
    let age_ref = use_node_ref();
    let sex_ref = use_node_ref();
    let breed_ref = use_node_ref();
    let color_ref = use_node_ref();
    let size_ref = use_node_ref();
    let lat_ref = use_node_ref();
    let lng_ref = use_node_ref();

    let on_submit = {
        let app = app.clone();
        let refs = (
            name_ref.clone(),
            age_ref.clone(),
            sex_ref.clone(),
            breed_ref.clone(),
            color_ref.clone(),
            size_ref.clone(),
            lat_ref.clone(),
            lng_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, age, sex, breed, color, size, lat, lng) = &refs;

            let Some(next_id) = next_pet_id(&app.pets.pets()) else {
                app.alerts.error("No free pet id left");
                return;
            };
            let sex_value = sex
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();

            let lat = number_or_text(&input_value(lat));
            let lng = number_or_text(&input_value(lng));
            let location = if lat.is_null() && lng.is_null() {
                Value::Null
            } else {
                json!({ "lat": lat, "lng": lng })
            };

            let payload = json!({
                "id": next_id,
                "location": location,
                "name": input_value(name),
                "age": number_or_text(&input_value(age)),
                "sex": sex_value,
                "breed": input_value(breed),
                "color": input_value(color),
                "size": input_value(size),
            });

            let pet = match Pet::from_payload(&payload) {
                Ok(pet) => pet,
                Err(e) => {
                    app.alerts.error(format!("Please check the form: {}", e));
                    return;
                }
            };

            if app.pets.add(pet.clone()).is_err() {
                return;
            }
            if app.map.is_ready() {
                let _ = app.map.add_marker(&pet);
            }
            app.alerts.success(format!("{} reported missing", pet.display_name()));
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Pets);
            }
        })
    };

    let map_config = &CONFIG.map_config;

    html! {
        <section class="missing-pet-view">
            <h1>{ "Report a missing pet" }</h1>
            <form class="missing-pet-form" onsubmit={on_submit}>
                <label>{ "Name" }<input ref={name_ref} type="text" /></label>
                <label>{ "Age" }
                    <input ref={age_ref} type="text" placeholder="3 or \"puppy\"" />
                </label>
                <label>{ "Sex" }
                    <select ref={sex_ref}>
                        <option value="">{ "Unknown" }</option>
                        <option value="male">{ "Male" }</option>
                        <option value="female">{ "Female" }</option>
                    </select>
                </label>
                <label>{ "Breed" }<input ref={breed_ref} type="text" /></label>
                <label>{ "Color" }<input ref={color_ref} type="text" /></label>
                <label>{ "Size" }<input ref={size_ref} type="text" /></label>
                <fieldset>
                    <legend>{ "Last seen at" }</legend>
                    <label>{ "Latitude" }
                        <input ref={lat_ref} type="text" inputmode="decimal"
                               value={map_config.default_center_lat.to_string()} />
                    </label>
                    <label>{ "Longitude" }
                        <input ref={lng_ref} type="text" inputmode="decimal"
                               value={map_config.default_center_lng.to_string()} />
                    </label>
                </fieldset>
                <button type="submit">{ "Report" }</button>
            </form>
        </section>
    }
}
