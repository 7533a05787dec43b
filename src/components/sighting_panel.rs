// ============================================================================
// SIGHTING PANEL - Foto de una mascota avistada y sus coincidencias
// ============================================================================

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::ValidationError;
use crate::hooks::{use_app_state, use_reactive};
use crate::models::{Location, PetMatch};
use crate::services::asset_url;

/// Posición del avistamiento a partir de los campos del formulario
pub fn sighting_position(lat: &str, lon: &str) -> Result<Location, ValidationError> {
    let coordinate = |field: &'static str, raw: &str| -> Result<f64, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
        raw.parse::<f64>()
            .map_err(|_| ValidationError::invalid(field, "expected a number"))
    };

    let location = Location::new(coordinate("lat", lat)?, coordinate("lon", lon)?);
    if !location.is_valid() {
        return Err(ValidationError::invalid(
            "location",
            format!("({}, {}) is out of range", location.lat, location.lng),
        ));
    }
    Ok(location)
}

/// Texto del aviso tras un avistamiento
pub fn sighting_summary(matches: &[PetMatch]) -> String {
    match matches {
        [] => "No known pet looks like this one".to_string(),
        [only] => format!("This could be {}", only.name),
        many => format!("{} pets look like this one", many.len()),
    }
}

async fn read_file(file: web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[function_component(SightingPanel)]
pub fn sighting_panel() -> Html {
    let app = use_app_state();
    let pets = use_reactive(app.pets.state().clone());

    let photo_ref = use_node_ref();
    let lat_ref = use_node_ref();
    let lon_ref = use_node_ref();

    let on_submit = {
        let app = app.clone();
        let refs = (photo_ref.clone(), lat_ref.clone(), lon_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (photo, lat, lon) = &refs;

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let location = match sighting_position(&value(lat), &value(lon)) {
                Ok(location) => location,
                Err(e) => {
                    app.alerts.error(format!("Please check the sighting: {}", e));
                    return;
                }
            };
            let file = photo
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                app.alerts.error("Choose a photo of the pet first");
                return;
            };

            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let image = match read_file(file).await {
                    Ok(image) => image,
                    Err(e) => {
                        log::error!("❌ No se pudo leer la foto: {}", e);
                        app.alerts.error("Could not read the photo");
                        return;
                    }
                };
                if let Ok(matches) = app
                    .pets
                    .report_sighting(location.lat, location.lng, image)
                    .await
                {
                    app.alerts.success(sighting_summary(&matches));
                }
            });
        })
    };

    let base_url = CONFIG.backend_url();
    let matches: Html = pets
        .matches
        .iter()
        .map(|candidate| {
            html! {
                <li key={candidate.name.clone()} class="match-row">
                    <img class="pet-photo" src={asset_url(base_url, &candidate.image_url)}
                         alt={candidate.name.clone()} />
                    <div class="pet-info">
                        <strong>{ candidate.name.clone() }</strong>
                        <span class="pet-details">
                            { format!("distance {:.2}", candidate.distance) }
                        </span>
                    </div>
                </li>
            }
        })
        .collect();

    let map_config = &CONFIG.map_config;

    html! {
        <section class="sighting-panel">
            <h2>{ "Spotted a pet?" }</h2>
            <form class="sighting-form" onsubmit={on_submit}>
                <label>{ "Photo" }<input ref={photo_ref} type="file" accept="image/*" /></label>
                <label>{ "Latitude" }
                    <input ref={lat_ref} type="text" inputmode="decimal"
                           value={map_config.default_center_lat.to_string()} />
                </label>
                <label>{ "Longitude" }
                    <input ref={lon_ref} type="text" inputmode="decimal"
                           value={map_config.default_center_lng.to_string()} />
                </label>
                <button type="submit" disabled={pets.loading}>{ "Find matches" }</button>
            </form>
            if !pets.matches.is_empty() {
                <ul class="match-list">{ matches }</ul>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidate(name: &str) -> PetMatch {
        PetMatch {
            name: name.to_string(),
            image_url: format!("/api/v1/pets/{name}.jpg"),
            distance: 0.5,
        }
    }

    #[test]
    fn position_is_read_from_the_form() {
        assert_eq!(
            sighting_position(" 53.2 ", "6.5"),
            Ok(Location::new(53.2, 6.5))
        );
    }

    #[rstest]
    #[case::empty_lat("", "6.5", "lat")]
    #[case::text_lon("53.2", "east", "lon")]
    #[case::out_of_range("95", "6.5", "location")]
    fn bad_positions_name_the_field(#[case] lat: &str, #[case] lon: &str, #[case] field: &str) {
        let named = match sighting_position(lat, lon) {
            Err(ValidationError::MissingField(got)) => got,
            Err(ValidationError::InvalidField { field: got, .. }) => got,
            other => panic!("expected a validation error, got {other:?}"),
        };
        assert_eq!(named, field);
    }

    #[test]
    fn summary_depends_on_the_number_of_matches() {
        assert_eq!(sighting_summary(&[]), "No known pet looks like this one");
        assert_eq!(sighting_summary(&[candidate("rex")]), "This could be rex");
        assert_eq!(
            sighting_summary(&[candidate("rex"), candidate("luna")]),
            "2 pets look like this one"
        );
    }
}
