use wasm_bindgen::prelude::*;

use super::traits::{MapRenderer, PetMarker};
use crate::error::MapError;
use crate::models::{FeatureCollection, Location};

// El glue JS vive en index.html (Leaflet)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initPetMap, catch)]
    fn js_init_pet_map(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: f64,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = addPetMarker, catch)]
    fn js_add_pet_marker(marker_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = setPetLayer, catch)]
    fn js_set_pet_layer(geojson: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = clearPetMap, catch)]
    fn js_clear_pet_map() -> Result<(), JsValue>;
}

fn js_error(value: JsValue) -> MapError {
    MapError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, MapError> {
    serde_json::to_string(value).map_err(|e| MapError::Js(e.to_string()))
}

/// Renderer respaldado por Leaflet en el navegador
#[derive(Default)]
pub struct WebMapRenderer {
    is_ready: bool,
}

impl WebMapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_ready(&self) -> Result<(), MapError> {
        if self.is_ready {
            Ok(())
        } else {
            Err(MapError::NotReady)
        }
    }
}

impl MapRenderer for WebMapRenderer {
    fn initialize(
        &mut self,
        container_id: &str,
        center: Location,
        zoom: f64,
    ) -> Result<(), MapError> {
        log::info!(
            "🗺️ Inicializando mapa en #{} ({}, {})",
            container_id,
            center.lat,
            center.lng
        );
        js_init_pet_map(container_id, center.lat, center.lng, zoom).map_err(js_error)?;
        self.is_ready = true;
        Ok(())
    }

    fn add_pet_marker(&mut self, marker: &PetMarker) -> Result<(), MapError> {
        self.ensure_ready()?;
        js_add_pet_marker(&to_json(marker)?).map_err(js_error)?;
        log::debug!("📍 Marcador de mascota {} en ({}, {})", marker.id, marker.lat, marker.lng);
        Ok(())
    }

    fn set_pet_layer(&mut self, layer: &FeatureCollection) -> Result<(), MapError> {
        self.ensure_ready()?;
        js_set_pet_layer(&to_json(layer)?).map_err(js_error)?;
        log::info!("🐾 Capa de mascotas con {} puntos", layer.features.len());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MapError> {
        self.ensure_ready()?;
        js_clear_pet_map().map_err(js_error)
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}
