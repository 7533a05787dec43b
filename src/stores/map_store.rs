// ============================================================================
// MAP STORE - Ciclo de vida del mapa y marcadores de mascotas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use crate::config::MapConfig;
use crate::error::{AppError, MapError};
use crate::maps::{MapRenderer, PetMarker};
use crate::models::{Feature, FeatureCollection, Geometry, Location, Pet};
use crate::state::ReactiveState;
use crate::stores::AlertStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    pub loading: bool,
    pub error: Option<String>,
    pub ready: bool,
    pub marker_count: usize,
    pub layer_size: usize,
}

#[derive(Clone)]
pub struct MapStore {
    state: ReactiveState<MapState>,
    renderer: Rc<RefCell<Box<dyn MapRenderer>>>,
    alerts: AlertStore,
}

impl MapStore {
    pub fn new(renderer: Box<dyn MapRenderer>, alerts: AlertStore) -> Self {
        Self {
            state: ReactiveState::new(MapState::default()),
            renderer: Rc::new(RefCell::new(renderer)),
            alerts,
        }
    }

    /// Crea el mapa centrado en la ubicación configurada. Llamarlo otra vez
    /// reconstruye el mapa en un contenedor nuevo.
    pub fn initialize(&self, config: &MapConfig) -> Result<(), AppError> {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let center = Location::new(config.default_center_lat, config.default_center_lng);
        let result = self
            .renderer
            .borrow_mut()
            .initialize(&config.container_id, center, config.default_zoom);

        match result {
            Ok(()) => {
                self.state.update(|state| {
                    state.loading = false;
                    state.ready = true;
                    state.marker_count = 0;
                    state.layer_size = 0;
                });
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Coloca un marcador para `pet`
    pub fn add_marker(&self, pet: &Pet) -> Result<(), AppError> {
        if !pet.location.is_valid() {
            return Err(self.fail(
                MapError::InvalidCoordinates {
                    lat: pet.location.lat,
                    lng: pet.location.lng,
                }
                .into(),
            ));
        }

        let result = self
            .renderer
            .borrow_mut()
            .add_pet_marker(&PetMarker::from(pet));
        match result {
            Ok(()) => {
                self.state.update(|state| state.marker_count += 1);
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Dibuja todas las mascotas como una capa de puntos, reemplazando la anterior
    pub fn create_pet_layer(&self, pets: &[Pet]) -> Result<(), AppError> {
        let layer = pet_layer(pets);
        let size = layer.features.len();
        if size < pets.len() {
            log::warn!("⚠️ {} mascotas sin coordenadas válidas", pets.len() - size);
        }

        let result = self.renderer.borrow_mut().set_pet_layer(&layer);
        match result {
            Ok(()) => {
                self.state.update(|state| state.layer_size = size);
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    pub fn clear(&self) -> Result<(), AppError> {
        let result = self.renderer.borrow_mut().clear();
        result.map_err(|e| self.fail(e.into()))?;
        self.state.update(|state| {
            state.marker_count = 0;
            state.layer_size = 0;
        });
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.renderer.borrow().is_ready()
    }

    pub fn loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    pub fn state(&self) -> &ReactiveState<MapState> {
        &self.state
    }

    fn fail(&self, error: AppError) -> AppError {
        log::error!("❌ Mapa: {}", error);
        self.state.update(|state| {
            state.loading = false;
            state.error = Some(error.to_string());
        });
        self.alerts.error(error.user_message());
        error
    }
}

/// Puntos GeoJSON (`[lng, lat]`) de cada mascota con coordenadas válidas
pub fn pet_layer(pets: &[Pet]) -> FeatureCollection {
    pets.iter()
        .filter(|pet| pet.location.is_valid())
        .map(|pet| {
            let mut feature = Feature::from(Geometry::Point {
                coordinates: [pet.location.lng, pet.location.lat],
            });
            feature.id = Some(json!(pet.id));
            feature
                .properties
                .insert("name".to_string(), json!(pet.display_name()));
            if let Some(url) = &pet.image_url {
                feature.properties.insert("image-url".to_string(), json!(url));
            }
            feature
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingRenderer;

    fn pet(id: u64, lat: f64, lng: f64) -> Pet {
        Pet::new(id, Location::new(lat, lng))
    }

    fn ready_store() -> (MapStore, Rc<crate::test_support::RenderLog>, AlertStore) {
        let (renderer, log) = RecordingRenderer::new();
        let alerts = AlertStore::new();
        let store = MapStore::new(Box::new(renderer), alerts.clone());
        store.initialize(&MapConfig::default()).unwrap();
        (store, log, alerts)
    }

    #[test]
    fn initialize_uses_the_configured_centre() {
        let (store, log, _) = ready_store();

        let (container, center, zoom) = log.initialized.borrow().clone().unwrap();
        assert_eq!(container, "pet-map");
        assert_eq!(center, Location::new(53.217641, 6.566044));
        assert_eq!(zoom, 13.0);
        assert!(store.is_ready());
        assert!(!store.loading());
    }

    #[test]
    fn failed_initialization_sets_error() {
        let (renderer, _) = RecordingRenderer::failing();
        let alerts = AlertStore::new();
        let store = MapStore::new(Box::new(renderer), alerts.clone());

        assert!(store.initialize(&MapConfig::default()).is_err());
        assert!(!store.loading());
        assert_eq!(
            store.error().as_deref(),
            Some("map script error: Leaflet is not loaded")
        );
        assert_eq!(alerts.current().alert_type(), "alert-danger");
    }

    #[test]
    fn add_marker_draws_one_marker() {
        let (store, log, _) = ready_store();

        store
            .add_marker(&pet(5, 53.2, 6.5).with_name("Rex"))
            .unwrap();

        let markers = log.markers.borrow();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].label, "Rex");
        assert_eq!((markers[0].lat, markers[0].lng), (53.2, 6.5));
        assert_eq!(store.state().get().marker_count, 1);
    }

    #[test]
    fn add_marker_rejects_out_of_range_coordinates() {
        let (store, log, _) = ready_store();

        let result = store.add_marker(&pet(5, 120.0, 6.5));

        assert!(matches!(
            result,
            Err(AppError::Map(MapError::InvalidCoordinates { .. }))
        ));
        assert!(log.markers.borrow().is_empty());
    }

    #[test]
    fn markers_need_an_initialized_map() {
        let (renderer, _) = RecordingRenderer::new();
        let store = MapStore::new(Box::new(renderer), AlertStore::new());

        assert_eq!(
            store.add_marker(&pet(1, 0.0, 0.0)),
            Err(AppError::Map(MapError::NotReady))
        );
    }

    #[test]
    fn pet_layer_uses_lng_lat_order_and_skips_bad_points() {
        let (store, log, _) = ready_store();
        let pets = vec![pet(1, 53.2, 6.5), pet(2, f64::NAN, 0.0)];

        store.create_pet_layer(&pets).unwrap();

        let layers = log.layers.borrow();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].features.len(), 1);
        assert_eq!(
            layers[0].features[0].geometry,
            Geometry::Point {
                coordinates: [6.5, 53.2]
            }
        );
        assert_eq!(layers[0].features[0].id, Some(json!(1)));
        assert_eq!(store.state().get().layer_size, 1);
    }

    #[test]
    fn clear_resets_counters() {
        let (store, log, _) = ready_store();
        store.add_marker(&pet(1, 1.0, 1.0)).unwrap();

        store.clear().unwrap();

        assert_eq!(log.clears.get(), 1);
        assert_eq!(store.state().get().marker_count, 0);
    }
}
