//! Dobles en memoria del backend y del mapa para los tests de los stores.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{AppError, MapError};
use crate::maps::{MapRenderer, PetMarker};
use crate::models::{FeatureCollection, Location, LoginResponse, PetMatch, User};
use crate::services::LostPawApi;

/// Backend guionado: cada llamada saca la siguiente respuesta de su endpoint
#[derive(Default)]
pub struct MockApi {
    pub login_responses: RefCell<VecDeque<Result<LoginResponse, AppError>>>,
    pub confirm_responses: RefCell<VecDeque<Result<User, AppError>>>,
    pub pets_responses: RefCell<VecDeque<Result<FeatureCollection, AppError>>>,
    pub sighting_responses: RefCell<VecDeque<Result<Vec<PetMatch>, AppError>>>,
    pub login_calls: Cell<usize>,
    pub confirm_calls: RefCell<Vec<(String, String)>>,
    pub pets_calls: Cell<usize>,
    pub sighting_calls: RefCell<Vec<(f64, f64, usize)>>,
}

impl MockApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push_login(&self, response: Result<LoginResponse, AppError>) {
        self.login_responses.borrow_mut().push_back(response);
    }

    pub fn push_confirm(&self, response: Result<User, AppError>) {
        self.confirm_responses.borrow_mut().push_back(response);
    }

    pub fn push_pets(&self, response: Result<FeatureCollection, AppError>) {
        self.pets_responses.borrow_mut().push_back(response);
    }

    pub fn push_sighting(&self, response: Result<Vec<PetMatch>, AppError>) {
        self.sighting_responses.borrow_mut().push_back(response);
    }
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, AppError>>>, endpoint: &str) -> Result<T, AppError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(AppError::Network(format!("no scripted response for {endpoint}"))))
}

#[async_trait(?Send)]
impl LostPawApi for MockApi {
    async fn login(&self) -> Result<LoginResponse, AppError> {
        self.login_calls.set(self.login_calls.get() + 1);
        next(&self.login_responses, "login")
    }

    async fn confirm_login(&self, state: &str, code: &str) -> Result<User, AppError> {
        self.confirm_calls
            .borrow_mut()
            .push((state.to_string(), code.to_string()));
        next(&self.confirm_responses, "login/confirm")
    }

    async fn fetch_pets(&self) -> Result<FeatureCollection, AppError> {
        self.pets_calls.set(self.pets_calls.get() + 1);
        next(&self.pets_responses, "pets")
    }

    async fn report_sighting(
        &self,
        lat: f64,
        lon: f64,
        image: Vec<u8>,
    ) -> Result<Vec<PetMatch>, AppError> {
        self.sighting_calls.borrow_mut().push((lat, lon, image.len()));
        next(&self.sighting_responses, "pet-spotted")
    }
}

/// Lo que se le pidió dibujar a un [`RecordingRenderer`]
#[derive(Default)]
pub struct RenderLog {
    pub initialized: RefCell<Option<(String, Location, f64)>>,
    pub markers: RefCell<Vec<PetMarker>>,
    pub layers: RefCell<Vec<FeatureCollection>>,
    pub clears: Cell<usize>,
}

/// Doble del mapa que registra llamadas; el log sigue legible después de
/// meter el renderer en un store
pub struct RecordingRenderer {
    pub log: Rc<RenderLog>,
    pub fail_init: bool,
    ready: bool,
}

impl RecordingRenderer {
    pub fn new() -> (Self, Rc<RenderLog>) {
        let log = Rc::new(RenderLog::default());
        (
            Self {
                log: log.clone(),
                fail_init: false,
                ready: false,
            },
            log,
        )
    }

    pub fn failing() -> (Self, Rc<RenderLog>) {
        let (mut renderer, log) = Self::new();
        renderer.fail_init = true;
        (renderer, log)
    }
}

impl MapRenderer for RecordingRenderer {
    fn initialize(
        &mut self,
        container_id: &str,
        center: Location,
        zoom: f64,
    ) -> Result<(), MapError> {
        if self.fail_init {
            return Err(MapError::Js("Leaflet is not loaded".to_string()));
        }
        *self.log.initialized.borrow_mut() = Some((container_id.to_string(), center, zoom));
        self.ready = true;
        Ok(())
    }

    fn add_pet_marker(&mut self, marker: &PetMarker) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        self.log.markers.borrow_mut().push(marker.clone());
        Ok(())
    }

    fn set_pet_layer(&mut self, layer: &FeatureCollection) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        self.log.layers.borrow_mut().push(layer.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), MapError> {
        self.log.clears.set(self.log.clears.get() + 1);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
