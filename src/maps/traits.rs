use serde::Serialize;

use crate::error::MapError;
use crate::models::{FeatureCollection, Location, Pet};

/// Superficie común de todo backend de mapa
pub trait MapRenderer {
    /// Crea el mapa dentro de `container_id`
    fn initialize(
        &mut self,
        container_id: &str,
        center: Location,
        zoom: f64,
    ) -> Result<(), MapError>;

    fn add_pet_marker(&mut self, marker: &PetMarker) -> Result<(), MapError>;

    /// Reemplaza la capa de mascotas por los puntos dados
    fn set_pet_layer(&mut self, layer: &FeatureCollection) -> Result<(), MapError>;

    fn clear(&mut self) -> Result<(), MapError>;

    fn is_ready(&self) -> bool;
}

/// Lo que el mapa necesita para dibujar una mascota
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetMarker {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub image_url: Option<String>,
}

impl From<&Pet> for PetMarker {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            lat: pet.location.lat,
            lng: pet.location.lng,
            label: pet.display_name(),
            image_url: pet.image_url.clone(),
        }
    }
}
