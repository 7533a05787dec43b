// Renderizado del mapa: el trait de cada backend y el del navegador

pub mod traits;
pub mod web;

pub use traits::{MapRenderer, PetMarker};
pub use web::WebMapRenderer;
