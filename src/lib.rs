// ============================================================================
// LOSTPAW WEB - Mascotas perdidas y encontradas en un mapa (Yew, Rust puro)
// ============================================================================
// - Models: registros tipados a partir de los payloads del backend
// - State: valores reactivos y el contenedor de stores
// - Stores: alertas, mascotas, usuario y mapa con sus acciones
// - Services: solo comunicación con el backend
// - Views / Components: renderizado, sin lógica de negocio
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod views;

#[cfg(test)]
mod test_support;

pub use app::start;
pub use error::{AppError, MapError, ValidationError};
