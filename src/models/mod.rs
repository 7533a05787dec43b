pub mod alert;
pub mod geojson;
pub mod pet;
pub mod user;

pub use alert::{Alert, AlertKind};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use pet::{Location, Pet, PetAge};
pub use user::{ConfirmLoginQuery, LoginResponse, PetMatch, User};
