pub mod alert_store;
pub mod map_store;
pub mod pet_store;
pub mod user_store;

pub use alert_store::AlertStore;
pub use map_store::{MapState, MapStore};
pub use pet_store::{PetState, PetStore};
pub use user_store::{UserState, UserStore};
