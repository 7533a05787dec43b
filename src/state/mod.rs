// ============================================================================
// STATE MODULE - Valores reactivos y el contenedor de stores
// ============================================================================

pub mod app_state;
pub mod reactivity;

pub use app_state::AppState;
pub use reactivity::{ReactiveState, SubscriptionId};
