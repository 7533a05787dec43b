// ============================================================================
// STORE HOOKS - Acceso al contenedor de stores y re-render al cambiar
// ============================================================================

use yew::prelude::*;

use crate::state::{AppState, ReactiveState};

/// El contenedor de stores que provee `App`
#[hook]
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState context is provided by App")
}

/// Valor actual de `state`; el componente se re-renderiza en cada cambio
#[hook]
pub fn use_reactive<T>(state: ReactiveState<T>) -> T
where
    T: Clone + 'static,
{
    let trigger = use_force_update();
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let id = state.subscribe(move || trigger.force_update());
            move || state.unsubscribe(id)
        });
    }
    state.get()
}
