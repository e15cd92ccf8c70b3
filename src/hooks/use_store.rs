use yew::prelude::*;

use crate::context::AppContext;
use crate::state::{Reducer, Store};

/// Snapshot del store; el componente se re-renderiza en cada dispatch
#[hook]
pub fn use_store<S>(store: &Store<S>) -> S
where
    S: Reducer + Clone + 'static,
{
    let update = use_force_update();
    use_effect_with(store.clone(), move |store| {
        let id = store.subscribe(move || update.force_update());
        let store = store.clone();
        move || store.unsubscribe(id)
    });
    store.snapshot()
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| {
        log::warn!("⚠️ AppContext no encontrado, creando uno nuevo");
        AppContext::browser()
    })
}
