// ============================================================================
// WINDOW EVENTS - Difusión del logout a toda la app
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::constants::LOGGED_OUT_EVENT;

/// Emite el evento `loggedOut` en window
pub fn broadcast_logged_out() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let event = web_sys::Event::new(LOGGED_OUT_EVENT)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Escucha `loggedOut` y recarga la página completa.
/// Solo se registra una vez, desde el componente raíz.
pub fn reload_on_logged_out() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        log::info!("🔄 Logout recibido, recargando página...");
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().reload() {
                log::error!("❌ Error recargando: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    window.add_event_listener_with_callback(LOGGED_OUT_EVENT, closure.as_ref().unchecked_ref())?;
    // El listener vive mientras viva la página
    closure.forget();
    Ok(())
}
