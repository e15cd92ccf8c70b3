use product_dashboard::{App, CONFIG};

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }
    log::info!("🚀 Product Dashboard starting ({})...", CONFIG.environment);
    log::info!("🔗 Backend: {}", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
