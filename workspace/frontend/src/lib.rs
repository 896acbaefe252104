use yew::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod download;
pub mod hooks;
pub mod settings;

use pages::PredictorPage;

#[function_component(App)]
pub fn app() -> Html {
    html! { <PredictorPage /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Filtering happens through log::set_max_level so host settings can still lower it
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(settings::get_settings().log_level.to_level_filter());

    log::info!("=== Profit Predictor Frontend Starting ===");

    wasm_bindgen_futures::spawn_local(async {
        settings::load_host_settings().await;

        let settings = settings::get_settings();
        log::set_max_level(settings.log_level.to_level_filter());
        log::info!("Application settings: {:?}", settings);
        log::debug!("Prediction API base URL: {}", settings.api_base);

        log::trace!("Initializing Yew renderer");
        yew::Renderer::<App>::new().render();
        log::info!("Application initialized successfully");
    });
}
