mod api;
mod app;
mod components;
pub mod controllers;
mod models;
mod pages;

pub use app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{join_url, EnvConfig, TEST_PATH};
    use crate::components::hooks::{read_window_sample, resample_near_bottom};
    use crate::controllers::ScrollProximityDetector;
    use leptos::prelude::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_window_sample_is_readable() {
        let sample = read_window_sample().expect("browser should expose scroll metrics");
        assert!(sample.viewport_height > 0.0);
        assert!(sample.document_height >= 0.0);
    }

    #[wasm_bindgen_test]
    fn test_resample_clears_banner_when_content_grows_without_scrolling() {
        let window = web_sys::window().expect("browser window");
        let document = window.document().expect("document");
        let body = document.body().expect("body");

        // A route change swaps in taller content while scrollY stays at 0.
        let filler = document.create_element("div").expect("create div");
        filler
            .set_attribute("style", "height: 5000px")
            .expect("set style");
        body.append_child(&filler).expect("append filler");
        window.scroll_to_with_x_and_y(0.0, 0.0);

        let near_bottom = RwSignal::new(true);
        resample_near_bottom(ScrollProximityDetector::new(50.0), near_bottom);
        assert!(!near_bottom.get_untracked());

        window.scroll_to_with_x_and_y(0.0, 100_000.0);
        resample_near_bottom(ScrollProximityDetector::new(50.0), near_bottom);
        assert!(near_bottom.get_untracked());

        body.remove_child(&filler).expect("remove filler");
    }

    #[wasm_bindgen_test]
    fn test_env_config_defaults_to_page_origin() {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .expect("runner page has an origin");
        let cfg = EnvConfig::new();
        assert_eq!(cfg.api_url, origin);
        assert_eq!(join_url(&cfg.api_url, TEST_PATH), format!("{origin}/api/test"));
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
