use crate::components::hooks::ScrollSubscription;
use crate::controllers::{ScrollProximityDetector, ScrollSample};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::{request_animation_frame, window_event_listener};
use leptos_router::hooks::use_location;

/// Reads the current window scroll measurements.
///
/// Returns `None` outside a browser or when a measurement is unavailable.
pub fn read_window_sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;

    Some(ScrollSample::new(scroll_top, viewport_height, document_height))
}

/// Re-evaluates `near_bottom` against the current window measurements.
pub fn resample_near_bottom(detector: ScrollProximityDetector, near_bottom: RwSignal<bool>) {
    if let Some(s) = read_window_sample() {
        let near = detector.on_sample(s);
        if near_bottom.get_untracked() != near {
            near_bottom.set(near);
        }
    }
}

/// Hook exposing whether the window is scrolled to within `threshold_px` of
/// the bottom of the page. Must be called inside a `<Router>`.
///
/// Samples on window `scroll` and `resize`, and after every route change (new
/// content changes the page height without any scroll event). Listeners are
/// detached on cleanup.
pub fn use_near_bottom(threshold_px: f64) -> Signal<bool> {
    let detector = ScrollProximityDetector::new(threshold_px);
    let near_bottom = RwSignal::new(false);
    let sample = move || resample_near_bottom(detector, near_bottom);

    let pathname = use_location().pathname;
    Effect::new(move |_| {
        pathname.track();
        // Measure once the new route has been laid out.
        request_animation_frame(sample);
    });

    let subscription =
        ScrollSubscription::new(window_event_listener(ev::scroll, move |_ev: web_sys::Event| {
            sample()
        }))
        .with(window_event_listener(ev::resize, move |_ev: web_sys::UiEvent| {
            sample()
        }));
    on_cleanup(move || drop(subscription));

    near_bottom.into()
}
