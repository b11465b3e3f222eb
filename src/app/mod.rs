use crate::components::hooks::use_near_bottom;
use crate::components::{BackendCheck, Footer};
use crate::pages::{HomePage, LoginPage, SignupPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// The footer banner appears once the viewport is within this many pixels of the page end.
pub(crate) const FOOTER_REVEAL_MARGIN_PX: f64 = 50.0;

/// Out of flow: showing the banner must not change the measured page height.
pub(crate) const BOTTOM_MESSAGE_CLASS: &str = "fixed inset-x-0 bottom-0 z-20";

/// Footer shown only near the bottom of the page.
#[component]
fn BottomMessage() -> impl IntoView {
    let near_bottom = use_near_bottom(FOOTER_REVEAL_MARGIN_PX);

    view! {
        <div
            id="bottomMessage"
            class=BOTTOM_MESSAGE_CLASS
            aria-live="polite"
            style:display=move || if near_bottom.get() { "block" } else { "none" }
        >
            <Footer />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks (used by the bottom banner) require a <Router> context.
    view! {
        <div class="App pb-24" role="main">
            <BackendCheck />
            <Router>
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Page introuvable"</div> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("login") view=LoginPage />
                    <Route path=path!("signup") view=SignupPage />
                </Routes>
                <BottomMessage />
            </Router>
        </div>
    }
}
