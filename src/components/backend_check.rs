use crate::api::ApiClient;
use crate::components::ui::Spinner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

/// Pings the backend once per mount and logs the answer to the console.
#[component]
pub fn BackendCheck() -> impl IntoView {
    let checking: RwSignal<bool> = RwSignal::new(true);

    spawn_local(async move {
        let api_client = ApiClient::from_env();
        match api_client.check_backend().await {
            Ok(data) => console::log_1(&data.to_string().into()),
            Err(e) if e.is_unreachable() => {
                console::warn_1(&format!("Error: backend unreachable: {e}").into())
            }
            Err(e) => console::error_1(&format!("Error: {e}").into()),
        }
        // The owner may already be gone by the time the request settles.
        checking.try_set(false);
    });

    view! {
        <div data-name="BackendCheck" class="flex items-center gap-2 px-4 py-1 text-xs text-muted-foreground">
            <Show when=move || checking.get() fallback=|| ().into_view()>
                <Spinner class="size-3" />
            </Show>
            "Test de connexion au backend"
        </div>
    }
}
