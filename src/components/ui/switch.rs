use leptos::prelude::*;
use tw_merge::tw_merge;

/// On/off switch (e.g. "Se souvenir de moi"). Purely local state.
#[component]
pub fn Switch(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into)] checked: RwSignal<bool>,
) -> impl IntoView {
    let track_class = move || {
        tw_merge!(
            "peer inline-flex h-5 w-9 shrink-0 items-center rounded-full border border-transparent shadow-xs transition-colors outline-none focus-visible:ring-2 focus-visible:ring-ring/50 hover:cursor-pointer",
            if checked.get() { "bg-primary" } else { "bg-input" },
            class.clone()
        )
    };
    let thumb_class = move || {
        tw_merge!(
            "pointer-events-none block size-4 rounded-full bg-background shadow-sm ring-0 transition-transform",
            if checked.get() { "translate-x-4" } else { "translate-x-0" }
        )
    };

    view! {
        <button
            data-name="Switch"
            type="button"
            role="switch"
            id=id
            aria-checked=move || if checked.get() { "true" } else { "false" }
            class=track_class
            on:click=move |_| checked.update(|c| *c = !*c)
        >
            <span class=thumb_class />
        </button>
    }
}
