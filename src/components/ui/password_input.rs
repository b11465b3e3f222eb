use crate::components::hooks::{use_random_id_for, use_reveal_toggle};
use crate::components::ui::input::{bind_input_value, INPUT_BASE_CLASS};
use crate::controllers::IconKind;
use icons::{Eye, EyeOff};
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Password field with a show/hide button.
///
/// Input `type` and icon both come from the same `RevealToggle` snapshot.
#[component]
pub fn PasswordInput(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let (toggle, on_toggle) = use_reveal_toggle();
    let id = if id.is_empty() {
        use_random_id_for("password")
    } else {
        id
    };
    let merged_class = tw_merge!(INPUT_BASE_CLASS, "pr-10", class);

    let input_type = move || toggle.get().current_display_mode().input_type();
    let icon_kind = move || toggle.get().current_icon_kind();

    view! {
        <div data-name="PasswordInput" class="relative w-full">
            <input
                type=input_type
                class=merged_class
                placeholder=placeholder
                name=name
                id=id.clone()
                required=required
                prop:value=move || bind_value.get()
                on:input=move |ev| bind_input_value(&ev, bind_value)
            />
            <button
                type="button"
                class="absolute inset-y-0 right-0 flex w-10 items-center justify-center text-muted-foreground hover:text-foreground hover:cursor-pointer"
                aria-controls=id
                aria-label=move || icon_kind().aria_label()
                aria-pressed=move || if toggle.get().is_revealed() { "true" } else { "false" }
                on:click=move |_| on_toggle.run(())
            >
                {move || match icon_kind() {
                    IconKind::Eye => view! { <Eye class="size-4" /> }.into_any(),
                    IconKind::EyeSlash => view! { <EyeOff class="size-4" /> }.into_any(),
                }}
            </button>
        </div>
    }
}
