use crate::controllers::RevealToggle;
use leptos::prelude::*;

/// Hook owning one `RevealToggle`.
///
/// The whole toggle lives in a single signal; readers derive display mode and
/// icon from the same snapshot so they are always applied together.
pub fn use_reveal_toggle() -> (Signal<RevealToggle>, Callback<()>) {
    let toggle = RwSignal::new(RevealToggle::new());

    let on_toggle = Callback::new(move |_| {
        toggle.update(|t| {
            t.toggle();
        });
    });

    (toggle.into(), on_toggle)
}
