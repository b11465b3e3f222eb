use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-10 flex items-center justify-between border-b bg-background/95 px-4 py-3 backdrop-blur">
            <a href="/" class="text-sm font-semibold text-foreground">"ENT"</a>
            <div class="flex items-center gap-2">
                <Button href="/login" variant=ButtonVariant::Ghost size=ButtonSize::Sm>
                    "Se connecter"
                </Button>
                <Button href="/signup" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                    "Activer mon compte"
                </Button>
            </div>
        </nav>
    }
}
