use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t bg-card px-4 py-6 text-center text-xs text-muted-foreground">
            <div class="font-medium text-foreground">"ENT - Espace numérique de travail"</div>
            <div>"Vous êtes arrivé en bas de la page."</div>
        </footer>
    }
}
