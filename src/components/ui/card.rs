use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}
    clx! {CardFooter, footer, "flex items-center px-6", "gap-2"}

    // Dashboard tiles.
    clx! {CardGrid, div, "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3"}
    clx! {CardIcon, div, "flex size-10 items-center justify-center rounded-lg bg-primary/10 text-primary [&_svg]:size-5"}
}

pub use components::*;
