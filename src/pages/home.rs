use crate::components::ui::{Card, CardDescription, CardGrid, CardHeader, CardIcon, CardTitle};
use crate::components::Navbar;
use crate::models::{dashboard_services, ServiceIcon};
use icons::{CalendarDays, ClipboardList, Laptop, LifeBuoy, Mail, Wrench};
use leptos::prelude::*;

fn service_icon(icon: ServiceIcon) -> AnyView {
    match icon {
        ServiceIcon::Mail => view! { <Mail /> }.into_any(),
        ServiceIcon::Grades => view! { <ClipboardList /> }.into_any(),
        ServiceIcon::Calendar => view! { <CalendarDays /> }.into_any(),
        ServiceIcon::Support => view! { <Wrench /> }.into_any(),
        ServiceIcon::Courses => view! { <Laptop /> }.into_any(),
        ServiceIcon::Help => view! { <LifeBuoy /> }.into_any(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <Navbar />

            <div class="mx-auto w-full max-w-5xl px-4 py-8">
                <CardGrid>
                    {dashboard_services()
                        .into_iter()
                        .map(|service| {
                            view! {
                                <Card class="px-6">
                                    <CardIcon>{service_icon(service.icon)}</CardIcon>
                                    <CardHeader class="px-0">
                                        <CardTitle class="text-base">{service.title}</CardTitle>
                                        <CardDescription>{service.description}</CardDescription>
                                    </CardHeader>
                                </Card>
                            }
                        })
                        .collect_view()}
                </CardGrid>
            </div>
        </div>
    }
}
