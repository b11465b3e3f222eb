use crate::components::ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
    PasswordInput, Switch,
};
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let remember_me: RwSignal<bool> = RwSignal::new(false);

    // Sign-in is not wired to a backend; the browser still enforces `required`.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-md flex-col justify-center px-4 py-12">
                <div class="mb-6">
                    <a href="/" class="text-sm font-medium text-foreground">"ENT"</a>
                    <div class="text-xs text-muted-foreground">"Espace numérique de travail"</div>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-xl">"Bienvenue"</CardTitle>
                        <CardDescription>
                            "Connectez-vous avec votre compte institutionnel."
                        </CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-4" on:submit=on_submit>
                            <div class="flex flex-col gap-2">
                                <Label html_for="email">"Email"</Label>
                                <Input
                                    id="email"
                                    r#type="email"
                                    placeholder="Saisir votre email institutionnel"
                                    bind_value=email
                                    required=true
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for="password">"Mot de passe"</Label>
                                <PasswordInput
                                    id="password"
                                    placeholder="Saisir votre mot de passe"
                                    bind_value=password
                                    required=true
                                />
                            </div>

                            <div class="flex items-center gap-2">
                                <Switch id="remember-me" checked=remember_me />
                                <Label html_for="remember-me">"Se souvenir de moi"</Label>
                            </div>

                            <Button class="w-full">"Se connecter"</Button>
                        </form>
                    </CardContent>

                    <CardFooter class="justify-between text-xs">
                        <a class="text-primary underline underline-offset-4" href="/signup">
                            "Nouveau à l’université ?"
                        </a>
                        <a class="text-muted-foreground underline underline-offset-4" href="#">
                            "Mot de passe oublié"
                        </a>
                    </CardFooter>
                </Card>
            </div>
        </div>
    }
}
