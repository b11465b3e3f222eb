use crate::components::ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
    PasswordInput, Switch,
};
use leptos::prelude::*;

#[component]
pub fn SignupPage() -> impl IntoView {
    let registration_number: RwSignal<String> = RwSignal::new(String::new());
    let national_id: RwSignal<String> = RwSignal::new(String::new());
    let birth_date: RwSignal<String> = RwSignal::new(String::new());
    let phone: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let password_confirm: RwSignal<String> = RwSignal::new(String::new());
    let remember_me: RwSignal<bool> = RwSignal::new(false);

    // Activation is not wired to a backend.
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
                        <CardTitle class="text-xl">"Activation du compte étudiant"</CardTitle>
                        <CardDescription>
                            "Renseignez vos informations d’inscription."
                        </CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-4" on:submit=on_submit>
                            <div class="flex flex-col gap-2">
                                <Label html_for="registration-number">"Nº d’inscription"</Label>
                                <Input
                                    id="registration-number"
                                    placeholder="Saisir votre Nº d’inscription"
                                    bind_value=registration_number
                                    required=true
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for="national-id">"CIN / code Massar"</Label>
                                <Input
                                    id="national-id"
                                    placeholder="Saisir votre CIN/code Massar"
                                    bind_value=national_id
                                    required=true
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for="birth-date">"Date de naissance"</Label>
                                <Input
                                    id="birth-date"
                                    r#type="date"
                                    bind_value=birth_date
                                    required=true
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for="phone">"Téléphone"</Label>
                                <Input
                                    id="phone"
                                    r#type="tel"
                                    placeholder="Saisir votre Nº de téléphone"
                                    bind_value=phone
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

                            <div class="flex flex-col gap-2">
                                <Label html_for="password-confirm">"Confirmation du mot de passe"</Label>
                                <Input
                                    id="password-confirm"
                                    r#type="password"
                                    placeholder="Confirmer votre mot de passe"
                                    bind_value=password_confirm
                                    required=true
                                />
                            </div>

                            <div class="flex items-center gap-2">
                                <Switch id="remember-me" checked=remember_me />
                                <Label html_for="remember-me">"Se souvenir de moi"</Label>
                            </div>

                            <Button class="w-full">"Activer"</Button>
                        </form>
                    </CardContent>

                    <CardFooter class="justify-between text-xs">
                        <a class="text-primary underline underline-offset-4" href="/login">
                            "J’ai déjà un compte"
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
