use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::routes::routes::{use_router, Route};
use crate::shared::components::ui::{Button, Input};
use crate::shared::i18n::{t, use_language};
use crate::shared::toast::use_toast;
use crate::system::session::use_session;

/// Demo registration: accepts anything and drops the new user into the
/// onboarding wizard.
#[component]
pub fn SignupPage() -> impl IntoView {
    let router = use_router();
    let language = use_language();
    let session = use_session();
    let toasts = use_toast();

    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1000).await;
            session.sign_in();
            loading.set(false);
            toasts.success(t(language.current.get_untracked(), "signup.success"));
            router.navigate(Route::Onboarding);
        });
    });

    let to_login = Callback::new(move |_| router.navigate(Route::Login));

    view! {
        <div class="auth">
            <div class="auth__card">
                <h1>{move || t(language.current.get(), "signup.title")}</h1>
                <Input
                    label=Signal::derive(move || t(language.current.get(), "signup.name").to_string())
                    value=name
                    on_input=Callback::new(move |value| name.set(value))
                />
                <Input
                    label=Signal::derive(move || t(language.current.get(), "signup.company").to_string())
                    value=company
                    on_input=Callback::new(move |value| company.set(value))
                />
                <Input
                    label=Signal::derive(move || t(language.current.get(), "login.email").to_string())
                    input_type="email"
                    value=email
                    on_input=Callback::new(move |value| email.set(value))
                />
                <Input
                    label=Signal::derive(move || t(language.current.get(), "login.password").to_string())
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |value| password.set(value))
                />
                <Button
                    disabled=Signal::derive(move || loading.get())
                    on_click=submit
                >
                    {move || t(language.current.get(), "signup.submit")}
                </Button>
                <p class="auth__switch">
                    {move || t(language.current.get(), "signup.haveAccount")}
                    " "
                    <a href="/login" on:click=move |ev| {
                        ev.prevent_default();
                        to_login.run(ev);
                    }>
                        {move || t(language.current.get(), "signup.loginLink")}
                    </a>
                </p>
            </div>
        </div>
    }
}
