use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::routes::routes::{use_router, Route};
use crate::shared::components::ui::{Button, Input};
use crate::shared::i18n::{t, use_language};
use crate::shared::toast::use_toast;
use crate::system::session::use_session;

/// Demo sign-in: any credentials are accepted after a simulated network
/// delay.
#[component]
pub fn LoginPage() -> impl IntoView {
    let router = use_router();
    let language = use_language();
    let session = use_session();
    let toasts = use_toast();

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
            toasts.success(t(language.current.get_untracked(), "login.success"));
            router.navigate(Route::Dashboard);
        });
    });

    let to_signup = Callback::new(move |_| router.navigate(Route::Signup));

    view! {
        <div class="auth">
            <div class="auth__card">
                <h1>{move || t(language.current.get(), "login.title")}</h1>
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
                    {move || {
                        let key = if loading.get() { "login.loading" } else { "login.submit" };
                        t(language.current.get(), key)
                    }}
                </Button>
                <p class="auth__switch">
                    {move || t(language.current.get(), "login.noAccount")}
                    " "
                    <a href="/signup" on:click=move |ev| {
                        ev.prevent_default();
                        to_signup.run(ev);
                    }>
                        {move || t(language.current.get(), "login.signupLink")}
                    </a>
                </p>
            </div>
        </div>
    }
}
