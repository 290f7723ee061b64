use leptos::prelude::*;

use crate::routes::routes::{use_router, Route};
use crate::shared::components::ui::{Button, Select};
use crate::shared::i18n::{t, use_language, Language};
use crate::system::session::use_session;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let language = use_language();
    let session = use_session();
    let router = use_router();

    let language_options = Signal::derive(move || {
        Language::all()
            .into_iter()
            .map(|lang| (lang.code().to_string(), lang.label().to_string()))
            .collect::<Vec<_>>()
    });
    let language_value = Signal::derive(move || language.current.get().code().to_string());
    let on_language = Callback::new(move |code: String| {
        if let Some(lang) = Language::from_code(&code) {
            language.set(lang);
        }
    });

    let sign_out = Callback::new(move |_| {
        session.sign_out();
        router.navigate(Route::Landing);
    });

    view! {
        <header class="header">
            <h1 class="header__title">
                {move || t(language.current.get(), "dashboard.title")}
            </h1>
            <div class="header__controls">
                <Select value=language_value options=language_options on_change=on_language />
                <Button variant="ghost" on_click=sign_out>
                    {move || t(language.current.get(), "nav.signOut")}
                </Button>
            </div>
        </header>
    }
}
