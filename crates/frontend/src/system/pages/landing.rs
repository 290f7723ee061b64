use leptos::prelude::*;

use crate::routes::routes::{use_router, Route};
use crate::shared::components::ui::Button;
use crate::shared::i18n::{t, use_language};

#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();
    let language = use_language();

    let to_signup = Callback::new(move |_| router.navigate(Route::Signup));
    let to_login = Callback::new(move |_| router.navigate(Route::Login));

    view! {
        <div class="landing">
            <header class="landing__nav">
                <div class="landing__brand">"S-EYE"</div>
                <Button variant="ghost" on_click=to_login>
                    {move || t(language.current.get(), "landing.login")}
                </Button>
            </header>
            <section class="landing__hero">
                <h1>{move || t(language.current.get(), "landing.headline")}</h1>
                <p>{move || t(language.current.get(), "landing.sub")}</p>
                <Button on_click=to_signup>
                    {move || t(language.current.get(), "landing.cta")}
                </Button>
            </section>
        </div>
    }
}
