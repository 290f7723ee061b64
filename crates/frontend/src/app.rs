use crate::routes::routes::{AppRoutes, RouterService};
use crate::shared::i18n::LanguageService;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::session::SessionService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services live in context; every page resolves them from here.
    provide_context(RouterService::new());
    provide_context(SessionService::new());
    provide_context(LanguageService::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
