use contracts::platform::{subscription_tier, AccessTier, PlatformId};
use leptos::prelude::*;

use crate::routes::routes::{use_router, Route};
use crate::shared::i18n::{t, use_language};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

#[component]
fn NavItem(
    route: Route,
    icon_name: &'static str,
    label_key: &'static str,
) -> impl IntoView {
    let router = use_router();
    let language = use_language();
    let target = route.clone();
    let is_active = move || router.current.get() == route;

    view! {
        <button
            class=move || {
                if is_active() {
                    "sidebar__item sidebar__item--active"
                } else {
                    "sidebar__item"
                }
            }
            on:click=move |_| router.navigate(target.clone())
        >
            {icon(icon_name)}
            <span>{move || t(language.current.get(), label_key)}</span>
        </button>
    }
}

/// One entry per advertising channel. Premium channels are visible but
/// locked: clicking explains the entitlement instead of navigating.
#[component]
fn PlatformItem(platform: PlatformId) -> impl IntoView {
    let router = use_router();
    let language = use_language();
    let toasts = use_toast();
    let premium = subscription_tier(&platform) == AccessTier::Premium;
    let name = platform.display_name().to_string();
    let target = Route::Platform(platform.clone());
    let current = platform;

    let on_click = move |_| {
        if premium {
            toasts.error(t(language.current.get_untracked(), "form.premiumRequired"));
        } else {
            router.navigate(target.clone());
        }
    };
    let is_active = move || router.current.get() == Route::Platform(current.clone());

    view! {
        <button
            class=move || {
                let mut class = String::from("sidebar__item sidebar__item--platform");
                if is_active() {
                    class.push_str(" sidebar__item--active");
                }
                if premium {
                    class.push_str(" sidebar__item--locked");
                }
                class
            }
            on:click=on_click
        >
            {icon(if premium { "lock" } else { "database" })}
            <span>{name}</span>
            {premium.then(|| view! {
                <span class="sidebar__premium-tag">
                    {move || t(language.current.get(), "nav.premium")}
                </span>
            })}
        </button>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let language = use_language();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"S-EYE"</div>
            <nav class="sidebar__nav">
                <NavItem route=Route::Dashboard icon_name="overview" label_key="nav.overview" />
                <div class="sidebar__section">
                    {move || t(language.current.get(), "nav.dataSources")}
                </div>
                {PlatformId::known()
                    .into_iter()
                    .map(|platform| view! { <PlatformItem platform=platform /> })
                    .collect_view()}
                <div class="sidebar__section"></div>
                <NavItem route=Route::Reports icon_name="reports" label_key="nav.reports" />
                <NavItem route=Route::Team icon_name="team" label_key="nav.team" />
            </nav>
        </aside>
    }
}
