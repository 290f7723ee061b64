use contracts::ads::FormState;
use contracts::platform::PlatformId;
use leptos::prelude::*;

use super::tabs::{BasicTab, CreativeTab, KeywordsTab, TargetingTab};
use super::view_model::{AdFormVm, FormTab};
use crate::routes::routes::{use_router, Route};
use crate::shared::components::ui::Button;
use crate::shared::i18n::{t, use_language};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

#[component]
fn TabBar(vm: AdFormVm) -> impl IntoView {
    let language = use_language();

    view! {
        <div class="ad-form__tabs">
            {vm.tabs()
                .into_iter()
                .map(|tab| {
                    let is_active = move || vm.active_tab.get() == tab;
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "ad-form__tab-button ad-form__tab-button--active"
                                } else {
                                    "ad-form__tab-button"
                                }
                            }
                            on:click=move |_| vm.active_tab.set(tab)
                        >
                            {move || t(language.current.get(), tab.label_key())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BlockedNotice(platform: PlatformId) -> impl IntoView {
    let language = use_language();
    let router = use_router();
    let back_target = Route::Dashboard;
    let back = Callback::new(move |_| router.navigate(back_target.clone()));
    let name = platform.display_name().to_string();

    view! {
        <div class="ad-form__blocked">
            {icon("lock")}
            <h2>{move || t(language.current.get(), "form.premiumRequired")}</h2>
            <p>{name}</p>
            <p>{move || t(language.current.get(), "form.premiumHint")}</p>
            <Button variant="secondary" on_click=back>
                {move || t(language.current.get(), "form.backToDashboard")}
            </Button>
        </div>
    }
}

/// Ad creation form. Premium platforms land in a blocked notice; everyone
/// else edits a schema-specific draft and is redirected back to the platform
/// dashboard on a successful submit.
#[component]
pub fn AdCreatePage(platform: PlatformId) -> impl IntoView {
    let language = use_language();
    let router = use_router();
    let toasts = use_toast();
    let vm = AdFormVm::new(platform.clone());

    let cancel_target = Route::Platform(platform.clone());
    let cancel = Callback::new(move |_| router.navigate(cancel_target.clone()));

    let submit = Callback::new(move |_| match vm.submit() {
        Ok(submission) => {
            toasts.success(t(language.current.get_untracked(), "form.success"));
            router.navigate_path(&submission.redirect_to);
        }
        Err(has_errors) => {
            if has_errors {
                toasts.error(t(language.current.get_untracked(), "error.fixFields"));
            }
        }
    });

    view! {
        <div class="ad-form">
            {move || match vm.state() {
                FormState::Blocked => {
                    view! { <BlockedNotice platform=vm.platform() /> }.into_any()
                }
                FormState::Editing | FormState::Submitted => view! {
                    <div class="ad-form__card">
                        <h2>{move || t(language.current.get(), "form.title")}</h2>
                        <TabBar vm=vm />
                        {move || match vm.active_tab.get() {
                            FormTab::Basic => view! { <BasicTab vm=vm /> }.into_any(),
                            FormTab::Creative => view! { <CreativeTab vm=vm /> }.into_any(),
                            FormTab::Keywords => view! { <KeywordsTab vm=vm /> }.into_any(),
                            FormTab::Targeting => view! { <TargetingTab vm=vm /> }.into_any(),
                        }}
                        <div class="ad-form__actions">
                            <Button variant="secondary" on_click=cancel>
                                {move || t(language.current.get(), "form.cancel")}
                            </Button>
                            <Button on_click=submit>
                                {move || t(language.current.get(), "form.submit")}
                            </Button>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
