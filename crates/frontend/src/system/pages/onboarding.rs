use contracts::onboarding::{DefaultView, OnboardingFlow, OnboardingStep, ReportFrequency};
use contracts::platform::PlatformId;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use crate::routes::routes::{use_router, Route};
use crate::shared::components::ui::{Button, Checkbox, Select};
use crate::shared::i18n::{t, use_language, Language};

const ONBOARDING_KEY: &str = "s-eye.onboarding";

fn frequency_key(frequency: ReportFrequency) -> &'static str {
    match frequency {
        ReportFrequency::Weekly => "frequency.weekly",
        ReportFrequency::Monthly => "frequency.monthly",
        ReportFrequency::Quarterly => "frequency.quarterly",
    }
}

fn frequency_value(frequency: ReportFrequency) -> &'static str {
    match frequency {
        ReportFrequency::Weekly => "weekly",
        ReportFrequency::Monthly => "monthly",
        ReportFrequency::Quarterly => "quarterly",
    }
}

fn view_key(default_view: DefaultView) -> &'static str {
    match default_view {
        DefaultView::Overview => "view.overview",
        DefaultView::Performance => "view.performance",
        DefaultView::Campaigns => "view.campaigns",
    }
}

fn view_value(default_view: DefaultView) -> &'static str {
    match default_view {
        DefaultView::Overview => "overview",
        DefaultView::Performance => "performance",
        DefaultView::Campaigns => "campaigns",
    }
}

fn persist_flow(flow: &OnboardingFlow) {
    let Ok(json) = serde_json::to_string(flow) else {
        return;
    };
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(ONBOARDING_KEY, &json).is_err() {
            log::warn!("failed to persist onboarding state");
        }
    }
}

#[component]
fn SourcesStep(flow: RwSignal<OnboardingFlow>) -> impl IntoView {
    view! {
        <div class="onboarding__sources">
            {PlatformId::known()
                .into_iter()
                .map(|platform| {
                    let current = platform.clone();
                    let checked = Signal::derive(move || {
                        flow.with(|f| f.connected_sources.contains(&current))
                    });
                    let toggled = platform.clone();
                    let on_change = Callback::new(move |now_checked: bool| {
                        let source = toggled.clone();
                        flow.update(|f| {
                            if now_checked {
                                f.connect_source(source);
                            } else {
                                f.connected_sources.retain(|p| *p != source);
                            }
                        });
                    });
                    view! {
                        <Checkbox
                            label=platform.display_name().to_string()
                            checked=checked
                            on_change=on_change
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PreferencesStep(flow: RwSignal<OnboardingFlow>) -> impl IntoView {
    let language = use_language();

    let frequency_options = Signal::derive(move || {
        let lang = language.current.get();
        ReportFrequency::all()
            .into_iter()
            .map(|f| (frequency_value(f).to_string(), t(lang, frequency_key(f)).to_string()))
            .collect::<Vec<_>>()
    });
    let frequency = Signal::derive(move || {
        flow.with(|f| frequency_value(f.report_frequency).to_string())
    });
    let on_frequency = Callback::new(move |value: String| {
        if let Some(choice) = ReportFrequency::all()
            .into_iter()
            .find(|f| frequency_value(*f) == value)
        {
            flow.update(|f| f.report_frequency = choice);
        }
    });

    let view_options = Signal::derive(move || {
        let lang = language.current.get();
        DefaultView::all()
            .into_iter()
            .map(|v| (view_value(v).to_string(), t(lang, view_key(v)).to_string()))
            .collect::<Vec<_>>()
    });
    let default_view = Signal::derive(move || {
        flow.with(|f| view_value(f.default_view).to_string())
    });
    let on_view = Callback::new(move |value: String| {
        if let Some(choice) = DefaultView::all()
            .into_iter()
            .find(|v| view_value(*v) == value)
        {
            flow.update(|f| f.default_view = choice);
        }
    });

    view! {
        <div class="onboarding__preferences">
            <Select
                label=Signal::derive(move || {
                    t(language.current.get(), "onboarding.preferences.frequency").to_string()
                })
                value=frequency
                options=frequency_options
                on_change=on_frequency
            />
            <Select
                label=Signal::derive(move || {
                    t(language.current.get(), "onboarding.preferences.defaultView").to_string()
                })
                value=default_view
                options=view_options
                on_change=on_view
            />
        </div>
    }
}

/// Four-step first-run wizard. The collected choices are kept in
/// localStorage; the flow only moves forward.
#[component]
pub fn OnboardingPage() -> impl IntoView {
    let router = use_router();
    let language = use_language();
    let flow = RwSignal::new(OnboardingFlow::new());
    let finishing = RwSignal::new(false);

    let step = Signal::derive(move || flow.with(|f| f.step()));

    let advance = Callback::new(move |_| {
        flow.update(|f| f.advance());
        flow.with_untracked(|f| persist_flow(f));
    });
    let finish = Callback::new(move |_| {
        if finishing.get_untracked() {
            return;
        }
        finishing.set(true);
        flow.with_untracked(|f| persist_flow(f));
        spawn_local(async move {
            TimeoutFuture::new(600).await;
            finishing.set(false);
            router.navigate(Route::Dashboard);
        });
    });

    let step_body = move |lang: Language| match step.get() {
        OnboardingStep::Welcome => view! {
            <div class="onboarding__step">
                <h2>{t(lang, "onboarding.welcome.title")}</h2>
                <p>{t(lang, "onboarding.welcome.body")}</p>
            </div>
        }
        .into_any(),
        OnboardingStep::Sources => view! {
            <div class="onboarding__step">
                <h2>{t(lang, "onboarding.sources.title")}</h2>
                <p>{t(lang, "onboarding.sources.body")}</p>
                <SourcesStep flow=flow />
            </div>
        }
        .into_any(),
        OnboardingStep::Preferences => view! {
            <div class="onboarding__step">
                <h2>{t(lang, "onboarding.preferences.title")}</h2>
                <PreferencesStep flow=flow />
            </div>
        }
        .into_any(),
        OnboardingStep::Complete => view! {
            <div class="onboarding__step">
                <h2>{t(lang, "onboarding.complete.title")}</h2>
                <p>{t(lang, "onboarding.complete.body")}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="onboarding">
            <div class="onboarding__card">
                <h1>{move || t(language.current.get(), "onboarding.title")}</h1>
                <div class="onboarding__progress">
                    {move || {
                        format!(
                            "{} {} / {}",
                            t(language.current.get(), "onboarding.stepOf"),
                            step.get().number(),
                            OnboardingStep::all().len(),
                        )
                    }}
                </div>
                {move || step_body(language.current.get())}
                <div class="onboarding__actions">
                    {move || {
                        if step.get() == OnboardingStep::Complete {
                            view! {
                                <Button
                                    disabled=Signal::derive(move || finishing.get())
                                    on_click=finish
                                >
                                    {move || t(language.current.get(), "onboarding.finish")}
                                </Button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Button on_click=advance>
                                    {move || t(language.current.get(), "onboarding.next")}
                                </Button>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
