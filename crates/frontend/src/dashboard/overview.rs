use contracts::analytics::{Metric, TimePeriod};
use contracts::platform::{subscription_tier, AccessTier, PlatformId};
use leptos::prelude::*;

use super::{metric_icon, metric_label_key};
use crate::routes::routes::{use_router, Route};
use crate::shared::components::charts::{BarChart, LineChart};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::data::samples;
use crate::shared::format::{format_compact, format_percent};
use crate::shared::i18n::{t, use_language};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

fn period_key(period: TimePeriod) -> &'static str {
    match period {
        TimePeriod::Last7Days => "period.7days",
        TimePeriod::Last30Days => "period.30days",
        TimePeriod::Last90Days => "period.90days",
        TimePeriod::YearToDate => "period.ytd",
        TimePeriod::Custom => "period.custom",
    }
}

#[component]
fn DataSourceRow(platform: PlatformId) -> impl IntoView {
    let language = use_language();
    let premium = subscription_tier(&platform) == AccessTier::Premium;
    let name = platform.display_name().to_string();

    view! {
        <div class="source-row">
            <div class="source-row__name">
                {icon("database")}
                <span>{name}</span>
            </div>
            {if premium {
                view! {
                    <Badge tone="accent">
                        {move || t(language.current.get(), "nav.premium")}
                    </Badge>
                }
                .into_any()
            } else {
                view! {
                    <Badge tone="success">
                        {move || t(language.current.get(), "dashboard.connected")}
                    </Badge>
                }
                .into_any()
            }}
        </div>
    }
}

/// Landing page of the signed-in area: summary cards, the two charts, the
/// data-source list and quick actions.
#[component]
pub fn DashboardOverview() -> impl IntoView {
    let language = use_language();
    let router = use_router();
    let toasts = use_toast();

    let timeframe = RwSignal::new(TimePeriod::Last30Days.as_value().to_string());
    let timeframe_options = Signal::derive(move || {
        let lang = language.current.get();
        TimePeriod::dashboard_options()
            .into_iter()
            .map(|p| (p.as_value().to_string(), t(lang, period_key(p)).to_string()))
            .collect::<Vec<_>>()
    });

    let performance = Signal::derive(samples::performance_by_month);
    let trend = Signal::derive(samples::weekly_trend);

    let complete_setup = Callback::new(move |_| router.navigate(Route::Onboarding));
    let generate_report = Callback::new(move |_| {
        toasts.success(t(language.current.get_untracked(), "reports.downloadSuccess"));
    });
    let connect_source = Callback::new(move |_| router.navigate(Route::Onboarding));

    view! {
        <div class="overview">
            <h2 class="overview__welcome">
                {move || t(language.current.get(), "dashboard.welcome")}
            </h2>

            <div class="overview__alert">
                <p>{move || t(language.current.get(), "dashboard.incompleteSetup")}</p>
                <Button variant="ghost" size="sm" on_click=complete_setup>
                    {move || t(language.current.get(), "dashboard.completeSetup")}
                </Button>
            </div>

            <div class="overview__toolbar">
                <h2>{move || t(language.current.get(), "dashboard.summary")}</h2>
                <Select
                    label=Signal::derive(move || {
                        t(language.current.get(), "dashboard.timeframe").to_string()
                    })
                    value=timeframe
                    options=timeframe_options
                    on_change=Callback::new(move |value| timeframe.set(value))
                />
            </div>

            <div class="overview__stats">
                {samples::stat_summaries()
                    .into_iter()
                    .map(|summary| {
                        let metric = summary.metric;
                        let label = Signal::derive(move || {
                            t(language.current.get(), metric_label_key(metric)).to_string()
                        });
                        let value = if metric == Metric::Ctr {
                            format_percent(summary.value)
                        } else {
                            format_compact(summary.value)
                        };
                        let suffix = Signal::derive(move || {
                            t(language.current.get(), "dashboard.vsPrevious").to_string()
                        });
                        view! {
                            <StatCard
                                label=label
                                icon_name=metric_icon(metric).to_string()
                                value=value
                                change_percent=summary.change_percent
                                change_suffix=suffix
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="overview__grid">
                <section class="card">
                    <h3>{move || t(language.current.get(), "dashboard.performance")}</h3>
                    <BarChart data=performance />
                </section>
                <section class="card">
                    <h3>{move || t(language.current.get(), "dashboard.trends")}</h3>
                    <LineChart data=trend />
                </section>
                <section class="card">
                    <h3>{move || t(language.current.get(), "dashboard.dataSources")}</h3>
                    {PlatformId::known()
                        .into_iter()
                        .map(|platform| view! { <DataSourceRow platform=platform /> })
                        .collect_view()}
                    <Button class="card__footer-button" on_click=connect_source>
                        {move || t(language.current.get(), "dashboard.connectSource")}
                    </Button>
                </section>
                <section class="card">
                    <h3>{move || t(language.current.get(), "dashboard.actions")}</h3>
                    <div class="action-row">
                        {icon("reports")}
                        <span>"AI Report"</span>
                        <Button size="sm" on_click=generate_report>
                            {move || t(language.current.get(), "dashboard.generateReport")}
                        </Button>
                    </div>
                </section>
            </div>
        </div>
    }
}
