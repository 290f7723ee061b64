use contracts::analytics::Metric;
use contracts::platform::{subscription_tier, AccessTier, PlatformId};
use leptos::prelude::*;

use super::{metric_icon, metric_label_key};
use crate::routes::routes::{use_router, Route};
use crate::shared::components::charts::BarChart;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::shared::data::samples;
use crate::shared::format::{format_compact, format_percent};
use crate::shared::i18n::{t, use_language};
use crate::shared::icons::icon;

/// Per-channel dashboard: the same demo series scoped to one platform, plus
/// the entry point into ad creation.
#[component]
pub fn PlatformDashboard(platform: PlatformId) -> impl IntoView {
    let language = use_language();
    let router = use_router();

    let title = platform.display_name().to_string();
    let premium = subscription_tier(&platform) == AccessTier::Premium;
    let create_target = Route::CreateAd(platform.clone());
    let create_ad = Callback::new(move |_| router.navigate(create_target.clone()));

    let performance = Signal::derive(samples::performance_by_month);

    view! {
        <div class="platform-page">
            <div class="platform-page__toolbar">
                <h2>{title}</h2>
                <Button on_click=create_ad>
                    {move || t(language.current.get(), "platform.createAd")}
                </Button>
            </div>

            {premium
                .then(|| {
                    view! {
                        <div class="platform-page__upgrade">
                            {icon("lock")}
                            <div>
                                <strong>
                                    {move || t(language.current.get(), "form.premiumRequired")}
                                </strong>
                                <p>{move || t(language.current.get(), "form.premiumHint")}</p>
                            </div>
                        </div>
                    }
                })}

            <div class="platform-page__stats">
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

            <section class="card">
                <h3>{move || t(language.current.get(), "dashboard.performance")}</h3>
                <BarChart data=performance />
            </section>
        </div>
    }
}
