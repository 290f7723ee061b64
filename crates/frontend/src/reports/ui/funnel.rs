use contracts::analytics::{AttributionGraph, AttributionModel, TimePeriod};
use leptos::prelude::*;

use crate::shared::components::charts::scale::scaled_height;
use crate::shared::components::ui::{Button, Select};
use crate::shared::data::samples;
use crate::shared::format::format_thousands;
use crate::shared::i18n::{t, use_language};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

fn model_key(model: AttributionModel) -> &'static str {
    match model {
        AttributionModel::LastClick => "model.last-click",
        AttributionModel::FirstClick => "model.first-click",
        AttributionModel::Linear => "model.linear",
        AttributionModel::TimeDecay => "model.time-decay",
        AttributionModel::PositionBased => "model.position-based",
    }
}

fn period_key(period: TimePeriod) -> &'static str {
    match period {
        TimePeriod::Last7Days => "period.7days",
        TimePeriod::Last30Days => "period.30days",
        TimePeriod::Last90Days => "period.90days",
        TimePeriod::YearToDate => "period.ytd",
        TimePeriod::Custom => "period.custom",
    }
}

/// Horizontal bar rendering of the attribution graph: one bar per node,
/// scaled by its throughput.
#[component]
fn FunnelChart(graph: AttributionGraph) -> impl IntoView {
    const BAR_MAX_WIDTH: f64 = 420.0;

    let max = graph.max_throughput() as f64;
    let rows = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let throughput = graph.node_throughput(i);
            let width = scaled_height(throughput as f64, max, BAR_MAX_WIDTH);
            (node.name.clone(), throughput, width)
        })
        .collect::<Vec<_>>();

    view! {
        <div class="funnel">
            {rows
                .into_iter()
                .map(|(name, throughput, width)| view! {
                    <div class="funnel__row">
                        <span class="funnel__name">{name}</span>
                        <div class="funnel__bar" style=format!("width: {width:.0}px")></div>
                        <span class="funnel__value">
                            {format_thousands(throughput as i64)}
                        </span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// Attribution funnel report: model and period selectors, the funnel chart
/// and the common conversion paths table.
#[component]
pub fn AttributionReportPage() -> impl IntoView {
    let language = use_language();
    let toasts = use_toast();

    let model = RwSignal::new(AttributionModel::LastClick.as_value().to_string());
    let period = RwSignal::new(TimePeriod::Last30Days.as_value().to_string());

    let model_options = Signal::derive(move || {
        let lang = language.current.get();
        AttributionModel::all()
            .into_iter()
            .map(|m| (m.as_value().to_string(), t(lang, model_key(m)).to_string()))
            .collect::<Vec<_>>()
    });
    let period_options = Signal::derive(move || {
        let lang = language.current.get();
        TimePeriod::all()
            .into_iter()
            .map(|p| (p.as_value().to_string(), t(lang, period_key(p)).to_string()))
            .collect::<Vec<_>>()
    });

    let download = Callback::new(move |_| {
        toasts.success(t(language.current.get_untracked(), "reports.downloadSuccess"));
    });

    view! {
        <div class="report">
            <section class="card">
                <h2>{move || t(language.current.get(), "reports.title")}</h2>
                <p>{move || t(language.current.get(), "reports.description")}</p>
                <div class="report__selectors">
                    <Select
                        label=Signal::derive(move || {
                            t(language.current.get(), "reports.attribution").to_string()
                        })
                        value=model
                        options=model_options
                        on_change=Callback::new(move |value| model.set(value))
                    />
                    <Select
                        label=Signal::derive(move || {
                            t(language.current.get(), "reports.period").to_string()
                        })
                        value=period
                        options=period_options
                        on_change=Callback::new(move |value| period.set(value))
                    />
                </div>
                <FunnelChart graph=samples::attribution_graph() />
            </section>

            <section class="card">
                <div class="report__paths-heading">
                    <h3>{move || t(language.current.get(), "reports.commonPaths")}</h3>
                    <Button variant="secondary" size="sm" on_click=download>
                        {icon("download")}
                        {move || t(language.current.get(), "reports.download")}
                    </Button>
                </div>
                <table class="report__table">
                    <thead>
                        <tr>
                            <th>{move || t(language.current.get(), "reports.path")}</th>
                            <th>{move || t(language.current.get(), "reports.conversions")}</th>
                            <th>{move || t(language.current.get(), "reports.conversionRate")}</th>
                            <th>{move || t(language.current.get(), "reports.averageValue")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {samples::conversion_paths()
                            .into_iter()
                            .map(|path| view! {
                                <tr>
                                    <td class="report__path">{path.path}</td>
                                    <td class="report__num">{path.conversions}</td>
                                    <td class="report__num">{path.conversion_rate}</td>
                                    <td class="report__num">{path.average_value}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
