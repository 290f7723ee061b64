pub mod overview;
pub mod platform;

use contracts::analytics::Metric;

pub(crate) fn metric_label_key(metric: Metric) -> &'static str {
    match metric {
        Metric::Impressions => "metric.impressions",
        Metric::Clicks => "metric.clicks",
        Metric::Conversions => "metric.conversions",
        Metric::Ctr => "metric.ctr",
    }
}

pub(crate) fn metric_icon(metric: Metric) -> &'static str {
    match metric {
        Metric::Impressions => "chart",
        Metric::Clicks => "overview",
        Metric::Conversions => "check",
        Metric::Ctr => "reports",
    }
}
