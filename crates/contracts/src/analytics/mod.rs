//! Display-level analytics types: everything here is bound to hard-coded
//! sample data in the frontend, no computation pipeline exists behind it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Summary metrics
// ============================================================================

/// Headline metric shown as a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Impressions,
    Clicks,
    Conversions,
    Ctr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub metric: Metric,
    pub value: f64,
    /// Change vs the previous period, in percent; negative means a drop.
    pub change_percent: f64,
}

// ============================================================================
// Chart series
// ============================================================================

/// One month on the performance bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub label: String,
    pub impressions: u32,
    pub clicks: u32,
    pub conversions: u32,
}

/// One point on the weekly trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub label: String,
    pub value: u32,
}

// ============================================================================
// Attribution funnel
// ============================================================================

/// Source/stage graph of the attribution funnel. Links address nodes by
/// index, the way the charting widget consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionGraph {
    pub nodes: Vec<FunnelNode>,
    pub links: Vec<FunnelLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelLink {
    pub source: usize,
    pub target: usize,
    pub value: u32,
}

impl AttributionGraph {
    /// Traffic flowing through a node: whichever of inflow and outflow is
    /// larger (sources have no inflow, the final stage no outflow).
    pub fn node_throughput(&self, node: usize) -> u32 {
        let inflow: u32 = self
            .links
            .iter()
            .filter(|link| link.target == node)
            .map(|link| link.value)
            .sum();
        let outflow: u32 = self
            .links
            .iter()
            .filter(|link| link.source == node)
            .map(|link| link.value)
            .sum();
        inflow.max(outflow)
    }

    /// Largest throughput of any node, used for bar scaling.
    pub fn max_throughput(&self) -> u32 {
        (0..self.nodes.len())
            .map(|node| self.node_throughput(node))
            .max()
            .unwrap_or(0)
    }
}

/// Row of the "common conversion paths" table. Rate and value are kept as
/// the preformatted strings the sample data ships with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPath {
    pub id: u32,
    pub path: String,
    pub conversions: u32,
    pub conversion_rate: String,
    pub average_value: String,
}

// ============================================================================
// Report selectors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributionModel {
    LastClick,
    FirstClick,
    Linear,
    TimeDecay,
    PositionBased,
}

impl AttributionModel {
    pub fn all() -> [AttributionModel; 5] {
        [
            AttributionModel::LastClick,
            AttributionModel::FirstClick,
            AttributionModel::Linear,
            AttributionModel::TimeDecay,
            AttributionModel::PositionBased,
        ]
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            AttributionModel::LastClick => "last-click",
            AttributionModel::FirstClick => "first-click",
            AttributionModel::Linear => "linear",
            AttributionModel::TimeDecay => "time-decay",
            AttributionModel::PositionBased => "position-based",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|model| model.as_value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimePeriod {
    Last7Days,
    Last30Days,
    Last90Days,
    YearToDate,
    Custom,
}

impl TimePeriod {
    pub fn all() -> [TimePeriod; 5] {
        [
            TimePeriod::Last7Days,
            TimePeriod::Last30Days,
            TimePeriod::Last90Days,
            TimePeriod::YearToDate,
            TimePeriod::Custom,
        ]
    }

    /// Options offered on the dashboard (no custom range there).
    pub fn dashboard_options() -> [TimePeriod; 4] {
        [
            TimePeriod::Last7Days,
            TimePeriod::Last30Days,
            TimePeriod::Last90Days,
            TimePeriod::YearToDate,
        ]
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            TimePeriod::Last7Days => "7days",
            TimePeriod::Last30Days => "30days",
            TimePeriod::Last90Days => "90days",
            TimePeriod::YearToDate => "ytd",
            TimePeriod::Custom => "custom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|period| period.as_value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> AttributionGraph {
        AttributionGraph {
            nodes: vec![
                FunnelNode { name: "Google Ads".to_string() },
                FunnelNode { name: "Website Visit".to_string() },
                FunnelNode { name: "Purchase".to_string() },
            ],
            links: vec![
                FunnelLink { source: 0, target: 1, value: 200 },
                FunnelLink { source: 1, target: 2, value: 90 },
            ],
        }
    }

    #[test]
    fn throughput_takes_the_larger_side() {
        let graph = sample_graph();
        assert_eq!(graph.node_throughput(0), 200);
        assert_eq!(graph.node_throughput(1), 200);
        assert_eq!(graph.node_throughput(2), 90);
        assert_eq!(graph.max_throughput(), 200);
    }

    #[test]
    fn selector_values_round_trip() {
        for model in AttributionModel::all() {
            assert_eq!(AttributionModel::parse(model.as_value()), Some(model));
        }
        for period in TimePeriod::all() {
            assert_eq!(TimePeriod::parse(period.as_value()), Some(period));
        }
        assert_eq!(AttributionModel::parse("nope"), None);
    }
}
