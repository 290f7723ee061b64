//! Hard-coded demo datasets. The product runs without a backend, so every
//! table and chart binds to these fixtures.

use contracts::analytics::{
    AttributionGraph, ConversionPath, FunnelLink, FunnelNode, Metric, PerformancePoint,
    StatSummary, TrendPoint,
};
use contracts::clients::{Client, ClientStatus};
use uuid::Uuid;

pub fn stat_summaries() -> Vec<StatSummary> {
    vec![
        StatSummary {
            metric: Metric::Impressions,
            value: 24_567.0,
            change_percent: 12.5,
        },
        StatSummary {
            metric: Metric::Clicks,
            value: 1_234.0,
            change_percent: 8.2,
        },
        StatSummary {
            metric: Metric::Conversions,
            value: 87.0,
            change_percent: -3.1,
        },
        StatSummary {
            metric: Metric::Ctr,
            value: 5.02,
            change_percent: 0.8,
        },
    ]
}

pub fn performance_by_month() -> Vec<PerformancePoint> {
    let raw: [(&str, u32, u32, u32); 7] = [
        ("Jan", 4000, 2400, 240),
        ("Feb", 3000, 1398, 210),
        ("Mar", 2000, 9800, 290),
        ("Apr", 2780, 3908, 200),
        ("May", 1890, 4800, 281),
        ("Jun", 2390, 3800, 250),
        ("Jul", 3490, 4300, 210),
    ];
    raw.into_iter()
        .map(|(label, impressions, clicks, conversions)| PerformancePoint {
            label: label.to_string(),
            impressions,
            clicks,
            conversions,
        })
        .collect()
}

pub fn weekly_trend() -> Vec<TrendPoint> {
    let raw: [(&str, u32); 7] = [
        ("Week 1", 400),
        ("Week 2", 300),
        ("Week 3", 500),
        ("Week 4", 280),
        ("Week 5", 590),
        ("Week 6", 390),
        ("Week 7", 490),
    ];
    raw.into_iter()
        .map(|(label, value)| TrendPoint {
            label: label.to_string(),
            value,
        })
        .collect()
}

pub fn attribution_graph() -> AttributionGraph {
    let nodes = [
        "Google Ads",
        "Meta Ads",
        "Direct",
        "Organic",
        "Email",
        "Website Visit",
        "Product View",
        "Add to Cart",
        "Checkout",
        "Purchase",
    ]
    .into_iter()
    .map(|name| FunnelNode {
        name: name.to_string(),
    })
    .collect();

    let links = [
        (0, 5, 200),
        (0, 6, 80),
        (1, 5, 150),
        (1, 6, 50),
        (2, 5, 50),
        (3, 5, 90),
        (4, 5, 60),
        (5, 6, 350),
        (6, 7, 200),
        (7, 8, 120),
        (8, 9, 90),
    ]
    .into_iter()
    .map(|(source, target, value)| FunnelLink {
        source,
        target,
        value,
    })
    .collect();

    AttributionGraph { nodes, links }
}

pub fn conversion_paths() -> Vec<ConversionPath> {
    let raw: [(u32, &str, u32, &str, &str); 5] = [
        (
            1,
            "Google Ads → Website Visit → Product View → Add to Cart → Checkout → Purchase",
            42,
            "21.0%",
            "$78.50",
        ),
        (
            2,
            "Meta Ads → Website Visit → Product View → Add to Cart → Purchase",
            36,
            "24.0%",
            "$65.20",
        ),
        (
            3,
            "Direct → Product View → Add to Cart → Checkout → Purchase",
            28,
            "56.0%",
            "$92.30",
        ),
        (
            4,
            "Organic → Website Visit → Product View → Purchase",
            22,
            "24.4%",
            "$55.40",
        ),
        (
            5,
            "Email → Website Visit → Product View → Add to Cart → Purchase",
            18,
            "30.0%",
            "$63.70",
        ),
    ];
    raw.into_iter()
        .map(
            |(id, path, conversions, conversion_rate, average_value)| ConversionPath {
                id,
                path: path.to_string(),
                conversions,
                conversion_rate: conversion_rate.to_string(),
                average_value: average_value.to_string(),
            },
        )
        .collect()
}

pub fn clients() -> Vec<Client> {
    let raw: [(&str, &str, &str, ClientStatus, &str, u32, u32, f64); 5] = [
        (
            "8f8e2a1c-0b55-4b3e-9d8a-6a11c2f0a001",
            "Acme Corporation",
            "E-commerce",
            ClientStatus::Active,
            "2023-04-27T12:30:00",
            12_450,
            8,
            3.2,
        ),
        (
            "8f8e2a1c-0b55-4b3e-9d8a-6a11c2f0a002",
            "TechSolutions Ltd",
            "Technology",
            ClientStatus::Active,
            "2023-04-26T09:15:00",
            8_750,
            5,
            2.8,
        ),
        (
            "8f8e2a1c-0b55-4b3e-9d8a-6a11c2f0a003",
            "Global Services",
            "Professional Services",
            ClientStatus::Pending,
            "2023-04-25T14:45:00",
            5_200,
            3,
            1.9,
        ),
        (
            "8f8e2a1c-0b55-4b3e-9d8a-6a11c2f0a004",
            "Local Restaurant",
            "Food & Beverage",
            ClientStatus::Active,
            "2023-04-27T10:10:00",
            3_100,
            2,
            4.5,
        ),
        (
            "8f8e2a1c-0b55-4b3e-9d8a-6a11c2f0a005",
            "Fashion Outlet",
            "Retail",
            ClientStatus::Inactive,
            "2023-04-20T08:30:00",
            6_800,
            4,
            2.1,
        ),
    ];
    raw.into_iter()
        .map(
            |(id, name, industry, status, last_active, ad_spend, campaigns, roi)| Client {
                id: Uuid::parse_str(id).unwrap_or_else(|_| Uuid::nil()),
                name: name.to_string(),
                industry: industry.to_string(),
                status,
                last_active: last_active.to_string(),
                ad_spend,
                campaigns,
                roi,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_links_stay_inside_the_node_table() {
        let graph = attribution_graph();
        for link in &graph.links {
            assert!(link.source < graph.nodes.len());
            assert!(link.target < graph.nodes.len());
        }
        // the busiest stage is the website visit
        assert_eq!(graph.max_throughput(), 550);
    }

    #[test]
    fn client_totals_match_the_summary_cards() {
        let clients = clients();
        assert_eq!(clients.len(), 5);
        let total_spend: u32 = clients.iter().map(|c| c.ad_spend).sum();
        assert_eq!(total_spend, 36_300);
        let active = clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .count();
        assert_eq!(active, 3);
    }

    #[test]
    fn chart_series_cover_seven_periods() {
        assert_eq!(performance_by_month().len(), 7);
        assert_eq!(weekly_trend().len(), 7);
        assert_eq!(stat_summaries().len(), 4);
    }
}
