//! # Analytics Datasets
//!
//! The typed datasets behind the back-office dashboard widgets.
//!
//! Every series here is a fixed demo dataset: the dashboards exist to show
//! the chart widgets, not to aggregate the (equally mock) order table. The
//! only derivation allowed is summing a fixed series into its headline card,
//! so the cards can never contradict the chart below them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard                                                              │
//! │                                                                         │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐                   │
//! │  │ Revenue  │ │  Orders  │ │Customers │ │ Avg order│  ← summary()      │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────┘                   │
//! │  ┌──────────────────────────────┐ ┌───────────────────┐                │
//! │  │  monthly_revenue() line      │ │ category_shares() │                │
//! │  │  chart, 12 points            │ │ donut, bps        │                │
//! │  └──────────────────────────────┘ └───────────────────┘                │
//! │  ┌──────────────────────────────────────────────────────┐              │
//! │  │  top_sellers() table                                 │              │
//! │  └──────────────────────────────────────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use nova_core::Category;

// =============================================================================
// Dataset Types
// =============================================================================

/// One point on the twelve-month revenue chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// Short month label ("Jan").
    pub month: &'static str,
    pub revenue_cents: i64,
    pub orders: u32,
}

/// One slice of the category donut. Shares are basis points of revenue;
/// the full donut sums to 10 000.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    pub share_bps: u32,
}

/// One row of the top-sellers table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    pub rank: u32,
    pub name: &'static str,
    pub units: u32,
    pub revenue_cents: i64,
}

/// The headline stat cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue_cents: i64,
    pub total_orders: u32,
    pub total_customers: u32,
    pub average_order_cents: i64,
}

// =============================================================================
// Datasets
// =============================================================================

const MONTHLY: [(&str, i64, u32); 12] = [
    ("Jan", 2_841_200, 63),
    ("Feb", 3_102_500, 71),
    ("Mar", 3_654_800, 82),
    ("Apr", 3_298_100, 74),
    ("May", 3_911_400, 88),
    ("Jun", 4_205_700, 95),
    ("Jul", 4_480_300, 99),
    ("Aug", 4_112_600, 91),
    ("Sep", 4_873_900, 108),
    ("Oct", 5_240_200, 117),
    ("Nov", 6_918_400, 158),
    ("Dec", 7_405_100, 169),
];

/// The twelve-month revenue/order series.
pub fn monthly_revenue() -> Vec<MonthlyRevenue> {
    MONTHLY
        .iter()
        .map(|&(month, revenue_cents, orders)| MonthlyRevenue {
            month,
            revenue_cents,
            orders,
        })
        .collect()
}

/// Revenue share per category, in basis points. Sums to 10 000.
pub fn category_shares() -> Vec<CategoryShare> {
    vec![
        CategoryShare { category: Category::Phones, share_bps: 3_400 },
        CategoryShare { category: Category::Laptops, share_bps: 2_300 },
        CategoryShare { category: Category::Audio, share_bps: 1_500 },
        CategoryShare { category: Category::Tablets, share_bps: 1_200 },
        CategoryShare { category: Category::Wearables, share_bps: 900 },
        CategoryShare { category: Category::Accessories, share_bps: 700 },
    ]
}

/// The top-sellers table, best first.
pub fn top_sellers() -> Vec<TopSeller> {
    vec![
        TopSeller { rank: 1, name: "iPhone 15 Pro", units: 214, revenue_cents: 21_378_600 },
        TopSeller { rank: 2, name: "Galaxy S24 Ultra", units: 131, revenue_cents: 15_706_900 },
        TopSeller { rank: 3, name: "AirPods Pro 2", units: 409, revenue_cents: 10_184_100 },
        TopSeller { rank: 4, name: "MacBook Air 13 M3", units: 87, revenue_cents: 9_561_300 },
        TopSeller { rank: 5, name: "WH-1000XM5", units: 178, revenue_cents: 5_322_200 },
    ]
}

/// The headline cards. Revenue and order counts are the sums of the monthly
/// series; the customer count is its own fixed figure.
pub fn summary() -> DashboardSummary {
    let total_revenue_cents: i64 = MONTHLY.iter().map(|&(_, r, _)| r).sum();
    let total_orders: u32 = MONTHLY.iter().map(|&(_, _, o)| o).sum();

    DashboardSummary {
        total_revenue_cents,
        total_orders,
        total_customers: 1_284,
        average_order_cents: total_revenue_cents / total_orders as i64,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
