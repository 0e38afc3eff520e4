use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::OrderStatus;
use super::product::Product;
use super::user::UserSummary;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusTotals {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StatusBreakdown {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub pending: StatusTotals,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub confirmed: StatusTotals,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rejected: StatusTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    #[serde(alias = "_id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub items_count: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecentMessage {
    #[serde(alias = "_id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default)]
    pub sender: Option<UserSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_read: bool,
}

/// Aggregates served by `GET /dashboard/stats`. Anything the backend leaves
/// out reads as zero or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_products: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_orders: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pending_orders: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub partner_users: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub unread_messages: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status_breakdown: StatusBreakdown,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recent_orders: Vec<RecentOrder>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub recent_messages: Vec<RecentMessage>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub low_stock_products: Vec<Product>,
}

/// Direction of the approval rate, as shown next to the KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl DashboardStats {
    /// Confirmed revenue divided by confirmed orders.
    pub fn average_ticket(&self) -> f64 {
        let confirmed = self.status_breakdown.confirmed;
        if confirmed.count == 0 {
            0.0
        } else {
            confirmed.total_amount / confirmed.count as f64
        }
    }

    /// Share of confirmed orders, as a rounded percentage.
    pub fn approval_rate(&self) -> u64 {
        if self.total_orders == 0 {
            return 0;
        }
        let rate = self.status_breakdown.confirmed.count as f64 / self.total_orders as f64 * 100.0;
        rate.round() as u64
    }

    pub fn trend(&self) -> Trend {
        match self.approval_rate() {
            rate if rate >= 60 => Trend::Up,
            rate if rate >= 40 => Trend::Stable,
            _ => Trend::Down,
        }
    }

    pub fn pending_revenue(&self) -> f64 {
        self.status_breakdown.pending.total_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_defaults() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalOrders":4,"statusBreakdown":{"confirmed":{"count":2,"totalAmount":300}}}"#)
                .unwrap();
        assert_eq!(stats.status_breakdown.pending, StatusTotals::default());
        assert!(stats.recent_orders.is_empty());
        assert_eq!(stats.average_ticket(), 150.0);
        assert_eq!(stats.approval_rate(), 50);
        assert_eq!(stats.trend(), Trend::Stable);
    }

    #[test]
    fn empty_stats_have_zero_kpis() {
        let stats = DashboardStats::default();
        assert_eq!(stats.average_ticket(), 0.0);
        assert_eq!(stats.approval_rate(), 0);
        assert_eq!(stats.trend(), Trend::Down);
    }

    #[test]
    fn high_approval_trends_up() {
        let stats = DashboardStats {
            total_orders: 3,
            status_breakdown: StatusBreakdown {
                confirmed: StatusTotals { count: 2, total_amount: 10.0 },
                ..StatusBreakdown::default()
            },
            ..DashboardStats::default()
        };
        assert_eq!(stats.approval_rate(), 67);
        assert_eq!(stats.trend(), Trend::Up);
    }

    #[test]
    fn null_sections_read_as_empty() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalOrders":null,"recentOrders":null,"lowStockProducts":[{"_id":"p1","sku":null,"stock":1}],
                "recentMessages":[{"_id":"m1","content":null}]}"#,
        )
        .unwrap();
        assert_eq!(stats.total_orders, 0);
        assert!(stats.recent_orders.is_empty());
        assert_eq!(stats.low_stock_products[0].sku, "");
        assert_eq!(stats.recent_messages[0].content, "");
    }
}
