use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::{Product, PLACEHOLDER_IMAGE};
use super::user::UserSummary;

/// Lifecycle state of an order. The backend owns the transitions; statuses
/// this client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Portuguese label shown in badges.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Confirmed => "Confirmado",
            OrderStatus::Rejected => "Rejeitado",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// CSS class of the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Confirmed => "status-confirmed",
            OrderStatus::Rejected => "status-rejected",
            OrderStatus::Other(_) => "badge",
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "confirmed" => OrderStatus::Confirmed,
            "rejected" => OrderStatus::Rejected,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// The `product` field of an order line: either the bare id or the
/// populated product, depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Id(String),
    Populated(Box<Product>),
}

impl ProductRef {
    pub fn populated(&self) -> Option<&Product> {
        match self {
            ProductRef::Populated(product) => Some(product),
            ProductRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, alias = "productId", skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Name of the line, preferring the populated product.
    pub fn display_name(&self) -> String {
        self.product
            .as_ref()
            .and_then(ProductRef::populated)
            .map(|product| product.name.clone())
            .filter(|name| !name.is_empty())
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "Produto não disponível".to_string())
    }

    pub fn display_sku(&self) -> String {
        self.product
            .as_ref()
            .and_then(ProductRef::populated)
            .map(|product| product.sku.clone())
            .filter(|sku| !sku.is_empty())
            .or_else(|| self.sku.clone())
            .unwrap_or_else(|| "—".to_string())
    }

    pub fn image(&self) -> String {
        self.product
            .as_ref()
            .and_then(ProductRef::populated)
            .map(Product::primary_image)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }
}

/// An order as listed to partners (their own) and admins (all or trash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: OrderStatus,
    #[serde(default, alias = "customerNote")]
    pub notes: Option<String>,
    #[serde(default, alias = "adminNote")]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Human reference: the last eight characters of the id, upper-cased.
    pub fn short_ref(&self) -> String {
        short_ref(&self.id)
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

pub fn short_ref(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(8);
    chars[start..].iter().collect::<String>().to_uppercase()
}

/// Per-status counts shown above the admin order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally(orders: &[Order]) -> Self {
        orders
            .iter()
            .fold(StatusCounts::default(), |mut counts, order| {
                match order.status {
                    OrderStatus::Pending => counts.pending += 1,
                    OrderStatus::Confirmed => counts.confirmed += 1,
                    OrderStatus::Rejected => counts.rejected += 1,
                    OrderStatus::Other(_) => {}
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ref_takes_last_eight_upper() {
        assert_eq!(short_ref("65f1c0ffee0123abcd"), "0123ABCD");
        assert_eq!(short_ref("ab1"), "AB1");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let order: Order =
            serde_json::from_str(r#"{"_id":"o1","status":"shipped","totalAmount":12.5}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Other("shipped".into()));
        assert_eq!(order.status.label(), "shipped");
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "shipped");
    }

    #[test]
    fn item_reads_populated_or_bare_product() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o2","items":[
                {"productId":{"_id":"p1","name":"Motor","sku":"M-1"},"quantity":2,"price":10},
                {"product":"p2","name":"Polia","quantity":1,"price":5}
            ]}"#,
        )
        .unwrap();
        assert_eq!(order.items[0].display_name(), "Motor");
        assert_eq!(order.items[0].display_sku(), "M-1");
        assert_eq!(order.items[0].subtotal(), 20.0);
        assert_eq!(order.items[1].display_name(), "Polia");
        assert_eq!(order.items[1].display_sku(), "—");
        assert_eq!(order.items[1].image(), PLACEHOLDER_IMAGE);
        assert_eq!(order.items[0].image(), PLACEHOLDER_IMAGE);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn counts_by_status() {
        let orders = vec![
            Order { status: OrderStatus::Pending, ..Order::default() },
            Order { status: OrderStatus::Pending, ..Order::default() },
            Order { status: OrderStatus::Rejected, ..Order::default() },
            Order { status: OrderStatus::Other("x".into()), ..Order::default() },
        ];
        assert_eq!(
            StatusCounts::tally(&orders),
            StatusCounts { pending: 2, confirmed: 0, rejected: 1 }
        );
    }
}
