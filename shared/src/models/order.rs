//! Order Model (咖啡订单)

use serde::{Deserialize, Serialize};

/// Order record - one customer request for one or more cups
///
/// Timestamps are UTC milliseconds. `ready_at` and `brewed_count` belong to
/// the preparation workforce, `retrieved_at` is written once on pickup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    #[serde(rename = "orderId")]
    pub id: String,
    /// When the order was received
    #[serde(rename = "orderReceived")]
    pub received_at: i64,
    /// When the last cup was brewed, null before that
    #[serde(rename = "orderReady")]
    pub ready_at: Option<i64>,
    /// When the customer picked the order up, null before that
    #[serde(rename = "orderRetrieved")]
    pub retrieved_at: Option<i64>,
    /// Total number of cups in the order
    #[serde(rename = "orderSize")]
    pub size: i64,
    /// Number of cups brewed so far
    #[serde(rename = "orderBrewed")]
    pub brewed_count: i64,
}

/// Lifecycle state derived from an order's counters and timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Brewing still in progress
    Received,
    /// Every cup brewed, waiting for pickup
    Ready,
    /// Handed over, terminal
    Retrieved,
}

impl OrderState {
    pub fn of(order: &Order) -> Self {
        if order.retrieved_at.is_some() {
            Self::Retrieved
        } else if order.is_brewed() {
            Self::Ready
        } else {
            Self::Received
        }
    }
}

impl Order {
    /// Readiness predicate: every requested cup has been brewed.
    ///
    /// An empty order (size 0) is brewed from the start.
    pub fn is_brewed(&self) -> bool {
        self.brewed_count == self.size
    }

    pub fn state(&self) -> OrderState {
        OrderState::of(self)
    }
}

/// A single entry of an incoming order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEntry {
    /// Beverage name, e.g. "espresso"
    pub product: String,
    /// Number of cups of this product
    pub count: i64,
}

/// Incoming order submission (POST /submit-order)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSubmission {
    /// Optional caller-chosen order id
    #[serde(rename = "orderId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "coffeeOrder", default)]
    pub coffees: Vec<OrderEntry>,
}

impl OrderSubmission {
    /// Total cup count of the submission
    pub fn size(&self) -> i64 {
        self.coffees.iter().map(|entry| entry.count).sum()
    }

    /// The requested id, treating an empty string as absent
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Point-in-time counters over the order store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderStats {
    pub orders_received: i64,
    pub orders_ready: i64,
    pub orders_retrieved: i64,
    pub job_queue_length: i64,
}
