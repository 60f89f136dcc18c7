use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eproc_core::{Entity, OrderId, VendorId};

/// Fulfilment status of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Processing,
    InTransit,
    Delivered,
}

/// Payment state of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    NotPaid,
}

/// A line on a purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// A purchase order placed with a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: OrderId,
    pub order_number: String,
    pub vendor: VendorId,
    #[serde(rename = "dateCreated")]
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderLine>,
}

impl PurchaseOrder {
    pub fn is_settled(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

impl Entity for PurchaseOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
