use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use eproc_core::{DomainError, Entity, ItemId, VendorId};
use eproc_query::{SortBy, TextSearch};

/// Stock level classification relative to the reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Classify a quantity against the reorder threshold.
    ///
    /// zero → out-of-stock; at or below threshold → low-stock; else in-stock.
    pub fn classify(quantity: u32, minimum_stock: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= minimum_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

/// A stocked item tracked against a reorder threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub minimum_stock: u32,
    pub status: StockStatus,
    pub supplier: VendorId,
}

impl InventoryItem {
    /// Derived classification; the stored `status` must agree with this.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.minimum_stock)
    }

    /// At or below the reorder threshold.
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.minimum_stock
    }

    /// Above the threshold but within twice of it (watch band).
    pub fn is_running_low(&self) -> bool {
        self.quantity > self.minimum_stock && self.quantity <= self.minimum_stock * 2
    }

    /// Value of the stock on hand.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TextSearch for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

/// User-selectable orderings for the inventory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InventorySort {
    NameAsc,
    NameDesc,
    QuantityAsc,
    QuantityDesc,
    PriceAsc,
    PriceDesc,
}

impl core::str::FromStr for InventorySort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(InventorySort::NameAsc),
            "name-desc" => Ok(InventorySort::NameDesc),
            "quantity-asc" => Ok(InventorySort::QuantityAsc),
            "quantity-desc" => Ok(InventorySort::QuantityDesc),
            "price-asc" => Ok(InventorySort::PriceAsc),
            "price-desc" => Ok(InventorySort::PriceDesc),
            other => Err(DomainError::validation(format!(
                "unknown sort key '{other}'"
            ))),
        }
    }
}

impl SortBy<InventoryItem> for InventorySort {
    fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            InventorySort::NameAsc => a.name.cmp(&b.name),
            InventorySort::NameDesc => b.name.cmp(&a.name),
            InventorySort::QuantityAsc => a.quantity.cmp(&b.quantity),
            InventorySort::QuantityDesc => b.quantity.cmp(&a.quantity),
            InventorySort::PriceAsc => a.unit_price.total_cmp(&b.unit_price),
            InventorySort::PriceDesc => b.unit_price.total_cmp(&a.unit_price),
        }
    }
}

/// Distinct categories in first-appearance order (filter dropdown source).
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

/// Total value of stock on hand across a collection.
pub fn total_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(InventoryItem::stock_value).sum()
}
