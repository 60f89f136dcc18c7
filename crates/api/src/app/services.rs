use std::sync::Arc;

use eproc_fixtures::BudgetSnapshot;
use eproc_inventory::InventoryItem;
use eproc_orders::PurchaseOrder;
use eproc_reports::Report;
use eproc_requisitions::Requisition;
use eproc_session::TokenStore;
use eproc_users::User;
use eproc_vendors::Vendor;

use eproc_core::{Entity, ItemId, ReportId, RequisitionId, VendorId};

fn find_by_id<'a, T: Entity>(items: &'a [T], id: &T::Id) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// The API's backing state: read-only fixture collections plus the one
/// mutable piece, the bearer-token registry.
#[derive(Debug)]
pub struct AppServices {
    tokens: Arc<TokenStore>,
}

impl AppServices {
    /// Wire up services. Collections are loaded once at process start and
    /// read-only thereafter.
    pub fn build() -> Self {
        Self {
            tokens: Arc::new(TokenStore::new()),
        }
    }

    pub fn tokens(&self) -> Arc<TokenStore> {
        Arc::clone(&self.tokens)
    }

    pub fn users(&self) -> &'static [User] {
        eproc_fixtures::users()
    }

    pub fn vendors(&self) -> &'static [Vendor] {
        eproc_fixtures::vendors()
    }

    pub fn vendor(&self, id: VendorId) -> Option<&'static Vendor> {
        find_by_id(self.vendors(), &id)
    }

    pub fn requisitions(&self) -> &'static [Requisition] {
        eproc_fixtures::requisitions()
    }

    pub fn requisition(&self, id: RequisitionId) -> Option<&'static Requisition> {
        find_by_id(self.requisitions(), &id)
    }

    pub fn inventory(&self) -> &'static [InventoryItem] {
        eproc_fixtures::inventory_items()
    }

    pub fn inventory_item(&self, id: ItemId) -> Option<&'static InventoryItem> {
        find_by_id(self.inventory(), &id)
    }

    pub fn reports(&self) -> &'static [Report] {
        eproc_fixtures::reports()
    }

    pub fn report(&self, id: ReportId) -> Option<&'static Report> {
        find_by_id(self.reports(), &id)
    }

    pub fn orders(&self) -> &'static [PurchaseOrder] {
        eproc_fixtures::orders()
    }

    pub fn budget(&self) -> &'static BudgetSnapshot {
        eproc_fixtures::budget()
    }
}
