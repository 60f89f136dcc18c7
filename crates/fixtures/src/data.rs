//! The sample dataset backing mock mode.
//!
//! Ids are stable and cross-referenced: requisitions and reports point at
//! users, inventory items and orders point at vendors.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use eproc_core::{ItemId, OrderId, ReportId, RequisitionId, UserId, VendorId};
use eproc_inventory::{InventoryItem, StockStatus};
use eproc_orders::{OrderLine, OrderStatus, PaymentStatus, PurchaseOrder};
use eproc_reports::{Report, ReportFormat, ReportType};
use eproc_requisitions::{LineItem, Priority, Requisition, RequisitionStatus};
use eproc_users::{User, UserRole};
use eproc_vendors::{ContactInfo, Vendor, VendorStatus};

use crate::budget::{BudgetSnapshot, DepartmentBudget};

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("fixture timestamp must be RFC 3339")
}

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: UserId::new(1),
            name: "Asha Raman".to_string(),
            email: "asha.raman@example.com".to_string(),
            role: UserRole::Admin,
            department: "Procurement".to_string(),
        },
        User {
            id: UserId::new(2),
            name: "Dev Mehta".to_string(),
            email: "dev.mehta@example.com".to_string(),
            role: UserRole::Manager,
            department: "Finance".to_string(),
        },
        User {
            id: UserId::new(3),
            name: "Priya Nair".to_string(),
            email: "priya.nair@example.com".to_string(),
            role: UserRole::User,
            department: "IT".to_string(),
        },
        User {
            id: UserId::new(4),
            name: "Rohan Iyer".to_string(),
            email: "rohan.iyer@example.com".to_string(),
            role: UserRole::User,
            department: "Operations".to_string(),
        },
        User {
            id: UserId::new(5),
            name: "Meera Joshi".to_string(),
            email: "meera.joshi@example.com".to_string(),
            role: UserRole::Manager,
            department: "Logistics".to_string(),
        },
    ]
});

fn vendor(
    id: u64,
    name: &str,
    category: &str,
    contact_person: &str,
    email: &str,
    phone: &str,
    address: &str,
    status: VendorStatus,
    rating: f64,
    total_orders: u32,
) -> Vendor {
    Vendor {
        id: VendorId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        contact: ContactInfo {
            contact_person: contact_person.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        },
        status,
        rating,
        total_orders,
    }
}

static VENDORS: Lazy<Vec<Vendor>> = Lazy::new(|| {
    vec![
        vendor(
            1,
            "Meridian Industries",
            "Conglomerate",
            "Arun Kapoor",
            "a.kapoor@meridianind.example",
            "+91 22 4000 1100",
            "Meridian House, Nariman Point, Mumbai",
            VendorStatus::Active,
            4.9,
            127,
        ),
        vendor(
            2,
            "Cobalt Consulting Services",
            "IT Services",
            "Nisha Venkat",
            "n.venkat@cobaltcs.example",
            "+91 22 6100 2200",
            "Cobalt Tower, Bandra Kurla Complex, Mumbai",
            VendorStatus::Active,
            4.8,
            93,
        ),
        vendor(
            3,
            "Silverline Technologies",
            "IT Services",
            "Sanjay Rao",
            "s.rao@silverline.example",
            "+91 80 2800 3300",
            "Silverline Campus, Hosur Road, Bangalore",
            VendorStatus::Active,
            4.7,
            85,
        ),
        vendor(
            4,
            "Horizon Telecom",
            "Telecommunications",
            "Kavita Malhotra",
            "k.malhotra@horizontel.example",
            "+91 11 4500 4400",
            "Horizon Crescent, Saket, New Delhi",
            VendorStatus::Active,
            4.5,
            72,
        ),
        vendor(
            5,
            "Kestrel Motors",
            "Automotive",
            "Vivek Menon",
            "v.menon@kestrelmotors.example",
            "+91 22 2400 5500",
            "Gateway Works, Apollo Bunder, Mumbai",
            VendorStatus::Active,
            4.6,
            68,
        ),
        vendor(
            6,
            "Bluepeak Systems",
            "IT Services",
            "Farah Sheikh",
            "f.sheikh@bluepeak.example",
            "+91 80 2850 6600",
            "Bluepeak Park, Sarjapur Road, Bangalore",
            VendorStatus::Active,
            4.5,
            64,
        ),
        vendor(
            7,
            "Stonebridge Engineering",
            "Engineering",
            "Mohan Pillai",
            "m.pillai@stonebridge.example",
            "+91 22 6700 7700",
            "Stonebridge House, Ballard Estate, Mumbai",
            VendorStatus::Active,
            4.7,
            59,
        ),
        vendor(
            8,
            "Vantage Infra Group",
            "Infrastructure",
            "Deepa Kulkarni",
            "d.kulkarni@vantageinfra.example",
            "+91 79 2550 8800",
            "Vantage Plaza, Mithakhali, Ahmedabad",
            VendorStatus::Pending,
            4.4,
            45,
        ),
        vendor(
            9,
            "Crescent Bank",
            "Banking",
            "Ravi Shenoy",
            "r.shenoy@crescentbank.example",
            "+91 22 3300 9900",
            "Crescent House, Lower Parel, Mumbai",
            VendorStatus::Active,
            4.8,
            56,
        ),
        vendor(
            10,
            "Falcon Auto Works",
            "Automotive",
            "Tarun Bhatia",
            "t.bhatia@falconauto.example",
            "+91 20 6600 1010",
            "Falcon Yard, Akurdi, Pune",
            VendorStatus::Inactive,
            4.3,
            38,
        ),
        vendor(
            11,
            "Northwind Software",
            "IT Services",
            "Leela Krishnan",
            "l.krishnan@northwind.example",
            "+91 120 6100 1111",
            "Northwind Block 3A, Sector 126, Noida",
            VendorStatus::Active,
            4.6,
            71,
        ),
        vendor(
            12,
            "Pioneer Paints",
            "Manufacturing",
            "Gautam Desai",
            "g.desai@pioneerpaints.example",
            "+91 22 6200 1212",
            "Pioneer Works, Santacruz East, Mumbai",
            VendorStatus::Pending,
            4.5,
            52,
        ),
    ]
});

static REQUISITIONS: Lazy<Vec<Requisition>> = Lazy::new(|| {
    vec![
        Requisition {
            id: RequisitionId::new(1001),
            title: "IT Infrastructure Upgrade".to_string(),
            department: "IT".to_string(),
            requested_by: UserId::new(3),
            requested_at: ts("2025-04-10T09:32:15Z"),
            status: RequisitionStatus::Approved,
            priority: Priority::High,
            total_amount: 1_275_000.0,
            items: vec![
                LineItem {
                    name: "Server Infrastructure".to_string(),
                    quantity: 5,
                    unit_price: 185_000.0,
                },
                LineItem {
                    name: "Networking Equipment".to_string(),
                    quantity: 10,
                    unit_price: 35_000.0,
                },
            ],
        },
        Requisition {
            id: RequisitionId::new(1002),
            title: "Office Supplies - Q2".to_string(),
            department: "Operations".to_string(),
            requested_by: UserId::new(4),
            requested_at: ts("2025-04-15T11:20:45Z"),
            status: RequisitionStatus::Pending,
            priority: Priority::Medium,
            total_amount: 270_000.0,
            items: vec![
                LineItem {
                    name: "Printer Paper".to_string(),
                    quantity: 500,
                    unit_price: 250.0,
                },
                LineItem {
                    name: "Ink Cartridges".to_string(),
                    quantity: 50,
                    unit_price: 1_200.0,
                },
                LineItem {
                    name: "Office Stationery".to_string(),
                    quantity: 100,
                    unit_price: 850.0,
                },
            ],
        },
        Requisition {
            id: RequisitionId::new(1003),
            title: "Conference Room Renovation".to_string(),
            department: "Facilities".to_string(),
            requested_by: UserId::new(5),
            requested_at: ts("2025-04-08T15:45:22Z"),
            status: RequisitionStatus::Rejected,
            priority: Priority::Low,
            total_amount: 1_000_000.0,
            items: vec![
                LineItem {
                    name: "Conference Tables".to_string(),
                    quantity: 5,
                    unit_price: 45_000.0,
                },
                LineItem {
                    name: "Executive Chairs".to_string(),
                    quantity: 30,
                    unit_price: 15_000.0,
                },
                LineItem {
                    name: "AV Equipment".to_string(),
                    quantity: 5,
                    unit_price: 65_000.0,
                },
            ],
        },
    ]
});

fn item(
    id: u64,
    name: &str,
    category: &str,
    location: &str,
    quantity: u32,
    unit_price: f64,
    minimum_stock: u32,
    supplier: u64,
) -> InventoryItem {
    InventoryItem {
        id: ItemId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        quantity,
        unit_price,
        minimum_stock,
        status: StockStatus::classify(quantity, minimum_stock),
        supplier: VendorId::new(supplier),
    }
}

static INVENTORY_ITEMS: Lazy<Vec<InventoryItem>> = Lazy::new(|| {
    vec![
        item(101, "Workbook Pro Laptops", "IT Equipment", "IT Storage", 25, 65_000.0, 10, 2),
        item(102, "27-inch Monitors", "IT Equipment", "IT Storage", 42, 18_000.0, 15, 3),
        item(103, "A4 Paper Reams", "Office Supplies", "Supply Room 1", 320, 250.0, 100, 6),
        item(104, "Laser Toner Cartridges", "Office Supplies", "Supply Room 1", 8, 3_500.0, 10, 2),
        item(105, "Executive Office Chairs", "Furniture", "Warehouse B", 0, 15_000.0, 5, 7),
    ]
});

static REPORTS: Lazy<Vec<Report>> = Lazy::new(|| {
    vec![
        Report {
            id: ReportId::new(201),
            title: "Monthly Procurement Summary - March 2025".to_string(),
            report_type: ReportType::Procurement,
            format: ReportFormat::Pdf,
            generated_at: ts("2025-04-01T08:15:30Z"),
            generated_by: UserId::new(2),
            size: "2.4 MB".to_string(),
        },
        Report {
            id: ReportId::new(202),
            title: "Vendor Performance Q1 2025".to_string(),
            report_type: ReportType::Vendor,
            format: ReportFormat::Excel,
            generated_at: ts("2025-04-05T14:30:20Z"),
            generated_by: UserId::new(1),
            size: "1.8 MB".to_string(),
        },
        Report {
            id: ReportId::new(203),
            title: "Inventory Status Report - April 2025".to_string(),
            report_type: ReportType::Inventory,
            format: ReportFormat::Pdf,
            generated_at: ts("2025-04-08T09:22:15Z"),
            generated_by: UserId::new(4),
            size: "3.1 MB".to_string(),
        },
        Report {
            id: ReportId::new(204),
            title: "Budget Variance Analysis - Q1 2025".to_string(),
            report_type: ReportType::Financial,
            format: ReportFormat::Excel,
            generated_at: ts("2025-04-10T11:45:00Z"),
            generated_by: UserId::new(2),
            size: "1.2 MB".to_string(),
        },
    ]
});

static ORDERS: Lazy<Vec<PurchaseOrder>> = Lazy::new(|| {
    vec![
        PurchaseOrder {
            id: OrderId::new(5001),
            order_number: "PO-2025-5001".to_string(),
            vendor: VendorId::new(1),
            created_at: ts("2025-04-01T09:30:00Z"),
            status: OrderStatus::Delivered,
            total_amount: 1_275_000.0,
            payment_status: PaymentStatus::Paid,
            items: vec![
                OrderLine {
                    name: "Industrial Equipment".to_string(),
                    quantity: 5,
                    unit_price: 185_000.0,
                },
                OrderLine {
                    name: "Petrochemical Products".to_string(),
                    quantity: 10,
                    unit_price: 35_000.0,
                },
            ],
        },
        PurchaseOrder {
            id: OrderId::new(5002),
            order_number: "PO-2025-5002".to_string(),
            vendor: VendorId::new(2),
            created_at: ts("2025-04-03T14:15:22Z"),
            status: OrderStatus::InTransit,
            total_amount: 850_000.0,
            payment_status: PaymentStatus::Pending,
            items: vec![OrderLine {
                name: "Software Licenses".to_string(),
                quantity: 100,
                unit_price: 8_500.0,
            }],
        },
        PurchaseOrder {
            id: OrderId::new(5003),
            order_number: "PO-2025-5003".to_string(),
            vendor: VendorId::new(5),
            created_at: ts("2025-04-05T10:20:15Z"),
            status: OrderStatus::Processing,
            total_amount: 3_575_000.0,
            payment_status: PaymentStatus::NotPaid,
            items: vec![OrderLine {
                name: "Commercial Vehicles".to_string(),
                quantity: 5,
                unit_price: 715_000.0,
            }],
        },
    ]
});

static BUDGET: Lazy<BudgetSnapshot> = Lazy::new(|| BudgetSnapshot {
    fiscal_year: "2025".to_string(),
    departments: vec![
        DepartmentBudget {
            name: "IT".to_string(),
            total_budget: 12_500_000.0,
            spent: 5_432_578.0,
            remaining: 7_067_422.0,
        },
        DepartmentBudget {
            name: "Operations".to_string(),
            total_budget: 8_500_000.0,
            spent: 3_762_450.0,
            remaining: 4_737_550.0,
        },
        DepartmentBudget {
            name: "Marketing".to_string(),
            total_budget: 6_500_000.0,
            spent: 3_256_875.0,
            remaining: 3_243_125.0,
        },
    ],
});

/// User directory fixture.
pub fn users() -> &'static [User] {
    &USERS
}

/// Vendor directory fixture: 12 vendors, 9 of them active.
pub fn vendors() -> &'static [Vendor] {
    &VENDORS
}

/// Requisition fixture: one approved, one pending, one rejected.
pub fn requisitions() -> &'static [Requisition] {
    &REQUISITIONS
}

/// Inventory fixture covering all three stock classifications.
pub fn inventory_items() -> &'static [InventoryItem] {
    &INVENTORY_ITEMS
}

/// Generated report fixture.
pub fn reports() -> &'static [Report] {
    &REPORTS
}

/// Purchase order fixture.
pub fn orders() -> &'static [PurchaseOrder] {
    &ORDERS
}

/// Budget rows for the dashboard.
pub fn budget() -> &'static BudgetSnapshot {
    &BUDGET
}

#[cfg(test)]
mod tests {
    use super::*;
    use eproc_query::{Select, narrow};
    use eproc_vendors::VendorStatus;

    #[test]
    fn vendor_fixture_has_twelve_records_nine_active() {
        let all = vendors();
        assert_eq!(all.len(), 12);
        let active = narrow(all, &Select::Only(VendorStatus::Active), |v| v.status);
        assert_eq!(active.len(), 9);
        // Tab filtering keeps fixture order.
        let expected: Vec<_> = all
            .iter()
            .filter(|v| v.status == VendorStatus::Active)
            .map(|v| v.id)
            .collect();
        let got: Vec<_> = active.iter().map(|v| v.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn requisitions_reference_known_users_and_balance() {
        for req in requisitions() {
            assert!(users().iter().any(|u| u.id == req.requested_by));
            req.validate_total().unwrap();
        }
    }

    #[test]
    fn inventory_suppliers_exist_and_statuses_agree() {
        for item in inventory_items() {
            assert!(vendors().iter().any(|v| v.id == item.supplier));
            assert_eq!(item.status, item.stock_status());
        }
    }

    #[test]
    fn reports_and_orders_reference_known_records() {
        for report in reports() {
            assert!(users().iter().any(|u| u.id == report.generated_by));
        }
        for order in orders() {
            assert!(vendors().iter().any(|v| v.id == order.vendor));
        }
    }

    #[test]
    fn inventory_fixture_covers_every_classification() {
        use eproc_inventory::StockStatus;
        let statuses: Vec<_> = inventory_items().iter().map(|i| i.status).collect();
        assert!(statuses.contains(&StockStatus::InStock));
        assert!(statuses.contains(&StockStatus::LowStock));
        assert!(statuses.contains(&StockStatus::OutOfStock));
    }

    #[test]
    fn budget_rows_are_balanced() {
        for row in &budget().departments {
            assert!(row.is_balanced(), "{} is off-balance", row.name);
        }
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        let mut vendor_ids: Vec<_> = vendors().iter().map(|v| v.id).collect();
        vendor_ids.sort();
        vendor_ids.dedup();
        assert_eq!(vendor_ids.len(), vendors().len());

        let mut item_ids: Vec<_> = inventory_items().iter().map(|i| i.id).collect();
        item_ids.sort();
        item_ids.dedup();
        assert_eq!(item_ids.len(), inventory_items().len());
    }
}
