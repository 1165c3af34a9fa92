use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso_millis, non_empty, Product, ProductSummary};

/// Stock of one product at one store. `available` is expected to equal
/// `quantity - reserved`; references to products and stores are not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: String,
    pub product_id: String,
    pub location_id: String,
    pub quantity: u32,
    pub reserved: u32,
    pub available: u32,
    #[serde(serialize_with = "iso_millis")]
    pub last_updated: DateTime<Utc>,
}

/// Inventory record joined with a summary of its product, `null` when the
/// product id does not resolve.
#[derive(Debug, Serialize)]
pub struct InventoryView<'a> {
    #[serde(flatten)]
    pub record: &'a InventoryRecord,
    pub product: Option<ProductSummary<'a>>,
}

impl<'a> InventoryView<'a> {
    pub fn new(record: &'a InventoryRecord, product: Option<&'a Product>) -> Self {
        Self {
            record,
            product: product.map(Product::summary),
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilters {
    pub location_id: Option<String>,
    pub product_id: Option<String>,
}

impl InventoryFilters {
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        non_empty(&self.location_id).map_or(true, |l| record.location_id == l)
            && non_empty(&self.product_id).map_or(true, |p| record.product_id == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(product_id: &str, location_id: &str) -> InventoryRecord {
        InventoryRecord {
            id: "inv_x".to_string(),
            product_id: product_id.to_string(),
            location_id: location_id.to_string(),
            quantity: 10,
            reserved: 4,
            available: 6,
            last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn filters_are_conjunctive() {
        let r = record("prod_001", "store_main");
        let both = InventoryFilters {
            location_id: Some("store_main".into()),
            product_id: Some("prod_001".into()),
        };
        assert!(both.matches(&r));

        let wrong_product = InventoryFilters {
            location_id: Some("store_main".into()),
            product_id: Some("prod_002".into()),
        };
        assert!(!wrong_product.matches(&r));
        assert!(InventoryFilters::default().matches(&r));
    }

    #[test]
    fn view_flattens_record_and_nulls_missing_product() {
        let r = record("prod_404", "store_main");
        let json = serde_json::to_value(InventoryView::new(&r, None)).unwrap();
        assert_eq!(json["productId"], "prod_404");
        assert_eq!(json["available"], 6);
        assert_eq!(json["lastUpdated"], "2024-05-01T12:30:00.000Z");
        assert!(json["product"].is_null());
    }
}
