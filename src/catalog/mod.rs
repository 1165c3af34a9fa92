//! Read-only query layer over the in-memory catalog.
//!
//! The tables are built once at start-up and never mutated, so the catalog is
//! shared behind a plain `Arc` without any lock. Every query is a linear scan
//! that keeps insertion order.

use crate::models::{InventoryFilters, InventoryRecord, InventoryView, Product, ProductFilters, Store};

// ── Catalog: holds all three tables ──────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    inventory: Vec<InventoryRecord>,
    stores: Vec<Store>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, inventory: Vec<InventoryRecord>, stores: Vec<Store>) -> Self {
        Self {
            products,
            inventory,
            stores,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    // ── Products ─────────────────────────────────────────────────────────────

    /// Products passing every supplied filter (category → strain → inStock).
    pub fn list_products(&self, filters: &ProductFilters) -> Vec<&Product> {
        self.products.iter().filter(|p| filters.matches(p)).collect()
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // ── Inventory ────────────────────────────────────────────────────────────

    /// Filtered inventory, each row joined with its product summary.
    /// An empty result is a normal answer here.
    pub fn list_inventory(&self, filters: &InventoryFilters) -> Vec<InventoryView<'_>> {
        self.inventory
            .iter()
            .filter(|r| filters.matches(r))
            .map(|r| self.enrich(r))
            .collect()
    }

    /// Inventory held at one location. `None` when the location has no rows,
    /// which the path-parameter endpoint reports as not found.
    pub fn inventory_for_location(&self, location_id: &str) -> Option<Vec<InventoryView<'_>>> {
        let rows: Vec<_> = self
            .inventory
            .iter()
            .filter(|r| r.location_id == location_id)
            .map(|r| self.enrich(r))
            .collect();

        if rows.is_empty() {
            None
        } else {
            Some(rows)
        }
    }

    fn enrich<'a>(&'a self, record: &'a InventoryRecord) -> InventoryView<'a> {
        InventoryView::new(record, self.find_product(&record.product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_catalog;
    use chrono::Utc;

    fn catalog() -> Catalog {
        sample_catalog(Utc::now())
    }

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn product_filters(category: Option<&str>, strain: Option<&str>, in_stock: Option<&str>) -> ProductFilters {
        ProductFilters {
            category: category.map(str::to_string),
            strain: strain.map(str::to_string),
            in_stock: in_stock.map(str::to_string),
        }
    }

    #[test]
    fn unfiltered_listing_keeps_insertion_order() {
        let c = catalog();
        let all = c.list_products(&ProductFilters::default());
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "prod_001");
        assert_eq!(all[4].id, "prod_005");
    }

    #[test]
    fn flower_category_returns_four() {
        let c = catalog();
        let flower = c.list_products(&product_filters(Some("Flower"), None, None));
        assert_eq!(ids(&flower), vec!["prod_001", "prod_002", "prod_003", "prod_004"]);
    }

    #[test]
    fn in_stock_excludes_sold_out() {
        let c = catalog();
        let flower = c.list_products(&product_filters(Some("Flower"), None, Some("true")));
        assert_eq!(ids(&flower), vec!["prod_001", "prod_002", "prod_003"]);
    }

    #[test]
    fn strain_combines_with_category() {
        let c = catalog();
        let hybrids = c.list_products(&product_filters(Some("Flower"), Some("Hybrid"), None));
        assert_eq!(ids(&hybrids), vec!["prod_001", "prod_004"]);

        let none = c.list_products(&product_filters(Some("Edibles"), Some("Hybrid"), None));
        assert!(none.is_empty());
    }

    #[test]
    fn find_product_is_exact() {
        let c = catalog();
        assert_eq!(c.find_product("prod_003").map(|p| p.name.as_str()), Some("Sour Diesel"));
        assert!(c.find_product("prod_999").is_none());
        assert!(c.find_product("PROD_003").is_none());
    }

    #[test]
    fn inventory_rows_are_enriched() {
        let c = catalog();
        let rows = c.list_inventory(&InventoryFilters {
            location_id: Some("store_main".into()),
            product_id: None,
        });
        assert_eq!(rows.len(), 3);
        for row in &rows {
            let product = row.product.expect("product should resolve");
            assert_eq!(product.id, row.record.product_id);
        }
    }

    #[test]
    fn inventory_product_filter() {
        let c = catalog();
        let rows = c.list_inventory(&InventoryFilters {
            location_id: None,
            product_id: Some("prod_002".into()),
        });
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.id, "inv_002");
    }

    #[test]
    fn dangling_product_reference_enriches_to_none() {
        let mut c = catalog();
        c.inventory[0].product_id = "prod_gone".into();
        let rows = c.list_inventory(&InventoryFilters::default());
        assert!(rows[0].product.is_none());
        assert!(rows[1].product.is_some());
    }

    #[test]
    fn empty_location_query_vs_path_lookup() {
        let c = catalog();
        let by_query = c.list_inventory(&InventoryFilters {
            location_id: Some("store_north".into()),
            product_id: None,
        });
        assert!(by_query.is_empty());
        assert!(c.inventory_for_location("store_north").is_none());
        assert_eq!(c.inventory_for_location("store_main").map(|r| r.len()), Some(3));
    }

    #[test]
    fn stores_are_returned_whole() {
        let c = catalog();
        let ids: Vec<&str> = c.stores().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["store_main", "store_north"]);
    }
}
