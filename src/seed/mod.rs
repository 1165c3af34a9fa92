use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::Catalog;
use crate::models::{InventoryRecord, Product, Store};

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    strain: &'static str,
    thc: f64,
    cbd: f64,
    price: f64,
    description: &'static str,
    image_url: &'static str,
    quantity: u32,
}

static PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: "prod_001",
        name: "Blue Dream",
        category: "Flower",
        strain: "Hybrid",
        thc: 18.5,
        cbd: 0.1,
        price: 45.00,
        description: "A sativa-dominant hybrid known for its sweet berry aroma and balanced effects.",
        image_url: "https://via.placeholder.com/300x300/4A90E2/FFFFFF?text=Blue+Dream",
        quantity: 25,
    },
    ProductSeed {
        id: "prod_002",
        name: "OG Kush",
        category: "Flower",
        strain: "Indica",
        thc: 22.0,
        cbd: 0.5,
        price: 50.00,
        description: "A classic indica strain with pine and earth aromas, known for relaxation.",
        image_url: "https://via.placeholder.com/300x300/8B4513/FFFFFF?text=OG+Kush",
        quantity: 18,
    },
    ProductSeed {
        id: "prod_003",
        name: "Sour Diesel",
        category: "Flower",
        strain: "Sativa",
        thc: 20.1,
        cbd: 0.2,
        price: 42.00,
        description: "An energizing sativa with diesel-like aroma and uplifting effects.",
        image_url: "https://via.placeholder.com/300x300/FFD700/000000?text=Sour+Diesel",
        quantity: 32,
    },
    ProductSeed {
        id: "prod_004",
        name: "Girl Scout Cookies",
        category: "Flower",
        strain: "Hybrid",
        thc: 19.8,
        cbd: 0.3,
        price: 48.00,
        description: "A sweet hybrid with minty, earthy flavors and balanced euphoria.",
        image_url: "https://via.placeholder.com/300x300/228B22/FFFFFF?text=GSC",
        quantity: 0,
    },
    ProductSeed {
        id: "prod_005",
        name: "CBD Gummies",
        category: "Edibles",
        strain: "CBD",
        thc: 0.0,
        cbd: 25.0,
        price: 25.00,
        description: "Relaxing CBD gummies for wellness and stress relief.",
        image_url: "https://via.placeholder.com/300x300/FF69B4/FFFFFF?text=CBD+Gummies",
        quantity: 45,
    },
];

/// (id, product_id, location_id, quantity, reserved)
static INVENTORY: &[(&str, &str, &str, u32, u32)] = &[
    ("inv_001", "prod_001", "store_main", 25, 3),
    ("inv_002", "prod_002", "store_main", 18, 0),
    ("inv_003", "prod_003", "store_main", 32, 5),
];

static STORES: &[(&str, &str, &str, &str, &str, f64, f64)] = &[
    (
        "store_main",
        "AYR Downtown Dispensary",
        "123 Main St, Downtown",
        "(555) 123-4567",
        "9 AM - 9 PM Daily",
        40.7128,
        -74.0060,
    ),
    (
        "store_north",
        "AYR North End",
        "456 North Ave, North District",
        "(555) 234-5678",
        "10 AM - 8 PM Daily",
        40.7282,
        -73.7949,
    ),
];

/// Build the sample catalog. Inventory rows are stamped with `now`.
pub fn sample_catalog(now: DateTime<Utc>) -> Catalog {
    let products: Vec<Product> = PRODUCTS
        .iter()
        .map(|p| Product {
            id: p.id.to_string(),
            name: p.name.to_string(),
            category: p.category.to_string(),
            strain: p.strain.to_string(),
            thc: p.thc,
            cbd: p.cbd,
            price: p.price,
            description: p.description.to_string(),
            image_url: p.image_url.to_string(),
            in_stock: p.quantity > 0,
            quantity: p.quantity,
        })
        .collect();

    let inventory: Vec<InventoryRecord> = INVENTORY
        .iter()
        .map(|&(id, product_id, location_id, quantity, reserved)| InventoryRecord {
            id: id.to_string(),
            product_id: product_id.to_string(),
            location_id: location_id.to_string(),
            quantity,
            reserved,
            available: quantity.saturating_sub(reserved),
            last_updated: now,
        })
        .collect();

    let stores: Vec<Store> = STORES
        .iter()
        .map(|&(id, name, address, phone, hours, latitude, longitude)| Store {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            hours: hours.to_string(),
            latitude,
            longitude,
        })
        .collect();

    info!(
        products = products.len(),
        inventory = inventory.len(),
        stores = stores.len(),
        "Loaded sample catalog"
    );

    Catalog::new(products, inventory, stores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        sample_catalog(Utc::now())
    }

    #[test]
    fn product_ids_are_unique_and_ordered() {
        let c = catalog();
        let ids: Vec<&str> = c.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prod_001", "prod_002", "prod_003", "prod_004", "prod_005"]);
    }

    #[test]
    fn in_stock_tracks_quantity() {
        for p in catalog().products() {
            assert_eq!(p.in_stock, p.quantity > 0, "{} stock flag out of sync", p.id);
        }
    }

    #[test]
    fn available_is_quantity_minus_reserved() {
        let c = catalog();
        let available: Vec<u32> = c.inventory().iter().map(|r| r.available).collect();
        assert_eq!(available, vec![22, 18, 27]);
        for r in c.inventory() {
            assert_eq!(r.available, r.quantity - r.reserved);
        }
    }

    #[test]
    fn inventory_references_resolve() {
        let c = catalog();
        for r in c.inventory() {
            assert!(c.find_product(&r.product_id).is_some(), "{} dangles", r.id);
            assert!(c.stores().iter().any(|s| s.id == r.location_id));
        }
    }

    #[test]
    fn inventory_is_stamped_with_load_time() {
        let now = Utc::now();
        let c = sample_catalog(now);
        assert!(c.inventory().iter().all(|r| r.last_updated == now));
    }
}
