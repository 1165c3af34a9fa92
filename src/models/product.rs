use serde::{Deserialize, Serialize};

use super::non_empty;

/// Core catalog entity. `in_stock` is expected to track `quantity > 0`
/// but the two are stored independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub strain: String,
    /// THC content, percent
    pub thc: f64,
    /// CBD content, percent
    pub cbd: f64,
    pub price: f64,
    pub description: String,
    pub image_url: String,
    pub in_stock: bool,
    pub quantity: u32,
}

impl Product {
    /// The denormalized subset embedded into inventory responses.
    pub fn summary(&self) -> ProductSummary<'_> {
        ProductSummary {
            id: &self.id,
            name: &self.name,
            category: &self.category,
            strain: &self.strain,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub category: &'a str,
    pub strain: &'a str,
    pub price: f64,
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// Filters for the product listing. Values are kept as the raw strings the
/// client sent so they can be echoed back unchanged; keys that were not
/// supplied are omitted from the echo.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<String>,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        non_empty(&self.category).map_or(true, |c| product.category == c)
            && non_empty(&self.strain).map_or(true, |s| product.strain == s)
            && (!self.in_stock_only() || product.in_stock)
    }

    /// Only the literal `true` narrows the listing.
    pub fn in_stock_only(&self) -> bool {
        self.in_stock.as_deref() == Some("true")
    }
}
