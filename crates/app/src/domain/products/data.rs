//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::records::{ProductImages, ProductUuid};

/// Listing size used when the caller does not ask for one.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Hard ceiling on a single listing.
pub const MAX_LIST_LIMIT: u32 = 250;

/// Pseudo-category meaning "every category".
const ALL_CATEGORIES: &str = "all";

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub images: ProductImages,
    pub stock: u32,
    pub rating: Decimal,
    pub reviews: u32,
}

/// Product Update Data
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub images: Option<ProductImages>,
    pub stock: Option<u32>,
    pub rating: Option<Decimal>,
    pub reviews: Option<u32>,
}

/// Catalog listing filter
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub limit: u32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ProductFilter {
    /// Build a filter from raw query values.
    ///
    /// Blank strings and the `all` category are treated as "no filter" and the limit is
    /// clamped to `1..=MAX_LIST_LIMIT`.
    #[must_use]
    pub fn new(
        category: Option<String>,
        search: Option<String>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
        limit: Option<u32>,
    ) -> Self {
        let category = non_blank(category).filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES));

        Self {
            category,
            search: non_blank(search),
            min_price,
            max_price,
            limit: limit
                .unwrap_or(DEFAULT_LIST_LIMIT)
                .clamp(1, MAX_LIST_LIMIT),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
