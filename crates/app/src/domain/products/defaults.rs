//! Starter catalog used to seed an empty store.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::products::{
    data::NewProduct,
    records::{ProductImages, ProductUuid},
};

const DEFAULT_CATALOG_JSON: &str = include_str!("default_catalog.json");

#[derive(Debug, Deserialize)]
struct DefaultCatalog {
    categories: Vec<String>,
    products: Vec<DefaultProduct>,
}

#[derive(Debug, Deserialize)]
struct DefaultProduct {
    name: String,
    description: String,
    price: Decimal,
    category: String,
    image: String,
    images: ProductImages,
    stock: u32,
    rating: Decimal,
    reviews: u32,
}

/// Categories and products a new store starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterCatalog {
    pub categories: Vec<String>,
    pub products: Vec<NewProduct>,
}

/// Load the bundled starter catalog, assigning fresh product UUIDs.
///
/// # Errors
///
/// Returns an error if the bundled catalog document is malformed.
pub fn starter_catalog() -> Result<StarterCatalog, serde_json::Error> {
    let catalog: DefaultCatalog = serde_json::from_str(DEFAULT_CATALOG_JSON)?;

    let products = catalog
        .products
        .into_iter()
        .map(|p| NewProduct {
            uuid: ProductUuid::new(),
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            image: p.image,
            images: p.images,
            stock: p.stock,
            rating: p.rating,
            reviews: p.reviews,
        })
        .collect();

    Ok(StarterCatalog {
        categories: catalog.categories,
        products,
    })
}
