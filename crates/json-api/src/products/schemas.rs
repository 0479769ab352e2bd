//! Product request and response bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::{ProductImages, ProductRecord, ProductUuid},
};

/// Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub name: String,

    pub description: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub category: String,

    /// Primary image URL
    pub image: String,

    /// Gallery image URLs
    pub images: Vec<String>,

    pub stock: u32,

    /// Average review score
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub rating: Decimal,

    pub reviews: u32,

    pub created_at: String,

    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.uuid.into_uuid(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            images: product.images.into_vec(),
            stock: product.stock,
            rating: product.rating,
            reviews: product.reviews,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub category: String,

    #[serde(default)]
    pub image: String,

    /// Gallery images; defaults to the primary image alone
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub stock: u32,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub rating: Option<Decimal>,

    #[serde(default)]
    pub reviews: u32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        let images = if request.images.is_empty() && !request.image.is_empty() {
            ProductImages::from_elem(request.image.clone(), 1)
        } else {
            ProductImages::from_vec(request.images)
        };

        NewProduct {
            uuid: ProductUuid::new(),
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            image: request.image,
            images,
            stock: request.stock,
            rating: request.rating.unwrap_or_default(),
            reviews: request.reviews,
        }
    }
}

/// Update Product Request
///
/// Fields left out keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,

    pub description: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    pub category: Option<String>,

    pub image: Option<String>,

    pub images: Option<Vec<String>>,

    pub stock: Option<u32>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub rating: Option<Decimal>,

    pub reviews: Option<u32>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            image: request.image,
            images: request.images.map(ProductImages::from_vec),
            stock: request.stock,
            rating: request.rating,
            reviews: request.reviews,
        }
    }
}
