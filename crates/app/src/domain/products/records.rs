//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Gallery images attached to a product; most products carry one or two.
pub type ProductImages = SmallVec<[String; 4]>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
