//! Test Helpers

use rust_decimal::Decimal;
use smallvec::smallvec;

use crate::domain::{
    orders::records::ShippingAddress,
    products::{data::NewProduct, records::ProductUuid},
};

pub(crate) fn new_product(name: &str, category: &str, price: Decimal) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: format!("{name} for testing"),
        price,
        category: category.to_string(),
        image: format!("https://images.example.com/{}.jpg", name.to_lowercase()),
        images: smallvec![],
        stock: 25,
        rating: Decimal::new(45, 1),
        reviews: 12,
    }
}

pub(crate) fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        full_name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Harbor Way".to_string(),
        city: "Arlington".to_string(),
        state: "VA".to_string(),
        zip_code: "22201".to_string(),
        country: "United States".to_string(),
    }
}
