//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use smallvec::smallvec;

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartRecord, CartUuid},
            session::SessionId,
        },
        categories::MockCategoriesService,
        orders::{
            MockOrdersService,
            records::{OrderNumber, OrderRecord, OrderStatus, OrderUuid, ShippingAddress},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_count_products().never();

    products
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_ensure_category().never();

    categories
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();

    orders
}

/// Services that fail the test if touched.
fn strict_app() -> AppContext {
    AppContext {
        products: Arc::new(strict_products_mock()),
        categories: Arc::new(strict_categories_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
    }
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(
        AppContext {
            products: Arc::new(products),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service_with(
        AppContext {
            categories: Arc::new(categories),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service_with(
        AppContext {
            carts: Arc::new(carts),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with(
        AppContext {
            orders: Arc::new(orders),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

pub(crate) fn make_product(name: &str, price: Decimal) -> ProductRecord {
    ProductRecord {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        category: "Electronics".to_string(),
        image: "https://images.example.com/product.jpg".to_string(),
        images: smallvec!["https://images.example.com/product.jpg".to_string()],
        stock: 10,
        rating: Decimal::new(42, 1),
        reviews: 7,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_line(price: Decimal, quantity: u32) -> CartItemRecord {
    CartItemRecord {
        product_uuid: ProductUuid::new(),
        name: "Wireless Headphones".to_string(),
        price,
        quantity,
        image: "https://images.example.com/headphones.jpg".to_string(),
    }
}

/// A saved cart holding one line of `quantity` units at `price`.
pub(crate) fn make_cart(session: SessionId, price: Decimal, quantity: u32) -> CartRecord {
    CartRecord {
        uuid: CartUuid::new(),
        session,
        items: vec![make_line(price, quantity)],
        total: price * Decimal::from(quantity),
        updated_at: Some(Timestamp::UNIX_EPOCH),
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

/// A confirmed order for two units at 10.00.
pub(crate) fn make_order(sequence: u64) -> OrderRecord {
    OrderRecord {
        uuid: OrderUuid::new(),
        order_number: OrderNumber::from_sequence(sequence),
        items: vec![make_line(Decimal::new(10, 0), 2)],
        total: Decimal::new(20, 0),
        shipping_address: shipping_address(),
        status: OrderStatus::Confirmed,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
