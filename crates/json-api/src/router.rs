//! API Router

use salvo::Router;

use crate::{carts, categories, healthcheck, orders, products};

/// Routes served under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .get(healthcheck::index)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("admin/products")
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .push(Router::with_path("add").post(carts::add::handler))
                .push(
                    Router::with_path("{session_id}")
                        .get(carts::get::handler)
                        .delete(carts::clear::handler)
                        .push(Router::with_path("update").put(carts::update::handler))
                        .push(
                            Router::with_path("item/{product_id}").delete(carts::remove::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
}
