//! Add To Cart Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::domain::{carts::data::NewCartItem, products::records::ProductUuid};

use crate::{
    carts::{
        errors::into_status_error,
        parse_session,
        schemas::{AddToCartRequest, CartResponse},
    },
    extensions::*,
};

/// Add To Cart Handler
///
/// Adds a product to the session's cart, merging with an existing line for the same
/// product. The cart is created on first use.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid session id or quantity"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let request = json.into_inner();

    let session = parse_session(request.session_id)?;
    let quantity = u32::try_from(request.quantity.unwrap_or(1)).or_400("Invalid quantity")?;

    let cart = app
        .carts
        .add_item(
            session,
            NewCartItem::new(ProductUuid::from_uuid(request.product_id), quantity),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
