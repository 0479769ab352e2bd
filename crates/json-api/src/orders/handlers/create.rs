//! Create Order Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::parse_session,
    extensions::*,
    observability::record_order_created,
    orders::{
        errors::into_status_error,
        schemas::{CreateOrderRequest, OrderResponse},
    },
};

/// Create Order Handler
///
/// Checks out the session's cart: the order copies the cart's lines and total, and
/// the cart is removed in the same transaction.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or invalid address"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let request = json.into_inner();

    let session = parse_session(request.session_id)?;

    let order = app
        .orders
        .create_order(session, request.shipping_address.into())
        .await
        .map_err(into_status_error)?;

    record_order_created();

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
