//! Update Cart Quantity Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::products::records::ProductUuid;

use crate::{
    carts::{errors::into_status_error, parse_session, schemas::CartResponse},
    extensions::*,
};

/// Update Cart Quantity Handler
///
/// Replaces a line's quantity. Zero or less removes the line; products not in the
/// cart are ignored.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    parameters(
        ("productId" = Uuid, Query, description = "Product whose line is updated"),
        ("quantity" = i64, Query, description = "New quantity; zero or less removes the line"),
    ),
)]
pub(crate) async fn handler(
    session_id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let session = parse_session(session_id.into_inner())?;

    let product = req.required_query_or_400::<Uuid>("productId")?;
    let quantity = req.required_query_or_400::<i64>("quantity")?;

    let cart = app
        .carts
        .update_quantity(session, ProductUuid::from_uuid(product), quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
