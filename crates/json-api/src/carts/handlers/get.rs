//! Get Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, parse_session, schemas::CartResponse},
    extensions::*,
};

/// Get Cart Handler
///
/// Returns the session's cart. A session without a cart gets an empty one.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(
    session_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let session = parse_session(session_id.into_inner())?;

    let cart = app
        .carts
        .get_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
