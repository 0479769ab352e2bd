//! Clear Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, parse_session},
    extensions::*,
    messages::MessageResponse,
};

/// Clear Cart Handler
///
/// Deletes the session's cart. Clearing a session without a cart succeeds.
#[endpoint(tags("cart"), summary = "Clear Cart")]
pub(crate) async fn handler(
    session_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let session = parse_session(session_id.into_inner())?;

    app.carts
        .clear_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Cart cleared")))
}
