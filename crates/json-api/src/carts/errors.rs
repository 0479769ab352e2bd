//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::{CartsServiceError, data::MAX_LINE_QUANTITY};

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::InvalidQuantity => StatusError::bad_request()
            .brief(format!("Quantity must be between 1 and {MAX_LINE_QUANTITY}")),
        CartsServiceError::TotalOverflow => {
            StatusError::bad_request().brief("Cart total is too large")
        }
        CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartsServiceError::Conflict => {
            StatusError::conflict().brief("Cart was modified concurrently")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
