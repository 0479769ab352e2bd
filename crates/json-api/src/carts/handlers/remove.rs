//! Remove Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, parse_session, schemas::CartResponse},
    extensions::*,
};

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart leaves the cart unchanged.
#[endpoint(tags("cart"), summary = "Remove Cart Item")]
pub(crate) async fn handler(
    session_id: PathParam<String>,
    product_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let session = parse_session(session_id.into_inner())?;

    let cart = app
        .carts
        .remove_item(session, product_id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{CartsServiceError, MockCartsService, records::CartRecord, session::SessionId},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{carts_service, make_cart, storage_error};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(
            repo,
            Router::with_path("cart/{session_id}/item/{product_id}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_returns_remaining_cart() -> TestResult {
        let product = ProductUuid::new();
        let cart = make_cart(SessionId::parse("s1")?, Decimal::new(5, 0), 2);

        let mut repo = MockCartsService::new();

        repo.expect_remove_item()
            .once()
            .withf(move |s, p| s.as_str() == "s1" && *p == product)
            .return_once(move |_, _| Ok(cart));

        let mut res = TestClient::delete(format!("http://example.com/cart/s1/item/{product}"))
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(body.total, Decimal::new(10, 0), "total");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_absent_cart_returns_empty_cart() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_remove_item()
            .once()
            .return_once(|s, _| Ok(CartRecord::empty(s)));

        let mut res = TestClient::delete(format!(
            "http://example.com/cart/nobody/item/{}",
            ProductUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert!(body.items.is_empty(), "no items");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_storage_error_returns_500() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Sql(storage_error())));

        let res = TestClient::delete(format!(
            "http://example.com/cart/s1/item/{}",
            ProductUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            "status"
        );

        Ok(())
    }
}
