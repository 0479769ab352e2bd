//! Product Index Handler

use rust_decimal::Decimal;
use salvo::prelude::*;

use storefront_app::domain::products::data::ProductFilter;

use crate::{
    extensions::*,
    products::{errors::into_status_error, schemas::ProductResponse},
};

/// Product Index Handler
///
/// Lists catalog products. `category=all` or a blank value means every category;
/// `search` matches name or description case-insensitively.
#[endpoint(
    tags("products"),
    summary = "List Products",
    parameters(
        ("category" = Option<String>, Query, description = "Category name, or `all`"),
        ("search" = Option<String>, Query, description = "Name or description substring"),
        ("minPrice" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("maxPrice" = Option<f64>, Query, description = "Inclusive upper price bound"),
        ("limit" = Option<u32>, Query, description = "Maximum number of products"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let app = depot.app_or_500()?;

    let filter = ProductFilter::new(
        req.query_or_400("category")?,
        req.query_or_400("search")?,
        req.query_or_400::<Decimal>("minPrice")?,
        req.query_or_400::<Decimal>("maxPrice")?,
        req.query_or_400("limit")?,
    );

    let products = app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
