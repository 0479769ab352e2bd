//! Cross-origin request handling for the browser storefront.

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler, ExposeHeaders},
    http::{
        HeaderValue, Method,
        header::{CONTENT_TYPE, HeaderName, InvalidHeaderValue},
    },
};

use crate::{config::cors::CorsConfig, observability::REQUEST_ID_HEADER};

fn allowed_origin(config: &CorsConfig) -> Result<AllowOrigin, InvalidHeaderValue> {
    if config.allows_any_origin() {
        return Ok(AllowOrigin::any());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllowOrigin::list(origins))
}

/// Build the CORS hoop for the configured origins.
///
/// # Errors
///
/// Returns an error when a configured origin is not a valid header value.
pub(crate) fn handler(config: &CorsConfig) -> Result<CorsHandler, InvalidHeaderValue> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(Cors::new()
        .allow_origin(allowed_origin(config)?)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([CONTENT_TYPE, request_id.clone()]))
        .expose_headers(ExposeHeaders::list([request_id]))
        .into_handler())
}
