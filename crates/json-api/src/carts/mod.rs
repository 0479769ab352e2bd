//! Carts

mod errors;
mod handlers;
pub(crate) mod schemas;

pub(crate) use handlers::*;

use salvo::prelude::StatusError;
use storefront_app::domain::carts::session::SessionId;

use crate::extensions::ResultExt;

/// Validate a client-supplied session id.
pub(crate) fn parse_session(raw: String) -> Result<SessionId, StatusError> {
    SessionId::parse(raw).or_400("Invalid session id")
}
