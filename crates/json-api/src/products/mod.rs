//! Products

mod errors;
mod handlers;
pub(crate) mod schemas;

pub(crate) use handlers::*;
