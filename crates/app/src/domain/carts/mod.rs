//! Carts

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;
pub mod session;
pub mod totals;

pub use errors::CartsServiceError;
pub use service::*;
