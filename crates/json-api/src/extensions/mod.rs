//! Extension traits

mod depot;
mod request;
mod result;

pub(crate) use depot::DepotExt;
pub(crate) use request::RequestExt;
pub(crate) use result::ResultExt;
