//! Categories

pub(crate) mod index;
