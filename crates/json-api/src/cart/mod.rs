//! Cart

pub(crate) mod calculate;
pub(crate) mod errors;
