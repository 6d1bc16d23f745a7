//! Shared application domain and persistence modules for MaDe Market.

pub mod context;
pub mod database;
pub mod domain;
