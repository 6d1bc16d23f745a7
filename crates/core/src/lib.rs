//! MaDe Market
//!
//! The cart price-optimization engine behind the MaDe Market grocery
//! comparison service. Given the products a shopper wants and the in-stock
//! prices carried by each store branch, it ranks branches by how much of the
//! cart they cover and how cheaply, and reports the maximum saving available
//! between branches that stock everything.

pub mod breakdown;
pub mod items;
pub mod prices;
pub mod pricing;
