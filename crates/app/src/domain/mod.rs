//! MaDe Market Domain Concerns

pub mod pricing;
