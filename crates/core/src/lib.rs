//! Domain types and pure business rules for the product catalog.
//!
//! Nothing in this crate performs I/O: storage lives in `catalog-store` and
//! HTTP concerns in `catalog-api`.

pub mod error;
pub mod pricing;
pub mod product;
pub mod types;
pub mod validation;
