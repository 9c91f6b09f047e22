//! Consumer price aggregation.
//!
//! A basket is written as a bracketed, comma-separated id list such as
//! `[1,2,2,3]`; repeating an id requests one more unit of it. The total is
//! marked up by a rate chosen from the number of units in the basket.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::product::Product;
use crate::types::ProductId;

/// Markup for baskets of up to 10 units.
pub const SMALL_BASKET_RATE: f64 = 1.21;
/// Markup for baskets of 11 to 20 units.
pub const MEDIUM_BASKET_RATE: f64 = 1.17;
/// Markup for baskets of more than 20 units.
pub const LARGE_BASKET_RATE: f64 = 1.15;

/// Result of pricing a basket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerPrice {
    /// Each distinct product in the basket, in order of first request.
    pub products: Vec<Product>,
    /// Sum of `price * units` after the markup.
    pub total_price: f64,
    /// Total number of units requested.
    pub item_count: i64,
}

/// Parse `[1,2,2,3]` into requested units per id, keeping first-seen order.
///
/// Surrounding brackets are optional and whitespace around ids is ignored.
/// Any token that is not an integer, including an empty one, is rejected.
pub fn parse_basket(raw: &str) -> Result<IndexMap<ProductId, i64>, CoreError> {
    let inner = raw.trim_matches(|c| c == '[' || c == ']');
    let mut units: IndexMap<ProductId, i64> = IndexMap::new();
    for token in inner.split(',') {
        let id: ProductId = token.trim().parse().map_err(|_| CoreError::InvalidQuery)?;
        *units.entry(id).or_insert(0) += 1;
    }
    Ok(units)
}

/// A product can only be sold if it is published and has enough stock.
pub fn check_availability(product: &Product, requested: i64) -> Result<(), CoreError> {
    if requested > product.quantity || !product.is_published {
        return Err(CoreError::InvalidQuery);
    }
    Ok(())
}

/// Markup rate for a basket holding `item_count` units.
pub fn surcharge_rate(item_count: i64) -> f64 {
    match item_count {
        i64::MIN..=10 => SMALL_BASKET_RATE,
        11..=20 => MEDIUM_BASKET_RATE,
        _ => LARGE_BASKET_RATE,
    }
}

/// Price a basket of `(product, units)` lines.
pub fn consumer_price(lines: Vec<(Product, i64)>) -> ConsumerPrice {
    let mut subtotal = 0.0;
    let mut item_count = 0;
    let mut products = Vec::with_capacity(lines.len());
    for (product, units) in lines {
        subtotal += product.price * units as f64;
        item_count += units;
        products.push(product);
    }

    ConsumerPrice {
        products,
        total_price: subtotal * surcharge_rate(item_count),
        item_count,
    }
}
