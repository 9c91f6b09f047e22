//! Query parameter types for the product handlers.
//!
//! Values are kept as raw strings; the service parses them so a malformed
//! value becomes an `invalid query` error in the response envelope.

use serde::Deserialize;

/// `GET /products/search?priceGt=`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "priceGt")]
    pub price_gt: Option<String>,
}

/// `GET /products/consumer_price?list=`
#[derive(Debug, Deserialize)]
pub struct ConsumerPriceParams {
    pub list: Option<String>,
}
