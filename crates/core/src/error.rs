use crate::types::ProductId;

/// Domain errors shared by the store, service and HTTP layers.
///
/// Each variant maps to one fixed HTTP status in `catalog-api`; the display
/// string is what clients see in the response envelope.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid id")]
    InvalidId,

    #[error("invalid query")]
    InvalidQuery,

    #[error("invalid values")]
    InvalidValues,

    #[error("invalid expiration date")]
    InvalidDate,

    #[error("code value already exists")]
    UniqueCodeValue,

    #[error("invalid request body")]
    InvalidRequestBody,

    #[error("product not found")]
    NotFound { id: ProductId },

    #[error("no products found")]
    NoProducts,

    #[error("product already exists")]
    AlreadyExists { id: ProductId },

    #[error("Unauthorized - Invalid Token")]
    Unauthorized,
}
