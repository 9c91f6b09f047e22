//! Product entity model and request DTOs.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::ProductId;

/// A catalog product as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    /// Expiration date formatted `DD/MM/YYYY`.
    pub expiration: String,
    pub price: f64,
}

impl Product {
    /// Build a new product from a full request payload.
    pub fn from_request(id: ProductId, input: &ProductRequest) -> Self {
        Self {
            id,
            name: input.name.clone(),
            quantity: input.quantity,
            code_value: input.code_value.clone(),
            is_published: input.is_published,
            expiration: input.expiration.clone(),
            price: input.price,
        }
    }

    /// Replace every field except `id` with the request's values.
    pub fn replace(&mut self, input: &ProductRequest) {
        *self = Self::from_request(self.id, input);
    }

    /// Apply only the fields present in `patch`.
    pub fn apply_patch(&mut self, patch: &ProductPatchRequest) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(code_value) = &patch.code_value {
            self.code_value = code_value.clone();
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
        if let Some(expiration) = &patch.expiration {
            self.expiration = expiration.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// DTO for creating or fully replacing a product.
///
/// Missing JSON fields decode to their zero value and are then rejected by
/// validation, so a partial body never reaches the repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(custom(function = "non_zero_quantity"))]
    pub quantity: i64,
    #[validate(length(min = 1, message = "code_value is required"))]
    pub code_value: String,
    pub is_published: bool,
    #[validate(length(min = 1, message = "expiration is required"))]
    pub expiration: String,
    #[validate(custom(function = "non_zero_price"))]
    pub price: f64,
}

/// DTO for partially updating a product. Every present field is validated
/// with the same rules as [`ProductRequest`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct ProductPatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_zero_quantity"))]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "code_value must not be empty"))]
    pub code_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "expiration must not be empty"))]
    pub expiration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "non_zero_price"))]
    pub price: Option<f64>,
}

impl ProductPatchRequest {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.code_value.is_none()
            && self.is_published.is_none()
            && self.expiration.is_none()
            && self.price.is_none()
    }
}

fn non_zero_quantity(value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(
            ValidationError::new("non_zero").with_message("quantity must not be zero".into()),
        );
    }
    Ok(())
}

fn non_zero_price(value: f64) -> Result<(), ValidationError> {
    if value == 0.0 {
        return Err(
            ValidationError::new("non_zero").with_message("price must not be zero".into()),
        );
    }
    Ok(())
}
