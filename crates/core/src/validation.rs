//! Payload validation shared by the create, replace and patch paths.
//!
//! Checks run in a fixed order (non-zero values, unique code, expiration
//! date) and the first failure wins; errors are never aggregated.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::Validate;

use crate::error::CoreError;
use crate::product::{Product, ProductPatchRequest, ProductRequest};
use crate::types::ProductId;

/// Layout of the `expiration` field.
pub const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

static EXPIRATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid regex"));

/// Reject a full payload with any empty or zero required field.
pub fn verify_non_zero_values(input: &ProductRequest) -> Result<(), CoreError> {
    input.validate().map_err(|_| CoreError::InvalidValues)
}

/// Reject a patch that carries no field, or any present field that is empty
/// or zero.
pub fn verify_patch_non_zero_values(patch: &ProductPatchRequest) -> Result<(), CoreError> {
    if patch.is_empty() {
        return Err(CoreError::InvalidValues);
    }
    patch.validate().map_err(|_| CoreError::InvalidValues)
}

/// Reject `code_value` if another product already uses it.
///
/// `exclude` is the id of the product being updated, so re-submitting a
/// product's own code is not a conflict.
pub fn verify_unique_code_value(
    code_value: &str,
    existing: &[Product],
    exclude: Option<ProductId>,
) -> Result<(), CoreError> {
    let taken = existing
        .iter()
        .filter(|p| Some(p.id) != exclude)
        .any(|p| p.code_value == code_value);
    if taken {
        return Err(CoreError::UniqueCodeValue);
    }
    Ok(())
}

/// Require a real calendar date written exactly as `DD/MM/YYYY`.
pub fn verify_expiration_date(expiration: &str) -> Result<(), CoreError> {
    if !EXPIRATION_RE.is_match(expiration) {
        return Err(CoreError::InvalidDate);
    }
    NaiveDate::parse_from_str(expiration, EXPIRATION_FORMAT)
        .map(|_| ())
        .map_err(|_| CoreError::InvalidDate)
}

/// Run every check for a create (`target = None`) or full replace.
pub fn validate_request(
    input: &ProductRequest,
    existing: &[Product],
    target: Option<ProductId>,
) -> Result<(), CoreError> {
    verify_non_zero_values(input)?;
    verify_unique_code_value(&input.code_value, existing, target)?;
    verify_expiration_date(&input.expiration)
}

/// Run every check for a patch of product `target`. Absent fields are
/// skipped by the uniqueness and date checks.
pub fn validate_patch(
    patch: &ProductPatchRequest,
    existing: &[Product],
    target: ProductId,
) -> Result<(), CoreError> {
    verify_patch_non_zero_values(patch)?;
    if let Some(code_value) = &patch.code_value {
        verify_unique_code_value(code_value, existing, Some(target))?;
    }
    if let Some(expiration) = &patch.expiration {
        verify_expiration_date(expiration)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn request() -> ProductRequest {
        ProductRequest {
            name: "Cheese".to_string(),
            quantity: 5,
            code_value: "CH-1".to_string(),
            is_published: true,
            expiration: "24/12/2029".to_string(),
            price: 12.0,
        }
    }

    fn existing() -> Vec<Product> {
        vec![
            Product::from_request(1, &request()),
            Product::from_request(
                2,
                &ProductRequest {
                    code_value: "BR-2".to_string(),
                    ..request()
                },
            ),
        ]
    }

    #[test]
    fn full_request_passes() {
        let input = ProductRequest {
            code_value: "NEW".to_string(),
            ..request()
        };
        assert!(validate_request(&input, &existing(), None).is_ok());
    }

    #[test]
    fn zero_quantity_is_invalid() {
        let input = ProductRequest {
            quantity: 0,
            ..request()
        };
        assert_matches!(verify_non_zero_values(&input), Err(CoreError::InvalidValues));
    }

    #[test]
    fn zero_price_is_invalid() {
        let input = ProductRequest {
            price: 0.0,
            ..request()
        };
        assert_matches!(verify_non_zero_values(&input), Err(CoreError::InvalidValues));
    }

    #[test]
    fn empty_name_is_invalid() {
        let input = ProductRequest {
            name: String::new(),
            ..request()
        };
        assert_matches!(verify_non_zero_values(&input), Err(CoreError::InvalidValues));
    }

    #[test]
    fn unpublished_is_not_a_zero_value() {
        let input = ProductRequest {
            is_published: false,
            ..request()
        };
        assert!(verify_non_zero_values(&input).is_ok());
    }

    #[test]
    fn duplicate_code_fails_regardless_of_other_fields() {
        let input = ProductRequest {
            name: "Something else".to_string(),
            quantity: 99,
            price: 1.0,
            expiration: "01/01/2040".to_string(),
            ..request()
        };
        assert_matches!(
            validate_request(&input, &existing(), None),
            Err(CoreError::UniqueCodeValue)
        );
    }

    #[test]
    fn own_code_is_not_a_conflict_on_update() {
        assert!(validate_request(&request(), &existing(), Some(1)).is_ok());
        assert_matches!(
            validate_request(&request(), &existing(), Some(2)),
            Err(CoreError::UniqueCodeValue)
        );
    }

    #[test]
    fn non_zero_check_runs_before_uniqueness() {
        let input = ProductRequest {
            price: 0.0,
            ..request()
        };
        assert_matches!(
            validate_request(&input, &existing(), None),
            Err(CoreError::InvalidValues)
        );
    }

    #[test]
    fn expiration_accepts_day_month_year() {
        assert!(verify_expiration_date("15/12/2021").is_ok());
        assert!(verify_expiration_date("29/02/2024").is_ok());
    }

    #[test]
    fn expiration_rejects_other_layouts() {
        for bad in [
            "2021-12-15",
            "12/15/2021",
            "5/1/2021",
            "15/12/21",
            "31/04/2021",
            "29/02/2023",
            "",
            " 15/12/2021",
        ] {
            assert_matches!(
                verify_expiration_date(bad),
                Err(CoreError::InvalidDate),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn empty_patch_is_invalid() {
        assert_matches!(
            validate_patch(&ProductPatchRequest::default(), &existing(), 1),
            Err(CoreError::InvalidValues)
        );
    }

    #[test]
    fn patch_checks_every_present_field() {
        let patch = ProductPatchRequest {
            name: Some("ok".to_string()),
            price: Some(0.0),
            ..Default::default()
        };
        assert_matches!(
            validate_patch(&patch, &existing(), 1),
            Err(CoreError::InvalidValues)
        );
    }

    #[test]
    fn patch_rejects_code_of_another_product() {
        let patch = ProductPatchRequest {
            code_value: Some("BR-2".to_string()),
            ..Default::default()
        };
        assert_matches!(
            validate_patch(&patch, &existing(), 1),
            Err(CoreError::UniqueCodeValue)
        );
    }

    #[test]
    fn patch_rejects_bad_date() {
        let patch = ProductPatchRequest {
            expiration: Some("2030/01/01".to_string()),
            ..Default::default()
        };
        assert_matches!(
            validate_patch(&patch, &existing(), 1),
            Err(CoreError::InvalidDate)
        );
    }

    #[test]
    fn patch_of_only_published_flag_is_valid() {
        let patch = ProductPatchRequest {
            is_published: Some(false),
            ..Default::default()
        };
        assert!(validate_patch(&patch, &existing(), 1).is_ok());
    }
}
