//! DTOs for the brand submission endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Compiled regex for website validation: scheme plus a dotted host.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+\..+").unwrap());

/// Compiled regex for `local@domain.tld` email validation.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Request to analyze a brand and store the resulting report.
///
/// Validation errors are reported per field with user-facing messages, e.g.
/// `{"brandName": "Brand name is required"}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Brand name, 2-100 characters after trimming.
    #[serde(default)]
    #[validate(custom(function = validate_brand_name))]
    pub brand_name: String,

    /// Brand website, `http://` or `https://` with a dotted host.
    #[serde(default)]
    #[validate(custom(function = validate_brand_website))]
    pub brand_website: String,

    /// Contact email address.
    #[serde(default)]
    #[validate(custom(function = validate_email))]
    pub email: String,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

fn validate_brand_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(field_error("required", "Brand name is required"));
    }

    let length = trimmed.chars().count();
    if length < 2 {
        return Err(field_error(
            "length",
            "Brand name must be at least 2 characters long",
        ));
    }
    if length > 100 {
        return Err(field_error(
            "length",
            "Brand name must not exceed 100 characters",
        ));
    }

    Ok(())
}

fn validate_brand_website(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(field_error("required", "Brand website is required"));
    }

    if !URL_REGEX.is_match(trimmed) {
        return Err(field_error(
            "url",
            "Brand website must be a valid URL (http:// or https://)",
        ));
    }

    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(field_error("required", "Email is required"));
    }

    if !EMAIL_REGEX.is_match(trimmed) {
        return Err(field_error("email", "Email must be a valid email address"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(brand_name: &str, brand_website: &str, email: &str) -> SubmitRequest {
        SubmitRequest {
            brand_name: brand_name.to_string(),
            brand_website: brand_website.to_string(),
            email: email.to_string(),
        }
    }

    fn message_for(request: &SubmitRequest, field: &str) -> Option<String> {
        let errors = request.validate().err()?;
        let err = crate::error::AppError::from(errors);
        match err {
            crate::error::AppError::Validation { details, .. } => {
                details.get(field).and_then(|v| v.as_str()).map(String::from)
            }
            _ => None,
        }
    }

    #[test]
    fn test_valid_request() {
        let request = request("Acme", "https://acme.example", "a@acme.example");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_brand_name_message() {
        let request = request("", "https://acme.example", "a@acme.example");
        assert_eq!(
            message_for(&request, "brandName").as_deref(),
            Some("Brand name is required")
        );
    }

    #[test]
    fn test_whitespace_only_brand_name_is_required_error() {
        let request = request("   ", "https://acme.example", "a@acme.example");
        assert_eq!(
            message_for(&request, "brandName").as_deref(),
            Some("Brand name is required")
        );
    }

    #[test]
    fn test_short_and_long_brand_names() {
        let request = request("A", "https://acme.example", "a@acme.example");
        assert_eq!(
            message_for(&request, "brandName").as_deref(),
            Some("Brand name must be at least 2 characters long")
        );

        let request = self::request(
            &"x".repeat(101),
            "https://acme.example",
            "a@acme.example",
        );
        assert_eq!(
            message_for(&request, "brandName").as_deref(),
            Some("Brand name must not exceed 100 characters")
        );
    }

    #[test]
    fn test_website_must_match_url_shape() {
        for bad in ["not-a-url", "ftp://acme.example", "https://nodot"] {
            let request = request("Acme", bad, "a@acme.example");
            assert_eq!(
                message_for(&request, "brandWebsite").as_deref(),
                Some("Brand website must be a valid URL (http:// or https://)"),
                "{bad}"
            );
        }

        let request = request("Acme", "http://acme.example", "a@acme.example");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plainaddress", "no@tld", "sp ace@acme.example", "@acme.example"] {
            let request = request("Acme", "https://acme.example", bad);
            assert_eq!(
                message_for(&request, "email").as_deref(),
                Some("Email must be a valid email address"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_all_fields_reported_together() {
        let request = request("", "nope", "nope");
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 3);
    }
}
