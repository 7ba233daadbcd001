//! Application error type and its JSON rendering.
//!
//! Every failure surfaced to a client goes through [`AppError`] and renders
//! as `{"error": {"code", "message", "details"}}`. Validation failures carry
//! a field-to-message map in `details`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens `validator` derive output into a per-field message map.
///
/// Only the first error per field is reported, keyed by the field's wire
/// name, e.g. `{"brandName": "Brand name is required"}`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = serde_json::Map::new();

        for (field, kind) in errors.errors() {
            if let ValidationErrorsKind::Field(field_errors) = kind {
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    details.insert(camel_case(field), json!(message));
                }
            }
        }

        AppError::bad_request("Validation failed", Value::Object(details))
    }
}

/// Converts a snake_case struct field name to its camelCase wire name.
/// Already-camelCase input passes through unchanged.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_validation_errors_flatten_to_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "brandName",
            ValidationError::new("required").with_message("Brand name is required".into()),
        );

        let err = AppError::from(errors);

        match err {
            AppError::Validation { message, details } => {
                assert_eq!(message, "Validation failed");
                assert_eq!(details["brandName"], "Brand name is required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(camel_case("brand_name"), "brandName");
        assert_eq!(camel_case("brandWebsite"), "brandWebsite");
        assert_eq!(camel_case("email"), "email");
    }

    #[test]
    fn test_validation_error_without_message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));

        let err = AppError::from(errors);

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["email"], "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
