use std::collections::BTreeMap;

use thiserror::Error;

/// Field-keyed validation messages as returned by the backend on 400.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - credentials rejected or token expired")]
    Unauthorized,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", format_fields(.0))]
    Validation(FieldErrors),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

fn format_fields(fields: &FieldErrors) -> String {
    fields
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a 400 body of the shape `{"field": ["message", ...], ...}`.
/// Single-string values also occur and are folded into one-element lists.
fn parse_field_errors(body: &str) -> Option<FieldErrors> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(body).ok()?;
    if raw.is_empty() {
        return None;
    }

    let mut fields = FieldErrors::new();
    for (field, value) in raw {
        let messages = match value {
            serde_json::Value::String(message) => vec![message],
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(message) => message,
                    other => other.to_string(),
                })
                .collect(),
            other => vec![other.to_string()],
        };
        fields.insert(field, messages);
    }
    Some(fields)
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            400 => match parse_field_errors(body) {
                Some(fields) => ApiError::Validation(fields),
                None => ApiError::InvalidResponse(format!("Status 400: {}", truncated)),
            },
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(truncated),
            404 => ApiError::NotFound(truncated),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }

    pub(crate) fn invalid_json(err: serde_json::Error, body: &str) -> Self {
        ApiError::InvalidResponse(format!("{}: {}", err, Self::truncate_body(body)))
    }
}
