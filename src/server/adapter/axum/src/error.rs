/* src/server/adapter/axum/src/error.rs */

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub struct SeoError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    _ => 500,
  }
}

impl SeoError {
  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for SeoError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SeoError {}

/// Newtype so handlers can return `Result<_, AxumError>`.
pub(crate) struct AxumError(pub SeoError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<SeoError> for AxumError {
  fn from(err: SeoError) -> Self {
    Self(err)
  }
}
