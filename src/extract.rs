//! Extractor wrappers that route framework rejections through [`ApiError`].
//!
//! Without these, a malformed JSON body or a non-integer path parameter is
//! answered by the framework's plain-text rejection. Every error response
//! must carry the JSON `"error"` key, so the wrappers convert the rejections
//! into [`ApiError::BadRequest`] before they reach the wire.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::ApiError;

/// JSON body extractor. A body that fails to parse is a structured 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

/// Responses keep the plain framework encoder.
impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor. A value that does not deserialize, such as a
/// non-integer id, is a structured 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
