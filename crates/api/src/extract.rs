//! Request extractors whose rejections use the JSON error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections mapped through [`AppError`].
///
/// A malformed body or a wrong-typed field becomes a 400 `BAD_REQUEST`
/// instead of axum's plain-text 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
