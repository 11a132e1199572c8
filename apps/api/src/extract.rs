//! Request extractors whose rejections render as [`AppError`] bodies.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` for request bodies, rejecting malformed input with a
/// `{detail, code}` validation error instead of axum's plain-text body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
