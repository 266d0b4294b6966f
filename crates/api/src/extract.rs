//! Extractors that reject with [`AppError`] instead of axum's plain-text
//! rejections, so every failure uses the same JSON body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. A body that fails to parse becomes
/// [`AppError::MalformedBody`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string. A query that fails to parse becomes
/// [`AppError::InvalidQuery`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters. A segment that fails to parse becomes
/// [`AppError::InvalidPath`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
