//! Request extractors whose rejections use the application error format.
//!
//! Axum's built-in extractors answer malformed input with plain-text bodies. These
//! wrappers route the rejection through `AppError`, so a broken JSON body or query
//! string yields a 400 `ErrorDto` and an unparsable path id yields a 404.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
