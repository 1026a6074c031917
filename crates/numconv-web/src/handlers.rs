//! HTTP request handlers: conversion endpoint, health, and the embedded page.

use axum::body::Body;
use axum::Extension;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use rust_embed::Embed;
use serde::Deserialize;
use tracing::warn;

use numconv_core::{ConversionResult, ConvertError};

use crate::access_log::ConversionOutcome;

// ============================================================
// Embedded frontend assets
// ============================================================

#[derive(Embed)]
#[folder = "frontend"]
struct FrontendAssets;

// ============================================================
// Health
// ============================================================

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub(crate) async fn handle_health() -> &'static str {
    "ok"
}

// ============================================================
// Convert
// ============================================================

/// Conversion request. Type names are kept as strings so that an unknown
/// name is reported as such instead of as a malformed body.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConvertRequest {
    /// Value to convert, in the representation named by `inputType`.
    input: String,
    /// One of `text`, `decimal`, `binary`, `octal`, `hexadecimal`, `base64`.
    input_type: String,
    /// One of `text`, `decimal`, `binary`, `octal`, `hexadecimal`, `base64`.
    output_type: String,
}

/// Convert a number between representations.
///
/// Always answers 200; failures are reported in the `error` field.
#[utoipa::path(
    post,
    path = "/convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Converted value, or an error message", body = ConversionResult)
    )
)]
pub(crate) async fn handle_convert(
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> (Extension<ConversionOutcome>, Json<ConversionResult>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let err = ConvertError::BadRequest(rejection.body_text());
            warn!(rejection_status = rejection.status().as_u16(), error = %err, "rejected convert request");
            return (
                Extension(ConversionOutcome::rejected()),
                Json(ConversionResult::failure(&err)),
            );
        }
    };
    let res = numconv_core::convert(&req.input, &req.input_type, &req.output_type);
    let outcome = ConversionOutcome::new(&req.input_type, &req.output_type, res.is_success());
    (Extension(outcome), Json(res))
}

// ============================================================
// Frontend static files
// ============================================================

pub(crate) async fn serve_index() -> Response {
    serve_embedded("index.html")
}

pub(crate) async fn serve_asset(uri: Uri) -> Response {
    serve_embedded(uri.path().trim_start_matches('/'))
}

fn serve_embedded(path: &str) -> Response {
    match FrontendAssets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                Body::from(file.data.into_owned()),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
