/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use template_generator::GeneratorError;
use thiserror::Error;

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected generation input
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Generator(
                GeneratorError::UnsupportedLanguage(_) | GeneratorError::UnsupportedType { .. },
            ) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
