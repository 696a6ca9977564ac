/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! HTTP routes

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use template_generator::{generate_template, TemplateRequest, TemplateResponse};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

pub const TEMPLATE_PATH: &str = "/api/v1/template";
pub const HEALTH_PATH: &str = "/health";

/// Build the application router
pub fn router() -> Router {
    Router::new()
        .route(TEMPLATE_PATH, post(create_template))
        .route(HEALTH_PATH, get(health))
        .layer(TraceLayer::new_for_http())
}

/// `POST /api/v1/template`
async fn create_template(
    Json(request): Json<TemplateRequest>,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
    let response = generate_template(&request)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
