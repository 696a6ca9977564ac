/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Request entry point
//!
//! Accepts the inbound request shape, validates the language tag and
//! dispatches to the matching generator.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::languages::{generator_for, Language};
use crate::signature::Signature;

/// Template generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub question_id: String,
    pub title: String,
    pub description: String,
    pub signature: Signature,
    /// Raw tag, validated by [`generate_template`]
    pub language: String,
}

/// Generated template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub language: Language,
    pub template: String,
}

impl TemplateRequest {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Validate the language and generate the template for a request
pub fn generate_template(request: &TemplateRequest) -> Result<TemplateResponse> {
    let language = Language::parse(&request.language).inspect_err(|err| {
        warn!(question_id = %request.question_id, error = %err, "Rejected template request");
    })?;

    let template = generator_for(language)
        .generate(&request.signature)
        .inspect_err(|err| {
            warn!(question_id = %request.question_id, error = %err, "Rejected template request");
        })?;

    info!(
        question_id = %request.question_id,
        language = %language,
        function = %request.signature.function_name,
        bytes = template.len(),
        "Generated template"
    );

    Ok(TemplateResponse { language, template })
}
