/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Error types for template generation

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur during template generation.
///
/// Both kinds are client input errors. Generation stops at the first one
/// and no partial template is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Language tag outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// DSL type token outside the recognized vocabulary
    #[error("Unsupported DSL type: {dsl_type} for language {language}")]
    UnsupportedType { dsl_type: String, language: String },
}

impl GeneratorError {
    pub fn unsupported_type(dsl_type: impl Into<String>, language: impl ToString) -> Self {
        GeneratorError::UnsupportedType {
            dsl_type: dsl_type.into(),
            language: language.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeneratorError::UnsupportedLanguage("rust".to_string()).to_string(),
            "Unsupported language: rust"
        );
        assert_eq!(
            GeneratorError::unsupported_type("bogus", "java").to_string(),
            "Unsupported DSL type: bogus for language java"
        );
    }
}
