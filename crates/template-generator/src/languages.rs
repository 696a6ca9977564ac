/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Target languages and the per-language generator seam

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::emit::{self, ResolvedSignature};
use crate::error::{GeneratorError, Result};
use crate::signature::Signature;

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python 3
    Python,
    /// Java with Gson for JSON handling
    Java,
    /// C++ with nlohmann/json
    Cpp,
    /// JavaScript on Node.js
    JavaScript,
}

impl Language {
    /// All supported languages, in a fixed order
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::JavaScript,
    ];

    /// Lowercase tag used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
        }
    }

    /// Parse a wire tag. Matching is exact and case-sensitive.
    pub fn parse(tag: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.tag() == tag)
            .ok_or_else(|| GeneratorError::UnsupportedLanguage(tag.to_string()))
    }
}

impl FromStr for Language {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Language generator trait
///
/// Implementors only assemble text. Every type in the signature is resolved
/// by [`LanguageGenerator::generate`] before [`LanguageGenerator::render`]
/// runs, so rendering cannot fail.
pub trait LanguageGenerator: Send + Sync {
    /// Language this generator emits
    fn language(&self) -> Language;

    /// Assemble the source text for an already resolved signature
    fn render(&self, signature: &ResolvedSignature<'_>) -> String;

    /// Resolve and render a signature
    fn generate(&self, signature: &Signature) -> Result<String> {
        let resolved = emit::resolve_signature(self.language(), signature)?;
        Ok(self.render(&resolved))
    }
}

/// Get the generator for a language
pub fn generator_for(language: Language) -> &'static dyn LanguageGenerator {
    match language {
        Language::Python => &emit::python::PythonGenerator,
        Language::Java => &emit::java::JavaGenerator,
        Language::Cpp => &emit::cpp::CppGenerator,
        Language::JavaScript => &emit::javascript::JavaScriptGenerator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Python.to_string(), "python");
        assert_eq!(Language::Java.to_string(), "java");
        assert_eq!(Language::Cpp.to_string(), "cpp");
        assert_eq!(Language::JavaScript.to_string(), "javascript");
    }

    #[test]
    fn test_language_parse() {
        for language in Language::ALL {
            assert_eq!(language.tag().parse::<Language>(), Ok(language));
        }

        assert_eq!(
            Language::parse("rust"),
            Err(GeneratorError::UnsupportedLanguage("rust".to_string()))
        );
        assert!(Language::parse("Python").is_err());
        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_language_serde_tags() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");

        let language: Language = serde_json::from_str("\"cpp\"").unwrap();
        assert_eq!(language, Language::Cpp);
    }

    #[test]
    fn test_generator_dispatch() {
        for language in Language::ALL {
            assert_eq!(generator_for(language).language(), language);
        }
    }
}
