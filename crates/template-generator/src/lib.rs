/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! # Template Generator
//!
//! Multi-language starter template generator for coding exercises.
//! Turns a language-agnostic function signature into a source skeleton:
//! auxiliary node types, an empty stub and a stdin/stdout JSON driver.
//!
//! ## Features
//!
//! - **Target Languages**: Python, Java, C++, JavaScript
//! - **Type Vocabulary**: `int`, `long`, `float`, `double`, `bool`, `string`,
//!   arrays `T[]` of any depth, and the composites `List`, `Tree`, `Graph`
//! - **Auxiliary Types**: linked-list and binary-tree nodes with build and
//!   serialize helpers, emitted only when the signature uses them
//!
//! ## Architecture
//!
//! The generator consists of:
//! - Type Resolver: static per-language type tables
//! - Language Generators: one emitter per target language
//! - Request Entry Point: language validation and dispatch
//!
//! ## Example
//!
//! ```rust
//! use template_generator::{generator_for, Language, Parameter, Signature};
//!
//! let signature = Signature::new("fib", vec![Parameter::new("n", "int")], "int");
//! let template = generator_for(Language::Python).generate(&signature).unwrap();
//!
//! assert!(template.contains("def fib(self, n: int) -> int:"));
//! ```

pub mod emit;
pub mod error;
pub mod languages;
pub mod request;
pub mod resolver;
pub mod signature;

pub use emit::{ResolvedParam, ResolvedReturn, ResolvedSignature};
pub use error::{GeneratorError, Result};
pub use languages::{generator_for, Language, LanguageGenerator};
pub use request::{generate_template, TemplateRequest, TemplateResponse};
pub use resolver::{resolve, resolve_type, LanguageTypes};
pub use signature::{DslType, Parameter, Primitive, ReturnSpec, Signature};

/// Generate a template for a signature in the given language
pub fn generate(language: Language, signature: &Signature) -> Result<String> {
    generator_for(language).generate(signature)
}
