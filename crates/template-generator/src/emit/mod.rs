/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Template emitters
//!
//! Every emitter appends fragments in the same order:
//!
//! 1. imports / includes
//! 2. linked-list node and helpers, if `List` is used
//! 3. binary-tree node and helpers, if `Tree` is used
//! 4. the empty stub named after the function
//! 5. the stdin/stdout driver

pub mod cpp;
pub mod java;
pub mod javascript;
pub mod python;

use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::languages::Language;
use crate::resolver;
use crate::signature::{DslType, Signature};

/// Parameter with its DSL type parsed and its language type resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParam<'a> {
    pub name: &'a str,
    pub dsl_type: DslType,
    pub language_type: String,
}

/// Return type, parsed and resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReturn {
    pub dsl_type: DslType,
    pub language_type: String,
}

impl ResolvedReturn {
    pub fn is_void(&self) -> bool {
        self.dsl_type.is_void()
    }
}

/// A signature whose types all resolved for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSignature<'a> {
    pub language: Language,
    pub function_name: &'a str,
    pub parameters: Vec<ResolvedParam<'a>>,
    pub returns: ResolvedReturn,
}

impl ResolvedSignature<'_> {
    /// True if `dsl_type` is exactly a parameter type or the return type
    pub fn uses(&self, dsl_type: &DslType) -> bool {
        self.parameters.iter().any(|p| &p.dsl_type == dsl_type) || &self.returns.dsl_type == dsl_type
    }

    pub fn uses_list(&self) -> bool {
        self.uses(&DslType::List)
    }

    pub fn uses_tree(&self) -> bool {
        self.uses(&DslType::Tree)
    }

    /// Parameter names in declaration order, comma separated
    pub fn call_arguments(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parameter declarations in declaration order, comma separated
    pub fn declare_parameters(&self, declare: impl Fn(&ResolvedParam<'_>) -> String) -> String {
        self.parameters
            .iter()
            .map(declare)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Resolve every type of a signature, failing on the first unsupported one
pub fn resolve_signature(language: Language, signature: &Signature) -> Result<ResolvedSignature<'_>> {
    let parse = |token: &str, allow_void: bool| {
        DslType::parse(token)
            .filter(|dsl_type| allow_void || !dsl_type.is_void())
            .ok_or_else(|| GeneratorError::unsupported_type(token, language))
    };

    let mut parameters = Vec::with_capacity(signature.parameters.len());
    for parameter in &signature.parameters {
        let dsl_type = parse(&parameter.dsl_type, false)?;
        parameters.push(ResolvedParam {
            name: &parameter.name,
            language_type: resolver::resolve_type(language, &dsl_type),
            dsl_type,
        });
    }

    let dsl_type = parse(&signature.returns.dsl_type, true)?;
    let returns = ResolvedReturn {
        language_type: resolver::resolve_type(language, &dsl_type),
        dsl_type,
    };

    debug!(
        language = %language,
        function = %signature.function_name,
        parameters = parameters.len(),
        "Resolved signature"
    );

    Ok(ResolvedSignature {
        language,
        function_name: &signature.function_name,
        parameters,
        returns,
    })
}

/// Ordered fragment assembly
#[derive(Debug, Default)]
pub(crate) struct TemplateBuilder {
    out: String,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment verbatim
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        self.out.push_str(fragment);
        self
    }

    /// Append one line
    pub fn line(&mut self, line: impl AsRef<str>) -> &mut Self {
        self.out.push_str(line.as_ref());
        self.out.push('\n');
        self
    }

    /// Append a fragment only when `condition` holds
    pub fn push_if(&mut self, condition: bool, fragment: &str) -> &mut Self {
        if condition {
            self.push(fragment);
        }
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
