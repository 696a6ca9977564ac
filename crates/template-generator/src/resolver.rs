/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Type resolver
//!
//! Maps DSL type tokens to target-language type names using read-only
//! per-language tables. Arrays are resolved by structural recursion, one
//! `[]` suffix per level.
//!
//! `Graph` always resolves to a two-level integer array, whatever the
//! element type of the graph the exercise has in mind. Typed-node graphs
//! are not representable.

use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::languages::Language;
use crate::signature::{DslType, Primitive};

/// Static type spellings for one language
#[derive(Debug)]
pub struct LanguageTypes {
    /// Indexed in `Primitive::ALL` order
    primitives: [&'static str; 6],
    /// Prefix and suffix wrapped around a resolved array element
    array: (&'static str, &'static str),
    /// Object forms used inside generic containers, if the language boxes
    boxed: Option<[&'static str; 6]>,
    pub list_node: &'static str,
    pub tree_node: &'static str,
    pub graph: &'static str,
    pub void: &'static str,
}

static PYTHON_TYPES: LanguageTypes = LanguageTypes {
    primitives: ["int", "int", "float", "float", "bool", "str"],
    array: ("List[", "]"),
    boxed: None,
    list_node: "ListNode",
    tree_node: "TreeNode",
    graph: "List[List[int]]",
    void: "None",
};

static JAVA_TYPES: LanguageTypes = LanguageTypes {
    primitives: ["int", "long", "float", "double", "boolean", "String"],
    array: ("List<", ">"),
    boxed: Some(["Integer", "Long", "Float", "Double", "Boolean", "String"]),
    list_node: "ListNode",
    tree_node: "TreeNode",
    graph: "List<List<Integer>>",
    void: "void",
};

static CPP_TYPES: LanguageTypes = LanguageTypes {
    primitives: ["int", "long long", "float", "double", "bool", "std::string"],
    array: ("std::vector<", ">"),
    boxed: None,
    list_node: "ListNode*",
    tree_node: "TreeNode*",
    graph: "std::vector<std::vector<int>>",
    void: "void",
};

static JAVASCRIPT_TYPES: LanguageTypes = LanguageTypes {
    primitives: ["number", "number", "number", "number", "boolean", "string"],
    array: ("", "[]"),
    boxed: None,
    list_node: "ListNode",
    tree_node: "TreeNode",
    graph: "number[][]",
    void: "void",
};

fn primitive_index(primitive: Primitive) -> usize {
    match primitive {
        Primitive::Int => 0,
        Primitive::Long => 1,
        Primitive::Float => 2,
        Primitive::Double => 3,
        Primitive::Bool => 4,
        Primitive::String => 5,
    }
}

impl LanguageTypes {
    /// Table for a language
    pub fn of(language: Language) -> &'static LanguageTypes {
        match language {
            Language::Python => &PYTHON_TYPES,
            Language::Java => &JAVA_TYPES,
            Language::Cpp => &CPP_TYPES,
            Language::JavaScript => &JAVASCRIPT_TYPES,
        }
    }

    pub fn primitive(&self, primitive: Primitive) -> &'static str {
        self.primitives[primitive_index(primitive)]
    }

    /// Boxed form of a primitive, or the raw spelling when the language does not box
    pub fn boxed(&self, primitive: Primitive) -> &'static str {
        match &self.boxed {
            Some(boxed) => boxed[primitive_index(primitive)],
            None => self.primitive(primitive),
        }
    }

    /// Render a parsed DSL type
    pub fn render(&self, dsl_type: &DslType) -> String {
        match dsl_type {
            DslType::Primitive(primitive) => self.primitive(*primitive).to_string(),
            DslType::Array(inner) => {
                let element = match inner.as_ref() {
                    DslType::Primitive(primitive) => self.boxed(*primitive).to_string(),
                    other => self.render(other),
                };
                let (prefix, suffix) = self.array;
                format!("{prefix}{element}{suffix}")
            }
            DslType::List => self.list_node.to_string(),
            DslType::Tree => self.tree_node.to_string(),
            DslType::Graph => self.graph.to_string(),
            DslType::Void => self.void.to_string(),
        }
    }
}

/// Resolve a parsed DSL type for a language
pub fn resolve_type(language: Language, dsl_type: &DslType) -> String {
    LanguageTypes::of(language).render(dsl_type)
}

/// Resolve a DSL type token for a language
pub fn resolve(language: Language, token: &str) -> Result<String> {
    let dsl_type = DslType::parse(token).ok_or_else(|| {
        debug!(language = %language, dsl_type = token, "Rejected unknown DSL type");
        GeneratorError::unsupported_type(token, language)
    })?;
    Ok(resolve_type(language, &dsl_type))
}
