/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Function signature description and the DSL type vocabulary

use serde::{Deserialize, Serialize};

/// Suffix marking one level of array nesting in a DSL type token
pub const ARRAY_SUFFIX: &str = "[]";

/// Deepest array nesting accepted in a DSL type token
pub const MAX_ARRAY_DEPTH: usize = 32;

/// A single named, typed parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub dsl_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, dsl_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dsl_type: dsl_type.into(),
        }
    }
}

/// Declared return type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSpec {
    #[serde(rename = "type")]
    pub dsl_type: String,
}

/// Language-agnostic function signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub function_name: String,
    /// Order defines declaration and call-argument order
    pub parameters: Vec<Parameter>,
    pub returns: ReturnSpec,
}

impl Signature {
    pub fn new(
        function_name: impl Into<String>,
        parameters: Vec<Parameter>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            parameters,
            returns: ReturnSpec {
                dsl_type: returns.into(),
            },
        }
    }

    /// True if `dsl_type` appears verbatim as a parameter type or the return type
    pub fn uses(&self, dsl_type: &DslType) -> bool {
        self.parameters
            .iter()
            .map(|p| p.dsl_type.as_str())
            .chain(std::iter::once(self.returns.dsl_type.as_str()))
            .any(|token| DslType::parse(token).as_ref() == Some(dsl_type))
    }
}

/// Primitive DSL types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Long,
    Float,
    Double,
    Bool,
    String,
}

impl Primitive {
    pub const ALL: [Primitive; 6] = [
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Bool,
        Primitive::String,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Bool => "bool",
            Primitive::String => "string",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Primitive::ALL.into_iter().find(|p| p.token() == token)
    }
}

/// Parsed DSL type token.
///
/// New composite types are added here, and every exhaustive match over
/// this enum (resolver, emitters) must then handle them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DslType {
    Primitive(Primitive),
    Array(Box<DslType>),
    /// Singly linked list of integers
    List,
    /// Binary tree of integers
    Tree,
    /// Adjacency structure, always a two-level integer array
    Graph,
    /// Return-only marker for functions without a result
    Void,
}

impl DslType {
    /// Parse a DSL token, or `None` if it is outside the vocabulary or nests
    /// arrays deeper than [`MAX_ARRAY_DEPTH`].
    pub fn parse(token: &str) -> Option<Self> {
        if token == "void" {
            Some(DslType::Void)
        } else {
            Self::parse_value(token)
        }
    }

    fn parse_value(token: &str) -> Option<Self> {
        let mut element = token;
        let mut depth = 0;
        while let Some(inner) = element.strip_suffix(ARRAY_SUFFIX) {
            depth += 1;
            if depth > MAX_ARRAY_DEPTH {
                return None;
            }
            element = inner;
        }

        let mut parsed = match element {
            "List" => DslType::List,
            "Tree" => DslType::Tree,
            "Graph" => DslType::Graph,
            other => DslType::Primitive(Primitive::from_token(other)?),
        };
        for _ in 0..depth {
            parsed = DslType::Array(Box::new(parsed));
        }
        Some(parsed)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, DslType::Void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        for primitive in Primitive::ALL {
            assert_eq!(
                DslType::parse(primitive.token()),
                Some(DslType::Primitive(primitive))
            );
        }
    }

    #[test]
    fn test_parse_nested_arrays() {
        let parsed = DslType::parse("int[][]").unwrap();
        let expected = DslType::Array(Box::new(DslType::Array(Box::new(
            DslType::Primitive(Primitive::Int),
        ))));
        assert_eq!(parsed, expected);

        assert_eq!(
            DslType::parse("List[]"),
            Some(DslType::Array(Box::new(DslType::List)))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert_eq!(DslType::parse("bogus"), None);
        assert_eq!(DslType::parse("bogus[]"), None);
        assert_eq!(DslType::parse("[]"), None);
        assert_eq!(DslType::parse("int["), None);
        assert_eq!(DslType::parse("list"), None);
        assert_eq!(DslType::parse("void[]"), None);
        assert_eq!(DslType::parse("void"), Some(DslType::Void));
    }

    #[test]
    fn test_parse_limits_array_depth() {
        let deepest = format!("int{}", ARRAY_SUFFIX.repeat(MAX_ARRAY_DEPTH));
        let mut parsed = DslType::parse(&deepest).unwrap();
        let mut depth = 0;
        while let DslType::Array(inner) = parsed {
            depth += 1;
            parsed = *inner;
        }
        assert_eq!(depth, MAX_ARRAY_DEPTH);
        assert_eq!(parsed, DslType::Primitive(Primitive::Int));

        let too_deep = format!("int{}", ARRAY_SUFFIX.repeat(MAX_ARRAY_DEPTH + 1));
        assert_eq!(DslType::parse(&too_deep), None);

        let huge = format!("int{}", ARRAY_SUFFIX.repeat(100_000));
        assert_eq!(DslType::parse(&huge), None);
    }

    #[test]
    fn test_signature_uses_exact_composites_only() {
        let signature = Signature::new(
            "mergeKLists",
            vec![Parameter::new("lists", "List[]")],
            "int",
        );
        assert!(!signature.uses(&DslType::List));

        let signature = Signature::new("reverse", vec![Parameter::new("head", "int")], "List");
        assert!(signature.uses(&DslType::List));
        assert!(!signature.uses(&DslType::Tree));
    }

    #[test]
    fn test_signature_json_shape() {
        let json = r#"{
            "function_name": "fib",
            "parameters": [{"name": "n", "type": "int"}],
            "returns": {"type": "int"}
        }"#;
        let signature: Signature = serde_json::from_str(json).unwrap();
        assert_eq!(
            signature,
            Signature::new("fib", vec![Parameter::new("n", "int")], "int")
        );
    }
}
