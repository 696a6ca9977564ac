/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! JavaScript (Node.js) emitter
//!
//! JavaScript has no declared types, so the resolved types go into a JSDoc
//! block above the stub.

use super::{ResolvedSignature, TemplateBuilder};
use crate::languages::{Language, LanguageGenerator};
use crate::signature::DslType;

const IMPORTS: &str = "const fs = require('fs');\n";

const LIST_NODE: &str = r#"
class ListNode {
    constructor(val = 0, next = null) {
        this.val = val;
        this.next = next;
    }
}

function buildListNode(arr) {
    if (!arr || arr.length === 0) return null;
    let head = new ListNode(arr[0]);
    let curr = head;
    for (let i = 1; i < arr.length; i++) {
        curr.next = new ListNode(arr[i]);
        curr = curr.next;
    }
    return head;
}

function serializeListNode(head) {
    const res = [];
    while (head) {
        res.push(head.val);
        head = head.next;
    }
    return res;
}
"#;

const TREE_NODE: &str = r#"
class TreeNode {
    constructor(val = 0, left = null, right = null) {
        this.val = val;
        this.left = left;
        this.right = right;
    }
}

function buildTreeNode(data) {
    if (!data) return null;
    const node = new TreeNode(data.val);
    node.left = buildTreeNode(data.left);
    node.right = buildTreeNode(data.right);
    return node;
}

function serializeTreeNode(node) {
    if (!node) return null;
    return {
        val: node.val,
        left: serializeTreeNode(node.left),
        right: serializeTreeNode(node.right)
    };
}
"#;

const DRIVER_PROLOGUE: &str = r#"
const input = fs.readFileSync(0, 'utf-8');
const data = JSON.parse(input);
const solution = new Solution();
"#;

/// Emits a `Solution` class and a top-level driver
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptGenerator;

impl LanguageGenerator for JavaScriptGenerator {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn render(&self, signature: &ResolvedSignature<'_>) -> String {
        let returns = &signature.returns;
        let arguments = signature.call_arguments();

        let mut template = TemplateBuilder::new();
        template
            .push(IMPORTS)
            .push_if(signature.uses_list(), LIST_NODE)
            .push_if(signature.uses_tree(), TREE_NODE);

        template.line("").line("class Solution {").line("    /**");
        for p in &signature.parameters {
            template.line(format!("     * @param {{{}}} {}", p.language_type, p.name));
        }
        template
            .line(format!("     * @return {{{}}}", returns.language_type))
            .line("     */")
            .line(format!("    {}({}) {{", signature.function_name, arguments))
            .line("        // Write your logic here");
        if !returns.is_void() {
            template.line("        return null;");
        }
        template.line("    }").line("}");

        template.push(DRIVER_PROLOGUE);
        for p in &signature.parameters {
            let name = p.name;
            let value = match p.dsl_type {
                DslType::List => format!("buildListNode(data['{name}'])"),
                DslType::Tree => format!("buildTreeNode(data['{name}'])"),
                _ => format!("data['{name}']"),
            };
            template.line(format!("const {name} = {value};"));
        }

        let call = format!("solution.{}({})", signature.function_name, arguments);
        match returns.dsl_type {
            DslType::Void => {
                template
                    .line(format!("let result = {call};"))
                    .line("console.log(JSON.stringify(result ?? null));");
            }
            DslType::List => {
                template
                    .line(format!("let result = {call};"))
                    .line("result = serializeListNode(result);")
                    .line("console.log(JSON.stringify(result));");
            }
            DslType::Tree => {
                template
                    .line(format!("let result = {call};"))
                    .line("result = serializeTreeNode(result);")
                    .line("console.log(JSON.stringify(result));");
            }
            _ => {
                template
                    .line(format!("let result = {call};"))
                    .line("console.log(JSON.stringify(result));");
            }
        }

        template.finish()
    }
}
