/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! C++ emitter, JSON through nlohmann/json

use super::{ResolvedSignature, TemplateBuilder};
use crate::languages::{Language, LanguageGenerator};
use crate::signature::DslType;

const IMPORTS: &str = "#include <bits/stdc++.h>
#include <nlohmann/json.hpp>
using json = nlohmann::json;
using namespace std;
";

const LIST_NODE: &str = r#"
struct ListNode {
    int val;
    ListNode* next;
    ListNode() : val(0), next(nullptr) {}
    ListNode(int x) : val(x), next(nullptr) {}
    ListNode(int x, ListNode* next) : val(x), next(next) {}
};

ListNode* buildListNode(const json& arr) {
    if (!arr.is_array() || arr.empty()) return nullptr;
    ListNode* head = new ListNode(arr[0].get<int>());
    ListNode* curr = head;
    for (size_t i = 1; i < arr.size(); ++i) {
        curr->next = new ListNode(arr[i].get<int>());
        curr = curr->next;
    }
    return head;
}

json serializeListNode(ListNode* head) {
    json res = json::array();
    while (head) {
        res.push_back(head->val);
        head = head->next;
    }
    return res;
}
"#;

const TREE_NODE: &str = r#"
struct TreeNode {
    int val;
    TreeNode* left;
    TreeNode* right;
    TreeNode() : val(0), left(nullptr), right(nullptr) {}
    TreeNode(int x) : val(x), left(nullptr), right(nullptr) {}
    TreeNode(int x, TreeNode* left, TreeNode* right) : val(x), left(left), right(right) {}
};

TreeNode* buildTreeNode(const json& data) {
    if (!data.is_object()) return nullptr;
    TreeNode* node = new TreeNode(data.value("val", 0));
    node->left = buildTreeNode(data.value("left", json()));
    node->right = buildTreeNode(data.value("right", json()));
    return node;
}

json serializeTreeNode(TreeNode* node) {
    if (!node) return nullptr;
    json res;
    res["val"] = node->val;
    res["left"] = serializeTreeNode(node->left);
    res["right"] = serializeTreeNode(node->right);
    return res;
}
"#;

const DRIVER_PROLOGUE: &str = r#"
int main() {
    string input;
    string line;
    while (getline(cin, line)) {
        input += line;
    }
    json data = json::parse(input);
    Solution solution;
"#;

/// Emits a `Solution` class and a `main` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct CppGenerator;

impl LanguageGenerator for CppGenerator {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn render(&self, signature: &ResolvedSignature<'_>) -> String {
        let returns = &signature.returns;

        let mut template = TemplateBuilder::new();
        template
            .push(IMPORTS)
            .push_if(signature.uses_list(), LIST_NODE)
            .push_if(signature.uses_tree(), TREE_NODE);

        let parameters =
            signature.declare_parameters(|p| format!("{} {}", p.language_type, p.name));
        template
            .line("")
            .line("class Solution {")
            .line("public:")
            .line(format!(
                "    {} {}({}) {{",
                returns.language_type, signature.function_name, parameters
            ))
            .line("        // Write your logic here");
        if !returns.is_void() {
            template.line("        return {};");
        }
        template.line("    }").line("};");

        template.push(DRIVER_PROLOGUE);
        for p in &signature.parameters {
            let (name, language_type) = (p.name, &p.language_type);
            let value = match p.dsl_type {
                DslType::List => format!("buildListNode(data[\"{name}\"])"),
                DslType::Tree => format!("buildTreeNode(data[\"{name}\"])"),
                _ => format!("data[\"{name}\"].get<{language_type}>()"),
            };
            template.line(format!("    {language_type} {name} = {value};"));
        }

        let call = format!(
            "solution.{}({})",
            signature.function_name,
            signature.call_arguments()
        );
        match returns.dsl_type {
            DslType::Void => {
                template
                    .line(format!("    {call};"))
                    .line("    cout << json(nullptr).dump() << endl;");
            }
            DslType::List => {
                template
                    .line(format!("    auto result = {call};"))
                    .line("    json serialized = serializeListNode(result);")
                    .line("    cout << serialized.dump() << endl;");
            }
            DslType::Tree => {
                template
                    .line(format!("    auto result = {call};"))
                    .line("    json serialized = serializeTreeNode(result);")
                    .line("    cout << serialized.dump() << endl;");
            }
            _ => {
                template
                    .line(format!("    auto result = {call};"))
                    .line("    cout << json(result).dump() << endl;");
            }
        }
        template.line("    return 0;").line("}");

        template.finish()
    }
}
