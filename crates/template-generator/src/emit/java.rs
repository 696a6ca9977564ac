/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Java emitter
//!
//! Everything is nested inside `public class Solution`. JSON handling goes
//! through Gson. Gson cannot materialize a primitive array from a generic
//! list, so arrays of primitives are decoded into a boxed `List` first and
//! then copied element by element into a native array.

use super::{ResolvedParam, ResolvedSignature, TemplateBuilder};
use crate::languages::{Language, LanguageGenerator};
use crate::resolver::LanguageTypes;
use crate::signature::{DslType, Primitive};

const IMPORTS: &str = "import java.util.*;
import com.google.gson.*;
import com.google.gson.reflect.TypeToken;
import java.io.InputStreamReader;
import java.io.BufferedReader;

public class Solution {
";

const LIST_NODE: &str = r#"
    public static class ListNode {
        int val;
        ListNode next;
        ListNode() {}
        ListNode(int val) { this.val = val; }
        ListNode(int val, ListNode next) { this.val = val; this.next = next; }
    }

    public static ListNode buildListNode(JsonArray arr) {
        if (arr == null || arr.size() == 0) return null;
        ListNode head = new ListNode(arr.get(0).getAsInt());
        ListNode curr = head;
        for (int i = 1; i < arr.size(); i++) {
            curr.next = new ListNode(arr.get(i).getAsInt());
            curr = curr.next;
        }
        return head;
    }

    public static JsonArray serializeListNode(ListNode head) {
        JsonArray res = new JsonArray();
        while (head != null) {
            res.add(head.val);
            head = head.next;
        }
        return res;
    }
"#;

const TREE_NODE: &str = r#"
    public static class TreeNode {
        int val;
        TreeNode left;
        TreeNode right;
        TreeNode() {}
        TreeNode(int val) { this.val = val; }
        TreeNode(int val, TreeNode left, TreeNode right) {
            this.val = val;
            this.left = left;
            this.right = right;
        }
    }

    public static TreeNode buildTreeNode(JsonElement data) {
        if (data == null || data.isJsonNull()) return null;
        JsonObject obj = data.getAsJsonObject();
        TreeNode node = new TreeNode(obj.get("val").getAsInt());
        node.left = buildTreeNode(obj.get("left"));
        node.right = buildTreeNode(obj.get("right"));
        return node;
    }

    public static JsonElement serializeTreeNode(TreeNode node) {
        if (node == null) return JsonNull.INSTANCE;
        JsonObject res = new JsonObject();
        res.addProperty("val", node.val);
        res.add("left", serializeTreeNode(node.left));
        res.add("right", serializeTreeNode(node.right));
        return res;
    }
"#;

const DRIVER_PROLOGUE: &str = r#"
    public static void main(String[] args) throws Exception {
        BufferedReader br = new BufferedReader(new InputStreamReader(System.in));
        StringBuilder sb = new StringBuilder();
        String line;
        while ((line = br.readLine()) != null) {
            sb.append(line);
        }
        Gson gson = new Gson();
        JsonObject data = gson.fromJson(sb.toString(), JsonObject.class);
        Solution solution = new Solution();
"#;

/// Emits a `Solution` class with nested helpers and a `main` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaGenerator;

/// Gson `JsonElement` accessor suffix for a primitive, as in `getAsInt()`
fn accessor(spelling: &str) -> String {
    let mut chars = spelling.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Placeholder value returned by the stub
fn default_value(dsl_type: &DslType) -> &'static str {
    match dsl_type {
        DslType::Primitive(Primitive::Int) => "0",
        DslType::Primitive(Primitive::Long) => "0L",
        DslType::Primitive(Primitive::Float) => "0.0f",
        DslType::Primitive(Primitive::Double) => "0.0",
        DslType::Primitive(Primitive::Bool) => "false",
        _ => "null",
    }
}

/// Gson decode of a JSON field into a generic type
fn generic_decode(language_type: &str, variable: &str, field: &str) -> String {
    format!(
        "        {language_type} {variable} = gson.fromJson(data.get(\"{field}\"), new TypeToken<{language_type}>(){{}}.getType());"
    )
}

fn decode_parameter(template: &mut TemplateBuilder, types: &LanguageTypes, p: &ResolvedParam<'_>) {
    let name = p.name;
    match &p.dsl_type {
        DslType::List => {
            template.line(format!(
                "        ListNode {name} = buildListNode(data.getAsJsonArray(\"{name}\"));"
            ));
        }
        DslType::Tree => {
            template.line(format!(
                "        TreeNode {name} = buildTreeNode(data.get(\"{name}\"));"
            ));
        }
        DslType::Graph => {
            template.line(generic_decode(types.graph, name, name));
        }
        DslType::Array(inner) => match inner.as_ref() {
            DslType::Primitive(primitive) => {
                let boxed = types.boxed(*primitive);
                template.line(generic_decode(&format!("List<{boxed}>"), &format!("{name}_list"), name));
                if *primitive == Primitive::String {
                    template.line(format!(
                        "        {boxed}[] {name} = {name}_list.toArray(new {boxed}[0]);"
                    ));
                } else {
                    let raw = types.primitive(*primitive);
                    template
                        .line(format!("        {raw}[] {name} = new {raw}[{name}_list.size()];"))
                        .line(format!(
                            "        for (int i = 0; i < {name}_list.size(); i++) {name}[i] = {name}_list.get(i);"
                        ));
                }
            }
            _ => {
                template.line(generic_decode(&p.language_type, name, name));
            }
        },
        DslType::Primitive(_) | DslType::Void => {
            let spelling = &p.language_type;
            template.line(format!(
                "        {spelling} {name} = data.get(\"{name}\").getAs{}();",
                accessor(spelling)
            ));
        }
    }
}

impl LanguageGenerator for JavaGenerator {
    fn language(&self) -> Language {
        Language::Java
    }

    fn render(&self, signature: &ResolvedSignature<'_>) -> String {
        let types = LanguageTypes::of(Language::Java);
        let returns = &signature.returns;
        let function = signature.function_name;

        let mut template = TemplateBuilder::new();
        template
            .push(IMPORTS)
            .push_if(signature.uses_list(), LIST_NODE)
            .push_if(signature.uses_tree(), TREE_NODE);

        let parameters =
            signature.declare_parameters(|p| format!("{} {}", p.language_type, p.name));
        template
            .line("")
            .line(format!(
                "    public {} {}({}) {{",
                returns.language_type, function, parameters
            ))
            .line("        // Write your logic here");
        if !returns.is_void() {
            template.line(format!("        return {};", default_value(&returns.dsl_type)));
        }
        template.line("    }");

        template.push(DRIVER_PROLOGUE);
        for p in &signature.parameters {
            decode_parameter(&mut template, types, p);
        }

        let call = format!("solution.{}({})", function, signature.call_arguments());
        match &returns.dsl_type {
            DslType::Void => {
                template
                    .line(format!("        {call};"))
                    .line("        System.out.println(gson.toJson(JsonNull.INSTANCE));");
            }
            DslType::List => {
                template
                    .line(format!("        {} result = {call};", returns.language_type))
                    .line("        JsonArray serialized = serializeListNode(result);")
                    .line("        System.out.println(gson.toJson(serialized));");
            }
            DslType::Tree => {
                template
                    .line(format!("        {} result = {call};", returns.language_type))
                    .line("        JsonElement serialized = serializeTreeNode(result);")
                    .line("        System.out.println(gson.toJson(serialized));");
            }
            _ => {
                template
                    .line(format!("        {} result = {call};", returns.language_type))
                    .line("        System.out.println(gson.toJson(result));");
            }
        }
        template.line("    }").line("}");

        template.finish()
    }
}
