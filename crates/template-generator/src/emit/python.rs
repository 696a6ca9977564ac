/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

//! Python emitter

use super::{ResolvedSignature, TemplateBuilder};
use crate::languages::{Language, LanguageGenerator};
use crate::signature::DslType;

const IMPORTS: &str = "from typing import Dict, List, Optional\n";

const LIST_NODE: &str = r#"
class ListNode:
    def __init__(self, val=0, next=None):
        self.val = val
        self.next = next

def build_listnode(arr: List[int]) -> Optional[ListNode]:
    if not arr: return None
    head = ListNode(arr[0])
    curr = head
    for val in arr[1:]:
        curr.next = ListNode(val)
        curr = curr.next
    return head

def serialize_listnode(head: Optional[ListNode]) -> List[int]:
    res = []
    while head:
        res.append(head.val)
        head = head.next
    return res
"#;

const TREE_NODE: &str = r#"
class TreeNode:
    def __init__(self, val=0, left=None, right=None):
        self.val = val
        self.left = left
        self.right = right

def build_treenode(data: Optional[Dict]) -> Optional[TreeNode]:
    if data is None: return None
    node = TreeNode(data.get('val', 0))
    node.left = build_treenode(data.get('left'))
    node.right = build_treenode(data.get('right'))
    return node

def serialize_treenode(node: Optional[TreeNode]) -> Optional[Dict]:
    if node is None: return None
    return {'val': node.val, 'left': serialize_treenode(node.left), 'right': serialize_treenode(node.right)}
"#;

const DRIVER_PROLOGUE: &str = r#"
if __name__ == "__main__":
    import sys, json
    data = json.loads(sys.stdin.read())
    kwargs = {}
"#;

/// Emits a `Solution` class and a `__main__` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonGenerator;

impl LanguageGenerator for PythonGenerator {
    fn language(&self) -> Language {
        Language::Python
    }

    fn render(&self, signature: &ResolvedSignature<'_>) -> String {
        let mut template = TemplateBuilder::new();
        template
            .push(IMPORTS)
            .push_if(signature.uses_list(), LIST_NODE)
            .push_if(signature.uses_tree(), TREE_NODE);

        let parameters = std::iter::once("self".to_string())
            .chain(
                signature
                    .parameters
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.language_type)),
            )
            .collect::<Vec<_>>()
            .join(", ");
        template
            .line("")
            .line("class Solution:")
            .line(format!(
                "    def {}({}) -> {}:",
                signature.function_name, parameters, signature.returns.language_type
            ))
            .line("        # Write your logic here")
            .line("        pass");

        template.push(DRIVER_PROLOGUE);
        for p in &signature.parameters {
            let value = match p.dsl_type {
                DslType::List => format!("build_listnode(data.get('{}', []))", p.name),
                DslType::Tree => format!("build_treenode(data.get('{}'))", p.name),
                _ => format!("data.get('{}')", p.name),
            };
            template.line(format!("    kwargs['{}'] = {}", p.name, value));
        }
        template.line(format!(
            "    result = Solution().{}(**kwargs)",
            signature.function_name
        ));
        match signature.returns.dsl_type {
            DslType::List => {
                template.line("    result = serialize_listnode(result)");
            }
            DslType::Tree => {
                template.line("    result = serialize_treenode(result)");
            }
            _ => {}
        }
        template.line("    print(json.dumps(result))");

        template.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{Parameter, Signature};

    fn generate(signature: &Signature) -> String {
        PythonGenerator.generate(signature).unwrap()
    }

    #[test]
    fn test_stub_signature() {
        let template = generate(&Signature::new(
            "twoSum",
            vec![Parameter::new("nums", "int[]"), Parameter::new("target", "int")],
            "int[]",
        ));
        assert!(template.starts_with("from typing import Dict, List, Optional\n"));
        assert!(template.contains("    def twoSum(self, nums: List[int], target: int) -> List[int]:\n"));
        assert!(template.contains("        pass\n"));
        assert!(template.contains("    kwargs['nums'] = data.get('nums')\n"));
        assert!(template.contains("    kwargs['target'] = data.get('target')\n"));
        assert!(template.contains("    result = Solution().twoSum(**kwargs)\n"));
        assert!(template.ends_with("    print(json.dumps(result))\n"));
    }

    #[test]
    fn test_no_parameters() {
        let template = generate(&Signature::new("answer", vec![], "long"));
        assert!(template.contains("    def answer(self) -> int:\n"));
        assert!(template.contains("    result = Solution().answer(**kwargs)\n"));
    }

    #[test]
    fn test_list_helpers_and_serialization() {
        let template = generate(&Signature::new(
            "reverseList",
            vec![Parameter::new("head", "List")],
            "List",
        ));
        assert!(template.contains("class ListNode:"));
        assert!(template.contains("def build_listnode("));
        assert!(template.contains("def serialize_listnode("));
        assert!(!template.contains("class TreeNode:"));
        assert!(template.contains("    kwargs['head'] = build_listnode(data.get('head', []))\n"));
        assert!(template.contains("    result = serialize_listnode(result)\n"));
    }

    #[test]
    fn test_tree_helpers() {
        let template = generate(&Signature::new(
            "maxDepth",
            vec![Parameter::new("root", "Tree")],
            "int",
        ));
        assert!(template.contains("class TreeNode:"));
        assert!(template.contains("    kwargs['root'] = build_treenode(data.get('root'))\n"));
        assert!(!template.contains("serialize_treenode(result)"));
        assert!(!template.contains("class ListNode:"));
    }

    #[test]
    fn test_void_return() {
        let template = generate(&Signature::new(
            "rotate",
            vec![Parameter::new("matrix", "int[][]")],
            "void",
        ));
        assert!(template.contains("    def rotate(self, matrix: List[List[int]]) -> None:\n"));
        assert!(template.contains("    print(json.dumps(result))\n"));
    }
}
