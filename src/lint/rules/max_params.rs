//! Functions with two or more parameters must take a single object argument.

use tree_sitter::Node;

use crate::lint::Violation;
use crate::parse::SourceTree;

pub fn check(tree: &SourceTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    tree.preorder(|node| {
        let name = match node.kind() {
            "function_declaration" => node
                .child_by_field_name("name")
                .map(|n| tree.text(n).to_string())
                .unwrap_or_else(|| "Anonymous function".to_string()),
            "function_expression" => {
                // `export default function (a, b) {}` declares the default
                // export but parses as an expression since it has no name.
                let Some(parent) = node.parent() else { return };
                if parent.kind() != "export_statement" {
                    return;
                }
                node.child_by_field_name("name")
                    .map(|n| tree.text(n).to_string())
                    .unwrap_or_else(|| "Anonymous function".to_string())
            }
            "method_definition" => {
                let Some(name) = node.child_by_field_name("name") else {
                    return;
                };
                tree.text(name).to_string()
            }
            "arrow_function" => {
                // Only arrows bound to a named variable; nothing to report
                // on an inline callback.
                let Some(parent) = node.parent() else { return };
                if parent.kind() != "variable_declarator" {
                    return;
                }
                let Some(name) = parent.child_by_field_name("name") else {
                    return;
                };
                tree.text(name).to_string()
            }
            _ => return,
        };

        let count = parameter_count(node);
        if count >= 2 {
            violations.push(Violation::new(
                SourceTree::line(node),
                format!(
                    "Function '{name}' has {count} arguments. \
                     Functions with 2+ arguments must use a single object argument."
                ),
            ));
        }
    });
    violations
}

fn parameter_count(node: Node<'_>) -> usize {
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        // Comments inside the list parse as named children too.
        return params
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .count();
    }
    // `x => …` carries a single bare identifier instead of a list.
    if node.child_by_field_name("parameter").is_some() {
        return 1;
    }
    0
}
