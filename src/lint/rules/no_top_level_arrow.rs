//! Top-level arrow-function bindings must be function declarations.

use tree_sitter::Node;

use crate::lint::Violation;
use crate::parse::SourceTree;

pub fn check(tree: &SourceTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    tree.preorder(|node| {
        if node.kind() != "variable_declarator" {
            return;
        }
        if !is_top_level(node) {
            return;
        }
        let Some(value) = node.child_by_field_name("value") else {
            return;
        };
        if value.kind() != "arrow_function" {
            return;
        }
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        violations.push(Violation::new(
            SourceTree::line(node),
            format!(
                "Top-level arrow function '{}' is forbidden. \
                 Use 'function' declaration or 'export function' instead.",
                tree.text(name)
            ),
        ));
    });
    violations
}

/// Declarator → (lexical|var) declaration → program, with an optional
/// export statement in between.
fn is_top_level(declarator: Node<'_>) -> bool {
    let Some(declaration) = declarator.parent() else {
        return false;
    };
    if declaration.kind() != "lexical_declaration" && declaration.kind() != "variable_declaration"
    {
        return false;
    }
    let Some(mut container) = declaration.parent() else {
        return false;
    };
    if container.kind() == "export_statement" {
        match container.parent() {
            Some(parent) => container = parent,
            None => return false,
        }
    }
    container.kind() == "program"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Dialect;

    fn check_source(source: &str) -> Vec<Violation> {
        let tree = SourceTree::parse(source.to_string(), Dialect::TypeScript).unwrap();
        check(&tree)
    }

    #[test]
    fn flags_const_arrow() {
        let violations = check_source("const greet = () => 'hi';\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'greet'"));
        assert!(violations[0].message.contains("'function' declaration"));
    }

    #[test]
    fn flags_exported_arrow() {
        let violations = check_source("export const handler = (e: Event) => e;\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'handler'"));
    }

    #[test]
    fn flags_var_and_let_arrows() {
        let violations = check_source("var a = () => 1;\nlet b = () => 2;\n");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn one_violation_per_declaration_in_order() {
        let violations =
            check_source("const a = () => 1;\nconst x = 5;\nconst b = () => 2;\n");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[1].line, 3);
        assert!(violations[0].message.contains("'a'"));
        assert!(violations[1].message.contains("'b'"));
    }

    #[test]
    fn multiple_declarators_each_flagged() {
        let violations = check_source("const a = () => 1, b = () => 2;\n");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn function_declaration_clean() {
        assert!(check_source("function greet() { return 'hi'; }\n").is_empty());
        assert!(check_source("export function greet() { return 'hi'; }\n").is_empty());
    }

    #[test]
    fn nested_arrow_clean() {
        let source = "function outer() {\n  const inner = () => 1;\n  return inner;\n}\n";
        assert!(check_source(source).is_empty());
    }

    #[test]
    fn arrow_inside_block_clean() {
        assert!(check_source("{\n  const f = () => 1;\n}\n").is_empty());
    }

    #[test]
    fn non_arrow_initializer_clean() {
        assert!(check_source("const n = 42;\nconst s = 'x';\n").is_empty());
    }
}
