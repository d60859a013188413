//! Interface declarations are forbidden in favor of type aliases.

use crate::lint::Violation;
use crate::parse::SourceTree;

pub fn check(tree: &SourceTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    tree.preorder(|node| {
        if node.kind() != "interface_declaration" {
            return;
        }
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        violations.push(Violation::new(
            SourceTree::line(node),
            format!(
                "Interface '{}' is forbidden. Use 'type' alias instead.",
                tree.text(name)
            ),
        ));
    });
    violations
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
    fn flags_interface_with_name() {
        let violations = check_source("interface User {\n  id: number;\n}\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 1);
        assert!(violations[0].message.contains("'User'"));
        assert!(violations[0].message.contains("type' alias"));
    }

    #[test]
    fn flags_each_interface() {
        let violations = check_source("interface A {}\ninterface B {}\ninterface C {}\n");
        assert_eq!(violations.len(), 3);
        assert_eq!(
            violations.iter().map(|v| v.line).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn flags_exported_interface() {
        let violations = check_source("export interface Props {\n  title: string;\n}\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'Props'"));
    }

    #[test]
    fn type_alias_is_clean() {
        let violations = check_source("type User = {\n  id: number;\n};\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn class_is_clean() {
        let violations = check_source("class User {\n  id = 0;\n}\n");
        assert!(violations.is_empty());
    }
}
