//! `Array<T>` / `ReadonlyArray<T>` must be written in bracket notation.

use tree_sitter::Node;

use crate::lint::Violation;
use crate::parse::SourceTree;

pub fn check(tree: &SourceTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    tree.preorder(|node| {
        if node.kind() != "generic_type" {
            return;
        }
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let base = tree.text(name);
        if base != "Array" && base != "ReadonlyArray" {
            return;
        }
        // A bare `Array` parses as a plain identifier, so reaching here
        // means at least the argument list brackets exist; an empty list
        // still yields no suggestion and is left alone.
        let Some(args) = node.child_by_field_name("type_arguments") else {
            return;
        };
        let Some(first) = first_type_argument(args) else {
            return;
        };

        let element = tree.text(first);
        let suggestion = if base == "ReadonlyArray" {
            format!("readonly {element}[]")
        } else {
            format!("{element}[]")
        };
        violations.push(Violation::new(
            SourceTree::line(node),
            format!(
                "Generic array notation '{}' is forbidden. Use '{suggestion}' instead.",
                tree.text(node)
            ),
        ));
    });
    violations
}

fn first_type_argument<'t>(args: Node<'t>) -> Option<Node<'t>> {
    let mut cursor = args.walk();
    args.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
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
    fn array_of_string_suggests_brackets() {
        let violations = check_source("let xs: Array<string> = [];\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'Array<string>'"));
        assert!(violations[0].message.contains("Use 'string[]' instead"));
    }

    #[test]
    fn readonly_array_suggests_readonly_brackets() {
        let violations = check_source("let xs: ReadonlyArray<string> = [];\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Use 'readonly string[]' instead"));
    }

    #[test]
    fn bare_array_reference_clean() {
        // No type argument means no suggestion can be derived.
        assert!(check_source("let ctor: typeof Array = Array;\n").is_empty());
    }

    #[test]
    fn bracket_notation_clean() {
        assert!(check_source("let xs: string[] = [];\n").is_empty());
        assert!(check_source("let xs: readonly string[] = [];\n").is_empty());
    }

    #[test]
    fn suggestion_uses_first_type_argument() {
        let violations = check_source("let m: Array<Map<string, number>> = [];\n");
        // Outer Array flagged; the inner Map is not an Array reference.
        assert_eq!(violations.len(), 1);
        assert!(
            violations[0]
                .message
                .contains("Use 'Map<string, number>[]' instead")
        );
    }

    #[test]
    fn nested_arrays_flag_both() {
        let violations = check_source("let xs: Array<Array<number>> = [];\n");
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("'Array<Array<number>>'"));
        assert!(violations[1].message.contains("'Array<number>'"));
    }

    #[test]
    fn other_generics_clean() {
        assert!(check_source("let m: Map<string, number> = new Map();\n").is_empty());
        assert!(check_source("let p: Promise<void> = run();\n").is_empty());
    }

    #[test]
    fn parameter_annotation_flagged() {
        let violations = check_source("function f(xs: Array<number>) {}\n");
        assert_eq!(violations.len(), 1);
    }
}
