//! `as` assertions are forbidden: they silence the checker instead of
//! fixing the types. Test files are exempt, but the exemption is a path
//! filter in the calling hook; this rule never sees file names.

use crate::lint::Violation;
use crate::parse::SourceTree;

pub fn check(tree: &SourceTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    tree.preorder(|node| {
        if node.kind() != "as_expression" {
            return;
        }
        let Some(expr) = node.named_child(0) else {
            return;
        };
        // `expr as const` keeps the keyword anonymous, so only the
        // expression shows up as a named child.
        let count = node.named_child_count();
        let asserted = if count >= 2 {
            node.named_child((count - 1) as u32).map(|n| tree.text(n))
        } else {
            None
        };
        violations.push(Violation::new(
            SourceTree::line(node),
            format!(
                "Type assertion 'as' is forbidden. Expression '{}' asserted as '{}'.",
                tree.text(expr),
                asserted.unwrap_or("const"),
            ),
        ));
    });
    violations
}
