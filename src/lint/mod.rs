//! Rule engine: runs the registered convention rules over a parsed file.

pub mod rules;
mod violation;

pub use rules::RuleId;
pub use violation::Violation;

use crate::parse::SourceTree;

/// Runs every rule in [`RuleId::ALL`] that appears in `active`, in registry
/// order, and concatenates the violations. Ordering of the result depends
/// only on the registry and each rule's own traversal, both deterministic,
/// so repeated runs over the same tree agree exactly.
pub fn run(tree: &SourceTree, active: &[RuleId]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for id in RuleId::ALL {
        if active.contains(&id) {
            violations.extend((id.rule())(tree));
        }
    }
    violations
}
