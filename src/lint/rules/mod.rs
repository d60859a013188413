//! Convention rules: per-rule logic for flagging style violations.
//!
//! Each rule is a pure function over one parsed file. Rules never touch the
//! filesystem and never see the file's path; path-based exemptions (test
//! files) belong to the calling hook.

/// `Array<T>` / `ReadonlyArray<T>` generic notation.
pub mod no_array_generic;
/// Interface declarations.
pub mod no_interface;
/// Top-level arrow-function bindings.
pub mod no_top_level_arrow;
/// `expr as Type` assertions.
pub mod no_type_assertion;
/// Parameter-count limit on named functions.
pub mod max_params;

use crate::lint::Violation;
use crate::parse::SourceTree;

/// A rule function: one pass over the tree, zero or more violations.
pub type RuleFn = fn(&SourceTree) -> Vec<Violation>;

/// Identifier for one registered rule. The string forms are what config
/// files use to switch rules off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    NoInterface,
    MaxParams,
    NoArrayGenericNotation,
    NoTopLevelArrowFunction,
    NoTypeAssertion,
}

impl RuleId {
    /// Every registered rule, in application order. The engine iterates
    /// this table, so violation ordering is stable no matter how callers
    /// assemble their active subset.
    pub const ALL: [RuleId; 5] = [
        RuleId::NoInterface,
        RuleId::MaxParams,
        RuleId::NoArrayGenericNotation,
        RuleId::NoTopLevelArrowFunction,
        RuleId::NoTypeAssertion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::NoInterface => "no-interface",
            RuleId::MaxParams => "max-params",
            RuleId::NoArrayGenericNotation => "no-array-generic-notation",
            RuleId::NoTopLevelArrowFunction => "no-top-level-arrow-function",
            RuleId::NoTypeAssertion => "no-type-assertion",
        }
    }

    /// The function implementing this rule.
    pub fn rule(self) -> RuleFn {
        match self {
            RuleId::NoInterface => no_interface::check,
            RuleId::MaxParams => max_params::check,
            RuleId::NoArrayGenericNotation => no_array_generic::check,
            RuleId::NoTopLevelArrowFunction => no_top_level_arrow::check,
            RuleId::NoTypeAssertion => no_type_assertion::check,
        }
    }
}
