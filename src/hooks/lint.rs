//! PostToolUse lint: parse the file a Write/Edit just touched and feed any
//! convention violations back to the agent.
//!
//! The edit itself always stands; a `decision: block` on PostToolUse only
//! re-prompts the agent with the reason. Anything that keeps the file from
//! being linted (unreadable, not TypeScript, rules all off) is a silent
//! pass: the lint exists to catch violations, not to manufacture them.

use crate::config;
use crate::hook::{HookInput, HookOutcome};
use crate::hooks::{self, Hook};
use crate::lint::{self, RuleId};
use crate::parse::{Dialect, SourceTree};

/// Tools whose completed calls get linted.
const LINTED_TOOLS: [&str; 2] = ["Write", "Edit"];

/// Name fragments that mark a file as a test. Test files are exempt; the
/// rules target production code.
const TEST_SUFFIXES: [&str; 8] = [
    ".test.ts",
    ".test.tsx",
    ".test.mts",
    ".test.cts",
    ".spec.ts",
    ".spec.tsx",
    ".spec.mts",
    ".spec.cts",
];

pub struct ConventionLint;

impl Hook for ConventionLint {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn run(&self, input: &HookInput, _args: &[String]) -> HookOutcome {
        let Some(tool) = input.tool_name.as_deref() else {
            return HookOutcome::Success(None);
        };
        if !LINTED_TOOLS.contains(&tool) {
            return HookOutcome::Success(None);
        }
        let Some(path) = edited_path(input) else {
            return HookOutcome::Success(None);
        };
        let Some(dialect) = Dialect::for_path(path) else {
            return HookOutcome::Success(None);
        };
        if is_test_file(path) {
            return HookOutcome::Success(None);
        }
        let config = config::resolve(&hooks::cwd(input), &config::user_config_path());
        let active = config::active_rules(config.as_ref());
        lint_file(path, dialect, &active)
    }
}

/// The file the tool call touched. The tool response carries the resolved
/// absolute path once the write has happened; the request's `file_path` is
/// the fallback for tools that do not report one.
fn edited_path(input: &HookInput) -> Option<&str> {
    input
        .tool_response
        .file_path
        .as_deref()
        .or(input.tool_input.file_path.as_deref())
}

fn is_test_file(path: &str) -> bool {
    TEST_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

fn lint_file(path: &str, dialect: Dialect, active: &[RuleId]) -> HookOutcome {
    if active.is_empty() {
        return HookOutcome::Success(None);
    }
    let Ok(source) = std::fs::read_to_string(path) else {
        return HookOutcome::Success(None);
    };
    let Some(tree) = SourceTree::parse(source, dialect) else {
        return HookOutcome::Success(None);
    };
    let violations = lint::run(&tree, active);
    if violations.is_empty() {
        return HookOutcome::Success(None);
    }
    log::debug!("{} violation(s) in {path}", violations.len());
    let listing: Vec<String> = violations.iter().map(ToString::to_string).collect();
    HookOutcome::PostToolBlock(format!(
        "Coding convention violations in '{path}':\n\n{}",
        listing.join("\n")
    ))
}
