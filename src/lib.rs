//! cc-guardrails: lifecycle hooks for Claude Code that lint TypeScript
//! edits and gate session stops on project checks.
//!
//! One binary serves six hooks, selected by the first argument: `lint`
//! (PostToolUse convention rules over the edited file), `typecheck` and
//! `checks` (Stop gates that run the type checker / package scripts when
//! the session edited TypeScript), `stop-words` (Stop gate over the final
//! assistant text), `skills` (UserPromptSubmit context injection), and
//! `web-fetch` (PreToolUse steering for GitHub URLs).
//!
//! # Architecture
//!
//! - **[`parse`]** — TypeScript parsing: tree-sitter tree wrapper with a
//!   preorder traversal.
//! - **[`lint`]** — Rule engine: [`lint::RuleId`] registry and the five
//!   convention rules.
//! - **[`config`]** — Rule configuration resolution (project file, then
//!   user file, then all-active).
//! - **[`transcript`]** — Session transcript events and the
//!   edited-since-last-user-turn scanner.
//! - **[`gate`]** — External check commands and the blocking/advisory
//!   failure policies.
//! - **[`hook`]** — Hook wire types and outcome emission.
//! - **[`hooks`]** — The six hook implementations and their shared
//!   predicates.
//! - **[`logging`]** — Best-effort file logging under
//!   `~/.local/share/cc-guardrails/`.

/// Rule configuration loading and resolution.
pub mod config;
/// Check-command spawning and gate failure policies.
pub mod gate;
/// Hook input/outcome wire types.
pub mod hook;
/// The six hook implementations.
pub mod hooks;
/// Rule engine, rule registry, violations.
pub mod lint;
/// Best-effort file logging.
pub mod logging;
/// TypeScript source parsing.
pub mod parse;
/// Transcript events and edit detection.
pub mod transcript;

use lint::{RuleId, Violation};
use parse::{Dialect, SourceTree};

/// Parse a source string and run every registered rule over it.
///
/// This is the main entry point for tests and embedding callers; the lint
/// hook itself resolves configuration first and runs the active subset.
pub fn lint_source(source: &str, dialect: Dialect) -> Vec<Violation> {
    let Some(tree) = SourceTree::parse(source.to_string(), dialect) else {
        return Vec::new();
    };
    lint::run(&tree, &RuleId::ALL)
}
