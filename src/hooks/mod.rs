//! The hooks themselves, one module per hook, plus the predicates they
//! share. The binary selects a hook by name and hands it the parsed stdin
//! payload; everything a hook decides comes back as a [`HookOutcome`].

/// Project check gate on Stop.
pub mod checks;
/// TypeScript convention lint on Write/Edit.
pub mod lint;
/// Context-skill injection on UserPromptSubmit.
pub mod skills;
/// Stop-word scan of the final assistant message.
pub mod stop_words;
/// Type check gate on Stop.
pub mod typecheck;
/// GitHub URL steering on WebFetch.
pub mod web_fetch;

use std::path::{Path, PathBuf};

use crate::hook::{HookInput, HookOutcome};
use crate::transcript;

/// One lifecycle hook. Implementations are pure decision logic over the
/// parsed input; writing the outcome out is the binary's job.
pub trait Hook: Send + Sync {
    /// Name used on the command line to select this hook.
    fn name(&self) -> &'static str;

    /// Runs the hook. `args` are the command-line arguments after the hook
    /// name; most hooks take none.
    fn run(&self, input: &HookInput, args: &[String]) -> HookOutcome;
}

/// Every registered hook.
pub fn registry() -> Vec<Box<dyn Hook>> {
    vec![
        Box::new(lint::ConventionLint),
        Box::new(typecheck::TypeCheckGate),
        Box::new(checks::ProjectChecksGate),
        Box::new(stop_words::StopWords),
        Box::new(skills::ContextSkills),
        Box::new(web_fetch::WebFetchSteering),
    ]
}

pub fn find(name: &str) -> Option<Box<dyn Hook>> {
    registry().into_iter().find(|hook| hook.name() == name)
}

// ─── Shared predicates ───

/// Extensions treated as TypeScript sources by the Stop-gate scans.
pub const TYPESCRIPT_EXTENSIONS: [&str; 5] = [".ts", ".tsx", ".cts", ".mts", ".astro"];

/// Tools whose calls count as code edits in a transcript.
pub const EDIT_CAPABLE_TOOLS: [&str; 5] = [
    "Edit",
    "Write",
    "mcp__serena__insert_after_symbol",
    "mcp__serena__insert_before_symbol",
    "mcp__serena__replace_symbol_body",
];

/// Prefix of user turns injected by a blocking Stop hook.
pub const STOP_FEEDBACK_MARKER: &str = "Stop hook feedback:";

pub fn is_typescript_file(path: &str) -> bool {
    TYPESCRIPT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

pub fn is_edit_capable_tool(name: &str) -> bool {
    EDIT_CAPABLE_TOOLS.contains(&name)
}

/// Whether this session edited a TypeScript file since the user last spoke.
/// Both Stop gates use this to wave through sessions that touched no code.
pub fn typescript_edited_since_user_turn(input: &HookInput) -> bool {
    let Some(path) = input.transcript_path.as_deref() else {
        return false;
    };
    transcript::has_qualifying_edit(
        Path::new(path),
        is_typescript_file,
        is_edit_capable_tool,
        STOP_FEEDBACK_MARKER,
    )
}

/// The project directory for this invocation.
pub fn cwd(input: &HookInput) -> PathBuf {
    match input.cwd.as_deref() {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("."),
    }
}
