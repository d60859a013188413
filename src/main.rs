//! cc-guardrails: lifecycle hooks for Claude Code.
//!
//! Invoked as `cc-guardrails <hook> [args...]` with one JSON payload on
//! stdin. Hooks:
//!
//!   lint        PostToolUse       convention rules over the edited file
//!   typecheck   Stop              advisory type-check gate
//!   checks      Stop              blocking script gate (-c "lint,test")
//!   stop-words  Stop              banned phrases in the final reply
//!   skills      UserPromptSubmit  mandatory-skill context injection
//!   web-fetch   PreToolUse        gh CLI steering for GitHub URLs
//!
//! Results go back to the host through the exit code (0 pass, 1 advisory,
//! 2 blocking) or a JSON decision on stdout. A failure of the hook binary
//! itself exits 1: automation bugs must never trap the session.

use std::io::Read;

use cc_guardrails::hook::HookInput;
use cc_guardrails::{hooks, logging};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(name) = args.first() else {
        eprintln!("usage: cc-guardrails <hook> [args...]");
        eprintln!("hooks: {}", hook_names().join(", "));
        std::process::exit(1);
    };
    let Some(hook) = hooks::find(name) else {
        eprintln!("unknown hook: {name}");
        eprintln!("hooks: {}", hook_names().join(", "));
        std::process::exit(1);
    };

    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }
    let input: HookInput = match serde_json::from_str(&raw) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            std::process::exit(1);
        }
    };

    let outcome = hook.run(&input, &args[1..]);
    match outcome.reason() {
        Some(reason) => log::debug!(
            "{}: {} ({})",
            hook.name(),
            outcome.label(),
            reason.lines().next().unwrap_or("")
        ),
        None => log::debug!("{}: {}", hook.name(), outcome.label()),
    }
    std::process::exit(outcome.emit());
}

fn hook_names() -> Vec<&'static str> {
    hooks::registry().iter().map(|hook| hook.name()).collect()
}
