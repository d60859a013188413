//! Stop-gate type check: when the session edited TypeScript since the last
//! user turn, run the project's type checker before the agent stops.
//!
//! The gate is advisory. A blocking gate would re-prompt the agent until
//! the tree type-checks, which punishes sessions that inherited someone
//! else's type errors; a warning in the user's lap is enough.

use crate::gate::{CheckCommand, GatePolicy};
use crate::hook::{HookInput, HookOutcome};
use crate::hooks::{self, Hook};

const DEFAULT_COMMAND: &str = "npx tsc --noEmit";

const POLICY: GatePolicy = GatePolicy::Advisory;

pub struct TypeCheckGate;

impl Hook for TypeCheckGate {
    fn name(&self) -> &'static str {
        "typecheck"
    }

    fn run(&self, input: &HookInput, args: &[String]) -> HookOutcome {
        if !hooks::typescript_edited_since_user_turn(input) {
            return HookOutcome::Success(None);
        }
        let Some(command) = command_from_args(args) else {
            return HookOutcome::Success(None);
        };
        let result = command.run(&hooks::cwd(input));
        if result.passed() {
            return HookOutcome::Success(Some(format!(
                "Type check passed: {}",
                command.display()
            )));
        }
        POLICY.failure(format!(
            "Type check failed (exit {}). Run '{}' locally.\n{}",
            result.code,
            command.display(),
            result.output(),
        ))
    }
}

/// The checker to run: the default, or whatever the settings entry put
/// after the hook name. One argument is treated as a full command line and
/// split; several are taken as program plus arguments verbatim.
fn command_from_args(args: &[String]) -> Option<CheckCommand> {
    match args {
        [] => CheckCommand::from_line(DEFAULT_COMMAND),
        [line] => CheckCommand::from_line(line),
        [program, rest @ ..] => Some(CheckCommand {
            program: program.clone(),
            args: rest.to_vec(),
        }),
    }
}
