//! Stop-gate project checks: run the package scripts named with `-c`
//! before the agent stops, and block the stop until they pass.
//!
//! This is the strict sibling of the typecheck gate. The scripts are the
//! project's own quality bar (`lint`, `test`, ...), so a failure sends the
//! agent back to fix the code rather than just warning the user.

use crate::gate::{CheckCommand, GatePolicy};
use crate::hook::{HookInput, HookOutcome};
use crate::hooks::{self, Hook};

/// Scripts run through `bun run <name>`.
const RUNNER: &str = "bun";

const POLICY: GatePolicy = GatePolicy::Blocking;

/// Characters rejected in script names. Names are passed to the runner as
/// single arguments and never reach a shell; a name carrying shell syntax
/// is a misconfiguration worth reporting, not escaping.
const FORBIDDEN: [char; 9] = [';', '|', '&', '$', '`', '<', '>', '(', ')'];

pub struct ProjectChecksGate;

impl Hook for ProjectChecksGate {
    fn name(&self) -> &'static str {
        "checks"
    }

    fn run(&self, input: &HookInput, args: &[String]) -> HookOutcome {
        // A blocking Stop hook firing again while its own feedback is being
        // worked off would loop forever.
        if input.stop_hook_active {
            return HookOutcome::Success(None);
        }
        let scripts = match parse_scripts(args) {
            Ok(scripts) => scripts,
            Err(bad) => {
                return HookOutcome::NonBlocking(format!("checks: invalid script name '{bad}'"));
            }
        };
        if scripts.is_empty() {
            return HookOutcome::Success(None);
        }
        if !hooks::typescript_edited_since_user_turn(input) {
            return HookOutcome::Success(None);
        }

        let cwd = hooks::cwd(input);
        let mut failures = Vec::new();
        for script in &scripts {
            let command = CheckCommand {
                program: RUNNER.to_string(),
                args: vec!["run".to_string(), script.clone()],
            };
            let result = command.run(&cwd);
            if !result.passed() {
                failures.push(format!(
                    "'{RUNNER} run {script}' failed (exit {}):\n{}",
                    result.code,
                    result.full_output(),
                ));
            }
        }
        if failures.is_empty() {
            return HookOutcome::Success(Some(format!(
                "All checks passed: {}",
                scripts.join(", ")
            )));
        }
        POLICY.failure(failures.join("\n\n"))
    }
}

/// Extracts the script list from `-c <names>` / `-c=<names>`. Names are
/// comma-separated; blanks between commas are dropped. One bad name fails
/// the whole parse so a typo cannot silently skip half the gate.
fn parse_scripts(args: &[String]) -> Result<Vec<String>, String> {
    let Some(raw) = flag_value(args, "-c") else {
        return Ok(Vec::new());
    };
    let mut scripts = Vec::new();
    for name in raw.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if name
            .chars()
            .any(|c| c.is_whitespace() || FORBIDDEN.contains(&c))
        {
            return Err(name.to_string());
        }
        scripts.push(name.to_string());
    }
    Ok(scripts)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().map(String::as_str);
        }
        if let Some(rest) = arg.strip_prefix(flag)
            && let Some(value) = rest.strip_prefix('=')
        {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn reads_the_separate_flag_form() {
        let args = strings(&["-c", "lint,test"]);
        assert_eq!(flag_value(&args, "-c"), Some("lint,test"));
    }

    #[test]
    fn reads_the_equals_flag_form() {
        let args = strings(&["-c=lint"]);
        assert_eq!(flag_value(&args, "-c"), Some("lint"));
    }

    #[test]
    fn missing_flag_or_value_yields_none() {
        assert_eq!(flag_value(&strings(&[]), "-c"), None);
        assert_eq!(flag_value(&strings(&["-x", "y"]), "-c"), None);
        assert_eq!(flag_value(&strings(&["-c"]), "-c"), None);
    }

    #[test]
    fn splits_comma_separated_scripts() {
        let scripts = parse_scripts(&strings(&["-c", "lint,test,build"])).unwrap();
        assert_eq!(scripts, vec!["lint", "test", "build"]);
    }

    #[test]
    fn trims_and_drops_blank_segments() {
        let scripts = parse_scripts(&strings(&["-c", " lint , ,test, "])).unwrap();
        assert_eq!(scripts, vec!["lint", "test"]);
    }

    #[test]
    fn no_flag_means_no_scripts() {
        assert_eq!(parse_scripts(&strings(&[])).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn rejects_names_with_whitespace() {
        assert_eq!(
            parse_scripts(&strings(&["-c", "lint build"])),
            Err("lint build".to_string())
        );
    }

    #[test]
    fn rejects_names_with_shell_syntax() {
        for bad in ["lint;rm", "a|b", "x$HOME", "a&&b", "run(x)"] {
            let args = strings(&["-c", bad]);
            assert!(parse_scripts(&args).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn colon_scoped_script_names_are_fine() {
        let scripts = parse_scripts(&strings(&["-c", "lint:fix,test:unit"])).unwrap();
        assert_eq!(scripts, vec!["lint:fix", "test:unit"]);
    }

    #[test]
    fn nested_stop_event_passes_through() {
        let input = HookInput {
            stop_hook_active: true,
            ..HookInput::default()
        };
        let outcome = ProjectChecksGate.run(&input, &strings(&["-c", "lint"]));
        assert_eq!(outcome, HookOutcome::Success(None));
    }

    #[test]
    fn no_configured_scripts_passes_through() {
        let outcome = ProjectChecksGate.run(&HookInput::default(), &[]);
        assert_eq!(outcome, HookOutcome::Success(None));
    }

    #[test]
    fn invalid_name_warns_without_blocking() {
        let outcome = ProjectChecksGate.run(&HookInput::default(), &strings(&["-c", "rm -rf"]));
        assert_eq!(
            outcome,
            HookOutcome::NonBlocking("checks: invalid script name 'rm -rf'".into())
        );
    }

    #[test]
    fn no_typescript_edits_skips_the_scripts() {
        // No transcript at all: the scan finds nothing, the gate stays shut.
        let outcome = ProjectChecksGate.run(&HookInput::default(), &strings(&["-c", "lint"]));
        assert_eq!(outcome, HookOutcome::Success(None));
    }
}
