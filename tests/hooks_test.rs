#![cfg(unix)]

mod utils;

use flint::generator::GenerationContext;
use flint::hooks::{hook_env, run_hooks, HookOutcome, ScriptExecutor, ShellExecutor};
use flint::resolver::InputMap;
use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tempfile::TempDir;
use utils::write;

/// Records every script it is asked to run and reports success.
#[derive(Default)]
struct RecordingExecutor {
    calls: RefCell<Vec<(PathBuf, Vec<(String, String)>)>>,
}

impl ScriptExecutor for RecordingExecutor {
    fn execute(
        &self,
        script: &Path,
        _working_dir: &Path,
        envs: &[(String, String)],
    ) -> std::io::Result<ExitStatus> {
        self.calls.borrow_mut().push((script.to_path_buf(), envs.to_vec()));
        Ok(ExitStatus::from_raw(0))
    }
}

fn context() -> GenerationContext {
    let inputs: InputMap = [("project", "demo"), ("author name", "Jane")].into_iter().collect();
    GenerationContext { output_root: PathBuf::from("/tmp/out"), force: false, inputs }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_hook_env() {
    let envs = hook_env(&context());
    assert_eq!(
        envs,
        vec![
            ("FLINT_OUTPUT_PATH".to_string(), "/tmp/out".to_string()),
            ("FLINT_project".to_string(), "demo".to_string()),
            ("FLINT_author_name".to_string(), "Jane".to_string()),
        ]
    );
}

#[test]
fn test_hooks_run_in_order_and_missing_ones_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write(&temp_dir.path().join("second.sh"), "true\n");
    write(&temp_dir.path().join("first.sh"), "true\n");

    let executor = RecordingExecutor::default();
    let outcomes = run_hooks(
        &names(&["second.sh", "gone.sh", "first.sh"]),
        temp_dir.path(),
        temp_dir.path(),
        &context(),
        &executor,
    );

    assert_eq!(
        outcomes,
        vec![
            ("second.sh".to_string(), HookOutcome::Succeeded),
            ("gone.sh".to_string(), HookOutcome::Missing),
            ("first.sh".to_string(), HookOutcome::Succeeded),
        ]
    );
    let calls = executor.calls.borrow();
    let scripts: Vec<PathBuf> = calls.iter().map(|(script, _)| script.clone()).collect();
    assert_eq!(
        scripts,
        vec![temp_dir.path().join("second.sh"), temp_dir.path().join("first.sh")]
    );
    assert!(calls[0].1.contains(&("FLINT_project".to_string(), "demo".to_string())));
}

#[test]
fn test_failing_hook_does_not_stop_the_rest() {
    let temp_dir = TempDir::new().unwrap();
    let marker = temp_dir.path().join("marker");
    write(&temp_dir.path().join("fail.sh"), "exit 7\n");
    write(
        &temp_dir.path().join("ok.sh"),
        &format!("echo \"$FLINT_author_name\" > '{}'\n", marker.display()),
    );

    let outcomes = run_hooks(
        &names(&["fail.sh", "ok.sh"]),
        temp_dir.path(),
        temp_dir.path(),
        &context(),
        &ShellExecutor::new(),
    );

    assert_eq!(outcomes[0].1, HookOutcome::Failed(Some(7)));
    assert_eq!(outcomes[1].1, HookOutcome::Succeeded);
    assert_eq!(std::fs::read_to_string(marker).unwrap(), "Jane\n");
}

#[test]
fn test_hooks_run_from_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    write(&temp_dir.path().join("include/data.txt"), "shared\n");
    write(
        &temp_dir.path().join("prehooks/copy.sh"),
        "cp include/data.txt \"$FLINT_OUTPUT_PATH\"\n",
    );
    let output_dir = TempDir::new().unwrap();
    let context = GenerationContext {
        output_root: output_dir.path().to_path_buf(),
        force: false,
        inputs: InputMap::default(),
    };

    let outcomes = run_hooks(
        &names(&["copy.sh"]),
        &temp_dir.path().join("prehooks"),
        temp_dir.path(),
        &context,
        &ShellExecutor::new(),
    );

    assert_eq!(outcomes[0].1, HookOutcome::Succeeded);
    assert_eq!(
        std::fs::read_to_string(output_dir.path().join("data.txt")).unwrap(),
        "shared\n"
    );
}
