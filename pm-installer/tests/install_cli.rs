use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pm_install() -> Command {
    let mut cmd = Command::cargo_bin("pm-install").unwrap();
    cmd.env("LOG_OUTPUT", "off");
    cmd
}

#[test]
fn help_lists_mode_flags() {
    pm_install()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cpu"))
        .stdout(predicate::str::contains("--gpu"))
        .stdout(predicate::str::contains("--clean"));
}

#[test]
fn missing_python_override_fails_before_changes() {
    let temp_dir = TempDir::new().unwrap();

    pm_install()
        .env("PM_PYTHON", "/definitely/not/a/python")
        .args(["--cpu", "--root"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Python was not found"));

    assert!(!temp_dir.path().join("ComfyUI").exists());
}

#[test]
fn unknown_flag_is_rejected() {
    pm_install().arg("--turbo").assert().failure();
}
