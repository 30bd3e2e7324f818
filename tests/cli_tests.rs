//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with an isolated, empty config directory
fn notificator_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notificator").expect("binary builds");
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("NOTIFICATOR_ICON")
        .env_remove("NOTIFICATOR_APP_NAME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notification"))
        .stdout(predicate::str::contains("--sound"))
        .stdout(predicate::str::contains("--icon"))
        .stdout(predicate::str::contains("--urgency"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notificator"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn dry_run_linux_normal_with_sound() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args([
            "--dry-run",
            "--platform",
            "linux",
            "--default-icon",
            "default.png",
            "--sound",
            "T",
            "body",
        ])
        .assert()
        .success()
        .stdout(
            "notify-send -i default.png -h string:sound-name:message-new-instant -- T body\n",
        );
}

#[test]
fn dry_run_linux_critical_with_icon_override() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args([
            "--dry-run",
            "--platform",
            "linux",
            "--default-icon",
            "default.png",
            "--icon",
            "custom.png",
            "--urgency",
            "critical",
            "T",
            "body",
        ])
        .assert()
        .success()
        .stdout("notify-send -i custom.png -u critical -- T body\n");
}

#[test]
fn dry_run_windows_json() {
    let home = TempDir::new().unwrap();
    let output = notificator_bin(&home)
        .args([
            "--dry-run",
            "--json",
            "--platform",
            "windows",
            "--default-icon",
            "icon.png",
            "Title",
            "Some text",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["program"], "growlnotify");
    assert_eq!(value["args"][0], "/i:icon.png");
    assert_eq!(value["args"][1], "/t:Title");
    assert_eq!(value["args"][2], "Some text");
}

#[test]
fn dry_run_reads_default_icon_from_env() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .env("NOTIFICATOR_ICON", "env.png")
        .args(["--dry-run", "--platform", "linux", "T", "body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-i env.png"));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notificator"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    notificator_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
#[cfg(target_os = "linux")]
fn config_file_values_feed_dry_run() {
    let home = TempDir::new().unwrap();

    notificator_bin(&home)
        .args(["config", "set", "default_icon", "from-config.png"])
        .assert()
        .success();
    notificator_bin(&home)
        .args(["config", "set", "urgency", "critical"])
        .assert()
        .success();

    notificator_bin(&home)
        .args(["--dry-run", "--platform", "linux", "T", "body"])
        .assert()
        .success()
        .stdout("notify-send -i from-config.png -u critical -- T body\n");
}

#[test]
#[cfg(target_os = "linux")]
fn no_sound_overrides_config_file() {
    let home = TempDir::new().unwrap();

    notificator_bin(&home)
        .args(["config", "set", "sound", "true"])
        .assert()
        .success();

    notificator_bin(&home)
        .args(["--dry-run", "--platform", "linux", "--default-icon", "i.png", "T", "body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("string:sound-name"));

    notificator_bin(&home)
        .args([
            "--dry-run",
            "--platform",
            "linux",
            "--default-icon",
            "i.png",
            "--no-sound",
            "T",
            "body",
        ])
        .assert()
        .success()
        .stdout("notify-send -i i.png -- T body\n");
}
