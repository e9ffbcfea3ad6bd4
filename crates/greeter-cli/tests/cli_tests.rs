//! End-to-end tests for the `greeter` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `greeter` isolated from the caller's environment: no `RUST_LOG`, no
/// `GREETER_*` overrides, no `.env`, and an empty per-user config dir.
fn greeter(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greeter").unwrap();
    cmd.current_dir(home.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("GREETER_OUTPUT__TARGET")
        .env_remove("GREETER_OUTPUT__FILE")
        .env_remove("GREETER_OUTPUT__NO_COLOR")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

#[test]
fn greets_alice() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("Alice")
        .assert()
        .success()
        .stdout("Hello, Alice!\n")
        .stderr("");
}

#[test]
fn empty_name_is_rejected() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("")
        .assert()
        .code(1)
        .stdout("")
        .stderr("Error: Person name cannot be empty\nPlease provide a valid name.\n");
}

#[test]
fn no_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("<name>"))
        .stderr(predicate::str::contains("Alice"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .args(["Alice", "Bob"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Usage:"));
}

#[test]
fn over_long_name_is_rejected() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("x".repeat(101))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("exceeds maximum length of 100"))
        .stderr(predicate::str::contains("valid name"));
}

#[test]
fn spaces_are_preserved() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("Bob Smith")
        .assert()
        .success()
        .stdout("Hello, Bob Smith!\n");
}

#[test]
fn hundred_characters_is_accepted() {
    let home = TempDir::new().unwrap();
    let name = "y".repeat(100);
    greeter(&home)
        .arg(&name)
        .assert()
        .success()
        .stdout(format!("Hello, {name}!\n"));
}

#[test]
fn unicode_name_is_greeted() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("Zoë")
        .assert()
        .success()
        .stdout("Hello, Zoë!\n");
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .args(["-vv", "--no-color", "Alice"])
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn env_redirects_greeting_to_stderr() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .env("GREETER_OUTPUT__TARGET", "stderr")
        .arg("Alice")
        .assert()
        .success()
        .stdout("")
        .stderr("Hello, Alice!\n");
}

#[test]
fn config_file_sets_target() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("greeter.toml");
    std::fs::write(&config, "[output]\ntarget = \"stderr\"\n").unwrap();

    greeter(&home)
        .arg("--config")
        .arg(&config)
        .arg("Alice")
        .assert()
        .success()
        .stdout("")
        .stderr("Hello, Alice!\n");
}

#[test]
fn config_file_appends_to_output_file() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("greetings.log");
    let config = home.path().join("greeter.toml");
    std::fs::write(
        &config,
        format!("[output]\nfile = {:?}\n", log.display().to_string()),
    )
    .unwrap();

    for name in ["Alice", "Bob"] {
        greeter(&home)
            .args(["-c", config.to_str().unwrap(), name])
            .assert()
            .success()
            .stdout("");
    }

    assert_eq!(
        std::fs::read_to_string(log).unwrap(),
        "Hello, Alice!\nHello, Bob!\n"
    );
}

#[test]
fn missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .args(["--config", "does-not-exist.toml", "Alice"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: Configuration error"))
        .stderr(predicate::str::ends_with("A system error occurred.\n"));
}

#[test]
fn unwritable_output_file_is_a_system_error() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .env(
            "GREETER_OUTPUT__FILE",
            home.path().join("missing").join("out.log"),
        )
        .arg("Alice")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot open output file"))
        .stderr(predicate::str::contains("A system error occurred."));
}

#[test]
fn hyphenated_name_is_greeted() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("-x")
        .assert()
        .success()
        .stdout("Hello, -x!\n")
        .stderr("");
}

#[test]
fn flag_lookalike_name_after_double_dash() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .args(["--", "-v"])
        .assert()
        .success()
        .stdout("Hello, -v!\n");
}

#[test]
fn unknown_long_word_before_name_is_extra_argument() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .args(["--shout", "Alice"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Usage:"));
}

#[test]
fn multibyte_name_over_byte_limit_is_rejected() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("世".repeat(60))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("exceeds maximum length"));
}

#[test]
fn missing_name_wins_over_bad_config() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .args(["--config", "nope.toml"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Usage:"))
        .stderr(predicate::str::contains("Configuration").not());
}

#[test]
fn missing_name_does_not_create_output_file() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("greetings.log");

    greeter(&home)
        .env("GREETER_OUTPUT__FILE", &log)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Usage:"));

    assert!(!log.exists());
}

#[test]
fn clap_error_exits_with_one() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("--config")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn help_exits_with_zero() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"));
}

#[test]
fn version_exits_with_zero() {
    let home = TempDir::new().unwrap();
    greeter(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
