use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

/// Run the binary with `cwd` as working directory and an isolated config home.
fn seqname(home: &TempDir, cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqname"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home.path())
        .env("APPDATA", home.path())
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn bare_invocation_renames_current_directory() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    for name in ["a.txt", "b.txt", "yoga_course_0"] {
        fs::write(work.path().join(name), name).unwrap();
    }

    let output = seqname(&home, work.path(), &[]);
    assert!(output.status.success());

    let mut lines = stdout_lines(&output);
    lines.sort();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with("Renamed: ")));
    assert!(lines.iter().any(|l| l.starts_with("Renamed: a.txt -> yoga_course_")));
    assert!(lines.iter().any(|l| l.starts_with("Renamed: b.txt -> yoga_course_")));

    assert!(work.path().join("yoga_course_0").exists());
    assert!(work.path().join("yoga_course_1").exists());
    assert!(work.path().join("yoga_course_2").exists());
}

#[test]
fn missing_directory_prints_message_and_succeeds() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();

    let output = seqname(&home, work.path(), &["rename", "no-such-dir"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["The repo no-such-dir does not exist.".to_string()]
    );
}

#[test]
fn dry_run_prints_plan_only() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    fs::write(work.path().join("only.mov"), "").unwrap();

    let output = seqname(&home, work.path(), &["rename", "--prefix", "clip_", "--dry-run"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Would rename: only.mov -> clip_0".to_string()]
    );
    assert!(work.path().join("only.mov").exists());
}

#[test]
fn json_mode_prints_envelope() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    fs::write(work.path().join("x"), "").unwrap();
    fs::create_dir(work.path().join("sub")).unwrap();

    let output = seqname(&home, work.path(), &["--json", "rename", ".", "-p", "n"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["status"], "completed");
    assert_eq!(value["data"]["renamed"][0]["from"], "x");
    assert_eq!(value["data"]["renamed"][0]["to"], "n0");
    assert_eq!(value["data"]["skipped"][0]["reason"], "not_a_file");
    assert_eq!(value["data"]["applied"], true);
}

#[test]
fn configured_defaults_apply_to_bare_invocation() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    fs::write(work.path().join("keep.md"), "").unwrap();
    fs::write(work.path().join("take.mov"), "").unwrap();

    let set_prefix = seqname(&home, work.path(), &["config", "set", "/defaults/prefix", "ep_"]);
    assert!(set_prefix.status.success());
    let set_exclude = seqname(
        &home,
        work.path(),
        &["config", "set", "/defaults/exclude", "[\"*.md\"]"],
    );
    assert!(set_exclude.status.success());

    let output = seqname(&home, work.path(), &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Renamed: take.mov -> ep_0".to_string()]
    );
    assert!(work.path().join("keep.md").exists());
}

#[test]
fn config_set_rejects_mistyped_value() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();

    let output = seqname(&home, work.path(), &["config", "set", "/defaults/prefix", "7"]);

    assert_eq!(output.status.code(), Some(2));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "config.invalid_value");
}

#[test]
fn dollar_in_directory_name_is_literal() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    let clips = work.path().join("clips$2024");
    fs::create_dir(&clips).unwrap();
    fs::write(clips.join("a.txt"), "").unwrap();

    let output = seqname(&home, work.path(), &["rename", "clips$2024", "-p", "n"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Renamed: a.txt -> n0".to_string()]
    );
    assert!(clips.join("n0").exists());
}

#[test]
fn missing_directory_with_dollar_prints_message() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();

    let output = seqname(
        &home,
        work.path(),
        &["rename", "$SEQNAME_UNDEFINED_VAR/x"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["The repo $SEQNAME_UNDEFINED_VAR/x does not exist.".to_string()]
    );
}

#[cfg(unix)]
#[test]
fn failed_rename_exits_20_and_keeps_progress_lines() {
    let home = tempdir().unwrap();
    let work = tempdir().unwrap();

    // 254-byte prefix: "<prefix>9" fits in 255 bytes, "<prefix>10" does not.
    let prefix = "p".repeat(254);
    for n in 0..9 {
        fs::write(work.path().join(format!("{}{}", prefix, n)), "").unwrap();
    }
    fs::write(work.path().join("a.txt"), "").unwrap();
    fs::write(work.path().join("b.txt"), "").unwrap();

    let output = seqname(&home, work.path(), &["rename", ".", "-p", &prefix]);

    assert_eq!(output.status.code(), Some(20));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(&format!(" -> {}9", prefix)));
    assert!(lines[0].starts_with("Renamed: "));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[rename.failed]"));
    assert!(work.path().join(format!("{}9", prefix)).exists());
}
