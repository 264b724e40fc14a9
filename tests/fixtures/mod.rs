//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Grouped metadata covering text-default, gendered, and skin tone records.
pub const GROUPED_JSON: &str = r#"{
    "people": [
        {"codepoint": "1f604", "name": "grinning face with smiling eyes",
         "shortnames": [":smile:"], "representation": "emoji-default"},
        {"codepoint": "263a", "name": "smiling face",
         "shortnames": [":relaxed:"], "representation": "text-default"},
        {"codepoint": "1f46e", "name": "police officer", "shortnames": [":cop:"],
         "gender": null, "has_skin_tones": true},
        {"codepoint": "1f46e-200d-2642-fe0f", "name": "man police officer",
         "shortnames": [":man_police_officer:"], "gender": "male", "has_skin_tones": true},
        {"codepoint": "1f46e-200d-2640-fe0f", "name": "woman police officer",
         "shortnames": [":woman_police_officer:"], "gender": "female", "has_skin_tones": true},
        {"codepoint": "1f44d-1f3fd", "name": "thumbs up: medium skin tone",
         "shortnames": [":thumbsup_tone3:"], "skin_tone": 3}
    ],
    "symbols": [
        {"codepoint": "203c", "name": "double exclamation mark",
         "shortnames": [":bangbang:"], "representation": "emoji-default"},
        {"codepoint": "2122", "name": "trade mark",
         "shortnames": [":tm:"], "representation": "text-default"}
    ],
    "flags": [
        {"codepoint": "1f1ec-1f1e7", "name": "flag: United Kingdom",
         "shortnames": [":gb:", ":uk:"]}
    ],
    "regional": [
        {"codepoint": "1f1e6", "name": "regional indicator A", "shortnames": [":regional_indicator_a:"]}
    ]
}"#;

/// The same kind of data in the flat, id-keyed layout.
pub const FLAT_JSON: &str = r#"{
    "1f604": {"category": "people", "name": "smile", "shortname": ":smile:",
              "shortname_alternates": [":happy:"],
              "code_points": {"base": "1f604", "fully_qualified": "1f604"}},
    "1f44d": {"category": "people", "name": "thumbs up", "shortname": ":thumbsup:",
              "diversity": null, "diversity_children": ["1f44d-1f3fb"]},
    "1f44d-1f3fb": {"category": "people", "name": "thumbs up tone 1",
                    "shortname": ":thumbsup_tone1:", "diversity": "1f3fb"},
    "2708": {"category": "travel", "name": "airplane", "shortname": ":airplane:",
             "representation": "text-default",
             "code_points": {"base": "2708", "fully_qualified": "2708-fe0f"}},
    "0023-20e3": {"category": "symbols", "name": "keycap: #", "shortname": ":hash:",
                  "code_points": {"base": "0023-20e3", "fully_qualified": "0023-fe0f-20e3",
                                  "greedy_matches": ["0023-fe0f-20e3", "0023-20e3"]}}
}"#;

/// Path to the emojigen binary (set by cargo at compile time)
pub fn emojigen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_emojigen")
}

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Creates a metadata file in a temp directory and returns the path.
pub fn create_temp_source(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(temp_dir.path(), "emoji.json", content);
    (path, temp_dir)
}

/// Runs the binary isolated from the user's config directory.
///
/// The platform config directory is pointed into `home` so a config file on
/// the machine running the tests cannot change the output.
pub fn run_emojigen(home: &Path, args: &[&str]) -> Output {
    Command::new(emojigen_bin())
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Standard output of a run as text.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Standard error of a run as text.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
