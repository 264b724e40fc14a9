//! End-to-end tests for `emojigen picker`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Markup Tests
// ============================================================================

#[test]
fn test_picker_renders_all_tabs_in_order() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "picker should succeed. stderr: {}",
        stderr_of(&output)
    );

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("<div class=\"twemoji-picker\">\n"));
    assert!(stdout.ends_with("</div>\n"));

    // All eight tabs, even the empty ones, in fixed order
    let titles: Vec<usize> = [
        "Smileys &amp; People",
        "Animals &amp; Nature",
        "Food &amp; Drink",
        "Activity",
        "Travel &amp; Places",
        "Objects",
        "Symbols",
        "Flags",
    ]
    .iter()
    .map(|title| {
        stdout
            .find(&format!("title=\"{title}\" role=\"tab\""))
            .unwrap_or_else(|| panic!("missing tab {title}"))
    })
    .collect();
    assert!(titles.windows(2).all(|w| w[0] < w[1]), "tabs out of order");

    assert_eq!(stdout.matches("name=\"tabs\"").count(), 8);
    assert_eq!(stdout.matches(" checked>").count(), 1);
    assert!(stdout.contains("id=\"tab-0\" name=\"tabs\" checked>"));
}

#[test]
fn test_picker_record_markup() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains(
        "<span class=\"em em-people-1f604\" data-c=\"1f604\" data-s=\":smile:\" title=\"grinning face with smiling eyes\" role=\"button\" aria-label=\"grinning face with smiling eyes\">&#x1f604;</span>"
    ));
    // Emoji that need the variation selector get it in the glyph text
    assert!(stdout.contains(">&#x203c;&#xfe0f;</span>"));
    assert!(stdout.contains(">&#x263a;&#xfe0f;</span>"));
    assert!(stdout.contains(">&#x2122;&#xfe0f;</span>"));
    assert!(stdout.contains(">&#x1f1ec;&#x1f1e7;</span>"));
}

#[test]
fn test_picker_prefers_gendered_forms() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);
    let stdout = stdout_of(&output);

    assert!(!stdout.contains("data-c=\"1f46e\""));
    assert!(stdout.contains("data-c=\"1f46e-200d-2642-fe0f\""));
    assert!(stdout.contains("data-c=\"1f46e-200d-2640-fe0f\""));
}

#[test]
fn test_picker_skin_tones() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("data-c=\"1f44d-1f3fd\" data-s=\":thumbsup_tone3:\" data-t=\"3\""));
    assert!(stdout.contains("data-s=\":man_police_officer:\" data-t=\"0\""));

    let strip = &stdout[stdout.find("class=\"skin-tones\"").expect("no tone strip")..];
    for tone in 0..=5 {
        assert!(strip.contains(&format!("<img src=\"img/emoji/tone{tone}.svg\"")));
    }
    assert_eq!(strip.matches("aria-checked=\"true\"").count(), 1);
}

#[test]
fn test_picker_drops_unknown_categories() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout_of(&output).contains("1f1e6"));
}

// ============================================================================
// Option Tests
// ============================================================================

#[test]
fn test_picker_emojione_flavor() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);

    let output = run_emojigen(
        temp_dir.path(),
        &[
            "picker",
            "-i",
            source.to_str().unwrap(),
            "--flavor",
            "emojione",
        ],
    );
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("<div class=\"emojione-picker\">"));
    assert!(stdout.contains("class=\"e1 e1-people _1f604\""));
    assert!(stdout.contains("class=\"e1 e1-people _1f46e-200d-2642-fe0f\""));
    assert!(stdout.contains("class=\"e1 e1-diversity _1f44d-1f3fd\""));
    assert!(stdout.contains("class=\"e1 e1-symbols _203c\" data-c=\"203c-fe0f\""));
}

#[test]
fn test_picker_asset_dir_flag_overrides_config() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);
    let config = write_file(
        temp_dir.path(),
        "config.toml",
        "[picker]\nflavor = \"emojione\"\nasset_dir = \"/from/config\"\n",
    );

    let output = run_emojigen(
        temp_dir.path(),
        &[
            "picker",
            "-i",
            source.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--asset-dir",
            "/static/tones/",
        ],
    );
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    // flavor still comes from the config file
    assert!(stdout.starts_with("<div class=\"emojione-picker\">"));
    assert!(stdout.contains("<img src=\"/static/tones/tone1.svg\""));
    assert!(!stdout.contains("/from/config"));
}

#[test]
fn test_picker_flat_source() {
    let (source, temp_dir) = create_temp_source(FLAT_JSON);

    let output = run_emojigen(
        temp_dir.path(),
        &["picker", "-i", source.to_str().unwrap(), "--format", "flat"],
    );
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout.contains("data-c=\"1f44d\" data-s=\":thumbsup:\" data-t=\"0\""));
    assert!(stdout.contains("data-c=\"1f44d-1f3fb\" data-s=\":thumbsup_tone1:\" data-t=\"1\""));
    assert!(stdout.contains(">&#x2708;&#xfe0f;</span>"));
}

#[test]
fn test_picker_flat_source_emojione_flavor() {
    let (source, temp_dir) = create_temp_source(FLAT_JSON);

    let output = run_emojigen(
        temp_dir.path(),
        &[
            "picker",
            "-i",
            source.to_str().unwrap(),
            "--format",
            "flat",
            "--flavor",
            "emojione",
        ],
    );
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    // Tone variants are classed diversity, their base keeps the category class
    assert!(stdout.contains("class=\"e1 e1-people _1f44d\" data-c=\"1f44d\""));
    assert!(stdout.contains("class=\"e1 e1-diversity _1f44d-1f3fb\" data-c=\"1f44d-1f3fb\""));
    // The first greedy match is used for both the data attribute and the glyph
    assert!(stdout.contains(
        "class=\"e1 e1-symbols _0023-20e3\" data-c=\"0023-fe0f-20e3\" data-s=\":hash:\""
    ));
    assert!(stdout.contains(">&#x23;&#xfe0f;&#x20e3;</span>"));
}

#[test]
fn test_picker_output_file_matches_stdout() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);
    let out_path = temp_dir.path().join("picker.html");

    let to_stdout = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);
    let to_file = run_emojigen(
        temp_dir.path(),
        &[
            "picker",
            "-i",
            source.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ],
    );

    assert_eq!(to_file.status.code(), Some(0));
    assert!(to_file.stdout.is_empty());
    assert_eq!(fs::read_to_string(&out_path).unwrap(), stdout_of(&to_stdout));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_picker_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("missing.json"));
}

#[test]
fn test_picker_malformed_input() {
    let (source, temp_dir) = create_temp_source("{\"people\": [");

    let output = run_emojigen(temp_dir.path(), &["picker", "-i", source.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Failed to parse"));
}

#[test]
fn test_picker_invalid_config() {
    let (source, temp_dir) = create_temp_source(GROUPED_JSON);
    let config = write_file(temp_dir.path(), "config.toml", "[picker]\nasset_dir = \"\"\n");

    let output = run_emojigen(
        temp_dir.path(),
        &[
            "picker",
            "-i",
            source.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid configuration"));
}
