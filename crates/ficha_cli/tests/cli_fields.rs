use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "{prefix}_{}_{nanos}.{extension}",
        std::process::id()
    ))
}

fn write_selection(prefix: &str, json: &str) -> PathBuf {
    let path = temp_path(prefix, "json");
    fs::write(&path, json).expect("should write selection fixture");
    path
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ficha"))
        .args(args)
        .output()
        .expect("failed to run ficha CLI")
}

const ELF_WIZARD: &str = r#"{
    "name": "Mirala",
    "species": "elf",
    "class": "wizard",
    "background": "sage",
    "level": 3,
    "abilities": {
        "strength": 8,
        "dexterity": 14,
        "constitution": 12,
        "intelligence": 15,
        "wisdom": 13,
        "charisma": 10
    },
    "known_spells": ["Magic Missile", "Shield"]
}"#;

#[test]
fn cli_prints_single_ac_field() {
    let path = write_selection("ficha_ac", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--ac", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Elf grants +2 DEX: 14 -> 16, so AC = 10 + 3.
    assert_eq!(stdout.trim(), "ac=13");

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_prints_multiple_requested_fields_in_fixed_order() {
    let path = write_selection("ficha_multi", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--max-hp", "--initiative", "--level", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["level=3", "max_hp=7", "initiative=+3"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_prices_the_point_buy() {
    let path = write_selection("ficha_points", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--points", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    // 8+14+12+15+13+10 costs 0+7+4+9+5+2 = 27.
    assert_eq!(
        lines,
        vec!["points_budget=27", "points_spent=27", "points_remaining=0"]
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_overspent_budget_is_reported_not_rejected() {
    let path = write_selection(
        "ficha_overspent",
        r#"{"name": "Max", "abilities": {"strength": 15, "dexterity": 15, "constitution": 15, "intelligence": 15, "wisdom": 15, "charisma": 15}}"#,
    );
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--points", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("points_spent=54"));
    assert!(stdout.contains("points_remaining=-27"));

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_lists_skills_with_proficiency_marks() {
    let path = write_selection("ficha_skills", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--skills", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Sage grants Arcana: INT 15 mod +2, plus proficiency +2.
    assert!(stdout.contains("skill=Arcana=+4 [Proficient]"));
    assert!(stdout.contains("skill=Athletics=-1\n"));

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_without_field_flags_prints_the_text_sheet() {
    let path = write_selection("ficha_sheet", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&[&path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mirala"));
    assert!(stdout.contains("Elf | Wizard 3 | Sage"));
    assert!(stdout.contains("Spellcasting"));

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_outputs_selected_fields_as_json() {
    let path = write_selection("ficha_json_sel", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--json", "--name", "--ac", "--level", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["name"], "Mirala");
    assert_eq!(json["armor_class"], 13);
    assert_eq!(json["level"], 3);
    assert!(json.get("skills").is_none());

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_outputs_default_json_in_expected_order() {
    let path = write_selection("ficha_json_full", ELF_WIZARD);
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--json", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    let keys: Vec<&str> = json
        .as_object()
        .expect("top-level JSON should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "name",
            "species",
            "class",
            "background",
            "level",
            "abilities",
            "point_buy",
            "proficiency_bonus",
            "armor_class",
            "max_hit_points",
            "initiative",
            "passive_perception",
            "speed",
            "skills",
            "spells",
            "languages",
            "traits",
            "features",
            "equipment",
            "biography",
        ]
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_tolerates_unknown_catalog_ids() {
    let path = write_selection(
        "ficha_unknown_ids",
        r#"{"name": "Zed", "species": "gnome", "class": "bard"}"#,
    );
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--species", "--ac", "--max-hp", &path_s]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["species=none", "ac=10", "max_hp=8"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_rejects_missing_selection_file() {
    let output = run_cli(&["--ac", "/nonexistent/ficha_selection.json"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading"));
}

#[test]
fn cli_rejects_malformed_selection_json() {
    let path = write_selection("ficha_malformed", "{ not json");
    let path_s = path.to_string_lossy().to_string();
    let output = run_cli(&["--ac", &path_s]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing selection file"));

    let _ = fs::remove_file(&path);
}
