use prism_cli::config::PrismConfig;
use prism_cli::{cli, config_path, run};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const REQUEST: &str = r#"{
    "basePrompt": {"objects": "a teapot", "lighting": "flat", "mood": "quiet"},
    "lockedAxes": ["style"],
    "variationSettings": [
        {"axis": "lighting", "options": ["dramatic", "soft natural"]},
        {"axis": "mood", "options": ["calm", "energetic"]}
    ],
    "count": 3
}"#;

#[test]
fn test_linearize_target() {
    let file = write_temp(r#"{"objects": "a teapot", "expression": "N/A", "mood": "quiet"}"#);
    let path = file.path().to_str().unwrap();
    let matches = cli().get_matches_from(["prism", "linearize", "--description", path, "--target", "dalle"]);
    let out = run(&matches, &PrismConfig::default()).unwrap();
    assert_eq!(out, "Create an image: a teapot. quiet");
}

#[test]
fn test_vary_is_reproducible_with_seed() {
    let file = write_temp(REQUEST);
    let path = file.path().to_str().unwrap();
    let args = ["prism", "vary", "--request", path, "--seed", "11"];

    let first: serde_json::Value =
        serde_json::from_str(&run(&cli().get_matches_from(args), &PrismConfig::default()).unwrap()).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(&run(&cli().get_matches_from(args), &PrismConfig::default()).unwrap()).unwrap();

    let changelogs = |v: &serde_json::Value| -> Vec<serde_json::Value> {
        v["variations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|variant| variant["changelog"].clone())
            .collect()
    };
    assert_eq!(changelogs(&first).len(), 3);
    assert_eq!(changelogs(&first), changelogs(&second));
}

#[test]
fn test_config_limit_applies() {
    let config_file = write_temp("log_filter = \"warn\"\n[engine]\nmax_combinations = 2\n");
    let request = write_temp(REQUEST);
    let matches = cli().get_matches_from([
        "prism",
        "--config",
        config_file.path().to_str().unwrap(),
        "vary",
        "--request",
        request.path().to_str().unwrap(),
    ]);
    let config = PrismConfig::load(config_path(&matches)).unwrap();
    assert_eq!(config.log_filter, "warn");

    let err = run(&matches, &config).unwrap_err();
    assert!(err.to_string().contains("exceeds limit of 2"));
}

#[test]
fn test_all_locked_is_an_error() {
    let request = write_temp(
        r#"{"base": {}, "lockedAxes": ["mood"], "variationSettings": [{"axis": "mood", "options": ["calm"]}]}"#,
    );
    let matches = cli().get_matches_from(["prism", "vary", "--request", request.path().to_str().unwrap()]);
    let err = run(&matches, &PrismConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "all variation axes are locked");
}

#[test]
fn test_export_csv_into_directory() {
    let snapshot = r#"{
        "id": "6f1c1b8e-2b51-4c0f-9a57-0c8e4f0a9b11",
        "name": "Teapot lighting",
        "createdAt": "2025-05-05T10:00:00Z",
        "baseImage": "teapot.png",
        "basePrompt": {
            "structured": {"objects": "a teapot"},
            "fullPrompt": "a teapot",
            "modelSpecific": {"midjourney": "", "stableDiffusion": "", "dalle": ""}
        },
        "variations": [{
            "id": "01HZY3J8Q4D5V6W7X8Y9Z0ABCD",
            "name": "Variation 1",
            "changedAxes": {"lighting": "neon"},
            "modifiedPrompt": "a teapot. neon lighting",
            "changelog": ["lighting: neon"]
        }],
        "tags": []
    }"#;
    let file = write_temp(snapshot);
    let dir = tempdir().unwrap();
    let matches = cli().get_matches_from([
        "prism",
        "export",
        "--experiment",
        file.path().to_str().unwrap(),
        "--format",
        "csv",
        "--output",
        dir.path().to_str().unwrap(),
    ]);
    let written = run(&matches, &PrismConfig::default()).unwrap();
    assert!(written.contains("Teapot_lighting_"));
    assert!(written.ends_with(".csv"));

    let contents = std::fs::read_to_string(&written).unwrap();
    assert_eq!(
        contents,
        "\"Name\",\"Prompt\",\"Changes\"\n\"Base\",\"a teapot\",\"-\"\n\"Variation 1\",\"a teapot. neon lighting\",\"lighting: neon\""
    );
}

#[test]
fn test_presets_command() {
    let out = run(&cli().get_matches_from(["prism", "presets"]), &PrismConfig::default()).unwrap();
    assert!(out.contains("lighting"));
    assert!(out.contains("stable-diffusion"));
}
