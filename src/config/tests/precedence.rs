//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"export_format": "xlsx"})),
        ("file", json!({"export_format": "csv"})),
    ],
    "export_format",
    "csv",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![
        ("file", json!({"stopword_language": "english"})),
        ("environment", json!({"stopword_language": "german"})),
    ],
    "stopword_language",
    "german",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"sentiment": "negative"})),
        ("cli", json!({"sentiment": "positive"})),
    ],
    "sentiment",
    "positive",
    "CLI should override environment"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "export_format" => config.export_format.as_deref(),
        "stopword_language" => config.stopword_language.as_deref(),
        "sentiment" => config.sentiment.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn cli_inputs_override_file_inputs() {
    let config = build_config_from_layers(&[
        ("file", json!({"inputs": ["file-a.csv", "file-b.csv"]})),
        ("cli", json!({"inputs": ["cli.csv"]})),
    ]);

    assert_eq!(
        config.inputs,
        vec![camino::Utf8PathBuf::from("cli.csv")],
        "CLI input list should replace the file layer's list"
    );
}

#[rstest]
fn numeric_fields_keep_their_defaults_when_no_layer_sets_them() {
    let config = build_config_from_layers(&[("file", json!({"export_format": "csv"}))]);

    assert_eq!(config.export_row_cap, 250_000);
    assert_eq!(config.cloud_words, 20);
    assert_eq!(config.cloud_width, 800);
    assert_eq!(config.cloud_height, 500);
}
