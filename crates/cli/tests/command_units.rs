use std::fs;
use std::path::PathBuf;

use dep_filter::commands::{filter_command, inspect_command, show_config_command, ConfigFormat};
use dep_filter::{resolve_config, ConfigOverrides};
use depfilter_core::config::FilterConfig;
use tempfile::tempdir;

const GRAPH: &str = "digraph G {\n\"node1\" [label = \"hardware_uart\"];\n\"node2\" [label = \"app\"];\n\"node1\" -> \"node2\";\n}\n";

#[test]
fn resolve_config_defaults_without_overrides() {
    let config = resolve_config(&ConfigOverrides::default()).expect("resolve");
    assert_eq!(config, FilterConfig::default());
}

#[test]
fn deny_overrides_extend_configured_prefixes() {
    let overrides = ConfigOverrides {
        deny: vec!["vendor_".into(), "pico_".into()],
        ..ConfigOverrides::default()
    };
    let config = resolve_config(&overrides).expect("resolve");
    assert_eq!(config.deny_prefixes.len(), 7);
    assert_eq!(config.deny_prefixes.last().map(String::as_str), Some("vendor_"));
}

#[test]
fn replace_denylist_uses_only_given_prefixes() {
    let overrides = ConfigOverrides {
        deny: vec!["vendor_".into()],
        replace_denylist: true,
        ..ConfigOverrides::default()
    };
    let config = resolve_config(&overrides).expect("resolve");
    assert_eq!(config.deny_prefixes, ["vendor_"]);
}

#[test]
fn path_overrides_win_over_config_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("filter.yaml");
    fs::write(&config_path, "input: a.dot\noutput: b.dot\n").expect("write config");

    let overrides = ConfigOverrides {
        config: Some(config_path),
        output: Some(PathBuf::from("c.dot")),
        ..ConfigOverrides::default()
    };
    let config = resolve_config(&overrides).expect("resolve");
    assert_eq!(config.input, PathBuf::from("a.dot"));
    assert_eq!(config.output, PathBuf::from("c.dot"));
}

#[test]
fn resolve_config_errors_when_config_missing() {
    let dir = tempdir().expect("tempdir");
    let overrides = ConfigOverrides {
        config: Some(dir.path().join("nope.json")),
        ..ConfigOverrides::default()
    };
    let err = resolve_config(&overrides).unwrap_err();
    assert!(err.to_string().contains("Failed to read filter config"), "unexpected error: {err}");
}

#[test]
fn filter_command_writes_output_and_returns_summary() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in.dot");
    let output = dir.path().join("out.dot");
    fs::write(&input, GRAPH).expect("write input");

    let overrides = ConfigOverrides {
        input: Some(input),
        output: Some(output.clone()),
        ..ConfigOverrides::default()
    };
    let summary = filter_command(&overrides, false).expect("filter");
    assert_eq!(summary.nodes_kept, 1);
    assert_eq!(summary.edges_dropped_denied, 1);
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "digraph G {\n\"node2\" [label = \"app\"];\n\n}"
    );
}

#[test]
fn inspect_command_reports_header_and_denied_nodes() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in.dot");
    fs::write(&input, GRAPH).expect("write input");

    let overrides = ConfigOverrides { input: Some(input), ..ConfigOverrides::default() };
    let report = inspect_command(&overrides, true).expect("inspect");
    assert_eq!(report.header_lines, 1);
    assert_eq!(report.summary.denied.len(), 1);
    assert_eq!(report.summary.denied[0].prefix, "hardware_");
}

#[test]
fn show_config_json_round_trips() {
    let rendered =
        show_config_command(&ConfigOverrides::default(), ConfigFormat::Json).expect("show");
    let parsed: FilterConfig = serde_json::from_str(&rendered).expect("parse rendered config");
    assert_eq!(parsed, FilterConfig::default());
}
