//! Export/import scenarios against the canonical fixtures.

use pretty_assertions::assert_eq;
use serde_json::Value as JsonValue;
use strata_core::{Config, ConfigOptions, EnvSource, Lookup};
use strata_test_utils::fixtures::{self, JSON_BASELINE, JSON_WITH_YAML_CONFIG_1, YAML_CONFIG_1};
use strata_test_utils::init_tracing;

fn config() -> Config {
    init_tracing();
    Config::with_options(
        &fixtures::full_registry(),
        &ConfigOptions::new(false, false, "config", "yml"),
    )
    .unwrap()
}

/// Import both texts and compare them key by key.
fn assert_json_equivalent(j1: &str, j2: &str) -> (Config, Config) {
    let c1 = Config::from_json(j1).unwrap_or_else(|e| panic!("error reading JSON {j1}: {e}"));
    let c2 = Config::from_json(j2).unwrap_or_else(|e| panic!("error reading JSON {j2}: {e}"));
    assert!(c1.equivalent(&c2), "configs differ:\n{j1}\n---\n{j2}");
    (c1, c2)
}

#[test]
fn baseline_export() {
    let c = config();
    assert_json_equivalent(&c.to_json().unwrap(), JSON_BASELINE);

    let exported: JsonValue = serde_json::from_str(&c.to_json().unwrap()).unwrap();
    let expected: JsonValue = serde_json::from_str(JSON_BASELINE).unwrap();
    assert_eq!(exported, expected);
}

#[test]
fn baseline_export_text_is_stable() {
    assert_eq!(config().to_json().unwrap(), JSON_BASELINE);
}

#[test]
fn to_json_after_read_config() {
    let mut c = config();
    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();

    let (mut c1, c2) = assert_json_equivalent(&c.to_json().unwrap(), JSON_WITH_YAML_CONFIG_1);
    assert_eq!(c1.get_int("mockprovider.docker.minvolsize"), 32);

    c1.set("mockprovider.docker.minvolsize", 128);
    assert_eq!(c1.get_int("mockprovider.docker.minvolsize"), 128);
    assert!(!c1.equivalent(&c2));
}

#[test]
fn to_json_compact_after_read_config() {
    let mut c = config();
    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();

    let compact = c.to_json_compact().unwrap();
    assert!(!compact.contains('\n'));

    let (mut c1, c2) = assert_json_equivalent(&compact, JSON_WITH_YAML_CONFIG_1);
    assert_eq!(c1.get_int("mockprovider.docker.minvolsize"), 32);

    c1.set("mockprovider.docker.minvolsize", 128);
    assert!(!c1.equivalent(&c2));
}

#[test]
fn pretty_and_compact_import_equal() {
    let c = config();
    assert_json_equivalent(&c.to_json().unwrap(), &c.to_json_compact().unwrap());
}

#[test]
fn from_json_round_trips_source() {
    let mut c = config();
    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();
    c.set("loglevel", "verbose");

    let imported = Config::from_json(&c.to_json().unwrap()).unwrap();
    assert!(imported.equivalent(&c));
    assert_eq!(imported.get_string("loglevel"), "verbose");
    assert_eq!(imported.scope("rexray").get_string("loglevel"), "error");
}

#[test]
fn from_json_with_errors() {
    let err = Config::from_json("///*").unwrap_err();
    assert!(err.is_parse(), "expected parse error, got {err:?}");
}

#[test]
fn imported_config_exports_tree_only() {
    let imported = Config::from_json(JSON_BASELINE).unwrap();
    let exported: JsonValue = serde_json::from_str(&imported.to_json().unwrap()).unwrap();

    // flat entries were folded into the tree on import
    assert!(exported.get("rexray.host").is_none());
    assert_eq!(exported["rexray"]["host"], "tcp://:7979");
    assert_eq!(exported["mockProvider"]["docker"]["maxVolSize"], 256);
}

#[test]
fn env_overrides_export_with_their_types() {
    init_tracing();
    let options = ConfigOptions::new(true, false, "config", "yml").with_env(EnvSource::fixed([
        ("MOCKPROVIDER_DOCKER_MAXVOLSIZE", "512"),
        ("REXRAY_OSDRIVERS", "ec2 scaleio"),
    ]));
    let c = Config::with_options(&fixtures::full_registry(), &options).unwrap();

    let exported: JsonValue = serde_json::from_str(&c.to_json_compact().unwrap()).unwrap();
    assert_eq!(exported["mockProvider"]["docker"]["maxVolSize"], serde_json::json!(512));
    assert_eq!(exported["mockprovider.docker.maxvolsize"], serde_json::json!(512));
    assert_eq!(exported["rexray"]["osDrivers"], serde_json::json!(["ec2", "scaleio"]));

    let baseline: JsonValue = serde_json::from_str(&config().to_json_compact().unwrap()).unwrap();
    assert_eq!(baseline["mockprovider.docker.maxvolsize"], serde_json::json!(256));
}
