//! End-to-end resolution scenarios across registrations, files and env.

use pretty_assertions::assert_eq;
use rstest::rstest;
use strata_core::{Config, ConfigOptions, EnvSource, Lookup, Registry};
use strata_test_utils::fixtures::{self, YAML_CONFIG_1, YAML_CONFIG_2};
use strata_test_utils::{ConfigDirs, init_tracing};

fn build(registry: &Registry, options: &ConfigOptions) -> Config {
    init_tracing();
    Config::with_options(registry, options).expect("fixture registrations are valid")
}

fn assert_storage_drivers(c: &impl Lookup) {
    assert_eq!(c.get_string_slice("rexray.storageDrivers"), vec!["ec2", "xtremio"]);
}

fn assert_os_drivers_1(c: &impl Lookup) {
    assert_eq!(c.get_string_slice("rexray.osDrivers"), vec!["linux"]);
}

fn assert_os_drivers_2(c: &impl Lookup) {
    assert_eq!(c.get_string_slice("rexray.osDrivers"), vec!["darwin", "linux"]);
}

#[test]
fn registered_defaults_resolve() {
    let dirs = ConfigDirs::new();
    let c = build(&fixtures::base_registry(), &dirs.options());

    assert_eq!(c.get_string("rexray.host"), "tcp://:7979");
    assert_eq!(c.get_string("rexray.logLevel"), "warn");
    assert_eq!(c.get_string_slice("rexray.osDrivers"), vec!["linux"]);
    assert_eq!(c.get_string_slice("rexray.volumeDrivers"), vec!["docker"]);
}

#[test]
fn registration_document_and_keys_resolve_case_insensitively() {
    let dirs = ConfigDirs::new();
    let c = build(&fixtures::full_registry(), &dirs.options());

    assert_eq!(c.get_string("mockProvider.username"), "admin");
    assert_eq!(c.get_string("mockProvider.password"), "");
    assert_eq!(c.get_int("mockProvider.Docker.minVolSize"), 16);
    assert_eq!(c.get_int("MOCKPROVIDER.DOCKER.MAXVOLSIZE"), 256);
}

#[test]
fn key_default_outranks_default_document() {
    let dirs = ConfigDirs::new();
    let c = build(&fixtures::full_registry(), &dirs.options());

    // document says true, key default says false
    assert!(!c.get_bool("mockProvider.useCerts"));
}

#[test]
fn later_registrations_override_earlier_ones() {
    let mut override_reg = strata_core::Registration::new("Override");
    override_reg
        .key(strata_core::KeyType::String, "", "info", "", "REXRAY.LOGLEVEL")
        .unwrap();
    let mut registry = fixtures::base_registry();
    registry.register(override_reg);

    let c = build(&registry, &ConfigOptions::new(false, false, "config", "yml"));
    assert_eq!(c.get_string("rexray.logLevel"), "info");
}

#[test]
fn identical_inputs_build_equivalent_configs() {
    let registry = fixtures::full_registry();
    let options = ConfigOptions::new(false, false, "config", "yml");
    let a = build(&registry, &options);
    let mut b = build(&registry, &options);
    assert!(a.equivalent(&b));

    b.set("rexray.host", "tcp://:1");
    assert!(!a.equivalent(&b));
}

#[test]
fn global_file_layers_over_defaults() {
    let dirs = ConfigDirs::new();
    dirs.write_global(YAML_CONFIG_1);
    let mut c = build(&fixtures::full_registry(), &dirs.options());

    assert_eq!(c.get_string("rexray.logLevel"), "error");
    assert_storage_drivers(&c);
    assert_os_drivers_1(&c);

    c.read_config(YAML_CONFIG_2.as_bytes()).unwrap();

    assert_eq!(c.get_string("rexray.logLevel"), "debug");
    assert_storage_drivers(&c);
    assert_os_drivers_2(&c);
}

#[test]
fn user_file_layers_over_defaults() {
    let dirs = ConfigDirs::new();
    dirs.write_user(YAML_CONFIG_1);
    let mut c = build(&fixtures::full_registry(), &dirs.options());

    assert_eq!(c.get_string("rexray.logLevel"), "error");
    assert_eq!(c.get_int("mockProvider.docker.minVolSize"), 32);
    assert_storage_drivers(&c);
    assert_os_drivers_1(&c);

    c.read_config(YAML_CONFIG_2.as_bytes()).unwrap();

    assert_eq!(c.get_string("rexray.logLevel"), "debug");
    assert_storage_drivers(&c);
    assert_os_drivers_2(&c);
}

#[test]
fn user_file_outranks_global_file() {
    let dirs = ConfigDirs::new();
    dirs.write_global(YAML_CONFIG_1);
    dirs.write_user(YAML_CONFIG_2);
    let c = build(&fixtures::full_registry(), &dirs.options());

    assert_eq!(c.get_string("rexray.logLevel"), "debug");
    assert_os_drivers_2(&c);
    // only the global file sets these
    assert_storage_drivers(&c);
    assert!(c.get_bool("mockProvider.useCerts"));
}

#[rstest]
#[case::global(true)]
#[case::user(false)]
fn env_outranks_files(#[case] global: bool) {
    let dirs = ConfigDirs::new();
    if global {
        dirs.write_global(YAML_CONFIG_1);
    } else {
        dirs.write_user(YAML_CONFIG_1);
    }
    let env = EnvSource::fixed([
        ("REXRAY_LOGLEVEL", "info"),
        ("REXRAY_STORAGEDRIVERS", "ec2 scaleio"),
        ("MOCKPROVIDER_DOCKER_MINVOLSIZE", "64"),
    ]);
    let c = build(&fixtures::full_registry(), &dirs.options_with_env(env));

    assert_eq!(c.get_string("rexray.logLevel"), "info");
    assert_eq!(c.get_string_slice("rexray.storageDrivers"), vec!["ec2", "scaleio"]);
    assert_eq!(c.get_int("mockProvider.docker.minVolSize"), 64);
}

#[test]
fn explicit_set_outranks_later_read_config() {
    let mut c = build(
        &fixtures::full_registry(),
        &ConfigOptions::new(false, false, "config", "yml"),
    );

    c.set("rexray.logLevel", "verbose");
    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();

    assert_eq!(c.get_string("rexray.logLevel"), "verbose");
    assert_storage_drivers(&c);
}

#[test]
fn read_config_without_files_or_env() {
    let mut c = build(&Registry::new(), &ConfigOptions::new(false, false, "config", "yml"));

    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();
    assert_eq!(c.get_string("rexray.logLevel"), "error");
    assert_storage_drivers(&c);
    assert_os_drivers_1(&c);

    c.read_config(YAML_CONFIG_2.as_bytes()).unwrap();
    assert_eq!(c.get_string("rexray.logLevel"), "debug");
    assert_storage_drivers(&c);
    assert_os_drivers_2(&c);
}

#[cfg(unix)]
#[test]
fn unreadable_config_files_are_skipped() {
    let dirs = ConfigDirs::new();
    let global = dirs.write_global(YAML_CONFIG_1);
    let user = dirs.write_user(YAML_CONFIG_2);
    let enforced = dirs.make_unreadable(&global) & dirs.make_unreadable(&user);

    let mut c = build(&fixtures::full_registry(), &dirs.options());
    if enforced {
        assert_eq!(c.get_string("rexray.logLevel"), "warn");
        let err = c.read_config_file(&user).unwrap_err();
        assert!(err.is_io(), "got {err:?}");
    }
}

#[test]
fn scope_addresses_the_subtree() {
    let mut c = build(
        &fixtures::full_registry(),
        &ConfigOptions::new(false, false, "config", "yml"),
    );
    assert!(c.is_set("rexray.loglevel"));
    assert_eq!(c.get_string("rexray.loglevel"), "warn");

    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();
    assert_eq!(c.get_string("rexray.loglevel"), "error");

    c.set("loglevel", "verbose");
    assert!(c.is_set("loglevel"));
    assert_eq!(c.get_string("loglevel"), "verbose");

    let sc = c.scope("rexray");
    assert!(sc.is_set("loglevel"));
    assert_eq!(sc.get_string("loglevel"), "error");
    assert_storage_drivers(&c.scope(""));
}

#[test]
fn env_vars_reflect_resolved_values() {
    let mut c = build(
        &fixtures::full_registry(),
        &ConfigOptions::new(false, false, "config", "yml"),
    );
    c.read_config(YAML_CONFIG_1.as_bytes()).unwrap();

    let vars = c.env_vars();
    for expected in [
        "REXRAY_HOST=tcp://:7979",
        "REXRAY_LOGLEVEL=error",
        "REXRAY_STORAGEDRIVERS=ec2 xtremio",
        "REXRAY_OSDRIVERS=linux",
        "REXRAY_VOLUMEDRIVERS=docker",
        "MOCKPROVIDER_USERNAME=admin",
        "MOCKPROVIDER_USECERTS=true",
        "MOCKPROVIDER_DOCKER_MINVOLSIZE=32",
    ] {
        assert!(vars.iter().any(|v| v == expected), "missing {expected} in {vars:?}");
    }
}

#[test]
fn env_vars_feed_back_as_overrides() {
    let options = ConfigOptions::new(false, false, "config", "yml");
    let mut source = build(&fixtures::full_registry(), &options);
    source.read_config(YAML_CONFIG_1.as_bytes()).unwrap();

    let env = EnvSource::fixed(source.env_vars().into_iter().filter_map(|var| {
        var.split_once('=')
            .map(|(name, value)| (name.to_string(), value.to_string()))
    }));
    let rebuilt = build(&fixtures::full_registry(), &ConfigOptions::new(true, false, "config", "yml").with_env(env));

    assert_eq!(rebuilt.get_string("rexray.logLevel"), "error");
    assert_eq!(rebuilt.get_int("mockProvider.docker.minVolSize"), 32);
    assert_storage_drivers(&rebuilt);
}

#[test]
fn copy_is_equal_then_independent() {
    let dirs = ConfigDirs::new();
    dirs.write_global(YAML_CONFIG_1);
    let c1 = build(&fixtures::full_registry(), &dirs.options());

    assert_eq!(c1.get_string("rexray.logLevel"), "error");
    assert_storage_drivers(&c1);
    assert_os_drivers_1(&c1);

    let mut c2 = c1.copy();
    assert_eq!(c2.get_string("rexray.logLevel"), "error");
    assert_storage_drivers(&c2);
    assert_os_drivers_1(&c2);
    assert!(c1.equivalent(&c2));

    c2.set("rexray.logLevel", "debug");
    assert_eq!(c1.get_string("rexray.logLevel"), "error");
    assert!(!c1.equivalent(&c2));
}
