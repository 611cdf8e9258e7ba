//! Canonical registrations and documents used across test suites.

use strata_core::{KeyType, Registration, Registry};

/// Host and log level, both flag-bound.
pub fn global_registration() -> Registration {
    let mut r = Registration::new("Global");
    r.yaml(
        "
rexray:
    host: tcp://:7979
    logLevel: warn
",
    );
    r.key(KeyType::String, "h", "tcp://:7979", "The REX-Ray host", "rexray.host")
        .unwrap()
        .key(
            KeyType::String,
            "l",
            "warn",
            "The log level (error, warn, info, debug)",
            "rexray.logLevel",
        )
        .unwrap();
    r
}

/// Driver lists, no flags.
pub fn driver_registration() -> Registration {
    let mut r = Registration::new("Driver");
    r.yaml(
        "
rexray:
    osDrivers:
    - linux
    storageDrivers:
    - libstorage
    volumeDrivers:
    - docker
",
    );
    r.key(KeyType::String, "", vec!["linux"], "The OS drivers to consider", "rexray.osDrivers")
        .unwrap()
        .key(
            KeyType::String,
            "",
            vec!["libstorage"],
            "The storage drivers to consider",
            "rexray.storageDrivers",
        )
        .unwrap()
        .key(
            KeyType::String,
            "",
            vec!["docker"],
            "The volume drivers to consider",
            "rexray.volumeDrivers",
        )
        .unwrap();
    r
}

/// A provider whose document and key defaults overlap.
///
/// `useCerts` is `true` in the document but `false` as a key default, and
/// key defaults win.
pub fn mock_provider_registration() -> Registration {
    let mut r = Registration::new("Mock Provider");
    r.yaml(
        "mockProvider:
    userName: admin
    useCerts: true
    docker:
        MinVolSize: 16
",
    );
    r.key(KeyType::String, "", "admin", "", "mockProvider.userName")
        .unwrap()
        .key(KeyType::String, "", "", "", "mockProvider.password")
        .unwrap()
        .key(KeyType::Bool, "", false, "", "mockProvider.useCerts")
        .unwrap()
        .key(KeyType::Int, "", 16, "", "mockProvider.docker.minVolSize")
        .unwrap()
        .key(KeyType::Bool, "i", true, "", "mockProvider.insecure")
        .unwrap()
        .key(KeyType::Int, "m", 256, "", "mockProvider.docker.maxVolSize")
        .unwrap();
    r
}

/// Global and driver registrations.
pub fn base_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(global_registration());
    registry.register(driver_registration());
    registry
}

/// Base registrations plus the mock provider.
pub fn full_registry() -> Registry {
    let mut registry = base_registry();
    registry.register(mock_provider_registration());
    registry
}

pub const YAML_CONFIG_1: &str = "
rexray:
    logLevel: error
    storageDrivers:
    - ec2
    - xtremio
    osDrivers:
    - linux
mockProvider:
  userName: admin
  useCerts: true
  docker:
    MinVolSize: 32
";

pub const YAML_CONFIG_2: &str = "
rexray:
    logLevel: debug
    osDrivers:
    - darwin
    - linux
";

/// Expanded export of [`full_registry`] with no other layers.
pub const JSON_BASELINE: &str = r#"{
  "mockProvider": {
    "docker": {
      "MinVolSize": 16,
      "maxVolSize": 256
    },
    "insecure": true,
    "password": "",
    "useCerts": false,
    "userName": "admin"
  },
  "mockprovider.docker.maxvolsize": 256,
  "mockprovider.insecure": true,
  "rexray": {
    "host": "tcp://:7979",
    "logLevel": "warn",
    "osDrivers": [
      "linux"
    ],
    "storageDrivers": [
      "libstorage"
    ],
    "volumeDrivers": [
      "docker"
    ]
  },
  "rexray.host": "tcp://:7979",
  "rexray.loglevel": "warn"
}"#;

/// Expanded export of [`full_registry`] after reading [`YAML_CONFIG_1`].
pub const JSON_WITH_YAML_CONFIG_1: &str = r#"{
  "mockProvider": {
    "docker": {
      "MinVolSize": 32,
      "maxVolSize": 256
    },
    "insecure": true,
    "password": "",
    "useCerts": true,
    "userName": "admin"
  },
  "mockprovider.docker.maxvolsize": 256,
  "mockprovider.insecure": true,
  "rexray": {
    "host": "tcp://:7979",
    "logLevel": "error",
    "osDrivers": [
      "linux"
    ],
    "storageDrivers": [
      "ec2",
      "xtremio"
    ],
    "volumeDrivers": [
      "docker"
    ]
  },
  "rexray.host": "tcp://:7979",
  "rexray.loglevel": "error"
}"#;
