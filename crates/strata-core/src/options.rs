//! Construction options for [`Config`](crate::Config)
//!
//! Where the config files live, what they are called, and where environment
//! overrides come from are all explicit inputs rather than process globals.

use std::collections::HashMap;
use std::path::PathBuf;
use strata_fs::DocumentFormat;

/// Where environment lookups are answered from.
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The real process environment.
    #[default]
    Process,
    /// A fixed set of variables, independent of the process.
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up `name`. Unset and empty variables both read as `None`.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match self {
            Self::Process => std::env::var(name).ok(),
            Self::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Options controlling which layers a [`Config`](crate::Config) is built from.
#[derive(Debug, Clone)]
pub struct ConfigOptions {
    /// Apply environment variable overrides.
    pub enable_env: bool,
    /// Load the global and user config files.
    pub enable_files: bool,
    /// File name without extension, `config` by default.
    pub file_base_name: String,
    /// File extension, `yml` by default. Also selects the parser.
    pub file_extension: String,
    /// Explicit global config directory.
    pub global_config_dir: Option<PathBuf>,
    /// Explicit user config directory.
    pub user_config_dir: Option<PathBuf>,
    /// Application name used for default directories and the
    /// `<APP>_CONFIG_DIR_ETC` / `<APP>_CONFIG_DIR_USR` variables.
    pub app_name: String,
    /// Prefix token for derived environment variable names.
    pub env_prefix: Option<String>,
    pub env: EnvSource,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            enable_env: true,
            enable_files: true,
            file_base_name: "config".to_string(),
            file_extension: "yml".to_string(),
            global_config_dir: None,
            user_config_dir: None,
            app_name: "strata".to_string(),
            env_prefix: None,
            env: EnvSource::Process,
        }
    }
}

impl ConfigOptions {
    pub fn new(
        enable_env: bool,
        enable_files: bool,
        file_base_name: impl Into<String>,
        file_extension: impl Into<String>,
    ) -> Self {
        Self {
            enable_env,
            enable_files,
            file_base_name: file_base_name.into(),
            file_extension: file_extension.into(),
            ..Default::default()
        }
    }

    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir = Some(dir.into());
        self
    }

    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn with_env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    /// Name of the config file looked for in each directory.
    pub fn file_name(&self) -> String {
        let extension = self.file_extension.trim_start_matches('.');
        if extension.is_empty() {
            self.file_base_name.clone()
        } else {
            format!("{}.{}", self.file_base_name, extension)
        }
    }

    /// Parser for the config files; unknown extensions fall back to YAML.
    pub fn document_format(&self) -> DocumentFormat {
        match self.file_extension.parse() {
            Ok(format) => format,
            Err(_) => {
                tracing::warn!(
                    extension = %self.file_extension,
                    "Unknown config file extension, parsing as YAML"
                );
                DocumentFormat::Yaml
            }
        }
    }

    /// Global config directory.
    ///
    /// Resolution order: the explicit option, then `<APP>_CONFIG_DIR_ETC`,
    /// then `/etc/<app>` (the platform config directory off Unix).
    pub fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.global_config_dir {
            return Some(dir.clone());
        }
        if let Some(dir) = self.env.var(&self.dir_var("ETC")) {
            return Some(PathBuf::from(dir));
        }
        if cfg!(unix) {
            Some(PathBuf::from("/etc").join(&self.app_name))
        } else {
            dirs::config_dir().map(|dir| dir.join(&self.app_name))
        }
    }

    /// User config directory.
    ///
    /// Resolution order: the explicit option, then `<APP>_CONFIG_DIR_USR`,
    /// then `~/.<app>`.
    pub fn user_config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.user_config_dir {
            return Some(dir.clone());
        }
        if let Some(dir) = self.env.var(&self.dir_var("USR")) {
            return Some(PathBuf::from(dir));
        }
        dirs::home_dir().map(|home| home.join(format!(".{}", self.app_name)))
    }

    pub fn global_config_file(&self) -> Option<PathBuf> {
        self.global_config_dir().map(|dir| dir.join(self.file_name()))
    }

    pub fn user_config_file(&self) -> Option<PathBuf> {
        self.user_config_dir().map(|dir| dir.join(self.file_name()))
    }

    fn dir_var(&self, suffix: &str) -> String {
        let app: String = self
            .app_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{app}_CONFIG_DIR_{suffix}")
    }
}
