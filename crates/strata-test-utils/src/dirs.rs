//! [`ConfigDirs`] fixture for file-layer scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use strata_core::{ConfigOptions, EnvSource};
use tempfile::TempDir;

/// A temporary `etc/strata` and `home/strata` pair.
///
/// # Example
///
/// ```rust,no_run
/// use strata_test_utils::ConfigDirs;
///
/// let dirs = ConfigDirs::new();
/// dirs.write_user("rexray:\n  logLevel: debug\n");
/// let options = dirs.options();
/// ```
pub struct ConfigDirs {
    _temp_dir: TempDir,
    etc: PathBuf,
    usr: PathBuf,
}

impl Default for ConfigDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDirs {
    /// Create both directories, empty.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let etc = temp_dir.path().join("etc").join("strata");
        let usr = temp_dir.path().join("home").join("strata");
        fs::create_dir_all(&etc).unwrap();
        fs::create_dir_all(&usr).unwrap();
        Self {
            _temp_dir: temp_dir,
            etc,
            usr,
        }
    }

    pub fn global_file(&self) -> PathBuf {
        self.etc.join("config.yml")
    }

    pub fn user_file(&self) -> PathBuf {
        self.usr.join("config.yml")
    }

    /// Write the global `config.yml`.
    pub fn write_global(&self, content: &str) -> PathBuf {
        let path = self.global_file();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the user `config.yml`.
    pub fn write_user(&self, content: &str) -> PathBuf {
        let path = self.user_file();
        fs::write(&path, content).unwrap();
        path
    }

    /// Default options pointed at these directories, with an empty
    /// environment.
    pub fn options(&self) -> ConfigOptions {
        self.options_with_env(EnvSource::Fixed(Default::default()))
    }

    pub fn options_with_env(&self, env: EnvSource) -> ConfigOptions {
        ConfigOptions::default()
            .with_global_config_dir(&self.etc)
            .with_user_config_dir(&self.usr)
            .with_env(env)
    }

    /// Make `path` unreadable. Returns `false` if the current user can read
    /// it anyway, in which case permission assertions should be skipped.
    #[cfg(unix)]
    pub fn make_unreadable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
        fs::File::open(path).is_err()
    }
}

impl Drop for ConfigDirs {
    fn drop(&mut self) {
        // restore modes so TempDir can clean up
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            for path in [self.global_file(), self.user_file()] {
                if path.exists() {
                    let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o644));
                }
            }
        }
    }
}
