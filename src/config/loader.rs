//! Layered configuration loading
//!
//! Sources, lowest priority first:
//! 1. `default.toml` (required)
//! 2. `{environment}.toml` (optional)
//! 3. `local.toml` (optional)
//! 4. `ADMIN_API_*` environment variables, `__` between nested keys
//!
//! A single selected file replaces steps 1-3.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

pub const CONFIG_DIR_ENV: &str = "ADMIN_API_CONFIG_DIR";

pub const CONFIG_FILE_ENV: &str = "ADMIN_API_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

const ENV_PREFIX: &str = "ADMIN_API";

/// Variables that pick sources rather than override settings
const CONTROL_VARS: [&str; 3] = [CONFIG_DIR_ENV, CONFIG_FILE_ENV, AppEnvironment::ENV_VAR];

/// Resolves which sources to read and merges them into [`Settings`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
    /// Non-empty `ADMIN_API_*` variables captured at construction
    overrides: Map<String, String>,
}

impl ConfigLoader {
    /// Loader driven by the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Loader driven by the given variables; entries without the
    /// `ADMIN_API_` prefix are ignored.
    ///
    /// # Errors
    ///
    /// - `MutualExclusivityError` when both `ADMIN_API_CONFIG_DIR` and
    ///   `ADMIN_API_CONFIG_FILE` are set
    /// - `EnvVarError` when `ADMIN_API_APP_ENV` names no known environment
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, ConfigError> {
        let prefix = format!("{ENV_PREFIX}_");
        let vars: Map<String, String> = vars
            .into_iter()
            .filter(|(key, value)| key.starts_with(&prefix) && !value.trim().is_empty())
            .collect();

        let config_dir = vars.get(CONFIG_DIR_ENV).map(PathBuf::from);
        let config_file = vars.get(CONFIG_FILE_ENV).map(PathBuf::from);
        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(format!(
                "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                 Use {CONFIG_DIR_ENV} for layered configuration or \
                 {CONFIG_FILE_ENV} for a single configuration file."
            )));
        }

        let environment = match vars.get(AppEnvironment::ENV_VAR) {
            Some(raw) => raw.parse()?,
            None => AppEnvironment::default(),
        };

        let overrides = vars
            .into_iter()
            .filter(|(key, _)| !CONTROL_VARS.contains(&key.as_str()))
            .collect();

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment,
            overrides,
        })
    }

    /// Load from a single file instead of the layered directory.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the environment used to pick `{environment}.toml`.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Files to read in merge order, each with whether it must exist.
    fn file_layers(&self) -> Vec<(PathBuf, bool)> {
        match &self.config_file {
            Some(file) => vec![(file.clone(), true)],
            None => vec![
                (self.config_dir.join("default.toml"), true),
                (
                    self.config_dir
                        .join(format!("{}.toml", self.environment.as_str())),
                    false,
                ),
                (self.config_dir.join("local.toml"), false),
            ],
        }
    }

    /// Merge all sources, then deserialize and validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder: ConfigBuilder<DefaultState> = Config::builder();
        for (path, required) in self.file_layers() {
            if required && !path.is_file() {
                return Err(ConfigError::file_not_found(format!(
                    "Required configuration file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(required));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(self.overrides.clone())),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;
        settings.environment = self.environment;
        settings.validate()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;
    use std::fs;
    use tempfile::TempDir;

    const BASE_CONFIG: &str = r#"
[server]
port = 3000

[database]
url = "postgres://localhost/admin"
"#;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn loader(dir: &TempDir, vars: &[(&str, &str)]) -> Result<ConfigLoader, ConfigError> {
        let dir_var = (CONFIG_DIR_ENV.to_string(), dir.path().display().to_string());
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string()));
        ConfigLoader::from_vars(std::iter::once(dir_var).chain(vars))
    }

    #[test]
    fn test_defaults_without_variables() {
        let loader = ConfigLoader::from_vars([("PATH".to_string(), "/bin".to_string())]).unwrap();
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
        assert!(loader.overrides.is_empty());
    }

    #[test]
    fn test_dir_and_file_are_mutually_exclusive() {
        let vars = [
            (CONFIG_DIR_ENV.to_string(), "/etc/admin-api".to_string()),
            (CONFIG_FILE_ENV.to_string(), "/etc/admin-api.toml".to_string()),
        ];
        match ConfigLoader::from_vars(vars) {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains(CONFIG_DIR_ENV));
                assert!(msg.contains(CONFIG_FILE_ENV));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_environment_is_an_error() {
        let dir = config_dir(&[]);
        let err = loader(&dir, &[(AppEnvironment::ENV_VAR, "qa")]).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarError(_)));

        let blank = loader(&dir, &[(AppEnvironment::ENV_VAR, " ")]).unwrap();
        assert_eq!(blank.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_missing_default_toml() {
        let dir = config_dir(&[]);
        match loader(&dir, &[]).unwrap().load() {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence_default_env_local_vars() {
        let dir = config_dir(&[
            ("default.toml", BASE_CONFIG),
            ("staging.toml", "[server]\nport = 3001\nhost = \"0.0.0.0\"\n[logger]\nlevel = \"warn\""),
            ("local.toml", "[server]\nport = 3002"),
            ("production.toml", "[server]\nport = 9999"),
        ]);

        let settings = loader(
            &dir,
            &[
                (AppEnvironment::ENV_VAR, "stage"),
                ("ADMIN_API_SERVER__PORT", "3003"),
                ("ADMIN_API_DATABASE__MAX_CONNECTIONS", "25"),
            ],
        )
        .unwrap()
        .load()
        .unwrap();

        assert_eq!(settings.environment, AppEnvironment::Staging);
        assert_eq!(settings.server.port, 3003);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.database.max_connections, 25);
        assert_eq!(settings.logger.level, LogLevel::Warn);
    }

    #[test]
    fn test_with_environment_overrides_variable() {
        let dir = config_dir(&[
            ("default.toml", BASE_CONFIG),
            ("production.toml", "[database]\nmax_connections = 50"),
        ]);

        let settings = loader(&dir, &[(AppEnvironment::ENV_VAR, "test")])
            .unwrap()
            .with_environment(AppEnvironment::Production)
            .load()
            .unwrap();

        assert_eq!(settings.environment, AppEnvironment::Production);
        assert_eq!(settings.database.max_connections, 50);
        assert_eq!(settings.database.min_connections, 1);
    }

    #[test]
    fn test_single_file_skips_layers() {
        let dir = config_dir(&[("local.toml", "[server]\nport = 4000")]);
        let single = dir.path().join("single.toml");
        fs::write(&single, BASE_CONFIG).unwrap();

        let settings = ConfigLoader::from_vars([])
            .unwrap()
            .with_config_file(&single)
            .load()
            .unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.url, "postgres://localhost/admin");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let dir = config_dir(&[("default.toml", BASE_CONFIG)]);

        match loader(&dir, &[("ADMIN_API_DATABASE__URL", "mysql://nope/admin")])
            .unwrap()
            .load()
        {
            Err(ConfigError::ValidationError { field, .. }) => assert_eq!(field, "database.url"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_log_level_is_a_parse_error() {
        let dir = config_dir(&[("default.toml", BASE_CONFIG)]);

        let err = loader(&dir, &[("ADMIN_API_LOGGER__LEVEL", "chatty")])
            .unwrap()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(ref msg) if msg.contains("chatty")));
    }
}
