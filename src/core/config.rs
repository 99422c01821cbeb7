//! Configuration module for `gradebook`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Store backend to initialize ("native" or "fallback")
    #[serde(default)]
    pub backend: String,
    /// Readiness timeout in seconds; 0 means unset (use the default)
    #[serde(default)]
    pub ready_timeout_secs: u64,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override engine backend
    pub backend: Option<String>,
    /// Override readiness timeout in seconds
    pub ready_timeout_secs: Option<u64>,
}

/// Copy `src` into `dst` when `dst` is still unset. Returns `true` on change.
fn fill_string(dst: &mut String, src: &str) -> bool {
    if dst.is_empty() && !src.is_empty() {
        src.clone_into(dst);
        return true;
    }
    false
}

impl Config {
    /// Get the `$GRADEBOOK` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradebook`
    /// - macOS: `~/Library/Application Support/gradebook`
    /// - Windows: `%APPDATA%\gradebook`
    #[must_use]
    pub fn get_gradebook_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradebook")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// located in the directory returned by [`get_gradebook_dir`].
    ///
    /// [`get_gradebook_dir`]: Self::get_gradebook_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradebook_dir().join(CONFIG_FILE_NAME)
    }

    /// Substitute `$GRADEBOOK` in a path value with the actual config dir
    fn expand_variables(value: &str) -> String {
        if !value.contains("$GRADEBOOK") {
            return value.to_string();
        }
        let dir = Self::get_gradebook_dir();
        value.replace("$GRADEBOOK", dir.to_str().unwrap_or("."))
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Keeps an older config file working when newer versions add fields:
    /// anything left empty (or zero) here picks up the default value, while
    /// explicitly set fields stay untouched.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = fill_string(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_string(&mut self.logging.file, &defaults.logging.file);
        changed |= fill_string(&mut self.engine.backend, &defaults.engine.backend);

        if self.engine.ready_timeout_secs == 0 && defaults.engine.ready_timeout_secs != 0 {
            self.engine.ready_timeout_secs = defaults.engine.ready_timeout_secs;
            changed = true;
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the persistent file is not modified.
    /// `None` fields leave the corresponding config value alone.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(backend) = &overrides.backend {
            self.engine.backend.clone_from(backend);
        }
        if let Some(timeout) = overrides.ready_timeout_secs {
            self.engine.ready_timeout_secs = timeout;
        }
    }

    /// Parse a configuration from a TOML string
    ///
    /// Missing fields take their serde defaults; `$GRADEBOOK` in the log
    /// file path expands to the config directory.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// An existing file is parsed and topped up with any fields missing
    /// relative to the defaults (persisting the result). On first run the
    /// defaults are written out. Any load failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let loaded = fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok());

        match loaded {
            Some(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            None => defaults,
        }
    }

    /// Save configuration to file
    ///
    /// Serializes to TOML and writes to the platform-specific config file,
    /// creating the config directory if needed.
    ///
    /// # Errors
    /// Returns an error if serialization fails, the directory cannot be
    /// created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `backend`: Engine store backend ("native" or "fallback")
    /// - `ready_timeout`: Engine readiness timeout in seconds
    ///
    /// # Returns
    /// `Some(String)` with the value, or `None` for an unrecognized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "backend" => Some(self.engine.backend.clone()),
            "ready_timeout" | "ready-timeout" => Some(self.engine.ready_timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist. Values are validated before assignment.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., a non-numeric readiness timeout).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "backend" => {
                value
                    .parse::<crate::core::engine::StoreKind>()
                    .map_err(|e| format!("Invalid value for 'backend': {e}"))?;
                self.engine.backend = value.to_ascii_lowercase();
            }
            "ready_timeout" | "ready-timeout" => {
                self.engine.ready_timeout_secs = value.parse::<u64>().map_err(|_| {
                    format!("Invalid number of seconds for 'ready_timeout': '{value}'")
                })?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single value to the one in `defaults` without losing other
    /// customizations. Updates the in-memory config only.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "backend" => self.engine.backend.clone_from(&defaults.engine.backend),
            "ready_timeout" | "ready-timeout" => {
                self.engine.ready_timeout_secs = defaults.engine.ready_timeout_secs;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file; the next [`load()`](Config::load)
    /// recreates it from defaults. Succeeds silently when no file exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[logging]\n  level = \"{}\"\n  file = \"{}\"\n  verbose = {}",
            self.logging.level, self.logging.file, self.logging.verbose
        )?;
        writeln!(
            f,
            "\n[engine]\n  backend = \"{}\"\n  ready_timeout_secs = {}",
            self.engine.backend, self.engine.ready_timeout_secs
        )
    }
}
