//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: f64,
    /// Window height in logical pixels
    pub height: f64,
    /// Whether the window should be resizable
    pub resizable: bool,
}

/// Touch input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Treat the left mouse button as a single touch contact
    pub emulate_touch_with_mouse: bool,
    /// Group contacts of one phase received in the same event-loop iteration
    /// into one batch; otherwise every contact is dispatched alone
    pub coalesce_contacts: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `tracing` filter used when RUST_LOG is not set
    pub filter: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    pub window: WindowConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. Built-in defaults
    /// 2. config/{profile}.toml
    /// 3. Environment variables with prefix APP_ (e.g., APP_INPUT__COALESCE_CONTACTS=false)
    ///
    /// Config files are searched for next to the executable first, then in
    /// the current directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let defaults = Self::builtin(profile);

        let mut builder = Config::builder()
            .set_default("window.title", defaults.window.title)?
            .set_default("window.width", defaults.window.width)?
            .set_default("window.height", defaults.window.height)?
            .set_default("window.resizable", defaults.window.resizable)?
            .set_default(
                "input.emulate_touch_with_mouse",
                defaults.input.emulate_touch_with_mouse,
            )?
            .set_default("input.coalesce_contacts", defaults.input.coalesce_contacts)?
            .set_default("logging.filter", defaults.logging.filter)?;

        builder = match Self::find_config_dir() {
            Some(dir) => {
                builder.add_source(File::from(dir.join(profile).as_path()).required(false))
            }
            None => builder.add_source(File::with_name(&format!("config/{}", profile)).required(false)),
        };

        // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .set_override("profile", profile)?
            .build()?
            .try_deserialize()
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Built-in settings for a profile, used when no files are present
    pub fn builtin(profile: &str) -> Self {
        let debug = profile == "debug";
        Self {
            profile: profile.to_string(),
            window: WindowConfig {
                title: "AR Runner".to_string(),
                width: 390.0,
                height: 844.0,
                resizable: true,
            },
            input: InputConfig {
                emulate_touch_with_mouse: debug,
                coalesce_contacts: true,
            },
            logging: LoggingConfig {
                filter: if debug { "debug" } else { "info" }.to_string(),
            },
        }
    }

    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::builtin("release"))
    }
}
