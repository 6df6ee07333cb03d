//! Configuration loading and access.
//!
//! Configuration is layered: the embedded defaults, then an optional
//! `pulseboard.toml` next to the working directory, then environment
//! variables (double underscore separates sections, e.g.
//! `LOGGING__LEVEL=debug`). The result is loaded once and served through
//! [`get_config`] / [`get_config_or_panic`].

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

pub mod defaults;

pub use defaults::DEFAULT_CONFIG;

static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Outcome of the one-shot configuration load.
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

fn load_config() -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let defaults_source = File::from_str(DEFAULT_CONFIG, FileFormat::Toml);
    let file_source = File::with_name("pulseboard").required(false);
    let env_source = Environment::default().separator("__");

    let config = match Config::builder()
        .add_source(defaults_source)
        .add_source(file_source)
        .add_source(env_source)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your pulseboard.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) => {
            panic!("Failed to load config: {e}");
        }
        ConfigLoadResult::DeserializeError(e) => {
            panic!("Failed to deserialize config: {e}");
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    system: SystemConfig,
    #[serde(default)]
    theme: ThemeSettings,
    #[serde(default)]
    routes: RoutesConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn system(&self) -> &SystemConfig {
        &self.system
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    pub fn routes(&self) -> &RoutesConfig {
        &self.routes
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// System chrome: title, logo and the avatar shown when a profile has none.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SystemConfig {
    title: Option<String>,
    logo: Option<String>,
    default_avatar: Option<String>,
}

impl SystemConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("PulseBoard")
    }

    pub fn logo(&self) -> &str {
        self.logo.as_deref().unwrap_or("/static/image/logo.png")
    }

    pub fn default_avatar(&self) -> &str {
        self.default_avatar
            .as_deref()
            .unwrap_or("/static/image/profile.png")
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeSettings {
    default_theme: Option<String>,
}

impl ThemeSettings {
    pub fn default_theme(&self) -> &str {
        self.default_theme.as_deref().unwrap_or("default")
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RoutesConfig {
    login: Option<String>,
}

impl RoutesConfig {
    /// Redirect target for unauthenticated access.
    pub fn login(&self) -> &str {
        self.login.as_deref().unwrap_or("/login")
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_deserialize() {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("builder");
        let app: AppConfig = config.try_deserialize().expect("deserialize");

        assert_eq!(app.system().title(), "Well-being Data Analysis Console");
        assert_eq!(app.theme().default_theme(), "default");
        assert_eq!(app.routes().login(), "/login");
        assert_eq!(app.logging().level(), "info");
        assert!(app.logging().file().is_none());
    }

    #[test]
    fn accessors_fall_back_on_empty_config() {
        let app = AppConfig::default();
        assert_eq!(app.system().title(), "PulseBoard");
        assert_eq!(app.theme().default_theme(), "default");
        assert_eq!(app.routes().login(), "/login");
    }
}
