use crate::error::{AppError, AppResult};
use crate::theme::types::Theme;
use crate::theme::validation::ThemeValidator;
use crate::validation::Validator;

/// Fixed fallback key substituted for unknown theme keys.
pub const DEFAULT_THEME_KEY: &str = "default";

/// Built-in theme definitions embedded in the binary, in declaration
/// order. The order here is the order the theme switcher presents.
const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("default", include_str!("../../themes/default.toml")),
    ("green", include_str!("../../themes/green.toml")),
    ("orange", include_str!("../../themes/orange.toml")),
    ("purple", include_str!("../../themes/purple.toml")),
    ("business", include_str!("../../themes/business.toml")),
    ("minimal", include_str!("../../themes/minimal.toml")),
];

/// The static theme table: every known theme, keyed and ordered.
pub struct ThemeRegistry {
    themes: Vec<(String, Theme)>,
}

impl ThemeRegistry {
    /// Parse and validate the embedded theme table. Failures here are
    /// build defects, not runtime conditions, and are reported as
    /// configuration errors.
    pub fn load_builtin() -> AppResult<Self> {
        let validator = ThemeValidator;
        let mut themes = Vec::with_capacity(BUILTIN_THEMES.len());

        for (key, raw) in BUILTIN_THEMES {
            let theme: Theme = toml::from_str(raw).map_err(|e| {
                AppError::Config(format!("Failed to parse built-in theme '{key}': {e}"))
            })?;
            validator.validate(&theme).map_err(AppError::from)?;
            themes.push((key.to_string(), theme));
        }

        if !themes.iter().any(|(key, _)| key == DEFAULT_THEME_KEY) {
            return Err(AppError::Config(format!(
                "Built-in theme table is missing the '{DEFAULT_THEME_KEY}' theme"
            )));
        }

        Ok(Self { themes })
    }

    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|(theme_key, _)| theme_key == key)
            .map(|(_, theme)| theme)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `(key, display name)` pairs in declaration order.
    pub fn available(&self) -> Vec<(String, String)> {
        self.themes
            .iter()
            .map(|(key, theme)| (key.clone(), theme.name.clone()))
            .collect()
    }
}
