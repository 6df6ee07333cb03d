use serde::{Deserialize, Serialize};

/// Prefix for color style variables (`--theme-<role>`).
pub const COLOR_VAR_PREFIX: &str = "--theme-";
/// Prefix for gradient style variables (`--theme-gradient-<role>`).
pub const GRADIENT_VAR_PREFIX: &str = "--theme-gradient-";

/// Semantic color roles of a theme. Every theme defines the full set; the
/// serde shape enforces that no role can be missing from a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub text: String,
    pub text_light: String,
    pub text_lighter: String,
    pub background: String,
    pub white: String,
}

impl ThemeColors {
    /// Role name / value pairs in declaration order. Role names use the
    /// wire spelling that also names the style variables.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("success", &self.success),
            ("warning", &self.warning),
            ("danger", &self.danger),
            ("info", &self.info),
            ("text", &self.text),
            ("textLight", &self.text_light),
            ("textLighter", &self.text_lighter),
            ("background", &self.background),
            ("white", &self.white),
        ]
    }
}

/// Gradient roles of a theme, as CSS gradient value strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeGradients {
    pub background: String,
    pub header: String,
    pub button: String,
    pub card: String,
}

impl ThemeGradients {
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("background", &self.background),
            ("header", &self.header),
            ("button", &self.button),
            ("card", &self.card),
        ]
    }
}

/// A named palette applied as a set of UI style variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name shown in the theme switcher.
    pub name: String,
    pub colors: ThemeColors,
    pub gradients: ThemeGradients,
}

impl Theme {
    /// The full set of style variables this theme resolves to, one per
    /// color role and one per gradient role.
    pub fn style_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::with_capacity(15);
        for (role, value) in self.colors.entries() {
            vars.push((format!("{COLOR_VAR_PREFIX}{role}"), value.to_string()));
        }
        for (role, value) in self.gradients.entries() {
            vars.push((format!("{GRADIENT_VAR_PREFIX}{role}"), value.to_string()));
        }
        vars
    }
}

/// Parse a `#rrggbb` color string into its components.
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Invalid hex color format");
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> Theme {
        toml::from_str(include_str!("../../themes/default.toml")).expect("default theme parses")
    }

    #[test]
    fn style_variables_cover_every_role() {
        let theme = sample_theme();
        let vars = theme.style_variables();
        assert_eq!(vars.len(), 15);
        assert!(vars.iter().any(|(name, _)| name == "--theme-primary"));
        assert!(vars.iter().any(|(name, _)| name == "--theme-textLight"));
        assert!(
            vars.iter()
                .any(|(name, _)| name == "--theme-gradient-header")
        );
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex_color("#667eea"), Ok((0x66, 0x7e, 0xea)));
        assert_eq!(parse_hex_color("ffffff"), Ok((255, 255, 255)));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
        // Six bytes but not six ASCII hex digits.
        assert!(parse_hex_color("#aééa").is_err());
    }
}
