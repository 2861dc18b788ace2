use serde::Deserialize;
use shield_client::{ConfigError, ShieldConfig};
use shield_dioxus::ErasedDioxusStyle;

use shield_bootstrap::BootstrapStyle;
use shield_shadcn_ui::ShadcnUiStyle;

const SHADCN_THEME: &str = include_str!("../assets/shadcn-theme.css");

/// Available visual themes
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum StyleName {
    #[default]
    ShadcnUi,
    Bootstrap,
}

impl StyleName {
    pub fn context(self) -> ErasedDioxusStyle {
        match self {
            StyleName::ShadcnUi => ShadcnUiStyle::default().context(),
            StyleName::Bootstrap => BootstrapStyle::default().context(),
        }
    }

    /// Stylesheet the theme needs in addition to `main.css`
    pub fn stylesheet(self) -> Option<&'static str> {
        match self {
            StyleName::ShadcnUi => None,
            StyleName::Bootstrap => {
                Some("https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css")
            }
        }
    }

    /// Script the theme needs at runtime
    pub fn script(self) -> Option<&'static str> {
        match self {
            StyleName::ShadcnUi => Some("https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"),
            StyleName::Bootstrap => None,
        }
    }

    /// Tailwind theme block mapping the `main.css` variables to utility colors
    pub fn tailwind_theme(self) -> Option<&'static str> {
        match self {
            StyleName::ShadcnUi => Some(SHADCN_THEME),
            StyleName::Bootstrap => None,
        }
    }
}

/// Demo configuration: the theme plus the shared Shield settings
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(default)]
    pub style: StyleName,
    #[serde(flatten)]
    pub shield: ShieldConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = DemoConfig::from_toml_str(include_str!("../shield.toml")).unwrap();
        assert_eq!(config.style, StyleName::ShadcnUi);
        assert_eq!(config.shield.api_prefix, "/api/auth");
    }

    #[test]
    fn test_bootstrap_style() {
        let config = DemoConfig::from_toml_str(
            r#"
            style = "bootstrap"
            server_url = "http://localhost:3000"
            "#,
        )
        .unwrap();

        assert_eq!(config.style, StyleName::Bootstrap);
        assert_eq!(config.shield.server_url, "http://localhost:3000");
        assert_eq!(config.shield.default_action_id, "index");
        assert!(config.style.stylesheet().is_some());
    }

    #[test]
    fn test_shadcn_loads_tailwind() {
        let style = StyleName::ShadcnUi;
        assert!(style.stylesheet().is_none());
        assert!(style.script().is_some_and(|src| src.contains("tailwindcss")));
        assert!(style
            .tailwind_theme()
            .is_some_and(|theme| theme.contains("--color-primary: var(--primary)")));

        assert!(StyleName::Bootstrap.script().is_none());
        assert!(StyleName::Bootstrap.tailwind_theme().is_none());
    }

    #[test]
    fn test_unknown_style() {
        assert!(DemoConfig::from_toml_str("style = \"material\"").is_err());
    }
}
