//! Settings loading (`folio.toml`)
//!
//! Settings live at `~/.config/folio/folio.toml` unless a path is given on
//! the command line. A missing file is not an error; defaults apply and the
//! contact form reports its endpoint as unconfigured.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use folio_core::prelude::*;

/// Placeholder shipped in the sample config. Treated the same as an empty
/// value by [`ContactSettings::is_configured`].
pub const WEBHOOK_PLACEHOLDER: &str = "PASTE_WEBHOOK_URL_HERE";

/// Contact form delivery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Endpoint the contact payload is POSTed to.
    pub webhook_url: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            webhook_url: WEBHOOK_PLACEHOLDER.to_string(),
        }
    }
}

impl ContactSettings {
    /// Whether a real endpoint has been set.
    ///
    /// Empty values, the shipped placeholder, and strings that do not parse
    /// as http(s) URLs all count as unconfigured.
    pub fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }

    /// The parsed endpoint, `None` when unconfigured.
    pub fn endpoint(&self) -> Option<Url> {
        let raw = self.webhook_url.trim();
        if raw.is_empty() || raw == WEBHOOK_PLACEHOLDER {
            return None;
        }
        let url = Url::parse(raw).ok()?;
        matches!(url.scheme(), "http" | "https").then_some(url)
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub contact: ContactSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults. A file that exists but fails to parse
    /// is an error; silently ignoring a typo'd config would be worse than
    /// refusing to start.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let settings = Self::from_toml_str(&text).map_err(|e| {
            error!("Failed to parse config {}: {e}", path.display());
            Error::config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Default config file location: `~/.config/folio/folio.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("folio.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let settings = Settings::default();
        assert!(!settings.contact.is_configured());
        assert!(settings.contact.endpoint().is_none());
    }

    #[test]
    fn test_placeholder_is_unconfigured() {
        let contact = ContactSettings {
            webhook_url: WEBHOOK_PLACEHOLDER.to_string(),
        };
        assert!(!contact.is_configured());

        // Whitespace around the sentinel does not make it an endpoint.
        let contact = ContactSettings {
            webhook_url: format!("  {WEBHOOK_PLACEHOLDER}  "),
        };
        assert!(!contact.is_configured());
    }

    #[test]
    fn test_empty_and_garbage_are_unconfigured() {
        for raw in ["", "   ", "not a url", "ftp://example.com/hook"] {
            let contact = ContactSettings {
                webhook_url: raw.to_string(),
            };
            assert!(!contact.is_configured(), "{raw:?} should be unconfigured");
        }
    }

    #[test]
    fn test_real_url_is_configured() {
        let contact = ContactSettings {
            webhook_url: "https://script.example.com/exec".to_string(),
        };
        assert!(contact.is_configured());
        assert_eq!(
            contact.endpoint().unwrap().as_str(),
            "https://script.example.com/exec"
        );
    }

    #[test]
    fn test_parse_settings_toml() {
        let settings = Settings::from_toml_str(
            r#"
            [contact]
            webhook_url = "https://hooks.example.com/abc"
            "#,
        )
        .unwrap();
        assert!(settings.contact.is_configured());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings = Settings::from_toml_str(
            r#"
            [contact]
            webhook_url = "https://hooks.example.com/abc"

            [future_section]
            key = 1
            "#,
        )
        .unwrap();
        assert!(settings.contact.is_configured());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = Settings::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap();
        assert!(!settings.contact.is_configured());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[contact\nbroken").unwrap();
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("folio.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "[contact]\nwebhook_url = \"https://hooks.example.com/x\"\n",
        )
        .unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert!(settings.contact.is_configured());
    }
}
