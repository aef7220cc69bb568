use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/initwiz/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Landing page of the project generator the host browser should open.
    pub service_url: String,
    /// URL path whose requests are treated as "generate archive" downloads.
    /// Compared for exact equality, so it must start with `/`.
    pub generate_path: String,
    /// Connect timeout for the archive GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout for the archive GET, in seconds.
    pub request_timeout_secs: u64,
    /// Maximum number of redirects to follow before giving up.
    pub max_redirects: u32,
    /// Optional User-Agent override for the archive GET.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            service_url: "https://start.spring.io".to_string(),
            generate_path: "/starter.zip".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 120,
            max_redirects: 10,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("initwiz")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WizardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WizardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WizardConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = WizardConfig::default();
        assert_eq!(cfg.service_url, "https://start.spring.io");
        assert_eq!(cfg.generate_path, "/starter.zip");
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 120);
        assert_eq!(cfg.max_redirects, 10);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WizardConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WizardConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.service_url, cfg.service_url);
        assert_eq!(parsed.generate_path, cfg.generate_path);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
        assert_eq!(parsed.max_redirects, cfg.max_redirects);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            service_url = "https://starter.internal.example"
            generate_path = "/project.zip"
            connect_timeout_secs = 5
            request_timeout_secs = 30
            max_redirects = 2
        "#;
        let cfg: WizardConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.service_url, "https://starter.internal.example");
        assert_eq!(cfg.generate_path, "/project.zip");
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.max_redirects, 2);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_user_agent() {
        let toml = r#"
            service_url = "https://start.spring.io"
            generate_path = "/starter.zip"
            connect_timeout_secs = 15
            request_timeout_secs = 120
            max_redirects = 10
            user_agent = "initwiz/0.1"
        "#;
        let cfg: WizardConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.user_agent.as_deref(), Some("initwiz/0.1"));
    }
}
