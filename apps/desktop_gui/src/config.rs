//! Startup configuration: defaults, then an optional TOML prefill file, then CLI flags.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use client_core::Configuration;
use serde::Deserialize;
use shared::domain::Platform;

#[derive(Parser, Debug, Default)]
#[command(
    name = "ad-optimizer-panel",
    about = "Submit ad accounts to an optimization workflow and review its report"
)]
pub struct CliArgs {
    /// Webhook URL prefilled in the form.
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Ad platform preselected in the form (facebook or google).
    #[arg(long)]
    pub platform: Option<Platform>,
    /// Account identifier prefilled in the form.
    #[arg(long)]
    pub account_id: Option<String>,
    /// TOML file with `endpoint`, `platform` and `account_id` prefills.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    pub endpoint: String,
    pub platform: Platform,
    pub account_id: String,
}

impl StartupConfig {
    pub fn into_configuration(self) -> Configuration {
        Configuration {
            endpoint: self.endpoint,
            platform: self.platform,
            account_id: self.account_id,
            ..Configuration::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    platform: Option<Platform>,
    account_id: Option<String>,
}

pub fn load_startup_config(args: &CliArgs) -> anyhow::Result<StartupConfig> {
    let mut startup = StartupConfig::default();

    if let Some(path) = &args.config {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read panel config '{}'", path.display()))?;
        let file_cfg = parse_file_config(&raw)
            .with_context(|| format!("invalid panel config '{}'", path.display()))?;
        apply_file_config(&mut startup, file_cfg);
    }

    if let Some(v) = &args.endpoint {
        startup.endpoint = v.clone();
    }
    if let Some(v) = args.platform {
        startup.platform = v;
    }
    if let Some(v) = &args.account_id {
        startup.account_id = v.clone();
    }

    Ok(startup)
}

fn parse_file_config(raw: &str) -> anyhow::Result<FileConfig> {
    Ok(toml::from_str(raw)?)
}

fn apply_file_config(startup: &mut StartupConfig, file_cfg: FileConfig) {
    if let Some(v) = file_cfg.endpoint {
        startup.endpoint = v;
    }
    if let Some(v) = file_cfg.platform {
        startup.platform = v;
    }
    if let Some(v) = file_cfg.account_id {
        startup.account_id = v;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_config(contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("ad_optimizer_panel_test_{suffix}.toml"));
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn defaults_to_empty_form_on_facebook() {
        let startup = load_startup_config(&CliArgs::default()).expect("load");
        assert_eq!(startup, StartupConfig::default());
        assert_eq!(startup.platform, Platform::Facebook);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let path = temp_config(
            r#"
endpoint = "https://n8n.example.com/webhook/ad-optimizer"
platform = "google"
account_id = "1234567890"
"#,
        );
        let args = CliArgs {
            account_id: Some("9876543210".to_string()),
            config: Some(path.clone()),
            ..CliArgs::default()
        };

        let startup = load_startup_config(&args).expect("load");

        assert_eq!(startup.endpoint, "https://n8n.example.com/webhook/ad-optimizer");
        assert_eq!(startup.platform, Platform::Google);
        assert_eq!(startup.account_id, "9876543210");
        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn rejects_unknown_keys_and_platforms() {
        assert!(parse_file_config("webhook = \"https://x\"").is_err());
        assert!(parse_file_config("platform = \"tiktok\"").is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = CliArgs {
            config: Some(env::temp_dir().join("ad_optimizer_panel_missing.toml")),
            ..CliArgs::default()
        };
        let err = load_startup_config(&args).expect_err("must fail");
        assert!(err.to_string().contains("failed to read panel config"));
    }

    #[test]
    fn startup_prefill_leaves_dates_unpicked() {
        let config = StartupConfig {
            endpoint: "https://hooks.example.com".to_string(),
            platform: Platform::Google,
            account_id: "1234567890".to_string(),
        }
        .into_configuration();

        assert_eq!(config.platform, Platform::Google);
        assert!(config.start_date.is_none());
        assert!(config.end_date.is_none());
    }

    #[test]
    fn parses_platform_flag() {
        let args = CliArgs::try_parse_from(["ad-optimizer-panel", "--platform", "google"])
            .expect("parse");
        assert_eq!(args.platform, Some(Platform::Google));
        assert_eq!(args.log_filter, "info");
    }
}
