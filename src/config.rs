use config::{Config, Environment};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::Deserialize;
use validator::Validate;

/// Feature toggles for the site, all optional: every feature degrades to
/// "disabled" when its variable is unset. Values are read from the runtime
/// environment (FOLIO_* variables) with build-time embedded copies as
/// fallback, the same embedded-or-runtime scheme the build script sets up.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(url)]
    pub questions_sync_url: Option<String>,
    pub donate_url: Option<String>,
    pub announcement: Option<String>,
    pub analytics_domain: Option<String>,
    #[validate(url)]
    pub site_url: Option<String>,
    pub project_placeholders: Option<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        let runtime = Config::builder()
            .add_source(Environment::with_prefix("FOLIO"))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<AppConfig>());

        let mut cfg = match runtime {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to read FOLIO_* environment variables: {e}");
                AppConfig::default()
            }
        };

        // Build-time embedded values fill whatever the runtime environment
        // left unset.
        cfg.questions_sync_url = cfg
            .questions_sync_url
            .or_else(|| embedded(option_env!("FOLIO_QUESTIONS_SYNC_URL")));
        cfg.donate_url = cfg
            .donate_url
            .or_else(|| embedded(option_env!("FOLIO_DONATE_URL")));
        cfg.announcement = cfg
            .announcement
            .or_else(|| embedded(option_env!("FOLIO_ANNOUNCEMENT")));
        cfg.analytics_domain = cfg
            .analytics_domain
            .or_else(|| embedded(option_env!("FOLIO_ANALYTICS_DOMAIN")));
        cfg.site_url = cfg
            .site_url
            .or_else(|| embedded(option_env!("FOLIO_SITE_URL")));
        cfg.project_placeholders = cfg
            .project_placeholders
            .or_else(|| embedded(option_env!("FOLIO_PROJECT_PLACEHOLDERS")));

        cfg.drop_invalid();
        cfg
    }

    /// A field failing validation is treated as unset, never fatal.
    fn drop_invalid(&mut self) {
        if let Err(errors) = self.validate() {
            for field in errors.field_errors().keys() {
                warn!("Ignoring invalid configuration value for {field}");
                match *field {
                    "questions_sync_url" => self.questions_sync_url = None,
                    "site_url" => self.site_url = None,
                    _ => {}
                }
            }
        }
    }
}

fn embedded(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn log_environment_status(cfg: &AppConfig) {
    info!("🔧 Feature configuration (embedded + runtime fallback):");

    match &cfg.questions_sync_url {
        Some(url) => info!("✅ Questions sync endpoint: {url}"),
        None => warn!("❌ FOLIO_QUESTIONS_SYNC_URL not set - cloud sync is disabled"),
    }
    match &cfg.donate_url {
        Some(url) => info!("✅ Donate link: {url}"),
        None => info!("Donate link not set, footer falls back to '#'"),
    }
    match &cfg.announcement {
        Some(_) => info!("✅ Announcement bar enabled"),
        None => info!("Announcement bar disabled"),
    }
    match &cfg.analytics_domain {
        Some(domain) => info!("✅ Analytics domain: {domain}"),
        None => info!("Analytics disabled"),
    }
    match &cfg.site_url {
        Some(url) => info!("✅ Site URL for QR badge: {url}"),
        None => info!("Site URL not set, QR badge hidden"),
    }
    if cfg.project_placeholders.is_some() {
        info!("✅ Placeholder projects configured");
    }
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::load);
