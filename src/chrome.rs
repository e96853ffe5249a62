use chrono::{DateTime, Duration, Utc};
use log::warn;
use qrcode::render::svg;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::storage::KeyValueStore;

pub const VISIT_COUNT_KEY: &str = "visit-count";
pub const ANNOUNCEMENT_DISMISSED_KEY: &str = "announcementDismissed";
pub const COOKIE_CONSENT_KEY: &str = "cookie-consent";

const CONSENT_DAYS: i64 = 365;
const QR_SIZE: u32 = 96;

/// Bump and return the visit counter. A missing or garbled stored value
/// counts as zero.
pub fn record_visit(store: &KeyValueStore) -> u64 {
    let current = store
        .get(VISIT_COUNT_KEY)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = current + 1;
    store.set(VISIT_COUNT_KEY, next.to_string());
    next
}

#[derive(Debug, Clone, Serialize)]
pub struct Announcement {
    pub message: String,
}

/// The bar shows while a message is configured and not yet dismissed.
pub fn announcement(store: &KeyValueStore, cfg: &AppConfig) -> Option<Announcement> {
    let message = cfg.announcement.clone()?;
    if store.get(ANNOUNCEMENT_DISMISSED_KEY).as_deref() == Some("true") {
        return None;
    }
    Some(Announcement { message })
}

pub fn dismiss_announcement(store: &KeyValueStore) {
    store.set(ANNOUNCEMENT_DISMISSED_KEY, "true");
}

// The original site kept consent in a cookie with a one-year expiry; the
// desktop build keeps the same shape in the key/value store.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConsentRecord {
    accepted: bool,
    expires_at: DateTime<Utc>,
}

pub fn consent_required(store: &KeyValueStore) -> bool {
    match store
        .get(COOKIE_CONSENT_KEY)
        .and_then(|raw| serde_json::from_str::<ConsentRecord>(&raw).ok())
    {
        Some(record) => !record.accepted || record.expires_at <= Utc::now(),
        None => true,
    }
}

pub fn accept_consent(store: &KeyValueStore) {
    let record = ConsentRecord {
        accepted: true,
        expires_at: Utc::now() + Duration::days(CONSENT_DAYS),
    };
    if let Ok(raw) = serde_json::to_string(&record) {
        store.set(COOKIE_CONSENT_KEY, raw);
    }
}

/// `withHttps` from the page footer: external links default to https and an
/// absent link degrades to "#".
pub fn with_https(url: Option<&str>) -> String {
    match url.filter(|url| !url.is_empty()) {
        None => "#".to_string(),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(url) => format!("https://{url}"),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    pub donate_url: String,
    pub site_url: Option<String>,
    pub analytics_domain: Option<String>,
    pub analytics_src: Option<String>,
}

pub fn site_meta(cfg: &AppConfig) -> SiteMeta {
    let analytics_domain = cfg.analytics_domain.clone();
    SiteMeta {
        donate_url: with_https(cfg.donate_url.as_deref()),
        site_url: cfg.site_url.clone(),
        analytics_src: analytics_domain
            .as_ref()
            .map(|_| "https://plausible.io/js/script.js".to_string()),
        analytics_domain,
    }
}

/// SVG QR code pointing at the site, rendered in the footer badge. No site
/// URL, no badge.
pub fn qr_badge_svg(site_url: Option<&str>) -> Option<String> {
    let url = site_url.map(str::trim).filter(|url| !url.is_empty())?;
    match QrCode::new(url.as_bytes()) {
        Ok(code) => Some(
            code.render::<svg::Color>()
                .min_dimensions(QR_SIZE, QR_SIZE)
                .dark_color(svg::Color("currentColor"))
                .light_color(svg::Color("transparent"))
                .build(),
        ),
        Err(e) => {
            warn!("Failed to render QR badge: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (tempfile::TempDir, KeyValueStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());
        (dir, store)
    }

    #[test]
    fn test_visit_counter_increments_and_persists() {
        let (_dir, store) = open_store();
        assert_eq!(record_visit(&store), 1);
        assert_eq!(record_visit(&store), 2);
        assert_eq!(store.get(VISIT_COUNT_KEY), Some("2".to_string()));
    }

    #[test]
    fn test_visit_counter_recovers_from_garbage() {
        let (_dir, store) = open_store();
        store.set(VISIT_COUNT_KEY, "many");
        assert_eq!(record_visit(&store), 1);
    }

    #[test]
    fn test_announcement_visibility() {
        let (_dir, store) = open_store();
        let mut cfg = AppConfig::default();
        assert!(announcement(&store, &cfg).is_none());

        cfg.announcement = Some("Скоро новый раздел".to_string());
        assert!(announcement(&store, &cfg).is_some());

        dismiss_announcement(&store);
        assert!(announcement(&store, &cfg).is_none());
    }

    #[test]
    fn test_consent_lifecycle() {
        let (_dir, store) = open_store();
        assert!(consent_required(&store));

        accept_consent(&store);
        assert!(!consent_required(&store));

        // An expired record requires the banner again.
        let expired = ConsentRecord {
            accepted: true,
            expires_at: Utc::now() - Duration::days(1),
        };
        store.set(COOKIE_CONSENT_KEY, serde_json::to_string(&expired).unwrap());
        assert!(consent_required(&store));
    }

    #[test]
    fn test_with_https_normalization() {
        assert_eq!(with_https(None), "#");
        assert_eq!(with_https(Some("")), "#");
        assert_eq!(with_https(Some("https://boosty.to/almir")), "https://boosty.to/almir");
        assert_eq!(with_https(Some("http://legacy.link")), "http://legacy.link");
        assert_eq!(with_https(Some("boosty.to/almir")), "https://boosty.to/almir");
    }

    #[test]
    fn test_site_meta_analytics_follow_domain() {
        let cfg = AppConfig {
            analytics_domain: Some("almir.dev".to_string()),
            ..AppConfig::default()
        };
        let meta = site_meta(&cfg);
        assert_eq!(meta.analytics_domain.as_deref(), Some("almir.dev"));
        assert!(meta.analytics_src.is_some());

        let empty = site_meta(&AppConfig::default());
        assert_eq!(empty.donate_url, "#");
        assert!(empty.analytics_src.is_none());
    }

    #[test]
    fn test_qr_badge_requires_site_url() {
        assert!(qr_badge_svg(None).is_none());
        assert!(qr_badge_svg(Some("   ")).is_none());

        let svg = qr_badge_svg(Some("https://almir.dev")).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("currentColor"));
    }
}
