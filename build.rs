use std::env;

// Feature toggles the site reads at runtime. Values present at build time are
// embedded into the binary via cargo:rustc-env, with runtime env vars taking
// precedence over the embedded copies (see src/config.rs).
const EMBEDDED_VARS: &[&str] = &[
    "FOLIO_QUESTIONS_SYNC_URL",
    "FOLIO_DONATE_URL",
    "FOLIO_ANNOUNCEMENT",
    "FOLIO_ANALYTICS_DOMAIN",
    "FOLIO_SITE_URL",
    "FOLIO_PROJECT_PLACEHOLDERS",
];

fn main() {
    // Load .env during build so local builds pick up the same toggles that
    // CI injects through the environment.
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=No .env file loaded ({e}), using system environment variables");
    }

    for key in EMBEDDED_VARS {
        match env::var(key) {
            Ok(value) => {
                println!("cargo:rustc-env={key}={value}");
                println!("cargo:warning=Embedded {key} (length: {})", value.len());
            }
            Err(_) => {
                println!("cargo:warning={key} not set during build, feature stays disabled unless provided at runtime");
            }
        }
        println!("cargo:rerun-if-env-changed={key}");
    }

    tauri_build::build()
}
