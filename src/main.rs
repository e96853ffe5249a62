// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    // Pick up runtime overrides for the embedded FOLIO_* toggles.
    dotenvy::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = folio_lib::run() {
        eprintln!("Error running application: {}", e);
        std::process::exit(1);
    }
}
