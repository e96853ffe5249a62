use std::path::PathBuf;

use anyhow::Result;
use log::{info, warn};
use serde::Serialize;
use tauri::Builder;

pub mod catalog;
pub mod chrome;
pub mod config;
pub mod content;
pub mod design;
pub mod storage;

use catalog::query::{self, SortMode};
use catalog::store::CATALOG;
use catalog::InterviewQuestion;
use chrome::{Announcement, SiteMeta};
use config::CONFIG;
use content::projects::{all_projects, project_by_id};
use content::sections::{search_sections, NAV_ITEMS, SECTIONS};
use content::skills::{self, RadarChart};
use content::{NavItem, Project, Section};
use design::{DesignConfig, DESIGN};
use storage::STORE;

/// Dismissible status message shown under the questions toolbar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTone {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub tone: FeedbackTone,
    pub message: String,
}

impl Feedback {
    fn info(message: impl Into<String>) -> Self {
        Self {
            tone: FeedbackTone::Info,
            message: message.into(),
        }
    }

    fn success(message: impl Into<String>) -> Self {
        Self {
            tone: FeedbackTone::Success,
            message: message.into(),
        }
    }
}

// --- Question catalog commands ---

#[tauri::command]
async fn get_questions() -> Result<Vec<InterviewQuestion>, String> {
    Ok(CATALOG.lock().questions().to_vec())
}

#[tauri::command]
async fn query_questions(
    search: Option<String>,
    frequency: Option<String>,
    complexity: Option<String>,
    sort: Option<SortMode>,
) -> Result<Vec<InterviewQuestion>, String> {
    let catalog = CATALOG.lock();
    Ok(query::run_query(
        catalog.questions(),
        search.as_deref().unwrap_or(""),
        query::frequency_filter(frequency.as_deref()),
        query::complexity_filter(complexity.as_deref()),
        sort.unwrap_or_default(),
    ))
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub completed: usize,
}

#[tauri::command]
async fn get_catalog_stats() -> Result<CatalogStats, String> {
    let catalog = CATALOG.lock();
    Ok(CatalogStats {
        total: catalog.questions().len(),
        completed: catalog.completed_count(),
    })
}

#[tauri::command]
async fn toggle_question_completed(id: String) -> Result<bool, String> {
    let mut catalog = CATALOG.lock();
    let done = catalog.toggle_completion(&id);
    catalog.save(&STORE);
    Ok(done)
}

#[tauri::command]
async fn import_questions(raw: String) -> Result<Feedback, String> {
    let mut catalog = CATALOG.lock();
    match catalog.import_from_text(&raw) {
        Ok(count) => {
            catalog.save(&STORE);
            info!("📥 Imported {count} questions");
            Ok(Feedback::success(format!("Импортировано {count} вопросов.")))
        }
        Err(e) => {
            warn!("Question import failed: {e}");
            Err(e.to_string())
        }
    }
}

#[tauri::command]
async fn import_questions_file(path: String) -> Result<Feedback, String> {
    // Read before taking the catalog lock; the import itself is sync.
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| catalog::CatalogError::from(e).to_string())?;
    import_questions(raw).await
}

#[tauri::command]
async fn export_questions() -> Result<String, String> {
    CATALOG.lock().export_to_text().map_err(|e| e.to_string())
}

/// Fallback for when the webview cannot reach the clipboard: write the
/// export next to the user's downloads and hand back the path.
#[tauri::command]
async fn save_export_file(directory: Option<String>) -> Result<String, String> {
    let payload = CATALOG.lock().export_to_text().map_err(|e| e.to_string())?;

    let dir = directory
        .map(PathBuf::from)
        .or_else(dirs::download_dir)
        .unwrap_or_else(std::env::temp_dir);
    let path = dir.join("interview-questions.json");

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| format!("Не удалось экспортировать вопросы: {e}"))?;
    tokio::fs::write(&path, payload)
        .await
        .map_err(|e| format!("Не удалось экспортировать вопросы: {e}"))?;

    info!("💾 Exported question catalog to {}", path.display());
    Ok(path.to_string_lossy().into_owned())
}

#[tauri::command]
async fn reset_questions() -> Result<Feedback, String> {
    let mut catalog = CATALOG.lock();
    catalog.reset();
    catalog.save(&STORE);
    info!("Question catalog reset to the default preset");
    Ok(Feedback::info("Вернулся дефолтный набор вопросов."))
}

#[tauri::command]
async fn sync_questions() -> Result<Feedback, String> {
    let endpoint = CONFIG
        .questions_sync_url
        .clone()
        .ok_or_else(|| catalog::CatalogError::SyncNotConfigured.to_string())?;

    // Snapshot under the lock, release it for the duration of the request.
    let (questions, completed) = {
        let catalog = CATALOG.lock();
        (catalog.questions().to_vec(), catalog.completed_ids())
    };

    info!("🔄 Syncing question catalog to the cloud...");
    catalog::sync::push_to_cloud(&endpoint, &questions, &completed)
        .await
        .map_err(|e| {
            warn!("Catalog sync failed: {e}");
            e.to_string()
        })?;

    info!("✅ Question catalog synced");
    Ok(Feedback::success("Синхронизировано с облаком."))
}

// --- Content commands ---

#[tauri::command]
async fn get_projects() -> Result<Vec<Project>, String> {
    Ok(all_projects(CONFIG.project_placeholders.as_deref()))
}

#[tauri::command]
async fn get_project(id: String) -> Result<Option<Project>, String> {
    let projects = all_projects(CONFIG.project_placeholders.as_deref());
    Ok(project_by_id(&projects, &id))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsOverview {
    pub groups: Vec<skills::SkillGroup>,
    pub languages: Vec<skills::Language>,
    pub currently_learning: Vec<&'static str>,
}

#[tauri::command]
async fn get_skills_overview() -> Result<SkillsOverview, String> {
    Ok(SkillsOverview {
        groups: skills::skill_groups(),
        languages: skills::languages(),
        currently_learning: skills::currently_learning(),
    })
}

#[tauri::command]
async fn get_radar_chart() -> Result<RadarChart, String> {
    Ok(skills::radar_chart())
}

#[tauri::command]
async fn get_sections() -> Result<Vec<Section>, String> {
    Ok(SECTIONS.to_vec())
}

#[tauri::command]
async fn search_site_sections(query: Option<String>) -> Result<Vec<Section>, String> {
    Ok(search_sections(query.as_deref().unwrap_or("")))
}

#[tauri::command]
async fn get_nav_items() -> Result<Vec<NavItem>, String> {
    Ok(NAV_ITEMS.to_vec())
}

// --- Design commands ---

#[tauri::command]
async fn get_design_config() -> Result<DesignConfig, String> {
    Ok(DESIGN.lock().clone())
}

#[tauri::command]
async fn set_design_config(config: DesignConfig) -> Result<DesignConfig, String> {
    let mut design = DESIGN.lock();
    *design = config;
    design.save(&STORE);
    Ok(design.clone())
}

#[tauri::command]
async fn cycle_theme() -> Result<DesignConfig, String> {
    let mut design = DESIGN.lock();
    design.theme = design.theme.next();
    design.save(&STORE);
    Ok(design.clone())
}

#[tauri::command]
async fn apply_design_preset(name: String) -> Result<DesignConfig, String> {
    let preset =
        design::preset(&name).ok_or_else(|| format!("Неизвестный пресет: {name}"))?;
    let mut design = DESIGN.lock();
    *design = preset;
    design.save(&STORE);
    Ok(design.clone())
}

#[tauri::command]
async fn export_design_config() -> Result<String, String> {
    serde_json::to_string(&*DESIGN.lock()).map_err(|e| e.to_string())
}

/// Pasted JSON applies only the fields it carries; garbage changes nothing.
#[tauri::command]
async fn import_design_config(raw: String) -> Result<DesignConfig, String> {
    let mut design = DESIGN.lock();
    design.apply_import(&raw);
    design.save(&STORE);
    Ok(design.clone())
}

// --- Chrome commands ---

#[tauri::command]
async fn record_visit() -> Result<u64, String> {
    Ok(chrome::record_visit(&STORE))
}

#[tauri::command]
async fn get_announcement() -> Result<Option<Announcement>, String> {
    Ok(chrome::announcement(&STORE, &CONFIG))
}

#[tauri::command]
async fn dismiss_announcement() -> Result<(), String> {
    chrome::dismiss_announcement(&STORE);
    Ok(())
}

#[tauri::command]
async fn cookie_consent_required() -> Result<bool, String> {
    Ok(chrome::consent_required(&STORE))
}

#[tauri::command]
async fn accept_cookie_consent() -> Result<(), String> {
    chrome::accept_consent(&STORE);
    Ok(())
}

#[tauri::command]
async fn get_qr_badge() -> Result<Option<String>, String> {
    Ok(chrome::qr_badge_svg(CONFIG.site_url.as_deref()))
}

#[tauri::command]
async fn get_site_meta() -> Result<SiteMeta, String> {
    Ok(chrome::site_meta(&CONFIG))
}

pub fn run() -> Result<()> {
    info!("Folio starting with embedded environment configuration...");
    config::log_environment_status(&CONFIG);

    Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|_app| {
            info!("Folio application starting up...");
            {
                let catalog = CATALOG.lock();
                info!(
                    "📚 Question catalog ready: {} questions, {} marked done",
                    catalog.questions().len(),
                    catalog.completed_count()
                );
            }
            let design = DESIGN.lock();
            info!("🎨 Design config: {:?} / {}", design.theme, design.font);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Question catalog
            get_questions,
            query_questions,
            get_catalog_stats,
            toggle_question_completed,
            import_questions,
            import_questions_file,
            export_questions,
            save_export_file,
            reset_questions,
            sync_questions,
            // Content sections
            get_projects,
            get_project,
            get_skills_overview,
            get_radar_chart,
            get_sections,
            search_site_sections,
            get_nav_items,
            // Design editor
            get_design_config,
            set_design_config,
            cycle_theme,
            apply_design_preset,
            export_design_config,
            import_design_config,
            // Page chrome
            record_visit,
            get_announcement,
            dismiss_announcement,
            cookie_consent_required,
            accept_cookie_consent,
            get_qr_badge,
            get_site_meta
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");

    Ok(())
}
