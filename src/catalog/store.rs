use indexmap::IndexMap;
use log::{debug, warn};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::Value;

use super::defaults::default_questions;
use super::model::{sanitize_question, InterviewQuestion};
use super::{CatalogError, Result};
use crate::storage::KeyValueStore;

pub const DATA_STORAGE_KEY: &str = "interviewQuestions:data";
pub const COMPLETED_STORAGE_KEY: &str = "interviewQuestions:completed";

/// The authoritative in-memory question list plus the completion map, both
/// mirrored to client-local storage. The completion map lives its own life:
/// it may reference ids no longer present in the list and is never pruned.
pub struct QuestionCatalog {
    questions: Vec<InterviewQuestion>,
    completed: IndexMap<String, bool>,
}

impl QuestionCatalog {
    /// Seed with the defaults, overlay whatever was last persisted (if it
    /// parses and sanitizes to something non-empty), and write the result
    /// straight back — the page persists on initial mount too. Corrupt blobs
    /// never surface an error.
    pub fn load(store: &KeyValueStore) -> Self {
        let mut catalog = Self {
            questions: default_questions(),
            completed: IndexMap::new(),
        };

        if let Some(raw) = store.get(DATA_STORAGE_KEY) {
            match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(entries) => {
                    let sanitized: Vec<InterviewQuestion> =
                        entries.iter().filter_map(sanitize_question).collect();
                    if !sanitized.is_empty() {
                        catalog.questions = sanitized;
                    }
                }
                Err(e) => debug!("Ignoring corrupt question blob: {e}"),
            }
        }

        if let Some(raw) = store.get(COMPLETED_STORAGE_KEY) {
            match serde_json::from_str::<IndexMap<String, bool>>(&raw) {
                Ok(map) => catalog.completed = map,
                Err(e) => debug!("Ignoring corrupt completion blob: {e}"),
            }
        }

        catalog.save(store);
        catalog
    }

    /// Serialize and write both blobs unconditionally.
    pub fn save(&self, store: &KeyValueStore) {
        match serde_json::to_string(&self.questions) {
            Ok(raw) => store.set(DATA_STORAGE_KEY, raw),
            Err(e) => warn!("Failed to serialize questions: {e}"),
        }
        match serde_json::to_string(&self.completed) {
            Ok(raw) => store.set(COMPLETED_STORAGE_KEY, raw),
            Err(e) => warn!("Failed to serialize completion map: {e}"),
        }
    }

    pub fn questions(&self) -> &[InterviewQuestion] {
        &self.questions
    }

    pub fn completed(&self) -> &IndexMap<String, bool> {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.values().filter(|done| **done).count()
    }

    /// Ids currently marked done, in completion-map order.
    pub fn completed_ids(&self) -> Vec<String> {
        self.completed
            .iter()
            .filter(|(_, done)| **done)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Flip the flag for `id`, inserting `true` when absent. The id does not
    /// have to exist in the question list.
    pub fn toggle_completion(&mut self, id: &str) -> bool {
        let entry = self.completed.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Replace the whole list with the sanitized contents of `raw`. The
    /// completion map is left untouched, so ids from the old set may become
    /// orphans. Returns the number of imported questions.
    pub fn import_from_text(&mut self, raw: &str) -> Result<usize> {
        let entries: Vec<Value> = serde_json::from_str(raw)?;
        let sanitized: Vec<InterviewQuestion> =
            entries.iter().filter_map(sanitize_question).collect();
        if sanitized.is_empty() {
            return Err(CatalogError::NoValidQuestions);
        }
        let imported = sanitized.len();
        self.questions = sanitized;
        Ok(imported)
    }

    pub fn export_to_text(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.questions)?)
    }

    /// Back to the hardcoded preset; the completion map stays as is.
    pub fn reset(&mut self) {
        self.questions = default_questions();
    }
}

// Shared catalog instance backing the commands.
pub static CATALOG: Lazy<Mutex<QuestionCatalog>> =
    Lazy::new(|| Mutex::new(QuestionCatalog::load(&crate::storage::STORE)));
