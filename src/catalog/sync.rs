use chrono::Utc;
use log::info;
use reqwest::Client;
use serde::Serialize;

use super::model::InterviewQuestion;
use super::{CatalogError, Result};

#[derive(Serialize)]
struct SyncPayload<'a> {
    questions: &'a [InterviewQuestion],
    completed: &'a [String],
    #[serde(rename = "updatedAt")]
    updated_at: String,
}

/// One POST of the full catalog state to the configured endpoint. A single
/// attempt: no retry, no backoff, no timeout beyond the transport's own.
pub async fn push_to_cloud(
    endpoint: &str,
    questions: &[InterviewQuestion],
    completed: &[String],
) -> Result<()> {
    info!(
        "Syncing {} questions ({} completed) to {}",
        questions.len(),
        completed.len(),
        endpoint
    );

    let payload = SyncPayload {
        questions,
        completed,
        updated_at: Utc::now().to_rfc3339(),
    };

    let client = Client::new();
    let response = client
        .post(endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| CatalogError::Remote(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            format!("Сервер ответил статусом {status}")
        } else {
            body
        };
        return Err(CatalogError::Remote(message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults::default_questions;

    #[test]
    fn test_payload_wire_shape() {
        let questions = default_questions();
        let completed = vec!["saga-pattern".to_string()];
        let payload = SyncPayload {
            questions: &questions,
            completed: &completed,
            updated_at: "2024-06-01T10:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("questions").unwrap().is_array());
        assert_eq!(
            value.get("completed").unwrap(),
            &serde_json::json!(["saga-pattern"])
        );
        // The timestamp field keeps the page's camelCase name.
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("updated_at").is_none());
    }
}
