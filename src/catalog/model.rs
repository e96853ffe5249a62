use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How often a question comes up in real interviews. Wire values are the
/// page's original Russian labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "часто")]
    Often,
    #[serde(rename = "норма")]
    Normal,
    #[serde(rename = "редко")]
    Rare,
}

impl Frequency {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "часто" => Some(Self::Often),
            "норма" => Some(Self::Normal),
            "редко" => Some(Self::Rare),
            _ => None,
        }
    }

    pub fn weight(self) -> u8 {
        match self {
            Self::Often => 0,
            Self::Normal => 1,
            Self::Rare => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Junior,
    Middle,
    Senior,
}

impl Complexity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "junior" => Some(Self::Junior),
            "middle" => Some(Self::Middle),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    pub fn weight(self) -> u8 {
        match self {
            Self::Junior => 0,
            Self::Middle => 1,
            Self::Senior => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub tags: Vec<String>,
    pub frequency: Frequency,
    pub complexity: Complexity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

// Ids generated for records imported without one; counts across the whole
// process so re-imports never collide.
static IMPORT_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Tags arrive either as an array of strings or as a comma-separated string.
/// Entries are trimmed, empties dropped, duplicates kept.
pub fn ensure_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(raw)) => raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Validate and normalize one raw record. A record survives iff it is an
/// object whose `question` is a non-empty string; invalid enum values fall
/// back to their defaults ("норма" / "middle").
pub fn sanitize_question(input: &Value) -> Option<InterviewQuestion> {
    let obj = input.as_object()?;
    let question = obj.get("question")?.as_str()?.trim();
    if question.is_empty() {
        return None;
    }

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("imported-{}", IMPORT_COUNTER.fetch_add(1, Ordering::Relaxed)));

    let frequency = obj
        .get("frequency")
        .and_then(Value::as_str)
        .and_then(Frequency::parse)
        .unwrap_or(Frequency::Normal);

    let complexity = obj
        .get("complexity")
        .and_then(Value::as_str)
        .and_then(Complexity::parse)
        .unwrap_or(Complexity::Middle);

    Some(InterviewQuestion {
        id,
        question: question.to_string(),
        answer: obj
            .get("answer")
            .and_then(Value::as_str)
            .map(|answer| answer.trim().to_string()),
        tags: ensure_tags(obj.get("tags")),
        frequency,
        complexity,
        source: obj
            .get("source")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|source| !source.is_empty())
            .map(str::to_string),
    })
}
