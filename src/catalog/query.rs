use serde::{Deserialize, Serialize};

use super::model::{Complexity, Frequency, InterviewQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Default,
    Complexity,
    Frequency,
}

/// "all" (or an unknown value) means no filtering.
pub fn frequency_filter(raw: Option<&str>) -> Option<Frequency> {
    raw.filter(|value| *value != "all").and_then(Frequency::parse)
}

pub fn complexity_filter(raw: Option<&str>) -> Option<Complexity> {
    raw.filter(|value| *value != "all").and_then(Complexity::parse)
}

/// Case-folded concatenation of everything searchable about a question.
pub fn search_blob(question: &InterviewQuestion) -> String {
    let tags = question.tags.join(" ");
    let mut parts: Vec<&str> = vec![question.question.as_str()];
    if let Some(answer) = question.answer.as_deref() {
        if !answer.is_empty() {
            parts.push(answer);
        }
    }
    if !tags.is_empty() {
        parts.push(&tags);
    }
    if let Some(source) = question.source.as_deref() {
        if !source.is_empty() {
            parts.push(source);
        }
    }
    parts.join(" ").to_lowercase()
}

/// Every whitespace token of the query must hit the haystack either as a
/// substring or as an in-order character subsequence. The empty query
/// matches everything. The haystack is expected to be lowercased already.
pub fn fuzzy_match(query: &str, haystack: &str) -> bool {
    let trimmed = query.trim().to_lowercase();
    if trimmed.is_empty() {
        return true;
    }
    trimmed
        .split_whitespace()
        .all(|token| haystack.contains(token) || subsequence_match(token, haystack))
}

// Greedy left-to-right scan consuming one occurrence of each token char.
fn subsequence_match(token: &str, haystack: &str) -> bool {
    let mut rest = haystack;
    for ch in token.chars() {
        match rest.find(ch) {
            Some(pos) => rest = &rest[pos + ch.len_utf8()..],
            None => return false,
        }
    }
    true
}

pub fn run_query(
    questions: &[InterviewQuestion],
    search: &str,
    frequency: Option<Frequency>,
    complexity: Option<Complexity>,
    sort: SortMode,
) -> Vec<InterviewQuestion> {
    let mut result: Vec<InterviewQuestion> = questions
        .iter()
        .filter(|q| fuzzy_match(search, &search_blob(q)))
        .filter(|q| frequency.map_or(true, |f| q.frequency == f))
        .filter(|q| complexity.map_or(true, |c| q.complexity == c))
        .cloned()
        .collect();

    // sort_by_key is stable, equal keys keep the underlying order.
    match sort {
        SortMode::Default => {}
        SortMode::Complexity => {
            result.sort_by_key(|q| (q.complexity.weight(), q.frequency.weight()))
        }
        SortMode::Frequency => {
            result.sort_by_key(|q| (q.frequency.weight(), q.complexity.weight()))
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults::default_questions;

    fn question(id: &str, frequency: Frequency, complexity: Complexity) -> InterviewQuestion {
        InterviewQuestion {
            id: id.to_string(),
            question: format!("Вопрос {id}"),
            answer: None,
            tags: vec![],
            frequency,
            complexity,
            source: None,
        }
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let questions = default_questions();
        let result = run_query(&questions, "", None, None, SortMode::Default);
        assert_eq!(result, questions);
    }

    #[test]
    fn test_fuzzy_subsequence_fallback() {
        assert!(fuzzy_match("gor", "algorithm"));
        // "alm" is not a substring, but a→l→m appears in order.
        assert!(!"algorithm".contains("alm"));
        assert!(fuzzy_match("alm", "algorithm"));
        assert!(!fuzzy_match("zgor", "algorithm"));
        // Substring hits still win outright.
        assert!(fuzzy_match("rith", "algorithm"));
        // Every token must match on its own.
        assert!(fuzzy_match("alg rithm", "algorithm"));
        assert!(!fuzzy_match("alg missing", "algorithm"));
    }

    #[test]
    fn test_search_blob_includes_answer_tags_and_source() {
        let mut q = question("blob", Frequency::Normal, Complexity::Middle);
        q.question = "Как работает token bucket?".to_string();
        q.answer = Some("Объяснить refill rate".to_string());
        q.tags = vec!["Backend".to_string(), "Rate limiting".to_string()];
        q.source = Some("https://example.com/rate".to_string());

        let blob = search_blob(&q);
        assert!(blob.contains("token bucket"));
        assert!(blob.contains("refill rate"));
        assert!(blob.contains("backend rate limiting"));
        assert!(blob.contains("example.com"));
        assert_eq!(blob, blob.to_lowercase());
    }

    #[test]
    fn test_frequency_filter_matches_exact_value() {
        let questions = default_questions();
        let often = run_query(&questions, "", Some(Frequency::Often), None, SortMode::Default);
        assert_eq!(often.len(), 4);
        assert!(often.iter().all(|q| q.frequency == Frequency::Often));

        // Adding the complexity filter narrows by intersection.
        let narrowed = run_query(
            &questions,
            "",
            Some(Frequency::Often),
            Some(Complexity::Middle),
            SortMode::Default,
        );
        assert_eq!(narrowed.len(), 3);
        assert!(narrowed
            .iter()
            .all(|q| q.frequency == Frequency::Often && q.complexity == Complexity::Middle));
    }

    #[test]
    fn test_complexity_sort_is_stable_and_tie_broken_by_frequency() {
        let questions = vec![
            question("a", Frequency::Rare, Complexity::Senior),
            question("b", Frequency::Often, Complexity::Middle),
            question("c", Frequency::Often, Complexity::Senior),
            question("d", Frequency::Often, Complexity::Middle),
            question("e", Frequency::Normal, Complexity::Junior),
        ];

        let sorted = run_query(&questions, "", None, None, SortMode::Complexity);
        let ids: Vec<&str> = sorted.iter().map(|q| q.id.as_str()).collect();
        // Junior first, then the middles (stable: b before d), then seniors
        // ordered by frequency weight.
        assert_eq!(ids, vec!["e", "b", "d", "c", "a"]);
    }

    #[test]
    fn test_frequency_sort_is_the_symmetric_inverse() {
        let questions = vec![
            question("a", Frequency::Rare, Complexity::Junior),
            question("b", Frequency::Often, Complexity::Senior),
            question("c", Frequency::Often, Complexity::Junior),
            question("d", Frequency::Normal, Complexity::Middle),
        ];

        let sorted = run_query(&questions, "", None, None, SortMode::Frequency);
        let ids: Vec<&str> = sorted.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_filter_parsers() {
        assert_eq!(frequency_filter(Some("all")), None);
        assert_eq!(frequency_filter(Some("часто")), Some(Frequency::Often));
        assert_eq!(frequency_filter(None), None);
        assert_eq!(complexity_filter(Some("senior")), Some(Complexity::Senior));
        assert_eq!(complexity_filter(Some("all")), None);
    }
}
