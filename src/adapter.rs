//! Normalizes article payloads from the backend API into [`Article`] values.
//!
//! The backend is loose about shapes: articles arrive wrapped in `data` or
//! bare, ids are strings or numbers, the author can live in three different
//! fields, and view counts are not always numbers. All of that tolerance is
//! confined to this module so the aggregation code only sees canonical data.

use crate::models::{Article, ArticleStatus, ViewRecord};
use serde_json::{Map, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

/// Accepts `{"data": [...]}`, `{"data": {...}}`, a bare array or a bare
/// article object. Entries that are not objects are dropped.
pub fn normalize_payload(payload: &Value) -> Vec<Article> {
    let body = payload.get("data").unwrap_or(payload);
    match body {
        Value::Array(items) => items.iter().filter_map(normalize_article).collect(),
        Value::Object(_) => normalize_article(body).into_iter().collect(),
        other => {
            debug!("ignoring article payload of type {}", json_type(other));
            Vec::new()
        }
    }
}

pub fn normalize_article(value: &Value) -> Option<Article> {
    let Some(obj) = value.as_object() else {
        debug!("skipping non-object article entry");
        return None;
    };

    let id = ["id", "encryptedId"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(id_string))
        .unwrap_or_else(|| {
            let id = content_id(value);
            debug!("article without id stored as {id}");
            id
        });

    Some(Article {
        title: text_field(obj, "title").unwrap_or_default(),
        author_name: person_name(obj, "authorName", &["writer", "author"]),
        editor_name: person_name(obj, "editorName", &["editor"]),
        status: obj
            .get("status")
            .and_then(Value::as_i64)
            .and_then(ArticleStatus::from_code),
        submitted_at: text_field(obj, "submittedAt"),
        published_at: text_field(obj, "publishedAt"),
        views_list: views_list(&id, obj.get("viewsList")),
        id,
    })
}

/// Converts a JSON view count to a whole number of views. Anything that is
/// not a finite, non-negative number counts as zero.
pub fn coerce_views(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|views| views.is_finite() && *views >= 0.0)
                    .map(|views| views.trunc() as u64)
            })
            .unwrap_or(0),
        _ => 0,
    }
}

fn views_list(article_id: &str, value: Option<&Value>) -> Vec<ViewRecord> {
    let records = match value {
        Some(Value::Array(records)) => records,
        None | Some(Value::Null) => return Vec::new(),
        Some(other) => {
            warn!(
                "viewsList of article {article_id} is a {}, treating as empty",
                json_type(other)
            );
            return Vec::new();
        }
    };

    records
        .iter()
        .filter_map(|record| {
            let obj = record.as_object()?;
            Some(ViewRecord {
                date: obj
                    .get("date")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                number_of_views: coerce_views(obj.get("numberOfViews")),
            })
        })
        .collect()
}

fn person_name(obj: &Map<String, Value>, flat_key: &str, nested: &[&str]) -> Option<String> {
    text_field(obj, flat_key).or_else(|| {
        nested.iter().find_map(|key| {
            obj.get(*key)
                .and_then(Value::as_object)
                .and_then(|person| text_field(person, "name"))
        })
    })
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Stable id for an article the backend sent without one, derived from its
/// content so re-ingesting the same payload replaces rather than duplicates.
fn content_id(value: &Value) -> String {
    let mut hasher = DefaultHasher::new();
    value.to_string().hash(&mut hasher);
    format!("anon-{:016x}", hasher.finish())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_wrapped_list_and_drops_non_objects() {
        let payload = json!({
            "data": [
                { "id": 7, "title": "First", "authorName": "A" },
                "not an article",
                42,
                { "encryptedId": "abc", "title": "Second" },
                { "title": "no id" }
            ]
        });

        let articles = normalize_payload(&payload);
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].id, "7");
        assert_eq!(articles[1].id, "abc");
        assert!(articles[2].id.starts_with("anon-"));
        assert_eq!(articles[2].title, "no id");
    }

    #[test]
    fn articles_without_id_keep_their_author_and_a_stable_id() {
        let entry = json!({ "title": "Untracked", "writer": { "name": "W" } });
        let other = json!({ "title": "Also untracked", "writer": { "name": "W" } });

        let first = normalize_article(&entry).unwrap();
        let again = normalize_article(&entry).unwrap();
        let different = normalize_article(&other).unwrap();

        assert_eq!(first.author_name.as_deref(), Some("W"));
        assert_eq!(first.id, again.id);
        assert_ne!(first.id, different.id);
    }

    #[test]
    fn normalizes_single_detail_payload() {
        let payload = json!({
            "data": {
                "id": "x1",
                "title": "Detail",
                "status": 3,
                "publishedAt": "2025-04-21T08:00:00Z",
                "viewsList": [{ "date": "2025-04-21", "numberOfViews": 12 }]
            }
        });

        let articles = normalize_payload(&payload);
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.status, Some(ArticleStatus::Published));
        assert_eq!(article.published_at.as_deref(), Some("2025-04-21T08:00:00Z"));
        assert_eq!(article.views_list, vec![ViewRecord::new("2025-04-21", 12)]);
    }

    #[test]
    fn author_falls_back_through_nested_people() {
        let from_writer = json!({ "id": 1, "authorName": "", "writer": { "name": "W" } });
        let from_author = json!({ "id": 2, "author": { "name": "Au" } });
        let nobody = json!({ "id": 3, "writer": { "name": "   " } });

        assert_eq!(normalize_article(&from_writer).unwrap().author_name.as_deref(), Some("W"));
        assert_eq!(normalize_article(&from_author).unwrap().author_name.as_deref(), Some("Au"));
        assert_eq!(normalize_article(&nobody).unwrap().author_name, None);
    }

    #[test]
    fn view_counts_are_coerced_to_whole_non_negative_numbers() {
        assert_eq!(coerce_views(Some(&json!(5))), 5);
        assert_eq!(coerce_views(Some(&json!(2.9))), 2);
        assert_eq!(coerce_views(Some(&json!(-3))), 0);
        assert_eq!(coerce_views(Some(&json!("12"))), 0);
        assert_eq!(coerce_views(Some(&json!("abc"))), 0);
        assert_eq!(coerce_views(Some(&Value::Null)), 0);
        assert_eq!(coerce_views(None), 0);
    }

    #[test]
    fn malformed_views_list_becomes_empty_or_filtered() {
        let not_array = json!({ "id": 1, "viewsList": "lots" });
        assert!(normalize_article(&not_array).unwrap().views_list.is_empty());

        let missing = json!({ "id": 2 });
        assert!(normalize_article(&missing).unwrap().views_list.is_empty());

        let mixed = json!({
            "id": 3,
            "viewsList": [
                { "date": "2025-04-21", "numberOfViews": "many" },
                null,
                { "date": 20250421, "numberOfViews": 4 },
                { "numberOfViews": 1 }
            ]
        });
        let views = normalize_article(&mixed).unwrap().views_list;
        assert_eq!(
            views,
            vec![
                ViewRecord::new("2025-04-21", 0),
                ViewRecord::new("", 4),
                ViewRecord::new("", 1),
            ]
        );
    }

    #[test]
    fn non_article_payloads_yield_nothing() {
        assert!(normalize_payload(&json!(null)).is_empty());
        assert!(normalize_payload(&json!("text")).is_empty());
        assert!(normalize_payload(&json!({ "data": null })).is_empty());
    }
}
