use std::{collections::HashSet, future::Future};

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, warn};

/// Persistent string-keyed storage, the only place state lives.
///
/// Reads and writes are independent; there is no atomicity across keys.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get_string(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
    fn set_string(&self, key: &str, value: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn remove(&self, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Stored list, or empty when absent or malformed.
    fn get_list(&self, key: &str) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send {
        async move {
            Ok(self
                .get_string(key)
                .await?
                .map(|raw| decode_list(key, &raw))
                .unwrap_or_default())
        }
    }

    /// Store `items` with duplicates collapsed.
    fn set_list(&self, key: &str, items: &[String]) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move {
            let encoded = encode_list(items)
                .with_context(|| format!("Failed to encode list for key {:?}", key))?;
            self.set_string(key, &encoded).await
        }
    }
}

/// Non-JSON and non-array values read as empty. Non-string elements are dropped.
pub(crate) fn decode_list(key: &str, raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => {
            let total = items.len();
            let ids: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(id),
                    _ => None,
                })
                .collect();
            if ids.len() < total {
                debug!(key, dropped = total - ids.len(), "non-string list elements skipped");
            }
            ids
        }
        Err(e) => {
            warn!(key, error = %e, "malformed stored list, treating as empty");
            Vec::new()
        }
    }
}

/// JSON array of `items`, keeping the first occurrence of each id.
pub(crate) fn encode_list(items: &[String]) -> anyhow::Result<String> {
    let mut seen = HashSet::with_capacity(items.len());
    let unique: Vec<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|item| seen.insert(*item))
        .collect();
    Ok(serde_json::to_string(&unique)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_lists_decode_empty() {
        assert!(decode_list("k", "not json").is_empty());
        assert!(decode_list("k", r#"{"a": 1}"#).is_empty());
        assert!(decode_list("k", "42").is_empty());
        assert_eq!(decode_list("k", r#"["a","b"]"#), vec!["a", "b"]);
    }

    #[test]
    fn non_string_elements_are_skipped() {
        assert_eq!(decode_list("k", r#"["a", 1, null, "b", {"c": 2}]"#), vec!["a", "b"]);
        assert!(decode_list("k", "[1, 2]").is_empty());
    }

    #[test]
    fn encode_collapses_duplicates() {
        let items: Vec<String> = ["a", "b", "a", "c", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(encode_list(&items).unwrap(), r#"["a","b","c"]"#);
    }
}
