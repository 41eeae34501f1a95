//! Safe traversal into untyped JSON values.

use serde_json::Value;

/// Walk `path` through nested JSON objects.
///
/// Returns `None` as soon as a key is absent or an intermediate value
/// is not an object — no partial results.
#[must_use]
pub fn extract_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.as_object()?.get(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_key() {
        let value = json!({"location": {"name": "Paris"}});
        assert_eq!(extract_path(&value, &["location"]), Some(&json!({"name": "Paris"})));
    }

    #[test]
    fn test_nested_key() {
        let value = json!({"current": {"astro": {"sunrise": "07:42 AM"}}});
        assert_eq!(
            extract_path(&value, &["current", "astro"]),
            Some(&json!({"sunrise": "07:42 AM"}))
        );
    }

    #[test]
    fn test_missing_key() {
        let value = json!({"current": {"temperature": 12}});
        assert_eq!(extract_path(&value, &["current", "astro"]), None);
    }

    #[test]
    fn test_non_object_along_path() {
        let value = json!({"current": "unavailable"});
        assert_eq!(extract_path(&value, &["current", "astro"]), None);
    }

    #[test]
    fn test_array_along_path() {
        let value = json!({"current": [1, 2, 3]});
        assert_eq!(extract_path(&value, &["current", "astro"]), None);
    }

    #[test]
    fn test_empty_path_returns_root() {
        let value = json!({"key": "value"});
        assert_eq!(extract_path(&value, &[]), Some(&value));
    }
}
