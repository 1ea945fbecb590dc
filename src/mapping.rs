//! Mapping cleanup for JSON-shaped data.

use serde_json::{Map, Value};

/// Returns a copy of `mapping` without entries whose value is `null` or the
/// empty string.
///
/// Falsy-but-defined values (`0`, `false`, `0.0`) are retained unchanged, and
/// key order follows the input. The input map is not modified.
pub fn filter_empty_keys(mapping: &Map<String, Value>) -> Map<String, Value> {
    let mut filtered = Map::new();
    for (key, value) in mapping {
        if is_empty_value(value) {
            continue;
        }
        filtered.insert(key.clone(), value.clone());
    }
    filtered
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn strips_null_and_empty_string() {
        let input = as_map(json!({
            "a": 1,
            "b": null,
            "d": "",
            "e": 0,
            "f": false,
        }));
        let filtered = filter_empty_keys(&input);
        assert_eq!(
            Value::Object(filtered),
            json!({ "a": 1, "e": 0, "f": false })
        );
    }

    #[test]
    fn keeps_key_order() {
        let input = as_map(json!({
            "z": 1,
            "gone": null,
            "m": "x",
            "a": 2,
        }));
        let filtered = filter_empty_keys(&input);
        let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
    }

    #[test]
    fn values_pass_through_unaltered() {
        let input = as_map(json!({
            "nested": { "inner": null },
            "list": [1, "", null],
            "text": "  padded  ",
        }));
        let filtered = filter_empty_keys(&input);
        // Only top-level entries are inspected; retained values are verbatim.
        assert_eq!(filtered.get("nested"), input.get("nested"));
        assert_eq!(filtered.get("list"), input.get("list"));
        assert_eq!(filtered.get("text"), input.get("text"));
    }

    #[test]
    fn all_empty_yields_empty_map() {
        let input = as_map(json!({ "a": null, "b": "" }));
        assert!(filter_empty_keys(&input).is_empty());
    }

    #[test]
    fn input_is_untouched() {
        let input = as_map(json!({ "a": 1, "b": null }));
        let before = input.clone();
        let _ = filter_empty_keys(&input);
        assert_eq!(input, before);
    }
}
