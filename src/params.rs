//! Render parameters and canonical cache-key derivation.
//!
//! Cache keys must be a pure function of (alias, params). Equivalent
//! parameter maps that merely list their keys in a different order have to
//! land on the same cache entry, so params are serialized through
//! [`canonical_json`] (recursive sorted-key encoding) before hashing.

use std::hash::Hasher;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keyed parameters passed to a widget's render call.
///
/// A thin wrapper over a JSON object map. Defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, overwriting any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter as a string slice, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Get a raw parameter value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The params as a JSON value, for canonical encoding.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Canonical JSON encoding: objects emit their keys in sorted order at
/// every nesting level, arrays keep their order, scalars use serde_json's
/// standard formatting.
///
/// This is a stability contract: the output for structurally equal values
/// is byte-identical regardless of map insertion order.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Value's Display handles JSON string escaping.
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(val, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Derive the cache key for an (alias, params) pair.
///
/// Shape: `widget_<alias>_<digest>` where the digest is a stable 64-bit
/// FxHash over the canonical JSON encoding of the params, hex-encoded.
pub fn cache_key(alias: &str, params: &Params) -> String {
    let canonical = canonical_json(&params.to_value());

    let mut hasher = FxHasher::default();
    hasher.write(canonical.as_bytes());

    format!("widget_{}_{:016x}", alias, hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_sorts_keys() {
        let mut params = Params::new();
        params.insert("zeta", 1);
        params.insert("alpha", 2);

        assert_eq!(canonical_json(&params.to_value()), r#"{"alpha":2,"zeta":1}"#);
    }

    #[test]
    fn test_canonical_json_sorts_nested_keys() {
        let a = json!({"outer": {"b": 1, "a": 2}, "list": [3, 1, 2]});
        let b = json!({"list": [3, 1, 2], "outer": {"a": 2, "b": 1}});

        assert_eq!(canonical_json(&a), canonical_json(&b));
        // Arrays keep their order.
        assert!(canonical_json(&a).contains("[3,1,2]"));
    }

    #[test]
    fn test_canonical_json_escapes_strings() {
        let v = json!({"msg": "line\nbreak \"quoted\""});
        let canonical = canonical_json(&v);

        // Must stay parseable JSON with the same content.
        let reparsed: Value = serde_json::from_str(&canonical).unwrap();
        assert_eq!(reparsed, v);
    }

    #[test]
    fn test_cache_key_shape() {
        let key = cache_key("greeting", &Params::new());
        assert!(key.starts_with("widget_greeting_"));
        assert_eq!(key.len(), "widget_greeting_".len() + 16);
    }

    #[test]
    fn test_cache_key_deterministic_across_ordering() {
        let mut p1 = Params::new();
        p1.insert("name", "Ada");
        p1.insert("lang", "en");

        let mut p2 = Params::new();
        p2.insert("lang", "en");
        p2.insert("name", "Ada");

        assert_eq!(cache_key("greeting", &p1), cache_key("greeting", &p2));
    }

    #[test]
    fn test_cache_key_distinguishes_params_and_alias() {
        let mut p1 = Params::new();
        p1.insert("name", "Ada");
        let mut p2 = Params::new();
        p2.insert("name", "Grace");

        assert_ne!(cache_key("greeting", &p1), cache_key("greeting", &p2));
        assert_ne!(cache_key("greeting", &p1), cache_key("farewell", &p1));
    }
}
