//! Wire-level query parameters.
//!
//! [`QueryParameters`] is the flat map that ends up in the query string of a
//! request. Values are JSON so that structured entries (`sort`, `filter`) can
//! be carried as-is and flattened into bracket notation only when the request
//! is sent: `filter[logic]=and&filter[filters][0][field]=name`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameter carrying the access token when cookie auth is disabled.
pub const ACCESS_TOKEN_PARAM: &str = "accessToken";

/// Compiled query parameters of a single request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParameters(Map<String, Value>);

impl QueryParameters {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns true if the parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of top-level parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The access token parameter, if present.
    pub fn access_token(&self) -> Option<&str> {
        self.get(ACCESS_TOKEN_PARAM).and_then(Value::as_str)
    }

    /// The `take` parameter, if present and numeric.
    pub fn take(&self) -> Option<u64> {
        self.get("take").and_then(Value::as_u64)
    }

    /// The `skip` parameter, if present and numeric.
    pub fn skip(&self) -> Option<u64> {
        self.get("skip").and_then(Value::as_u64)
    }

    /// Flatten into `(name, value)` pairs using bracket notation.
    ///
    /// Null values are dropped. A top-level array of scalars repeats the
    /// name with a `[]` suffix; nested arrays and objects index into the
    /// name (`sort[0][dir]`).
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (name, value) in &self.0 {
            match value {
                Value::Array(items) if items.iter().all(is_scalar) => {
                    let key = format!("{name}[]");
                    for item in items {
                        if let Some(text) = scalar_text(item) {
                            pairs.push((key.clone(), text));
                        }
                    }
                }
                _ => flatten_into(name.clone(), value, &mut pairs),
            }
        }
        pairs
    }

    /// Render the flattened pairs as an `application/x-www-form-urlencoded`
    /// query string.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.to_pairs()).unwrap_or_default()
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                flatten_into(format!("{key}[{name}]"), item, pairs);
            }
        }
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                pairs.push((key, text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_scalar_params() {
        let params = QueryParameters::new()
            .with("take", 50)
            .with("skip", 0)
            .with("accessToken", "abc")
            .with("strict", true);

        assert_eq!(params.take(), Some(50));
        assert_eq!(params.skip(), Some(0));
        assert_eq!(params.access_token(), Some("abc"));

        let pairs = params.to_pairs();
        assert!(pairs.contains(&pair("take", "50")));
        assert!(pairs.contains(&pair("skip", "0")));
        assert!(pairs.contains(&pair("accessToken", "abc")));
        assert!(pairs.contains(&pair("strict", "true")));
    }

    #[test]
    fn test_top_level_scalar_array_repeats_key() {
        let params = QueryParameters::new().with("fields", json!(["name", "title"]));
        assert_eq!(
            params.to_pairs(),
            vec![pair("fields[]", "name"), pair("fields[]", "title")]
        );
    }

    #[test]
    fn test_array_of_objects_is_indexed() {
        let params = QueryParameters::new().with(
            "sort",
            json!([{"field": "edited", "dir": "desc"}, {"field": "title", "dir": "asc"}]),
        );
        let pairs = params.to_pairs();

        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&pair("sort[0][field]", "edited")));
        assert!(pairs.contains(&pair("sort[0][dir]", "desc")));
        assert!(pairs.contains(&pair("sort[1][field]", "title")));
        assert!(pairs.contains(&pair("sort[1][dir]", "asc")));
    }

    #[test]
    fn test_nested_filter_tree() {
        let params = QueryParameters::new().with(
            "filter",
            json!({
                "logic": "and",
                "filters": [
                    {"field": "name", "operator": "eq", "value": "John"},
                    {"logic": "or", "filters": [
                        {"field": "edited", "operator": "lte", "value": "2023-12-31"}
                    ]}
                ]
            }),
        );
        let pairs = params.to_pairs();

        assert!(pairs.contains(&pair("filter[logic]", "and")));
        assert!(pairs.contains(&pair("filter[filters][0][field]", "name")));
        assert!(pairs.contains(&pair("filter[filters][0][operator]", "eq")));
        assert!(pairs.contains(&pair("filter[filters][0][value]", "John")));
        assert!(pairs.contains(&pair("filter[filters][1][logic]", "or")));
        assert!(pairs.contains(&pair("filter[filters][1][filters][0][value]", "2023-12-31")));
        assert_eq!(pairs.len(), 8);
    }

    #[test]
    fn test_nested_scalar_array_is_indexed() {
        let params = QueryParameters::new().with("filter", json!({"value": ["a", "b"]}));
        assert_eq!(
            params.to_pairs(),
            vec![pair("filter[value][0]", "a"), pair("filter[value][1]", "b")]
        );
    }

    #[test]
    fn test_nulls_are_skipped() {
        let params = QueryParameters::new()
            .with("a", Value::Null)
            .with("b", json!([null, "x"]))
            .with("c", json!({"d": null}));
        assert_eq!(params.to_pairs(), vec![pair("b[]", "x")]);
    }

    #[test]
    fn test_query_string_is_url_encoded() {
        let params = QueryParameters::new()
            .with("fields", json!(["a"]))
            .with("q", "John Doe");
        assert_eq!(params.to_query_string(), "fields%5B%5D=a&q=John+Doe");
    }

    #[test]
    fn test_serializes_transparently() {
        let params = QueryParameters::new().with("xxx", "yyy");
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"xxx": "yyy"}));
        assert_eq!(params.len(), 1);
        assert!(params.contains("xxx"));
    }
}
