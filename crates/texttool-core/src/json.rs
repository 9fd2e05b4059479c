//! JSON formatting
//!
//! Round-trips through `serde_json::Value` with the `preserve_order`
//! feature, so object keys come back in their original order.

use crate::error::TextToolError;
use serde_json::Value;

/// Pretty-print with 2-space indentation
pub fn json_pretty(input: &str) -> Result<String, TextToolError> {
    let value: Value = serde_json::from_str(input).map_err(|e| TextToolError::Json(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| TextToolError::Json(e.to_string()))
}

/// Strip all insignificant whitespace
pub fn json_minify(input: &str) -> Result<String, TextToolError> {
    let value: Value = serde_json::from_str(input).map_err(|e| TextToolError::Json(e.to_string()))?;
    serde_json::to_string(&value).map_err(|e| TextToolError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pretty_prints_nested_object() {
        let pretty = json_pretty(r#"{"a":1,"b":[true,null]}"#).unwrap();
        assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}");
    }

    #[test]
    fn test_minify_strips_whitespace() {
        let minified = json_minify("{\n  \"a\": 1,\n  \"b\": 2\n}").unwrap();
        assert_eq!(minified, r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_key_order_preserved() {
        let minified = json_minify(r#"{"zebra":1,"apple":2,"mango":3}"#).unwrap();
        assert_eq!(minified, r#"{"zebra":1,"apple":2,"mango":3}"#);
    }

    #[test]
    fn test_scalar_documents_allowed() {
        assert_eq!(json_pretty("42").unwrap(), "42");
        assert_eq!(json_minify("\"x\"").unwrap(), "\"x\"");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = json_pretty("{broken").unwrap_err();
        assert!(matches!(err, TextToolError::Json(_)));
    }
}
