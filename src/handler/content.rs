//! Content extraction
//!
//! Pulls the `text` payload out of a POST body or a GET query string. Any
//! failure yields an empty string, which renderers replace with the default.

use serde_json::Value;

/// `text` field of a JSON object body
///
/// Malformed JSON, a missing field or a non-string value all give `""`.
pub fn text_from_json(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|json| json.get("text"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// First `text` parameter of a query string, percent-decoded
pub fn text_from_query(query: Option<&str>) -> String {
    let Some(query) = query else {
        return String::new();
    };
    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .ok()
        .and_then(|pairs| pairs.into_iter().find(|(key, _)| key == "text"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_text() {
        assert_eq!(text_from_json(br#"{"text":"hello"}"#), "hello");
        assert_eq!(text_from_json(br#"{"text":"","other":1}"#), "");
        assert_eq!(text_from_json("{\"text\":\"h\u{e9}llo \u{1F600}\"}".as_bytes()), "h\u{e9}llo \u{1F600}");
    }

    #[test]
    fn test_json_fallbacks() {
        assert_eq!(text_from_json(b""), "");
        assert_eq!(text_from_json(b"{not json"), "");
        assert_eq!(text_from_json(br#"{"other":"x"}"#), "");
        assert_eq!(text_from_json(br#"{"text":42}"#), "");
        assert_eq!(text_from_json(br#"["text"]"#), "");
        assert_eq!(text_from_json(br#""text""#), "");
    }

    #[test]
    fn test_query_text() {
        assert_eq!(text_from_query(Some("text=hello")), "hello");
        assert_eq!(text_from_query(Some("a=1&text=hello%20world")), "hello world");
        assert_eq!(text_from_query(Some("text=a+b")), "a b");
        assert_eq!(text_from_query(Some("text=first&text=second")), "first");
        assert_eq!(
            text_from_query(Some("text=https%3A%2F%2Fexample.org%2F%3Fq%3D1")),
            "https://example.org/?q=1"
        );
    }

    #[test]
    fn test_query_fallbacks() {
        assert_eq!(text_from_query(None), "");
        assert_eq!(text_from_query(Some("")), "");
        assert_eq!(text_from_query(Some("other=x")), "");
        assert_eq!(text_from_query(Some("text=")), "");
        assert_eq!(text_from_query(Some("text")), "");
    }
}
