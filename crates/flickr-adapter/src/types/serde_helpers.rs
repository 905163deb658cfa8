/*
[INPUT]:  JSON values Flickr emits with inconsistent types
[OUTPUT]: Normalized strings and numbers for response models
[POS]:    Data layer - lenient deserializers shared by response types
[UPDATE]: When a response field turns up in yet another representation
*/

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number, bool or null and keep its text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(raw) => Ok(raw),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(if flag { "1" } else { "0" }.to_string()),
        other => Err(D::Error::custom(format!("expected scalar, found {other}"))),
    }
}

/// Accept a number or a numeric string; null and "" read as zero.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(T::default()),
        Value::Number(number) => number.to_string(),
        Value::String(raw) if raw.trim().is_empty() => return Ok(T::default()),
        Value::String(raw) => raw.trim().to_string(),
        other => return Err(D::Error::custom(format!("expected number, found {other}"))),
    };
    raw.parse().map_err(D::Error::custom)
}

/// Unwrap Flickr's `{"_content": ...}` text nodes.
pub fn content<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    struct Content<T> {
        #[serde(rename = "_content")]
        content: T,
    }

    Content::<T>::deserialize(deserializer).map(|wrapper| wrapper.content)
}

/// Unwrap the `{"tag": [...]}` container around tag lists.
pub fn tag_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    struct Container<T> {
        #[serde(default = "Vec::new", rename = "tag")]
        items: Vec<T>,
    }

    Container::<T>::deserialize(deserializer).map(|container| container.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
        #[serde(default, deserialize_with = "lenient_number")]
        count: u64,
        #[serde(default, deserialize_with = "content")]
        title: String,
    }

    #[test]
    fn test_lenient_string_accepts_numbers_and_null() {
        let probe: Probe = serde_json::from_value(json!({ "text": 66 })).expect("number");
        assert_eq!(probe.text, "66");

        let probe: Probe = serde_json::from_value(json!({ "text": null })).expect("null");
        assert_eq!(probe.text, "");

        let probe: Probe = serde_json::from_value(json!({ "text": true })).expect("bool");
        assert_eq!(probe.text, "1");
    }

    #[test]
    fn test_lenient_number_accepts_strings() {
        let probe: Probe = serde_json::from_value(json!({ "count": "1234" })).expect("string");
        assert_eq!(probe.count, 1234);

        let probe: Probe = serde_json::from_value(json!({ "count": 7 })).expect("number");
        assert_eq!(probe.count, 7);

        let probe: Probe = serde_json::from_value(json!({ "count": "" })).expect("empty");
        assert_eq!(probe.count, 0);

        assert!(serde_json::from_value::<Probe>(json!({ "count": "many" })).is_err());
    }

    #[test]
    fn test_content_unwraps_text_nodes() {
        let probe: Probe =
            serde_json::from_value(json!({ "title": { "_content": "Owl at dusk" } })).expect("content");
        assert_eq!(probe.title, "Owl at dusk");
    }
}
