/*
[INPUT]:  Raw JSON response body from the REST endpoint
[OUTPUT]: Envelope::Ok(payload) or Envelope::Fail(code, message)
[POS]:    HTTP layer - stat/err decoding shared by every call
[UPDATE]: When the envelope convention or failure fields change
*/

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use crate::http::{FlickrError, Result};

const STAT_OK: &str = "ok";

/// Failure record carried by a `stat: "fail"` response
///
/// Both fields keep the text Flickr sent; a missing or null field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    pub code: String,
    pub message: String,
}

impl ApiFailure {
    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            code: field_text(object, "code"),
            message: field_text(object, "message"),
        }
    }
}

/// Outcome carried by every Flickr response
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Ok(T),
    Fail(ApiFailure),
}

impl<T> Envelope<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Ok(_))
    }

    /// Convert into the payload, or an `Api` error carrying code and message
    pub fn into_result(self) -> Result<T> {
        match self {
            Envelope::Ok(payload) => Ok(payload),
            Envelope::Fail(failure) => Err(FlickrError::Api {
                code: failure.code,
                message: failure.message,
            }),
        }
    }
}

/// Decode a response body into its envelope
///
/// A body that is not a JSON object with a string `stat` is a parse error,
/// never a success. On `stat == "ok"` the payload is read from the same
/// object.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>> {
    let value: Value = serde_json::from_slice(body)?;

    let object = value
        .as_object()
        .ok_or_else(|| serde_json::Error::custom("response body is not a JSON object"))?;
    let stat = object
        .get("stat")
        .and_then(Value::as_str)
        .ok_or_else(|| serde_json::Error::custom("response body has no `stat` field"))?;

    if stat != STAT_OK {
        return Ok(Envelope::Fail(ApiFailure::from_object(object)));
    }
    let payload = serde_json::from_value(value)?;
    Ok(Envelope::Ok(payload))
}

/// Decode a response body straight into its payload
pub fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    decode(body)?.into_result()
}

fn field_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(raw)) => raw.clone(),
        Some(other) => other.to_string(),
    }
}
