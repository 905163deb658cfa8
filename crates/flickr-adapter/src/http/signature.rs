/*
[INPUT]:  Marshalled request parameters, API key and shared secret
[OUTPUT]: Lowercase-hex MD5 request signature (api_sig)
[POS]:    HTTP layer - request signing for authenticated calls
[UPDATE]: When changing signing algorithm or the signed parameter set
*/

use std::fmt;

use md5::{Digest, Md5};

use crate::params::ParamSet;

pub const API_KEY_PARAM: &str = "api_key";
pub const METHOD_PARAM: &str = "method";
pub const SIGNATURE_PARAM: &str = "api_sig";

/// Signs request parameters with the application's shared secret
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    secret: String,
}

impl RequestSigner {
    /// Create a new request signer for the given API key and secret
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the signature of a complete parameter set
    ///
    /// Format: md5("{secret}{key1}{value1}{key2}{value2}...") with keys in
    /// ascending order. Any existing `api_sig` entry is not part of the input.
    pub fn signature(&self, params: &ParamSet) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.secret.as_bytes());
        for (key, value) in params.iter().filter(|(key, _)| *key != SIGNATURE_PARAM) {
            hasher.update(key.as_bytes());
            hasher.update(value.as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Add `api_key` and `api_sig` to the parameter set, returning the signature
    pub fn sign_params(&self, params: &mut ParamSet) -> String {
        params.insert(API_KEY_PARAM, self.api_key.as_str());
        let signature = self.signature(params);
        params.insert(SIGNATURE_PARAM, signature.as_str());
        signature
    }

    /// Produce the fully signed parameter set for an API method call
    pub fn sign_method(&self, method: &str, mut params: ParamSet) -> ParamSet {
        params.insert(METHOD_PARAM, method);
        self.sign_params(&mut params);
        params
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_params() -> ParamSet {
        [("foo", "1"), ("bar", "2")].into_iter().collect()
    }

    #[test]
    fn test_sign_method_matches_reference_digest() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let signed = signer.sign_method("flickr.test.echo", echo_params());

        // md5("s3cr3tapi_keykey1bar2methodflickr.test.echofoo1")
        assert_eq!(signed.get(SIGNATURE_PARAM), Some("7097af4682cca48c8961cd414199d1eb"));
        assert_eq!(signed.get(API_KEY_PARAM), Some("key1"));
        assert_eq!(signed.get(METHOD_PARAM), Some("flickr.test.echo"));
        assert_eq!(signed.len(), 5);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let first = signer.sign_method("flickr.test.echo", echo_params());
        let second = signer.sign_method("flickr.test.echo", echo_params());
        assert_eq!(first, second);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let reversed: ParamSet = [("bar", "2"), ("foo", "1")].into_iter().collect();

        let a = signer.sign_method("flickr.test.echo", echo_params());
        let b = signer.sign_method("flickr.test.echo", reversed);
        assert_eq!(a.get(SIGNATURE_PARAM), b.get(SIGNATURE_PARAM));
    }

    #[test]
    fn test_any_value_change_changes_signature() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let baseline = signer.sign_method("flickr.test.echo", echo_params());

        let mut changed = echo_params();
        changed.insert("foo", "11");
        let changed = signer.sign_method("flickr.test.echo", changed);
        assert_ne!(baseline.get(SIGNATURE_PARAM), changed.get(SIGNATURE_PARAM));

        let other_secret = RequestSigner::new("key1", "s3cr3t!");
        let resigned = other_secret.sign_method("flickr.test.echo", echo_params());
        assert_ne!(baseline.get(SIGNATURE_PARAM), resigned.get(SIGNATURE_PARAM));
    }

    #[test]
    fn test_existing_signature_is_not_signed() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let mut params = signer.sign_method("flickr.test.echo", echo_params());
        let first = params.get(SIGNATURE_PARAM).map(str::to_string);

        let second = signer.sign_params(&mut params);
        assert_eq!(first.as_deref(), Some(second.as_str()));
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let signature = signer.signature(&ParamSet::new());
        assert_eq!(signature.len(), 32);
        assert!(signature.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = RequestSigner::new("key1", "s3cr3t");
        let rendered = format!("{signer:?}");
        assert!(rendered.contains("key1"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
