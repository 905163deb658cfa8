/*
[INPUT]:  Base endpoint, method name, marshalled parameters, format selector, optional signer
[OUTPUT]: Final request URL with percent-encoded, sorted query
[POS]:    HTTP layer - URL construction shared by every call
[UPDATE]: When adding format selectors or new endpoint kinds
*/

use url::Url;

use crate::http::signature::{API_KEY_PARAM, METHOD_PARAM, RequestSigner};
use crate::params::ParamSet;
use crate::types::Permission;

/// Response format requested from the REST endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// `format=json&nojsoncallback=1`: bare JSON, no JSONP wrapper
    #[default]
    Json,
    /// The service's default XML body; adds no selectors
    Rest,
}

impl ResponseFormat {
    fn apply(self, params: &mut ParamSet) {
        match self {
            ResponseFormat::Json => {
                params.insert("format", "json");
                params.insert("nojsoncallback", "1");
            }
            ResponseFormat::Rest => {}
        }
    }
}

/// Builds request URLs for one API key against one base endpoint
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
    api_key: String,
}

impl UrlBuilder {
    pub fn new(base: Url, api_key: impl Into<String>) -> Self {
        Self {
            base,
            api_key: api_key.into(),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The exact parameter set that goes on the wire for a method call
    ///
    /// When a signer is given, the signature covers every other parameter in
    /// the returned set.
    pub fn wire_params(
        &self,
        method: &str,
        mut params: ParamSet,
        format: ResponseFormat,
        signer: Option<&RequestSigner>,
    ) -> ParamSet {
        params.insert(API_KEY_PARAM, self.api_key.as_str());
        params.insert(METHOD_PARAM, method);
        format.apply(&mut params);
        if let Some(signer) = signer {
            signer.sign_params(&mut params);
        }
        params
    }

    /// Build the URL for a REST method call
    pub fn build(
        &self,
        method: &str,
        params: ParamSet,
        format: ResponseFormat,
        signer: Option<&RequestSigner>,
    ) -> Url {
        let params = self.wire_params(method, params, format, signer);
        encode_query(&self.base, &params)
    }

    /// Build the web authentication URL a user visits to grant `perms`
    pub fn build_auth(&self, perms: Permission, signer: &RequestSigner) -> Url {
        let mut params = ParamSet::new();
        params.insert("perms", perms.as_str());
        signer.sign_params(&mut params);
        encode_query(&self.base, &params)
    }
}

/// Replace the query of `base` with `params`, in sorted key order
pub fn encode_query(base: &Url, params: &ParamSet) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in params.iter() {
            pairs.append_pair(key, value);
        }
    }
    url
}
