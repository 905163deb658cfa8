/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Flickr adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod params;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiFailure,
    ClientConfig,
    Credentials,
    Envelope,
    FlickrClient,
    FlickrError,
    RateLimiter,
    RequestSigner,
    ResponseFormat,
    ReqwestTransport,
    Result,
    Transport,
    UrlBuilder,
};

// Re-export parameter marshalling
pub use params::{ParamSet, WireParams, WireValue};

// Re-export all types
pub use types::*;
