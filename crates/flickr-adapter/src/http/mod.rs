/*
[INPUT]:  Client configuration, credentials and method parameters
[OUTPUT]: Signed, rate-limited REST calls and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod people;
pub mod photos;
pub mod push;
pub mod rate_limit;
pub mod request;
pub mod signature;
pub mod transport;

pub use error::{FlickrError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, FlickrClient};
pub use envelope::{ApiFailure, Envelope};
pub use rate_limit::RateLimiter;
pub use request::{ResponseFormat, UrlBuilder};
pub use transport::{ReqwestTransport, Transport};
