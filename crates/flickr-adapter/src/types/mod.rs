/*
[INPUT]:  Flickr API schema and serde requirements
[OUTPUT]: Typed request parameters, response payloads and enums
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;
mod serde_helpers;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
