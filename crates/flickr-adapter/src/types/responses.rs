/*
[INPUT]:  Payload objects of successful Flickr responses
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::Permission;
use super::models::{FavoritePerson, Paging, Photo, User};
use super::serde_helpers::{content, lenient_string};

/// Result page of `flickr.photos.search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(default, rename = "photo")]
    pub photos: Vec<Photo>,
}

/// Result page of `flickr.contacts.getPublicList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsResponse {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(default, rename = "contact")]
    pub contacts: Vec<User>,
}

/// Result page of `flickr.photos.getFavorites`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoFavorites {
    pub id: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub server: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub farm: String,
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(default, rename = "person")]
    pub favorites: Vec<FavoritePerson>,
}

/// Token issued by `flickr.auth.getToken`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    #[serde(deserialize_with = "content")]
    pub token: String,
    #[serde(deserialize_with = "content")]
    pub perms: Permission,
    pub user: User,
}
