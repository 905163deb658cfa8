/*
[INPUT]:  Flickr JSON response objects
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::ImageSize;
use super::serde_helpers::{content, lenient_number, lenient_string, tag_list};

/// A Flickr user as it appears in contact lists and auth responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub nsid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, alias = "fullname")]
    pub realname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconserver: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconfarm: String,
}

/// A photo record from search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub owner: String,
    pub secret: String,
    pub server: String,
    #[serde(deserialize_with = "lenient_string")]
    pub farm: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "ispublic", deserialize_with = "lenient_string")]
    pub is_public: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url_t: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub width_t: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub height_t: String,
    /// Width divided by height of the thumbnail, when both are known
    #[serde(skip)]
    pub ratio: Option<f64>,
}

impl Photo {
    /// URL of this photo's static image in the given size
    pub fn url(&self, size: ImageSize) -> String {
        match size.suffix() {
            Some(suffix) => format!(
                "https://farm{}.staticflickr.com/{}/{}_{}_{}.jpg",
                self.farm, self.server, self.id, self.secret, suffix
            ),
            None => format!(
                "https://farm{}.staticflickr.com/{}/{}_{}.jpg",
                self.farm, self.server, self.id, self.secret
            ),
        }
    }

    /// Fill in `ratio` from the thumbnail dimensions
    pub(crate) fn compute_ratio(&mut self) {
        let width = self.width_t.parse::<f64>();
        let height = self.height_t.parse::<f64>();
        self.ratio = match (width, height) {
            (Ok(width), Ok(height)) if height != 0.0 => Some(width / height),
            _ => None,
        };
    }
}

/// Photo owner details embedded in `flickr.photos.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub nsid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub realname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconserver: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconfarm: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub path_alias: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "authorname")]
    pub author_name: String,
    #[serde(default)]
    pub raw: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub machine_tag: String,
    #[serde(default, rename = "_content")]
    pub content: String,
}

/// Full photo details from `flickr.photos.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfo {
    pub id: String,
    pub secret: String,
    pub server: String,
    #[serde(deserialize_with = "lenient_string")]
    pub farm: String,
    #[serde(default, rename = "dateuploaded", deserialize_with = "lenient_string")]
    pub date_uploaded: String,
    #[serde(default, rename = "isfavorite", deserialize_with = "lenient_string")]
    pub is_favorite: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub license: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub safety_level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rotation: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub views: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default, deserialize_with = "content")]
    pub title: String,
    #[serde(default, deserialize_with = "content")]
    pub description: String,
    #[serde(default, deserialize_with = "tag_list")]
    pub tags: Vec<Tag>,
}

/// A user who marked a photo as favorite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePerson {
    pub nsid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub realname: String,
    #[serde(default, rename = "favedate", deserialize_with = "lenient_string")]
    pub fave_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconserver: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconfarm: String,
}

/// Profile from `flickr.people.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub nsid: String,
    #[serde(default, rename = "ispro", deserialize_with = "lenient_string")]
    pub is_pro: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconserver: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iconfarm: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub path_alias: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ignored: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub friend: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub family: String,
    #[serde(default, rename = "revcontact", deserialize_with = "lenient_string")]
    pub rev_contact: String,
    #[serde(default, rename = "revfriend", deserialize_with = "lenient_string")]
    pub rev_friend: String,
    #[serde(default, rename = "revfamily", deserialize_with = "lenient_string")]
    pub rev_family: String,
    #[serde(default, deserialize_with = "content")]
    pub username: String,
    #[serde(default, deserialize_with = "content")]
    pub realname: String,
    #[serde(default, deserialize_with = "content")]
    pub location: String,
    #[serde(default, rename = "photosurl", deserialize_with = "content")]
    pub photos_url: String,
    #[serde(default, rename = "profileurl", deserialize_with = "content")]
    pub profile_url: String,
}

/// Shared paging header of list responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, deserialize_with = "lenient_number")]
    pub page: u32,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pages: u32,
    #[serde(default, rename = "perpage", deserialize_with = "lenient_number")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total: u64,
}
