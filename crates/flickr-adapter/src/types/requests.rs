/*
[INPUT]:  Flickr method argument lists
[OUTPUT]: Typed parameter structs marshalled through wire_params!
[POS]:    Data layer - request parameter definitions
[UPDATE]: When API methods gain arguments or new methods are wrapped
*/

use chrono::{DateTime, Utc};

use crate::wire_params;

/// Arguments for `flickr.photos.search`
///
/// Every field is optional: leave it at its zero value to omit it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotosSearchParams {
    /// NSID of the owner; "me" for the calling user on authenticated calls
    pub user_id: String,
    /// Comma-delimited tags; prefix a tag with `-` to exclude it
    pub tags: String,
    /// "any" (OR) or "all" (AND)
    pub tag_mode: String,
    /// Free text matched against title, description and tags
    pub text: String,
    pub min_upload_date: DateTime<Utc>,
    pub max_upload_date: DateTime<Utc>,
    pub min_taken_date: DateTime<Utc>,
    pub max_taken_date: DateTime<Utc>,
    /// Comma-separated license ids
    pub license: String,
    /// e.g. date-posted-desc, interestingness-desc, relevance
    pub sort: String,
    /// 1 public .. 5 completely private; own photos only
    pub privacy_filter: i32,
    /// "min_lon,min_lat,max_lon,max_lat"
    pub bbox: String,
    /// Location accuracy, 1 (world) to 16 (street)
    pub accuracy: i32,
    /// 1 safe, 2 moderate, 3 restricted
    pub safe_search: i32,
    /// 1 photos .. 7 everything
    pub content_type: i32,
    pub machine_tags: String,
    pub machine_tag_mode: String,
    pub group_id: String,
    /// "all" or "ff" (friends and family)
    pub contacts: String,
    pub woe_id: String,
    pub place_id: String,
    /// all, photos or videos
    pub media: String,
    pub has_geo: String,
    pub geo_context: String,
    pub lat: String,
    pub lon: String,
    pub radius: String,
    /// "mi" or "km"
    pub radius_units: String,
    pub is_commons: String,
    pub in_gallery: String,
    pub is_getty: String,
    /// Comma-delimited extra fields (url_t, owner_name, tags, ...)
    pub extras: String,
    /// Defaults to 100 server side, max 500
    pub per_page: u32,
    pub page: u32,
}

wire_params!(PhotosSearchParams {
    user_id,
    tags,
    tag_mode,
    text,
    min_upload_date,
    max_upload_date,
    min_taken_date,
    max_taken_date,
    license,
    sort,
    privacy_filter,
    bbox,
    accuracy,
    safe_search,
    content_type,
    machine_tags,
    machine_tag_mode,
    group_id,
    contacts,
    woe_id,
    place_id,
    media,
    has_geo,
    geo_context,
    lat,
    lon,
    radius,
    radius_units,
    is_commons,
    in_gallery,
    is_getty,
    extras,
    per_page,
    page,
});

/// Arguments for `flickr.contacts.getPublicList`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactsGetPublicListParams {
    pub user_id: String,
    /// Defaults to 1000, which is also the maximum
    pub per_page: u32,
    pub page: u32,
}

wire_params!(ContactsGetPublicListParams {
    user_id,
    per_page,
    page,
});

/// Arguments for `flickr.people.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleGetInfoParams {
    pub user_id: String,
}

wire_params!(PeopleGetInfoParams { user_id });

/// Arguments for `flickr.photos.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotosGetInfoParams {
    pub photo_id: String,
    /// Photo secret; lets the permission check be skipped
    pub secret: String,
}

wire_params!(PhotosGetInfoParams { photo_id, secret });

/// Arguments for `flickr.photos.getFavorites`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotosGetFavoritesParams {
    pub photo_id: String,
    pub page: u32,
    pub per_page: u32,
}

wire_params!(PhotosGetFavoritesParams {
    photo_id,
    page,
    per_page,
});

/// Arguments for `flickr.push.subscribe`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PushSubscribeParams {
    /// e.g. contacts_photos, my_photos, geo, tags
    pub topic: String,
    pub callback: String,
    /// "sync" or "async"
    pub verify: String,
    pub verify_token: String,
    pub lease_seconds: u32,
    pub woe_ids: String,
    pub place_ids: String,
    pub lat: f64,
    pub lon: f64,
    pub radius: u32,
    pub radius_units: String,
    pub accuracy: i32,
    pub nsids: String,
    pub tags: String,
}

wire_params!(PushSubscribeParams {
    topic,
    callback,
    verify,
    verify_token,
    lease_seconds,
    woe_ids,
    place_ids,
    lat,
    lon,
    radius,
    radius_units,
    accuracy,
    nsids,
    tags,
});

/// Arguments for `flickr.auth.getToken`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTokenParams {
    /// Temporary frob handed to the callback after web authentication
    pub frob: String,
}

wire_params!(GetTokenParams { frob });
