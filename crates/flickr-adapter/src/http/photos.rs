/*
[INPUT]:  Photo search filters, photo ids
[OUTPUT]: Search result pages, photo details, favorite lists
[POS]:    HTTP layer - flickr.photos.* endpoints
[UPDATE]: When wrapping more photo methods or changing response handling
*/

use serde::Deserialize;

use crate::http::{FlickrClient, Result};
use crate::params::WireParams;
use crate::types::{
    Photo, PhotoFavorites, PhotoInfo, PhotosGetFavoritesParams, PhotosGetInfoParams,
    PhotosSearchParams, SearchResponse,
};

const PHOTOS_SEARCH: &str = "flickr.photos.search";
const PHOTOS_GET_INFO: &str = "flickr.photos.getInfo";
const PHOTOS_GET_FAVORITES: &str = "flickr.photos.getFavorites";

/// Extra requested on every search so results carry thumbnail dimensions
const THUMBNAIL_EXTRA: &str = "url_t";

#[derive(Debug, Deserialize)]
struct SearchPayload {
    photos: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct InfoPayload {
    photo: PhotoInfo,
}

#[derive(Debug, Deserialize)]
struct FavoritesPayload {
    photo: PhotoFavorites,
}

impl FlickrClient {
    /// Search photos
    ///
    /// GET flickr.photos.search
    ///
    /// The `url_t` extra is always requested, so each returned photo has its
    /// thumbnail URL and `ratio` filled in where Flickr knows the dimensions.
    pub async fn photos_search(&self, params: PhotosSearchParams) -> Result<SearchResponse> {
        let mut wire = params.to_wire_params();
        let extras = with_thumbnail_extra(wire.get("extras"));
        wire.insert("extras", extras);

        let payload: SearchPayload = self.call(PHOTOS_SEARCH, &wire, true).await?;
        let mut response = payload.photos;
        response.photos.iter_mut().for_each(Photo::compute_ratio);
        Ok(response)
    }

    /// Get full information about a photo
    ///
    /// GET flickr.photos.getInfo
    pub async fn photos_get_info(&self, params: PhotosGetInfoParams) -> Result<PhotoInfo> {
        let payload: InfoPayload = self.call(PHOTOS_GET_INFO, &params, true).await?;
        Ok(payload.photo)
    }

    /// List the people who have marked a photo as favorite
    ///
    /// GET flickr.photos.getFavorites
    pub async fn photos_get_favorites(
        &self,
        params: PhotosGetFavoritesParams,
    ) -> Result<PhotoFavorites> {
        let payload: FavoritesPayload = self.call(PHOTOS_GET_FAVORITES, &params, true).await?;
        Ok(payload.photo)
    }
}

fn with_thumbnail_extra(extras: Option<&str>) -> String {
    match extras {
        Some(extras) if extras.split(',').any(|extra| extra.trim() == THUMBNAIL_EXTRA) => {
            extras.to_string()
        }
        Some(extras) => format!("{extras},{THUMBNAIL_EXTRA}"),
        None => THUMBNAIL_EXTRA.to_string(),
    }
}
