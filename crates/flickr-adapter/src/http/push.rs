/*
[INPUT]:  Push subscription topic and callback settings
[OUTPUT]: Confirmation that the subscription request was accepted
[POS]:    HTTP layer - flickr.push.* endpoints
[UPDATE]: When wrapping more push methods
*/

use serde::de::IgnoredAny;

use crate::http::{FlickrClient, Result};
use crate::types::PushSubscribeParams;

const PUSH_SUBSCRIBE: &str = "flickr.push.subscribe";

impl FlickrClient {
    /// Subscribe a callback URL to a push feed
    ///
    /// GET flickr.push.subscribe
    ///
    /// Requires an auth token with read permission.
    pub async fn push_subscribe(&self, params: PushSubscribeParams) -> Result<()> {
        let _: IgnoredAny = self.call(PUSH_SUBSCRIBE, &params, true).await?;
        Ok(())
    }
}
