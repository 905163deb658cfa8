/*
[INPUT]:  Requested permission level, frob from the auth callback
[OUTPUT]: Signed web-auth URL, issued auth token
[POS]:    HTTP layer - web authentication flow endpoints
[UPDATE]: When auth endpoints or flow steps change
*/

use serde::Deserialize;
use url::Url;

use crate::http::{FlickrClient, Result};
use crate::types::{AuthToken, GetTokenParams, Permission};

const GET_TOKEN: &str = "flickr.auth.getToken";

#[derive(Debug, Deserialize)]
struct AuthPayload {
    auth: AuthToken,
}

impl FlickrClient {
    /// URL the user visits to grant this application `perms` on their account
    ///
    /// GET https://www.flickr.com/services/auth/?api_key=..&perms=..&api_sig=..
    pub fn auth_url(&self, perms: Permission) -> Url {
        self.web_auth_url(perms)
    }

    /// Exchange the temporary frob handed to the callback for a lasting token
    ///
    /// The token is returned, not stored: pass it to `set_auth_token` to act
    /// on the user's behalf.
    pub async fn get_token(&self, frob: &str) -> Result<AuthToken> {
        let params = GetTokenParams {
            frob: frob.to_string(),
        };
        let payload: AuthPayload = self.call(GET_TOKEN, &params, true).await?;
        Ok(payload.auth)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, FlickrClient, FlickrError};
    use crate::types::Permission;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FlickrClient {
        let config = ClientConfig {
            rest_endpoint: format!("{}/services/rest/", server.uri()),
            auth_endpoint: format!("{}/services/auth/", server.uri()),
            min_request_interval: Duration::ZERO,
            ..ClientConfig::default()
        };
        FlickrClient::with_config(Credentials::new("key1", "s3cr3t"), config).expect("client init")
    }

    #[test]
    fn test_auth_url_points_at_auth_endpoint() {
        let client = FlickrClient::new(Credentials::new("key1", "s3cr3t")).expect("client init");
        let url = client.auth_url(Permission::Read);

        assert!(url.as_str().starts_with("https://www.flickr.com/services/auth/?"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let keys: Vec<&str> = pairs.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["api_key", "api_sig", "perms"]);
    }

    #[tokio::test]
    async fn test_get_token() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "auth": {
                "token": { "_content": "45-76598454353455" },
                "perms": { "_content": "write" },
                "user": { "nsid": "12037949754@N01", "username": "Bees", "fullname": "Cal H" }
            },
            "stat": "ok"
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/services/rest/"))
            .and(query_param("method", "flickr.auth.getToken"))
            .and(query_param("frob", "934-746563215463214621"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let token = client_for(&server)
            .get_token("934-746563215463214621")
            .await
            .expect("get_token failed");

        assert_eq!(token.token, "45-76598454353455");
        assert_eq!(token.perms, Permission::Write);
        assert_eq!(token.user.nsid, "12037949754@N01");
    }

    #[tokio::test]
    async fn test_get_token_invalid_frob() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/services/rest/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"stat":"fail","code":108,"message":"Invalid frob"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = client_for(&server).get_token("bogus").await.unwrap_err();
        assert!(matches!(err, FlickrError::Api { ref code, .. } if code == "108"));
    }
}
