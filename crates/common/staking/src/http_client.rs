use std::time::Duration;

use anyhow::anyhow;
use reqwest::{
    Client, Request, RequestBuilder, Response, Url,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A [Client] bound to an API base url, attaching a bearer token to every request.
#[derive(Debug, Clone)]
pub struct ClientWithBaseUrl {
    client: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl ClientWithBaseUrl {
    pub fn new(url: Url, request_timeout: Duration, api_key: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|err| anyhow!("Failed to build HTTP client {err:?}"))?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|err| anyhow!("API key is not a valid header value: {err}"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Ok(Self {
            client,
            base_url: with_trailing_slash(url),
            headers,
        })
    }

    /// `path` is resolved relative to the base url, so it must not start with `/`.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    pub fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url).headers(self.headers.clone())
    }

    pub async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        self.client.execute(request).await
    }
}

/// [Url::join] drops the last path segment of a base without a trailing slash, which would
/// turn `https://api.kiln.fi/v1` + `eth/stakes` into `https://api.kiln.fi/eth/stakes`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_version_prefix() {
        let client = ClientWithBaseUrl::new(
            Url::parse("https://api.kiln.fi/v1").expect("url"),
            Duration::from_secs(1),
            "key",
        )
        .expect("client");
        assert_eq!(
            client.endpoint("eth/stakes").expect("join").as_str(),
            "https://api.kiln.fi/v1/eth/stakes"
        );
    }

    #[test]
    fn test_bearer_header() {
        let client = ClientWithBaseUrl::new(
            Url::parse("https://api.kiln.fi/v1/").expect("url"),
            Duration::from_secs(1),
            "secret",
        )
        .expect("client");
        let request = client
            .get(client.endpoint("eth/stakes").expect("join"))
            .build()
            .expect("request");
        assert_eq!(
            request.headers().get(AUTHORIZATION).map(HeaderValue::as_bytes),
            Some(b"Bearer secret".as_slice())
        );
        assert_eq!(request.url().as_str(), "https://api.kiln.fi/v1/eth/stakes");
    }

    #[test]
    fn test_rejects_header_breaking_key() {
        assert!(
            ClientWithBaseUrl::new(
                Url::parse("https://api.kiln.fi/v1").expect("url"),
                Duration::from_secs(1),
                "bad\nkey",
            )
            .is_err()
        );
    }
}
