//! Asynchronous client for the content-type listing endpoint.

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    schema::{ContentType, ContentTypeCollection},
};

/// Default Content Delivery API host.
pub const DEFAULT_HOST: &str = "cdn.contentful.com";

/// Default environment id.
pub const DEFAULT_ENVIRONMENT: &str = "master";

const PAGE_SIZE: u32 = 100;

/// Client for the Content Delivery API, scoped to one space and environment.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    host: String,
    space: String,
    environment: String,
    access_token: String,
}

impl ContentClient {
    /// Start building a client for the given space.
    pub fn builder(
        space: impl Into<String>,
        access_token: impl Into<String>,
    ) -> ContentClientBuilder {
        ContentClientBuilder {
            host: DEFAULT_HOST.to_string(),
            space: space.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Fetch every content type of the space, following the collection
    /// pagination until `total` items have been gathered.
    pub async fn content_types(&self) -> Result<Vec<ContentType>> {
        let mut items = Vec::new();
        let mut skip = 0;

        loop {
            let page = self.content_types_page(skip).await?;
            let fetched = page.skip + page.items.len() as u32;
            let done = page.items.is_empty() || fetched >= page.total;
            items.extend(page.items);
            if done {
                break;
            }
            skip = fetched;
        }

        Ok(items)
    }

    async fn content_types_page(&self, skip: u32) -> Result<ContentTypeCollection> {
        let url = format!(
            "https://{}/spaces/{}/environments/{}/content_types",
            self.host, self.space, self.environment
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("skip", skip), ("limit", PAGE_SIZE)])
            .send()
            .await
            .map_err(|source| Error::transport(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "no further details".to_string());
            return Err(Error::api(status.as_u16(), message));
        }

        response.json().await.map_err(Error::decode)
    }
}

/// Builder for [`ContentClient`].
#[derive(Debug)]
pub struct ContentClientBuilder {
    host: String,
    space: String,
    environment: String,
    access_token: String,
}

impl ContentClientBuilder {
    /// Use a different API host (e.g. `preview.contentful.com`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Target a specific environment instead of `master`.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn build(self) -> ContentClient {
        ContentClient {
            http: reqwest::Client::new(),
            host: self.host,
            space: self.space,
            environment: self.environment,
            access_token: self.access_token,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ContentClient::builder("space", "token").build();
        assert_eq!(client.host, DEFAULT_HOST);
        assert_eq!(client.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(client.space, "space");
    }

    #[test]
    fn test_builder_overrides() {
        let client = ContentClient::builder("space", "token")
            .host("preview.contentful.com")
            .environment("staging")
            .build();
        assert_eq!(client.host, "preview.contentful.com");
        assert_eq!(client.environment, "staging");
    }
}
