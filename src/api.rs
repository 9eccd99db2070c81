use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{Id, Post};

/// Remote post operations consumed by the detail view. Implemented over HTTP
/// in production; tests substitute in-memory fakes.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Fetch a post by id. `Ok(None)` means the server answered but the post
    /// does not exist, which the view reports differently from a failure.
    async fn fetch_post(&self, id: Id) -> Result<Option<Post>, ApiError>;
    async fn delete_post(&self, id: Id) -> Result<(), ApiError>;
    async fn complete_post(&self, id: Id) -> Result<(), ApiError>;
}

/// `PostApi` against the real board server. One request per action, no
/// retries; a failed request is terminal for that attempt.
pub struct HttpPostApi {
    client: reqwest::Client,
    base: String,
}

impl HttpPostApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.api_base.clone(),
        }
    }

    fn post_url(&self, id: Id) -> String {
        format!("{}/posts/{}", self.base, id)
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn fetch_post(&self, id: Id) -> Result<Option<Post>, ApiError> {
        let resp = self.client.get(self.post_url(id)).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        let post = resp
            .json::<Post>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(post))
    }

    async fn delete_post(&self, id: Id) -> Result<(), ApiError> {
        let resp = self.client.delete(self.post_url(id)).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }

    async fn complete_post(&self, id: Id) -> Result<(), ApiError> {
        let url = format!("{}/complete", self.post_url(id));
        let resp = self.client.patch(url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
}
