use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProjectBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl SdkError {
    /// The `error` message of an API error response, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            SdkError::Api { message, .. } => Some(message),
            SdkError::Http(_) => None,
        }
    }
}

pub struct ProjectsClient {
    client: Client,
    base_url: String,
}

impl ProjectsClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxy settings).
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List projects, optionally filtered by a title substring.
    pub async fn list(&self, title: Option<&str>) -> Result<Vec<Project>, SdkError> {
        let mut req = self.client.get(format!("{}/projects", self.base_url));
        if let Some(title) = title {
            req = req.query(&[("title", title)]);
        }
        let resp = check(req.send().await?).await?;
        Ok(resp.json().await?)
    }

    pub async fn create(
        &self,
        title: Option<&str>,
        owner: Option<&str>,
    ) -> Result<Project, SdkError> {
        let resp = self
            .client
            .post(format!("{}/projects", self.base_url))
            .json(&ProjectBody { title, owner })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Replace the title and owner of an existing project.
    pub async fn update(
        &self,
        id: &str,
        title: Option<&str>,
        owner: Option<&str>,
    ) -> Result<Project, SdkError> {
        let resp = self
            .client
            .put(format!("{}/projects/{}", self.base_url, id))
            .json(&ProjectBody { title, owner })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), SdkError> {
        let resp = self
            .client
            .delete(format!("{}/projects/{}", self.base_url, id))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

async fn check(resp: Response) -> Result<Response, SdkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(SdkError::Api { status, message })
}
