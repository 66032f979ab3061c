//! HTTP implementation of the project resource contract
//!
//! Wraps the service's JSON API (`/projects` and its sub-resources) using
//! [`reqwest`]. Every call is a single attempt with no timeout, retry or
//! local cache; calls share nothing but the connection pool, so they can
//! run concurrently.

use async_trait::async_trait;
use ip_core::config::ClientConfig;
use ip_core::ProjectId;
use ip_models::{CreatedProject, ProgressReport, Project, ProjectUpdate};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::{classify_failure, ClientError, ClientResult};

/// The project resource operations
///
/// Views depend on this trait rather than on [`ProjectClient`] so they can be
/// driven by a stand-in during tests.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// `POST /projects`: allocate a new draft
    async fn create_project(&self) -> ClientResult<CreatedProject>;

    /// `PUT /projects/{id}`: replace the supplied sections
    async fn update_project(&self, id: &ProjectId, update: &ProjectUpdate) -> ClientResult<()>;

    /// `POST /projects/{id}/submit`: request review
    ///
    /// Repeated calls are passed through unchanged.
    async fn submit_project(&self, id: &ProjectId) -> ClientResult<()>;

    /// `POST /projects/{id}/progress-reports`: append one report
    async fn submit_progress_report(&self, id: &ProjectId, report: &ProgressReport) -> ClientResult<()>;

    /// `GET /projects/{id}`: fetch the full aggregate
    async fn get_project(&self, id: &ProjectId) -> ClientResult<Project>;
}

/// HTTP client for the project-tracking service
#[derive(Debug, Clone)]
pub struct ProjectClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ProjectClient {
    /// Create a client with its own connection pool
    ///
    /// Every request carries `Content-Type: application/json`.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.parsed_base_url()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path to extend
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        id: Option<&ProjectId>,
    ) -> ClientResult<reqwest::Response> {
        let url = self.endpoint(segments);
        debug!(%method, path = url.path(), project_id = ?id.map(ProjectId::as_str), "Sending project request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, path = url.path(), error = %e, "Project request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let error = classify_failure(status, body, id);
            warn!(%method, path = url.path(), status = status.as_u16(), error = %error, "Project request rejected");
            return Err(error);
        }

        Ok(response)
    }

    async fn send_for_json<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        id: Option<&ProjectId>,
    ) -> ClientResult<T> {
        let response = self.send::<()>(method, segments, None, id).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProjectApi for ProjectClient {
    async fn create_project(&self) -> ClientResult<CreatedProject> {
        self.send_for_json(Method::POST, &["projects"], None).await
    }

    async fn update_project(&self, id: &ProjectId, update: &ProjectUpdate) -> ClientResult<()> {
        self.send(Method::PUT, &["projects", id.as_str()], Some(update), Some(id))
            .await?;
        Ok(())
    }

    async fn submit_project(&self, id: &ProjectId) -> ClientResult<()> {
        self.send::<()>(Method::POST, &["projects", id.as_str(), "submit"], None, Some(id))
            .await?;
        Ok(())
    }

    async fn submit_progress_report(&self, id: &ProjectId, report: &ProgressReport) -> ClientResult<()> {
        self.send(
            Method::POST,
            &["projects", id.as_str(), "progress-reports"],
            Some(report),
            Some(id),
        )
        .await?;
        Ok(())
    }

    async fn get_project(&self, id: &ProjectId) -> ClientResult<Project> {
        self.send_for_json(Method::GET, &["projects", id.as_str()], Some(id))
            .await
    }
}
