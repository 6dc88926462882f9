//! reqwest-backed implementation of [`SearchService`]

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use syllo_core::{Error, LogSnapshot, Result, SearchResponse, UploadResult};

use crate::service::SearchService;

/// Body of the clear-logs response.
#[derive(Debug, Deserialize)]
struct ClearStatus {
    status: String,
}

/// HTTP client for the search backend.
///
/// Base URL and bearer token are injected at construction; there is no
/// global state and no retry policy.
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpService {
    pub fn new(base_url: Url, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(format!("invalid endpoint {path}: {e}")))
    }

    /// Attach the bearer token, if one is configured.
    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl SearchService for HttpService {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        debug!("POST /search ({} chars)", query.len());
        let response = self
            .client
            .post(self.endpoint("search")?)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(query.to_string())
            .send()
            .await?;
        // The browser original fed any response straight to the JSON parser;
        // a non-JSON body is the failure mode, not the status code.
        Ok(response.json::<SearchResponse>().await?)
    }

    async fn upload_pdf(&self, bytes: Vec<u8>, filename: &str) -> Result<UploadResult> {
        debug!("POST /pdf ({} bytes, {filename})", bytes.len());
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("pdf")?)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }
        Ok(response.json::<UploadResult>().await?)
    }

    async fn deploy(&self) -> Result<()> {
        debug!("POST /deploy");
        let response = self
            .authenticated(self.client.post(self.endpoint("deploy")?))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(Error::status(status.as_u16()));
        }
        Ok(())
    }

    async fn fetch_logs(&self) -> Result<LogSnapshot> {
        let response = self
            .authenticated(self.client.get(self.endpoint("logs")?))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }
        Ok(response.json::<LogSnapshot>().await?)
    }

    async fn clear_logs(&self) -> Result<()> {
        debug!("DELETE /clear_logs");
        let response = self
            .authenticated(self.client.delete(self.endpoint("clear_logs")?))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }

        let body = response.json::<ClearStatus>().await?;
        if body.status != "success" {
            return Err(Error::backend(format!(
                "clear_logs returned status {:?}",
                body.status
            )));
        }
        Ok(())
    }
}
