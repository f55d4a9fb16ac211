use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::json;

use crate::config::{ClientConfig, FILTER_RESUMES_PATH};
use crate::models::filter::{ErrorBody, FilterResponse};
use crate::models::resume::UploadedFile;
use crate::models::submission::FilterError;
use crate::services::logger::Logger;
use crate::services::validation::PDF_MIME_TYPE;

/// Multipart field carrying each resume (repeated once per file).
const RESUMES_FIELD: &str = "resumes";

/// Multipart field carrying the job description text.
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Client for the external resume scoring service.
pub struct ScoringClient {
    http: Client,
    config: ClientConfig,
    logger: Arc<dyn Logger>,
}

impl ScoringClient {
    pub fn new(config: ClientConfig, logger: Arc<dyn Logger>) -> Result<Self, ScoringClientError> {
        let http = Client::builder()
            .user_agent(concat!("resume-filter-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config,
            logger,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send every file and the job description to the scoring service.
    ///
    /// Exactly one POST is issued. The whole exchange (send plus body read)
    /// runs under the configured timeout; when it elapses the request future
    /// is dropped, which aborts the connection.
    pub async fn filter_resumes(
        &self,
        files: &[UploadedFile],
        job_description: &str,
    ) -> Result<FilterResponse, FilterError> {
        let url = self.config.endpoint_url(FILTER_RESUMES_PATH);

        self.logger.info(
            "Sending API request",
            json!({ "url": url, "fileCount": files.len() }),
        );

        let form = build_form(files, job_description).map_err(|e| self.network_error(e))?;
        let exchange = self.exchange(&url, form);

        match tokio::time::timeout(self.config.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => {
                self.logger.error(
                    "API request timeout",
                    json!({ "url": url, "timeoutMs": self.config.timeout.as_millis() as u64 }),
                );
                Err(FilterError::Timeout)
            }
        }
    }

    async fn exchange(&self, url: &str, form: Form) -> Result<FilterResponse, FilterError> {
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.network_error(e))?;

        if !status.is_success() {
            let message = remote_error_message(status, &body);
            self.logger.error(
                "API request failed",
                json!({
                    "status": status.as_u16(),
                    "statusText": status.canonical_reason().unwrap_or_default(),
                    "message": message,
                }),
            );
            return Err(FilterError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_slice::<FilterResponse>(&body) {
            Ok(result) => {
                self.logger.info(
                    "API request successful",
                    json!({
                        "filteredResumes": result.filtered_resumes,
                        "returned": result.resumes.len(),
                    }),
                );
                Ok(result)
            }
            Err(e) => {
                self.logger.error(
                    "API response could not be decoded",
                    json!({ "status": status.as_u16(), "error": e.to_string() }),
                );
                Err(FilterError::Decode {
                    detail: e.to_string(),
                })
            }
        }
    }

    fn network_error(&self, err: reqwest::Error) -> FilterError {
        self.logger.error(
            "Network error",
            json!({
                "error": err.to_string(),
                "connect": err.is_connect(),
                "timeout": err.is_timeout(),
            }),
        );
        if err.is_timeout() {
            return FilterError::Timeout;
        }
        FilterError::Network {
            detail: err.to_string(),
        }
    }
}

/// One `resumes` part per file in store order, then the untrimmed text.
fn build_form(files: &[UploadedFile], job_description: &str) -> reqwest::Result<Form> {
    let mut form = Form::new();
    for file in files {
        let part = Part::stream_with_length(file.payload.clone(), file.size() as u64)
            .file_name(file.name.clone())
            .mime_str(PDF_MIME_TYPE)?;
        form = form.part(RESUMES_FIELD, part);
    }
    Ok(form.text(JOB_DESCRIPTION_FIELD, job_description.to_string()))
}

/// Message for a non-2xx response: the server's own message when the body
/// carries one, else a status-derived fallback.
fn remote_error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .message
            .filter(|m| !m.is_empty())
            .or(parsed.error.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16())),
        Err(_) => format!("HTTP error! status: {}", status.as_u16()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringClientError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
