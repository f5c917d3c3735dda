//! Workflow API client for the rename suggestion service.
//!
//! The service runs a text-generation workflow: it receives the source file
//! names and the candidate target directory names and answers with a JSON
//! mapping nested inside `data.outputs.text`. Configuration comes from the
//! application config / environment:
//! - `MEDIA_LIBRARIAN_ENDPOINT`: workflow run URL
//! - `MEDIA_LIBRARIAN_API_KEY`: bearer token
//! - `MEDIA_LIBRARIAN_API_TIMEOUT`: request timeout in seconds
//! - `MEDIA_LIBRARIAN_USER_NAME`: value of the request's `user` field

use crate::models::config::Config;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Workflow client configuration.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub endpoint: String,
    pub api_key: String,
    pub user: String,
    pub timeout_secs: u64,
}

impl From<&Config> for WorkflowConfig {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            user: config.user_name.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Workflow API client.
pub struct WorkflowClient {
    config: WorkflowConfig,
    client: reqwest::Client,
}

/// Workflow run request payload.
#[derive(Debug, Serialize)]
struct WorkflowRequest<'a> {
    inputs: WorkflowInputs,
    user: &'a str,
    response_mode: &'static str,
}

/// Input fields: both lists are newline-joined.
#[derive(Debug, Serialize)]
struct WorkflowInputs {
    files: String,
    directories: String,
}

/// Workflow run response.
#[derive(Debug, Deserialize)]
struct WorkflowResponse {
    data: WorkflowData,
}

#[derive(Debug, Deserialize)]
struct WorkflowData {
    outputs: WorkflowOutputs,
}

#[derive(Debug, Deserialize)]
struct WorkflowOutputs {
    text: String,
}

impl WorkflowClient {
    /// Create a new workflow client with the given configuration.
    pub fn with_config(config: WorkflowConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Run the workflow and return the raw suggestion text.
    ///
    /// A non-2xx status or transport failure is fatal for the run. A reply
    /// that lacks the `data.outputs.text` nesting is reported as a response
    /// shape error, distinct from a suggestion parse error.
    pub async fn run(&self, files: &[String], directories: &[String]) -> Result<String> {
        let request = WorkflowRequest {
            inputs: WorkflowInputs {
                files: files.join("\n"),
                directories: directories.join("\n"),
            },
            user: self.config.user.as_str(),
            response_mode: "blocking",
        };

        tracing::debug!(
            endpoint = %self.config.endpoint,
            authorization = %redact_key(&self.config.api_key),
            files = files.len(),
            directories = directories.len(),
            "Sending rename suggestion request"
        );

        let body = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: WorkflowResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Invalid response structure from suggestion service: {}", e);
            crate::Error::ResponseShape(e)
        })?;

        let text = response.data.outputs.text;
        tracing::debug!(chars = text.len(), "Received suggestion text");
        Ok(text)
    }
}

/// Mask an API key for logging, keeping only the last four characters.
fn redact_key(key: &str) -> String {
    if key.len() <= 4 {
        return "Bearer ****".to_string();
    }
    let visible: String = key.chars().skip(key.chars().count().saturating_sub(4)).collect();
    format!("Bearer ****{visible}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_key_keeps_tail_only() {
        let redacted = redact_key("app-0123456789abcdef");
        assert_eq!(redacted, "Bearer ****cdef");
        assert!(!redacted.contains("0123456789"));
    }

    #[test]
    fn test_redact_key_short_keys_fully_masked() {
        assert_eq!(redact_key(""), "Bearer ****");
        assert_eq!(redact_key("abcd"), "Bearer ****");
    }

    #[test]
    fn test_request_serialization() {
        let request = WorkflowRequest {
            inputs: WorkflowInputs {
                files: "a.mkv\nb.mkv".to_string(),
                directories: "Show".to_string(),
            },
            user: "tester",
            response_mode: "blocking",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"]["files"], "a.mkv\nb.mkv");
        assert_eq!(json["inputs"]["directories"], "Show");
        assert_eq!(json["user"], "tester");
        assert_eq!(json["response_mode"], "blocking");
    }
}
