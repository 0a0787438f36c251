//! Main client implementation

use std::path::Path;

use bytes::Bytes;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{header, Body, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::envelope::{normalize, status_error};
use crate::error::{ClientError, Result};
use crate::operation::Operation;
use crate::params::Params;
use crate::types::{FileListing, FileStatus, GetOptions, ListOptions, UploadOptions, UploadResult};

/// Client for the Smartling Files API.
///
/// Stateless and reentrant: the configuration is read-only and the HTTP
/// connection pool is shared, so one instance can serve concurrent calls.
/// Each method performs exactly one outbound request and imposes no timeout
/// or retry of its own.
#[derive(Debug)]
pub struct SmartlingClient {
    config: Config,
    http: Client,
}

impl SmartlingClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|err| {
            ClientError::Config(format!("invalid base URL {:?}: {err}", config.base_url))
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!(
                "smartling-client/",
                env!("CARGO_PKG_VERSION")
            )),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the fully qualified URL for one operation.
    ///
    /// `apiKey` and `projectId` are always injected from the configuration;
    /// caller-supplied parameters overlay them on key collision. Pure
    /// function of the inputs.
    pub fn request_url(&self, operation: Operation, params: Params) -> String {
        let mut merged = Params::new();
        merged.insert("apiKey", self.config.api_key.as_str());
        merged.insert("projectId", self.config.project_id.as_str());
        merged.extend(params);

        format!(
            "{}{}?{}",
            self.config.base_url,
            operation.path(),
            merged.to_query_string()
        )
    }

    // ==================== File Operations ====================

    /// Upload original source content.
    ///
    /// Stats the local file before any network traffic, then streams its
    /// content as the `file` part of a multipart POST. Resolves with the
    /// upload metadata (string/word counts).
    #[instrument(skip(self, file_path, options))]
    pub async fn upload(
        &self,
        file_path: impl AsRef<Path>,
        file_uri: &str,
        file_type: &str,
        options: Option<UploadOptions>,
    ) -> Result<UploadResult> {
        let file_path = file_path.as_ref();

        let mut params = Params::new();
        params.insert("fileUri", file_uri);
        params.insert("fileType", file_type);
        params.insert("approved", false);
        options.unwrap_or_default().apply(&mut params);

        let url = self.request_url(Operation::Upload, params);

        // Fail fast if the source is unreadable.
        fs::metadata(file_path).await?;
        let file = fs::File::open(file_path).await?;

        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let form = Form::new().part("file", Part::stream(Body::from(file)).file_name(file_name));

        debug!("Uploading {} to {}", file_path.display(), url);
        let response = self.http.post(&url).multipart(form).send().await?;
        decode_data(unwrap_envelope(response).await?)
    }

    /// Download a file into memory.
    ///
    /// Resolves with the raw response body: file content is returned
    /// verbatim, not wrapped in an envelope. A non-200 reply rejects with
    /// the normalized service error.
    #[instrument(skip(self, options))]
    pub async fn get(&self, file_uri: &str, options: Option<GetOptions>) -> Result<Bytes> {
        let url = self.get_url(file_uri, options);

        debug!("Fetching {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        if status != 200 {
            return Err(status_error(status, &body));
        }
        Ok(body)
    }

    /// Download a file to a local path.
    ///
    /// Creates intermediate directories as needed and streams the response
    /// body to `dest_path` verbatim. The destination handle is flushed and
    /// closed on every exit path.
    #[instrument(skip(self, dest_path, options))]
    pub async fn download(
        &self,
        file_uri: &str,
        dest_path: impl AsRef<Path>,
        options: Option<GetOptions>,
    ) -> Result<()> {
        let dest_path = dest_path.as_ref();
        let url = self.get_url(file_uri, options);

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        debug!("Downloading {} to {}", url, dest_path.display());
        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        if status != 200 {
            let body = response.bytes().await?;
            return Err(status_error(status, &body));
        }

        let mut file = fs::File::create(dest_path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(())
    }

    /// List recently uploaded files matching the given filters
    #[instrument(skip(self, options))]
    pub async fn list(&self, options: Option<ListOptions>) -> Result<FileListing> {
        let mut params = Params::new();
        options.unwrap_or_default().apply(&mut params);

        let url = self.request_url(Operation::List, params);

        debug!("Listing files via {}", url);
        let response = self.http.get(&url).send().await?;
        decode_data(unwrap_envelope(response).await?)
    }

    /// Get translation status for a file in one locale
    #[instrument(skip(self))]
    pub async fn status(&self, file_uri: &str, locale: &str) -> Result<FileStatus> {
        let mut params = Params::new();
        params.insert("fileUri", file_uri);
        params.insert("locale", locale);

        let url = self.request_url(Operation::Status, params);

        debug!("Fetching status via {}", url);
        let response = self.http.get(&url).send().await?;
        decode_data(unwrap_envelope(response).await?)
    }

    /// Rename an uploaded file.
    ///
    /// The new URI must not already exist remotely; the service enforces
    /// this and replies with a validation error otherwise. Resolves empty on
    /// success.
    #[instrument(skip(self))]
    pub async fn rename(&self, file_uri: &str, new_file_uri: &str) -> Result<()> {
        let mut params = Params::new();
        params.insert("fileUri", file_uri);
        params.insert("newFileUri", new_file_uri);

        let url = self.request_url(Operation::Rename, params);
        let body = json!({ "fileUri": file_uri, "newFileUri": new_file_uri });

        debug!("Renaming {} to {}", file_uri, new_file_uri);
        let response = self.http.post(&url).json(&body).send().await?;
        unwrap_envelope(response).await?;
        Ok(())
    }

    /// Remove a file from the service.
    ///
    /// Completed translations remain available server-side; deletion is
    /// asynchronous on the service end. Resolves empty on success.
    #[instrument(skip(self))]
    pub async fn delete(&self, file_uri: &str) -> Result<()> {
        let mut params = Params::new();
        params.insert("fileUri", file_uri);

        let url = self.request_url(Operation::Delete, params);
        let body = json!({ "fileUri": file_uri });

        debug!("Deleting {}", file_uri);
        let response = self.http.delete(&url).json(&body).send().await?;
        unwrap_envelope(response).await?;
        Ok(())
    }

    // ==================== Helper Methods ====================

    fn get_url(&self, file_uri: &str, options: Option<GetOptions>) -> String {
        let mut params = Params::new();
        params.insert("fileUri", file_uri);
        options.unwrap_or_default().apply(&mut params);
        self.request_url(Operation::Get, params)
    }
}

/// Read the full body and run the two-tier success check
async fn unwrap_envelope(response: Response) -> Result<Option<Value>> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    normalize(status, &body)
}

/// Decode an envelope `data` payload into its typed form
fn decode_data<T: DeserializeOwned>(data: Option<Value>) -> Result<T> {
    serde_json::from_value(data.unwrap_or(Value::Null))
        .map_err(|err| ClientError::InvalidResponse(format!("unexpected payload shape: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SmartlingClient {
        SmartlingClient::new(Config::new(
            "https://api.example.com/v1",
            "test-key",
            "test-project",
        ))
        .unwrap()
    }

    #[test]
    fn request_url_injects_identity_parameters() {
        let client = test_client();
        let mut params = Params::new();
        params.insert("fileUri", "strings/ui.json");

        let url = client.request_url(Operation::Status, params);
        assert_eq!(
            url,
            "https://api.example.com/v1/file/status?apiKey=test-key&projectId=test-project&fileUri=strings%2Fui.json"
        );
    }

    #[test]
    fn request_url_is_idempotent() {
        let client = test_client();
        let mut params = Params::new();
        params.insert("fileUri", "a.json");
        params.insert("locale", "de-DE");

        let first = client.request_url(Operation::Get, params.clone());
        let second = client.request_url(Operation::Get, params);
        assert_eq!(first, second);
    }

    #[test]
    fn caller_parameters_win_on_collision() {
        let client = test_client();
        let mut params = Params::new();
        params.insert("projectId", "override");

        let url = client.request_url(Operation::List, params);
        assert_eq!(
            url,
            "https://api.example.com/v1/file/list?apiKey=test-key&projectId=override"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let err = SmartlingClient::new(Config::new("not a url", "key", "project")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
