use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use crate::logic::errors::TransferError;
use crate::logic::file::{numbered_file_name, safe_local_file_name};

/// One stored file as reported by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified: String,
    #[serde(rename = "type", default)]
    pub file_type: String,
}

/// Envelope every JSON endpoint answers with
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    files: Option<Vec<FileEntry>>,
    #[serde(default)]
    filename: Option<String>,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Name of the local file that was sent
    pub local_name: String,
    /// Name the server stored it under (renamed on collision)
    pub stored_name: String,
}

/// Remote file storage as seen by the client.
///
/// Everything above this trait talks to the server only through it, so the
/// upload coordinator and the controller can be driven by an in-memory store
/// in tests.
pub trait FileStore: Send + Sync + 'static {
    /// Upload one local file
    fn upload(
        &self,
        path: PathBuf,
    ) -> impl Future<Output = Result<UploadReceipt, TransferError>> + Send;

    /// Fetch the full ordered listing
    fn list_files(&self) -> impl Future<Output = Result<Vec<FileEntry>, TransferError>> + Send;

    /// Delete a stored file by its literal name
    fn delete_file(&self, name: &str) -> impl Future<Output = Result<(), TransferError>> + Send;

    /// Download a stored file into `dest_dir`, returning the written path
    fn download_file(
        &self,
        name: &str,
        dest_dir: &Path,
    ) -> impl Future<Output = Result<PathBuf, TransferError>> + Send;
}

/// HTTP client for the file server REST API
#[derive(Clone)]
pub struct FileStoreClient {
    base_url: String,
    client: Client,
}

impl FileStoreClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, TransferError> {
        let mut builder = Client::builder().user_agent(concat!("filedeck/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }

    pub fn list_url(&self) -> String {
        format!("{}/api/files", self.base_url)
    }

    /// Download URL with the name escaped as a single path segment
    pub fn download_url(&self, name: &str) -> String {
        format!("{}/api/download/{}", self.base_url, urlencoding::encode(name))
    }

    /// Delete URL with the name escaped as a single path segment
    pub fn delete_url(&self, name: &str) -> String {
        format!("{}/api/delete/{}", self.base_url, urlencoding::encode(name))
    }

    async fn read_envelope(response: Response) -> Result<Envelope, TransferError> {
        let status = response.status();
        let body = response.text().await?;
        parse_envelope(status, &body)
    }
}

/// Parse a JSON envelope, folding `success: false` into an error.
///
/// The server sends the envelope with 4xx/5xx statuses too, so the body is
/// looked at before the status.
fn parse_envelope(status: StatusCode, body: &str) -> Result<Envelope, TransferError> {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) if envelope.success => Ok(envelope),
        Ok(envelope) => Err(TransferError::Application(
            envelope
                .error
                .unwrap_or_else(|| format!("request failed with HTTP {}", status.as_u16())),
        )),
        Err(e) => {
            if status.is_success() {
                Err(TransferError::InvalidResponse(e.to_string()))
            } else {
                Err(TransferError::Server {
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl FileStore for FileStoreClient {
    async fn upload(&self, path: PathBuf) -> Result<UploadReceipt, TransferError> {
        let local_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = tokio::fs::read(&path)
            .await
            .map_err(|source| TransferError::LocalFile {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!(file = %local_name, bytes = data.len(), "uploading");

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(local_name.clone())
            .mime_str("application/octet-stream")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let envelope = Self::read_envelope(response).await?;
        Ok(UploadReceipt {
            stored_name: envelope.filename.unwrap_or_else(|| local_name.clone()),
            local_name,
        })
    }

    async fn list_files(&self) -> Result<Vec<FileEntry>, TransferError> {
        let response = self.client.get(self.list_url()).send().await?;
        let envelope = Self::read_envelope(response).await?;

        envelope
            .files
            .ok_or_else(|| TransferError::InvalidResponse("listing without files".to_string()))
    }

    async fn delete_file(&self, name: &str) -> Result<(), TransferError> {
        let response = self.client.delete(self.delete_url(name)).send().await?;
        Self::read_envelope(response).await?;
        Ok(())
    }

    async fn download_file(&self, name: &str, dest_dir: &Path) -> Result<PathBuf, TransferError> {
        let mut response = self.client.get(self.download_url(name)).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Missing files come back as a JSON envelope
            return match Self::read_envelope(response).await {
                Err(e) => Err(e),
                Ok(_) => Err(TransferError::Server {
                    status: status.as_u16(),
                }),
            };
        }

        let (target, mut file) = create_unique_file(dest_dir, name).await?;

        if let Err(e) = write_body(&mut response, &mut file, &target).await {
            // A truncated file under the real name would look complete
            drop(file);
            if let Err(remove_err) = tokio::fs::remove_file(&target).await {
                tracing::warn!(path = %target.display(), error = %remove_err, "could not remove partial download");
            }
            return Err(e);
        }

        Ok(target)
    }
}

/// Stream the response body into `file`
async fn write_body(
    response: &mut Response,
    file: &mut tokio::fs::File,
    target: &Path,
) -> Result<(), TransferError> {
    let local_err = |source| TransferError::LocalFile {
        path: target.display().to_string(),
        source,
    };

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(local_err)?;
    }
    file.flush().await.map_err(local_err)
}

/// Create a new file for `name` inside `dir` without clobbering existing files
async fn create_unique_file(
    dir: &Path,
    name: &str,
) -> Result<(PathBuf, tokio::fs::File), TransferError> {
    let base = safe_local_file_name(name);
    let mut attempt = 0;

    loop {
        let candidate = if attempt == 0 {
            dir.join(&base)
        } else {
            dir.join(numbered_file_name(&base, attempt))
        };

        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && attempt < 1000 => {
                attempt += 1;
            }
            Err(source) => {
                return Err(TransferError::LocalFile {
                    path: candidate.display().to_string(),
                    source,
                })
            }
        }
    }
}
