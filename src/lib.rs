//! # Smartling Client SDK
//!
//! A client for the Smartling translation-management Files API.
//!
//! ## Features
//!
//! - **Six file operations**: upload, get/download, list, status, rename, delete
//! - **Envelope normalization**: HTTP 200 with a non-`SUCCESS` body code is an
//!   error, surfaced with the service's own code and messages
//! - **Streaming I/O**: uploads stream the source file as multipart form data;
//!   downloads can stream straight to disk
//! - **No hidden policy**: no retries, no caching, no timeouts; orchestration
//!   belongs to the caller
//!
//! ## Example
//!
//! ```rust,ignore
//! use smartling_client::{Config, SmartlingClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SmartlingClient::new(Config::live("your-api-key", "your-project-id"))?;
//!
//!     // Upload a source file
//!     let info = client
//!         .upload("./i18n/ui.json", "i18n/ui.json", "json", None)
//!         .await?;
//!     println!("uploaded {} words", info.word_count);
//!
//!     // Check translation progress
//!     let status = client.status("i18n/ui.json", "de-DE").await?;
//!     println!(
//!         "{}/{} strings translated",
//!         status.completed_string_count, status.string_count
//!     );
//!
//!     // Download the translated file
//!     client
//!         .download("i18n/ui.json", "./i18n/de-DE/ui.json", None)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod operation;
mod params;
mod types;

pub use client::SmartlingClient;
pub use config::{Config, API_BASE_LIVE, API_BASE_SANDBOX};
pub use envelope::{Envelope, EnvelopeBody, CODE_SUCCESS};
pub use error::{ClientError, Result};
pub use operation::Operation;
pub use params::{ParamValue, Params};
pub use types::{
    FileListing, FileStatus, GetOptions, ListOptions, RetrievalType, UploadOptions, UploadResult,
};
