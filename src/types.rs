//! Typed payloads and per-operation options

use serde::Deserialize;

use crate::params::{ParamValue, Params};

/// Payload returned by a successful upload
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    /// Whether the upload replaced an existing file with the same URI
    #[serde(default)]
    pub over_written: Option<bool>,
    /// Number of translatable strings detected
    #[serde(default)]
    pub string_count: u64,
    /// Number of translatable words detected
    #[serde(default)]
    pub word_count: u64,
}

/// Per-file metadata, returned by `status` and inside `list` results
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    /// Caller-chosen unique identifier for the file
    pub file_uri: String,
    /// File type identifier, e.g. `json`, `android`, `gettext`
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub string_count: u64,
    #[serde(default)]
    pub word_count: u64,
    /// Strings approved for translation
    #[serde(default)]
    pub approved_string_count: u64,
    /// Strings with completed translations in the requested locale
    #[serde(default)]
    pub completed_string_count: u64,
    /// Upload timestamp as reported by the service
    #[serde(default)]
    pub last_uploaded: Option<String>,
}

/// Payload returned by `list`
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListing {
    /// Number of files matching the query
    #[serde(default)]
    pub file_count: u64,
    /// The matching files
    #[serde(default)]
    pub file_list: Vec<FileStatus>,
}

/// Which translation state a download returns
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetrievalType {
    /// Any translations, including non-published ones
    Pending,
    /// Only published/pre-published translations (the service default)
    Published,
    /// Pseudo-translated original text, for layout testing
    Pseudo,
}

impl RetrievalType {
    /// The wire value for this retrieval type
    pub fn as_str(self) -> &'static str {
        match self {
            RetrievalType::Pending => "pending",
            RetrievalType::Published => "published",
            RetrievalType::Pseudo => "pseudo",
        }
    }
}

/// Optional upload parameters
#[derive(Clone, Debug, Default)]
pub struct UploadOptions {
    /// Mark content approved for translation on submission. Service default
    /// is `false`.
    pub approved: Option<bool>,
    /// URL called back when a file reaches 100% published for a locale
    pub callback_url: Option<String>,
    /// Custom parser directives, serialized under the `smartling.` prefix
    pub directives: Params,
}

impl UploadOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the approved flag
    pub fn with_approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }

    /// Set the callback URL
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Add a custom parser directive, e.g.
    /// `with_directive("placeholder_format_custom", "__.+?__")`
    pub fn with_directive(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.directives.insert(name, value);
        self
    }

    pub(crate) fn apply(self, params: &mut Params) {
        if let Some(approved) = self.approved {
            params.insert("approved", approved);
        }
        if let Some(url) = self.callback_url {
            params.insert("callbackUrl", url);
        }
        if !self.directives.is_empty() {
            params.insert("smartling", self.directives);
        }
    }
}

/// Optional download parameters
#[derive(Clone, Debug, Default)]
pub struct GetOptions {
    /// Locale to download; original content is returned when absent
    pub locale: Option<String>,
    /// Which translation state to return; the service assumes published
    pub retrieval_type: Option<RetrievalType>,
    /// Include untranslated originals (gettext, xml and json files only)
    pub include_original_strings: Option<bool>,
}

impl GetOptions {
    pub(crate) fn apply(self, params: &mut Params) {
        if let Some(locale) = self.locale {
            params.insert("locale", locale);
        }
        if let Some(retrieval_type) = self.retrieval_type {
            params.insert("retrievalType", retrieval_type.as_str());
        }
        if let Some(include) = self.include_original_strings {
            params.insert("includeOriginalStrings", include);
        }
    }
}

/// Optional list filters, paging and ordering
#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    /// Locale for per-locale completion counts
    pub locale: Option<String>,
    /// SQL-LIKE mask over file URIs, e.g. `%.json`
    pub uri_mask: Option<String>,
    /// Restrict to these file types, combined with logical OR
    pub file_types: Vec<String>,
    /// Only files uploaded after this date
    pub last_uploaded_after: Option<String>,
    /// Only files uploaded before this date
    pub last_uploaded_before: Option<String>,
    /// Result-set offset
    pub offset: Option<u32>,
    /// Maximum number of files returned
    pub limit: Option<u32>,
    /// Workflow conditions, e.g. `haveAtLeastOneTranslated`, combined with OR
    pub conditions: Vec<String>,
    /// Return-parameter name with optional `_asc`/`_desc` suffix
    pub order_by: Option<String>,
}

impl ListOptions {
    pub(crate) fn apply(self, params: &mut Params) {
        if let Some(locale) = self.locale {
            params.insert("locale", locale);
        }
        if let Some(mask) = self.uri_mask {
            params.insert("uriMask", mask);
        }
        for file_type in self.file_types {
            params.append("fileTypes", file_type);
        }
        if let Some(after) = self.last_uploaded_after {
            params.insert("lastUploadedAfter", after);
        }
        if let Some(before) = self.last_uploaded_before {
            params.insert("lastUploadedBefore", before);
        }
        if let Some(offset) = self.offset {
            params.insert("offset", offset);
        }
        if let Some(limit) = self.limit {
            params.insert("limit", limit);
        }
        for condition in self.conditions {
            params.append("conditions", condition);
        }
        if let Some(order_by) = self.order_by {
            params.insert("orderBy", order_by);
        }
    }
}
