//! Client configuration.

use std::env;

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::models::ResourceKind;

/// Declared resource surface of one content API.
///
/// Absence of a kind's handle list disables that kind entirely: no accessor
/// hands out a query builder for it and the snapshot cache skips it. When
/// `sites` is set, the snapshot cache is built once per site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the content API, without a trailing slash.
    #[serde(default)]
    pub base_url: String,

    /// Collection handles.
    #[serde(default)]
    pub collections: Option<Vec<String>>,

    /// Taxonomy handles.
    #[serde(default)]
    pub taxonomies: Option<Vec<String>>,

    /// Global set handles.
    #[serde(default)]
    pub globals: Option<Vec<String>>,

    /// Navigation handles.
    #[serde(default)]
    pub navigations: Option<Vec<String>>,

    /// Form handles.
    #[serde(default)]
    pub forms: Option<Vec<String>>,

    /// Site locales.
    #[serde(default)]
    pub sites: Option<Vec<String>>,
}

impl ClientConfig {
    /// Configuration with only a base URL; declare resource kinds with the
    /// `with_*` methods.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Declare collection handles.
    #[must_use]
    pub fn with_collections<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    /// Declare taxonomy handles.
    #[must_use]
    pub fn with_taxonomies<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taxonomies = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    /// Declare global set handles.
    #[must_use]
    pub fn with_globals<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.globals = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    /// Declare navigation handles.
    #[must_use]
    pub fn with_navigations<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.navigations = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    /// Declare form handles.
    #[must_use]
    pub fn with_forms<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forms = Some(handles.into_iter().map(Into::into).collect());
        self
    }

    /// Declare site locales.
    #[must_use]
    pub fn with_sites<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sites = Some(sites.into_iter().map(Into::into).collect());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `CMS_API_URL` is required. `CMS_COLLECTIONS`, `CMS_TAXONOMIES`,
    /// `CMS_GLOBALS`, `CMS_NAVIGATIONS`, `CMS_FORMS`, and `CMS_SITES` are
    /// comma-separated handle lists; an absent or empty variable disables
    /// that kind.
    pub fn from_env() -> ClientResult<Self> {
        let base_url = env::var("CMS_API_URL").map_err(|_| ClientError::MissingBaseUrl)?;

        let config = Self {
            base_url,
            collections: parse_list(env::var("CMS_COLLECTIONS").ok()),
            taxonomies: parse_list(env::var("CMS_TAXONOMIES").ok()),
            globals: parse_list(env::var("CMS_GLOBALS").ok()),
            navigations: parse_list(env::var("CMS_NAVIGATIONS").ok()),
            forms: parse_list(env::var("CMS_FORMS").ok()),
            sites: parse_list(env::var("CMS_SITES").ok()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Declared handles for `kind`, or `None` when the kind is disabled.
    pub fn handles(&self, kind: ResourceKind) -> Option<&[String]> {
        let list = match kind {
            ResourceKind::Collection => &self.collections,
            ResourceKind::Taxonomy => &self.taxonomies,
            ResourceKind::Global => &self.globals,
            ResourceKind::Navigation => &self.navigations,
            ResourceKind::Form => &self.forms,
        };
        list.as_deref()
    }

    /// Check construction-time invariants.
    ///
    /// The base URL must be present and must not end with a path separator;
    /// both are configuration errors reported here, never at first fetch.
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::MissingBaseUrl);
        }
        if self.base_url.ends_with('/') {
            return Err(ClientError::TrailingSlashBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }
}

/// Split a comma-separated handle list, dropping empty segments.
fn parse_list(raw: Option<String>) -> Option<Vec<String>> {
    let raw = raw?;
    let items: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() { None } else { Some(items) }
}
