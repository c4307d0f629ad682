//! Resource accessors anchored at the configured API.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::models::{Form, Paginated, ResourceKind};
use crate::query::{Entries, Globals, QueryBuilder, Terms, Tree};

/// Typed client for one content API.
///
/// Accessors exist for every resource kind, but only hand out query builders
/// for kinds and handles the configuration declares; anything else is an
/// explicit error rather than a silently empty query. Each accessor call
/// anchors a fresh, independent [`QueryBuilder`]; chains never share state.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    fetcher: Arc<dyn Fetcher>,
}

impl Client {
    /// Create a client backed by the bundled HTTP fetcher.
    ///
    /// Fails when the base URL is missing or ends with a path separator;
    /// configuration problems surface here, never at first fetch.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Self::with_fetcher(config, Arc::new(HttpFetcher::new()))
    }

    /// Create a client with a caller-supplied fetch gateway.
    pub fn with_fetcher(config: ClientConfig, fetcher: Arc<dyn Fetcher>) -> ClientResult<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }

    /// The declared resource surface.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query builder over a collection's entries.
    pub fn collection(&self, handle: &str) -> ClientResult<QueryBuilder<Entries>> {
        self.check_handle(ResourceKind::Collection, handle)?;

        Ok(QueryBuilder::new(
            Arc::clone(&self.fetcher),
            format!("{}/collections/{handle}/entries", self.config.base_url),
        ))
    }

    /// Query builder over a taxonomy's terms.
    pub fn taxonomy(&self, handle: &str) -> ClientResult<QueryBuilder<Terms>> {
        self.check_handle(ResourceKind::Taxonomy, handle)?;

        Ok(QueryBuilder::new(
            Arc::clone(&self.fetcher),
            format!("{}/taxonomies/{handle}/terms", self.config.base_url),
        ))
    }

    /// Query builder over a global set.
    pub fn global(&self, handle: &str) -> ClientResult<QueryBuilder<Globals>> {
        self.check_handle(ResourceKind::Global, handle)?;

        Ok(QueryBuilder::new(
            Arc::clone(&self.fetcher),
            format!("{}/globals/{handle}", self.config.base_url),
        ))
    }

    /// Query builder over a navigation tree.
    pub fn navigation(&self, handle: &str) -> ClientResult<QueryBuilder<Tree>> {
        self.check_handle(ResourceKind::Navigation, handle)?;

        Ok(QueryBuilder::new(
            Arc::clone(&self.fetcher),
            format!("{}/navs/{handle}/tree", self.config.base_url),
        ))
    }

    /// Fetch surface for form definitions.
    ///
    /// Forms bypass the query-builder chain: the endpoint takes no handle
    /// segment and supports no filters.
    pub fn forms(&self) -> ClientResult<FormsRequest> {
        if self.config.handles(ResourceKind::Form).is_none() {
            return Err(ClientError::KindNotDeclared(ResourceKind::Form));
        }

        Ok(FormsRequest {
            fetcher: Arc::clone(&self.fetcher),
            url: format!("{}/forms", self.config.base_url),
        })
    }

    fn check_handle(&self, kind: ResourceKind, handle: &str) -> ClientResult<()> {
        let Some(declared) = self.config.handles(kind) else {
            return Err(ClientError::KindNotDeclared(kind));
        };

        if !declared.iter().any(|h| h == handle) {
            return Err(ClientError::UnknownHandle {
                kind,
                handle: handle.to_string(),
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

/// Accessor for form definitions.
#[derive(Clone)]
pub struct FormsRequest {
    fetcher: Arc<dyn Fetcher>,
    url: String,
}

impl FormsRequest {
    /// Fetch every form definition.
    pub async fn get_all(&self) -> ClientResult<Paginated<Vec<Form>>> {
        self.fetch_at(self.url.clone()).await
    }

    /// Fetch one form definition by handle.
    pub async fn get(&self, id: &str) -> ClientResult<Paginated<Form>> {
        self.fetch_at(format!("{}/{id}", self.url)).await
    }

    async fn fetch_at<T: DeserializeOwned>(&self, url: String) -> ClientResult<Paginated<T>> {
        let payload = self.fetcher.fetch(&url).await?;
        let payload = payload.ok_or(ClientError::NoData { url })?;

        Ok(serde_json::from_value(payload)?)
    }
}

impl std::fmt::Debug for FormsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormsRequest").field("url", &self.url).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("https://example.com/api")
            .with_collections(["blog", "pages"])
            .with_navigations(["main"])
    }

    #[test]
    fn construction_rejects_bad_base_urls() {
        assert!(matches!(
            Client::new(ClientConfig::new("")),
            Err(ClientError::MissingBaseUrl)
        ));
        assert!(matches!(
            Client::new(ClientConfig::new("https://example.com/api/")),
            Err(ClientError::TrailingSlashBaseUrl(_))
        ));
    }

    #[test]
    fn accessors_anchor_at_kind_paths() {
        let client = Client::new(config()).unwrap();

        let url = client.collection("blog").unwrap().url();
        assert!(url.starts_with("https://example.com/api/collections/blog/entries?"));

        let url = client.navigation("main").unwrap().url();
        assert!(url.starts_with("https://example.com/api/navs/main/tree?"));
    }

    #[test]
    fn undeclared_kind_is_an_error() {
        let client = Client::new(config()).unwrap();

        assert!(matches!(
            client.taxonomy("tags"),
            Err(ClientError::KindNotDeclared(ResourceKind::Taxonomy))
        ));
        assert!(matches!(
            client.forms(),
            Err(ClientError::KindNotDeclared(ResourceKind::Form))
        ));
    }

    #[test]
    fn unknown_handle_is_an_error() {
        let client = Client::new(config()).unwrap();

        assert!(matches!(
            client.collection("recipes"),
            Err(ClientError::UnknownHandle { kind: ResourceKind::Collection, .. })
        ));
    }

    #[test]
    fn parallel_chains_from_one_client_stay_independent() {
        let client = Client::new(config()).unwrap();

        let first = client.collection("blog").unwrap().sort("title", false);
        let second = client.collection("pages").unwrap().limit(5);

        assert!(first.url().ends_with("/blog/entries?sort=title"));
        assert!(second.url().ends_with("/pages/entries?limit=5"));
    }
}
