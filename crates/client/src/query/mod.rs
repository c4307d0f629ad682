//! Fluent query construction.
//!
//! This module provides:
//! - QueryBuilder: an immutable, chainable query value per endpoint family
//! - Condition: the closed filter-condition vocabulary
//! - Fields: one-or-many field arguments with wire-case conversion
//!
//! A [`QueryBuilder`] is a persistent value: every operation consumes the
//! builder and returns a new one carrying the prior parameters plus the new
//! fragment, so two chains can never write through a shared buffer.
//! Single-use operations (`site`, `limit`/`paginate`) narrow the builder's
//! type so a second call does not compile.

mod condition;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::fetch::Fetcher;
use crate::models::Paginated;

pub use condition::Condition;

/// Endpoint family a query builder is anchored at.
///
/// The family decides how a site selector is spelled on the wire: entry and
/// term listings filter by site, global and tree endpoints take a bare
/// `site` parameter.
pub trait Endpoint: sealed::Sealed {
    /// Whether `site=<locale>` is a bare parameter rather than a filter.
    const BARE_SITE_PARAM: bool;
}

/// Marker for `/collections/<handle>/entries`.
pub struct Entries;

/// Marker for `/taxonomies/<handle>/terms`.
pub struct Terms;

/// Marker for `/globals/<handle>`.
pub struct Globals;

/// Marker for `/navs/<handle>/tree`.
pub struct Tree;

impl Endpoint for Entries {
    const BARE_SITE_PARAM: bool = false;
}

impl Endpoint for Terms {
    const BARE_SITE_PARAM: bool = false;
}

impl Endpoint for Globals {
    const BARE_SITE_PARAM: bool = true;
}

impl Endpoint for Tree {
    const BARE_SITE_PARAM: bool = true;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Entries {}
    impl Sealed for super::Terms {}
    impl Sealed for super::Globals {}
    impl Sealed for super::Tree {}
}

/// Typestate: the `site` capability is still available.
pub struct SiteOpen;

/// Typestate: `site` has been applied.
pub struct SiteSet;

/// Typestate: the `limit`/`paginate` capability is still available.
pub struct LimitOpen;

/// Typestate: `limit` or `paginate` has been applied.
pub struct LimitSet;

/// One field name or several, converted to wire case and comma-joined.
///
/// Accepts `&str`, string arrays, and `Vec`s; each name is converted
/// individually, so `["mainSlug", "apiUrl"]` becomes `main_slug,api_url`.
pub struct Fields(String);

impl Fields {
    fn as_wire(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fields {
    fn from(field: &str) -> Self {
        Self(to_wire_case(field))
    }
}

impl From<String> for Fields {
    fn from(field: String) -> Self {
        Self(to_wire_case(&field))
    }
}

impl From<&[&str]> for Fields {
    fn from(fields: &[&str]) -> Self {
        Self(join_wire(fields))
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(fields: [&str; N]) -> Self {
        Self(join_wire(&fields))
    }
}

impl From<Vec<&str>> for Fields {
    fn from(fields: Vec<&str>) -> Self {
        Self(join_wire(&fields))
    }
}

/// Convert a caller-convention identifier to the wire convention.
///
/// Pure: an underscore is inserted before every ASCII uppercase letter,
/// which is then lowercased (`mainSlug` becomes `main_slug`). Names already
/// in wire case pass through unchanged, as do separators like hyphens in
/// term slugs.
fn to_wire_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn join_wire(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| to_wire_case(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// A chainable query against one resource endpoint.
///
/// `E` is the endpoint family; `Site` and `Limit` track which single-use
/// operations remain available. Parameters are appended in call order and
/// never reordered or deduplicated, so two logically equivalent chains built
/// in different order produce different wire strings; the tests rely on
/// this.
///
/// Single-use operations do not compile twice on one chain:
///
/// ```compile_fail
/// use raccolta_client::{Client, ClientConfig};
///
/// let client = Client::new(
///     ClientConfig::new("https://example.com/api").with_collections(["blog"]),
/// )
/// .unwrap();
///
/// let query = client.collection("blog").unwrap().site("en").site("fr");
/// ```
#[must_use]
pub struct QueryBuilder<E, Site = SiteOpen, Limit = LimitOpen> {
    fetcher: Arc<dyn Fetcher>,
    endpoint: String,
    params: Vec<String>,
    _state: PhantomData<(E, Site, Limit)>,
}

impl<E: Endpoint> QueryBuilder<E> {
    pub(crate) fn new(fetcher: Arc<dyn Fetcher>, endpoint: String) -> Self {
        Self {
            fetcher,
            endpoint,
            params: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl<E: Endpoint, Site, Limit> QueryBuilder<E, Site, Limit> {
    /// Derive a new builder from this one plus one more parameter.
    fn append<S2, L2>(self, param: String) -> QueryBuilder<E, S2, L2> {
        let mut params = self.params;
        params.push(param);

        QueryBuilder {
            fetcher: self.fetcher,
            endpoint: self.endpoint,
            params,
            _state: PhantomData,
        }
    }

    /// Append `filter[<field>:<condition>]=<value>`. Repeatable.
    ///
    /// `field` may be one name or several; names are converted to wire case
    /// and lists joined with commas. The value is passed verbatim.
    pub fn filter(self, field: impl Into<Fields>, condition: Condition, value: impl fmt::Display) -> Self {
        let field = field.into();
        self.append(format!(
            "filter[{}:{}]={value}",
            field.as_wire(),
            condition.as_str()
        ))
    }

    /// Append `filter[taxonomy:<taxonomy>:<condition>]=<value>`. Repeatable.
    ///
    /// `value` may be a single term slug or several, joined with commas.
    pub fn filter_by_taxonomy(
        self,
        taxonomy: &str,
        condition: Condition,
        value: impl Into<Fields>,
    ) -> Self {
        let value = value.into();
        self.append(format!(
            "filter[taxonomy:{taxonomy}:{}]={}",
            condition.as_str(),
            value.as_wire()
        ))
    }

    /// Append `sort=<field>`, or `sort=-<field>` when `reverse` is true.
    ///
    /// Repeatable; later calls add further sort keys.
    pub fn sort(self, field: impl Into<Fields>, reverse: bool) -> Self {
        let prefix = if reverse { "-" } else { "" };
        let field = field.into();
        self.append(format!("sort={prefix}{}", field.as_wire()))
    }

    /// Append `fields=<f1>,<f2>`. Repeatable.
    pub fn select_fields(self, fields: impl Into<Fields>) -> Self {
        let fields = fields.into();
        self.append(format!("fields={}", fields.as_wire()))
    }

    /// The fully assembled request URL.
    pub fn url(&self) -> String {
        format!("{}?{}", self.endpoint, self.params.join("&"))
    }

    /// Execute the query and decode the response envelope.
    ///
    /// Terminal: consumes the chain. An empty payload surfaces as
    /// [`ClientError::NoData`]; a payload of the wrong shape as
    /// [`ClientError::Decode`].
    pub async fn get<T: DeserializeOwned>(self) -> ClientResult<Paginated<T>> {
        let url = self.url();
        let payload = self.fetcher.fetch(&url).await?;
        let payload = payload.ok_or(ClientError::NoData { url })?;

        Ok(serde_json::from_value(payload)?)
    }
}

impl<E: Endpoint, Limit> QueryBuilder<E, SiteOpen, Limit> {
    /// Select the site/locale to query. Single use.
    ///
    /// Entry and term endpoints spell this `filter[site]=<locale>`; global
    /// and tree endpoints take a bare `site=<locale>`.
    pub fn site(self, locale: &str) -> QueryBuilder<E, SiteSet, Limit> {
        let param = if E::BARE_SITE_PARAM {
            format!("site={locale}")
        } else {
            format!("filter[site]={locale}")
        };
        self.append(param)
    }
}

impl<E: Endpoint, Site> QueryBuilder<E, Site, LimitOpen> {
    /// Cap the number of returned items. Single use.
    pub fn limit(self, limit: u64) -> QueryBuilder<E, Site, LimitSet> {
        self.append(format!("limit={limit}"))
    }

    /// Request page `page` of `limit` items each.
    ///
    /// Single use; consumes the same capability slot as
    /// [`limit`](Self::limit), so the two are mutually exclusive:
    ///
    /// ```compile_fail
    /// use raccolta_client::{Client, ClientConfig};
    ///
    /// let client = Client::new(
    ///     ClientConfig::new("https://example.com/api").with_collections(["blog"]),
    /// )
    /// .unwrap();
    ///
    /// let query = client.collection("blog").unwrap().limit(10).paginate(2, 10);
    /// ```
    pub fn paginate(self, page: u64, limit: u64) -> QueryBuilder<E, Site, LimitSet> {
        self.append(format!("limit={limit}&page={page}"))
    }
}

impl<E, Site, Limit> fmt::Debug for QueryBuilder<E, Site, Limit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("endpoint", &self.endpoint)
            .field("params", &self.params)
            .finish()
    }
}
