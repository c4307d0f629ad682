//! Snapshot cache: one fetch pass over every declared resource.
//!
//! This module provides:
//! - Snapshot: all fetched resources for one site
//! - SnapshotCache: the single- or per-site cache built from a client
//! - ResolvedPath: canonical entry paths derived from cached collections
//!
//! The build runs strictly one fetch at a time (kinds in a fixed order,
//! handles in declaration order, sites in declaration order) so logs and
//! test expectations stay deterministic. Per-resource failures are logged
//! and absorbed; the build itself never fails.

mod paths;

use std::collections::HashMap;

use tracing::warn;

use crate::client::Client;
use crate::error::ClientError;
use crate::models::{Entry, Form, GlobalSet, NavNode, Paginated, ResourceKind, Term};

pub use paths::{ResolvedPath, resolve_paths};

/// Limit applied to collection queries so the whole set arrives in one page.
const FETCH_ALL_LIMIT: u64 = u64::MAX;

/// Options for building a [`SnapshotCache`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheOptions {
    /// Suggested lifetime of the snapshot, in seconds.
    ///
    /// Accepted for API stability and currently unused: the cache never
    /// refreshes or expires. Callers wanting fresher data build a new one.
    pub expires_secs: u64,
}

/// All fetched resources for one site, or for the whole API when no sites
/// are declared.
///
/// A key absent from a map means that resource's fetch yielded no usable
/// data; the miss is the only observable failure signal.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub collections: HashMap<String, Paginated<Vec<Entry>>>,
    pub taxonomies: HashMap<String, Paginated<Vec<Term>>>,
    pub globals: HashMap<String, Paginated<GlobalSet>>,
    /// Form definitions, stored unwrapped (no pagination envelope).
    pub forms: HashMap<String, Form>,
    pub navigations: HashMap<String, Paginated<Vec<NavNode>>>,
}

/// A point-in-time, non-refreshing cache of every declared resource.
#[derive(Debug, Clone)]
pub enum SnapshotCache {
    /// No sites declared: one snapshot for the whole API.
    Single(Snapshot),
    /// One independent snapshot per declared site.
    PerSite(HashMap<String, Snapshot>),
}

impl SnapshotCache {
    /// Fetch every declared resource and assemble the cache.
    ///
    /// With sites declared, each site's snapshot is fully built before the
    /// next site starts, and `site(<locale>)` is applied to collection,
    /// taxonomy, global, and navigation queries; forms have no site
    /// dimension.
    pub async fn build(client: &Client, _options: CacheOptions) -> Self {
        match &client.config().sites {
            Some(sites) => {
                let mut by_site = HashMap::new();
                for site in sites {
                    by_site.insert(site.clone(), build_snapshot(client, Some(site.as_str())).await);
                }
                Self::PerSite(by_site)
            }
            None => Self::Single(build_snapshot(client, None).await),
        }
    }

    /// The single snapshot, when no sites were declared.
    pub fn single(&self) -> Option<&Snapshot> {
        match self {
            Self::Single(snapshot) => Some(snapshot),
            Self::PerSite(_) => None,
        }
    }

    /// The snapshot for `site`, when sites were declared.
    pub fn site(&self, site: &str) -> Option<&Snapshot> {
        match self {
            Self::Single(_) => None,
            Self::PerSite(map) => map.get(site),
        }
    }
}

/// Fetch every declared resource once, in a fixed kind order.
async fn build_snapshot(client: &Client, site: Option<&str>) -> Snapshot {
    let mut snapshot = Snapshot::default();
    let config = client.config();

    if let Some(handles) = &config.collections {
        for handle in handles {
            let result = match client.collection(handle) {
                Ok(query) => match site {
                    Some(locale) => {
                        query
                            .site(locale)
                            .limit(FETCH_ALL_LIMIT)
                            .get::<Vec<Entry>>()
                            .await
                    }
                    None => query.limit(FETCH_ALL_LIMIT).get::<Vec<Entry>>().await,
                },
                Err(err) => Err(err),
            };

            match result {
                Ok(data) => {
                    snapshot.collections.insert(handle.clone(), data);
                }
                Err(err) => log_missing(ResourceKind::Collection, handle, site, &err),
            }
        }
    }

    if let Some(handles) = &config.taxonomies {
        for handle in handles {
            let result = match client.taxonomy(handle) {
                Ok(query) => match site {
                    Some(locale) => query.site(locale).get::<Vec<Term>>().await,
                    None => query.get::<Vec<Term>>().await,
                },
                Err(err) => Err(err),
            };

            match result {
                Ok(data) => {
                    snapshot.taxonomies.insert(handle.clone(), data);
                }
                Err(err) => log_missing(ResourceKind::Taxonomy, handle, site, &err),
            }
        }
    }

    if let Some(handles) = &config.globals {
        for handle in handles {
            let result = match client.global(handle) {
                Ok(query) => match site {
                    Some(locale) => query.site(locale).get::<GlobalSet>().await,
                    None => query.get::<GlobalSet>().await,
                },
                Err(err) => Err(err),
            };

            match result {
                Ok(data) => {
                    snapshot.globals.insert(handle.clone(), data);
                }
                Err(err) => log_missing(ResourceKind::Global, handle, site, &err),
            }
        }
    }

    if let Some(handles) = &config.forms {
        for handle in handles {
            let result = match client.forms() {
                Ok(forms) => forms.get(handle).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(envelope) => {
                    snapshot.forms.insert(handle.clone(), envelope.data);
                }
                Err(err) => log_missing(ResourceKind::Form, handle, site, &err),
            }
        }
    }

    if let Some(handles) = &config.navigations {
        for handle in handles {
            let result = match client.navigation(handle) {
                Ok(query) => match site {
                    Some(locale) => query.site(locale).get::<Vec<NavNode>>().await,
                    None => query.get::<Vec<NavNode>>().await,
                },
                Err(err) => Err(err),
            };

            match result {
                Ok(data) => {
                    snapshot.navigations.insert(handle.clone(), data);
                }
                Err(err) => log_missing(ResourceKind::Navigation, handle, site, &err),
            }
        }
    }

    snapshot
}

fn log_missing(kind: ResourceKind, handle: &str, site: Option<&str>, err: &ClientError) {
    match site {
        Some(site) => warn!(
            kind = %kind,
            handle = %handle,
            site = %site,
            error = %err,
            "resource yielded no data, left out of snapshot"
        ),
        None => warn!(
            kind = %kind,
            handle = %handle,
            error = %err,
            "resource yielded no data, left out of snapshot"
        ),
    }
}
