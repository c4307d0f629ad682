//! Raccolta, a typed async client for headless CMS content APIs.
//!
//! This library provides:
//! - Client: per-kind resource accessors anchored at a configured base URL
//! - QueryBuilder: immutable fluent queries with single-use capabilities
//!   enforced at the type level
//! - SnapshotCache: a one-shot, optionally per-site cache of every declared
//!   resource
//! - ResolvedPath: canonical hierarchical URLs for entries in mounted
//!   collections
//!
//! # Example
//! ```no_run
//! use raccolta_client::{CacheOptions, Client, ClientConfig, Condition, Entry, SnapshotCache};
//!
//! # async fn run() -> raccolta_client::ClientResult<()> {
//! let client = Client::new(
//!     ClientConfig::new("https://example.com/api")
//!         .with_collections(["blog", "pages"])
//!         .with_taxonomies(["tags"])
//!         .with_sites(["en", "fr"]),
//! )?;
//!
//! let hello = client
//!     .collection("blog")?
//!     .filter("title", Condition::Is, "hello")
//!     .sort("date", true)
//!     .limit(10)
//!     .get::<Vec<Entry>>()
//!     .await?;
//!
//! let cache = SnapshotCache::build(&client, CacheOptions::default()).await;
//! if let Some(snapshot) = cache.site("en") {
//!     let paths = snapshot.collection_paths(&["blog", "pages"], false);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod query;
pub mod snapshot;

pub use client::{Client, FormsRequest};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use fetch::{Fetcher, HttpFetcher};
pub use models::{
    Entry, EntryRef, Form, FormField, GlobalSet, NavNode, NavPage, PageLinks, PageMeta, Paginated,
    ResourceKind, Term, TermRef,
};
pub use query::{Condition, QueryBuilder};
pub use snapshot::{CacheOptions, ResolvedPath, Snapshot, SnapshotCache, resolve_paths};
