//! Canonical path resolution for cached collection entries.
//!
//! An entry carrying a `mount` is the landing page for another collection:
//! its slug becomes the parent segment of every entry in the mounted
//! collection. Paths are derived on demand from whatever collection data is
//! present in the snapshot; they are not cached themselves.

use crate::models::{Entry, Paginated};

use super::Snapshot;

/// The resolved canonical path of one collection entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The entry's locale, unless locale prefixing was suppressed.
    pub locale: Option<String>,
    /// The entry's own slug, unmodified.
    pub main_slug: String,
    /// Slug of the landing page mounting this entry's collection, if any.
    pub parent_slug: Option<String>,
    /// Absolute path: `/` + locale? + parent slug? + main slug.
    pub slug: String,
}

impl Snapshot {
    /// Resolve canonical paths for every entry in the named collections.
    ///
    /// Collections absent from the snapshot contribute no entries and no
    /// landing pages, silently. Result order follows the collection/entry
    /// order of the input.
    pub fn collection_paths(&self, handles: &[&str], exclude_locale: bool) -> Vec<ResolvedPath> {
        let collections: Vec<&Paginated<Vec<Entry>>> = handles
            .iter()
            .filter_map(|handle| self.collections.get(*handle))
            .collect();

        resolve_paths(&collections, exclude_locale)
    }
}

/// Resolve paths across a set of fetched collections.
pub fn resolve_paths(
    collections: &[&Paginated<Vec<Entry>>],
    exclude_locale: bool,
) -> Vec<ResolvedPath> {
    let parent_pages: Vec<&Entry> = collections
        .iter()
        .flat_map(|collection| collection.data.iter())
        .filter(|entry| entry.mount.is_some())
        .collect();

    collections
        .iter()
        .flat_map(|collection| collection.data.iter())
        .map(|entry| resolve_entry(entry, &parent_pages, exclude_locale))
        .collect()
}

fn resolve_entry(entry: &Entry, parent_pages: &[&Entry], exclude_locale: bool) -> ResolvedPath {
    let locale = if exclude_locale {
        None
    } else {
        Some(entry.locale.clone())
    };
    let main_slug = entry.slug.clone();

    // Last match wins: a later landing page mounting the same collection
    // overwrites an earlier one.
    let mut parent_slug = None;
    for page in parent_pages {
        if let Some(mount) = &page.mount
            && mount.handle == entry.collection.handle
        {
            parent_slug = Some(page.slug.clone());
        }
    }

    let slug = assemble_slug(locale.as_deref(), parent_slug.as_deref(), &main_slug);

    ResolvedPath {
        locale,
        main_slug,
        parent_slug,
        slug,
    }
}

fn assemble_slug(locale: Option<&str>, parent_slug: Option<&str>, slug: &str) -> String {
    let mut path = slug.to_string();
    if let Some(parent) = parent_slug {
        path = format!("{parent}/{path}");
    }
    if let Some(locale) = locale {
        path = format!("{locale}/{path}");
    }

    format!("/{path}")
}

#[cfg(test)]
mod tests {
    use crate::models::EntryRef;

    use super::*;

    fn entry(slug: &str, locale: &str, collection: &str, mount: Option<&str>) -> Entry {
        let json = serde_json::json!({
            "slug": slug,
            "locale": locale,
            "collection": { "title": collection, "handle": collection },
        });
        let mut entry: Entry = serde_json::from_value(json).unwrap();
        entry.mount = mount.map(|handle| EntryRef {
            title: handle.to_string(),
            handle: handle.to_string(),
        });
        entry
    }

    fn page_of(entries: Vec<Entry>) -> Paginated<Vec<Entry>> {
        Paginated {
            data: entries,
            meta: None,
            links: None,
        }
    }

    #[test]
    fn mounted_collection_gains_parent_segment() {
        // "posts" holds the landing page "blog", which mounts "pages": every
        // pages entry nests under /blog, while "blog" itself stays flat.
        let pages = page_of(vec![entry("about", "en", "pages", None)]);
        let posts = page_of(vec![entry("blog", "en", "posts", Some("pages"))]);

        let paths = resolve_paths(&[&pages, &posts], false);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].slug, "/en/blog/about");
        assert_eq!(paths[0].parent_slug.as_deref(), Some("blog"));
        assert_eq!(paths[1].slug, "/en/blog");
        assert_eq!(paths[1].parent_slug, None);
    }

    #[test]
    fn exclude_locale_drops_the_prefix() {
        let pages = page_of(vec![entry("about", "en", "pages", None)]);
        let posts = page_of(vec![entry("blog", "en", "posts", Some("pages"))]);

        let paths = resolve_paths(&[&pages, &posts], true);

        assert_eq!(paths[0].slug, "/blog/about");
        assert_eq!(paths[0].locale, None);
        assert_eq!(paths[1].slug, "/blog");
    }

    #[test]
    fn landing_pages_still_resolve_through_their_own_mounts() {
        // Mutual mounts: "about" mounts posts, "blog" mounts pages. Being a
        // landing page does not exempt an entry from path resolution.
        let pages = page_of(vec![entry("about", "en", "pages", Some("posts"))]);
        let posts = page_of(vec![entry("blog", "en", "posts", Some("pages"))]);

        let paths = resolve_paths(&[&pages, &posts], false);

        assert_eq!(paths[0].slug, "/en/blog/about");
        assert_eq!(paths[1].slug, "/en/about/blog");
    }

    #[test]
    fn unmounted_entries_resolve_flat() {
        let pages = page_of(vec![entry("home", "en", "pages", None)]);

        let paths = resolve_paths(&[&pages], false);

        assert_eq!(paths[0].slug, "/en/home");
        assert_eq!(paths[0].main_slug, "home");
        assert_eq!(paths[0].parent_slug, None);
    }

    #[test]
    fn last_matching_landing_page_wins() {
        let pages = page_of(vec![entry("about", "en", "pages", None)]);
        let posts = page_of(vec![
            entry("old-landing", "en", "posts", Some("pages")),
            entry("new-landing", "en", "posts", Some("pages")),
        ]);

        let paths = resolve_paths(&[&pages, &posts], false);

        assert_eq!(paths[0].parent_slug.as_deref(), Some("new-landing"));
        assert_eq!(paths[0].slug, "/en/new-landing/about");
    }

    #[test]
    fn snapshot_skips_absent_collections() {
        let mut snapshot = Snapshot::default();
        snapshot.collections.insert(
            "pages".to_string(),
            page_of(vec![entry("home", "en", "pages", None)]),
        );

        let paths = snapshot.collection_paths(&["pages", "missing"], false);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].slug, "/en/home");
    }
}
