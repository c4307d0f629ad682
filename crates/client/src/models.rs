//! Wire models for the content API.
//!
//! Field names match the API's snake_case payloads directly. Every endpoint
//! wraps its payload in a `data` envelope, which [`Paginated`] mirrors;
//! list endpoints add pagination metadata, single-item endpoints do not.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The five resource kinds a client can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Collection,
    Taxonomy,
    Global,
    Navigation,
    Form,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Collection => "collection",
            Self::Taxonomy => "taxonomy",
            Self::Global => "global",
            Self::Navigation => "navigation",
            Self::Form => "form",
        };
        f.write_str(name)
    }
}

/// A `data` envelope with optional pagination metadata.
///
/// `T` is the payload shape: a `Vec` for list endpoints, a single object for
/// globals and single-form fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The decoded payload.
    pub data: T,

    /// Pagination metadata, present on list endpoints.
    #[serde(default)]
    pub meta: Option<PageMeta>,

    /// First/last/prev page links, present on list endpoints.
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u64,
    /// Index of the first item on this page; absent when the page is empty.
    #[serde(default)]
    pub from: Option<u64>,
    pub last_page: u64,
    #[serde(default)]
    pub links: Vec<PageMetaLink>,
    pub path: String,
    pub per_page: u64,
    /// Index of the last item on this page; absent when the page is empty.
    #[serde(default)]
    pub to: Option<u64>,
    pub total: u64,
}

/// One pager link inside [`PageMeta`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetaLink {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

/// Top-level page links of a list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// A `{ title, handle }` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
    #[serde(default)]
    pub title: String,
    pub handle: String,
}

/// One entry in a collection's `data` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub locale: String,

    /// The collection this entry belongs to.
    pub collection: EntryRef,

    /// When set, this entry is the landing page for the referenced
    /// collection: its slug becomes that collection's parent path segment.
    #[serde(default)]
    pub mount: Option<EntryRef>,

    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,

    /// Blueprint-specific fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A `{ title, handle }` reference to the owning taxonomy, with optional
/// URL metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRef {
    #[serde(default)]
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// One term in a taxonomy's `data` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub locale: String,

    /// The taxonomy this term belongs to.
    pub taxonomy: TermRef,

    #[serde(default)]
    pub entries_count: Option<u64>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,

    /// Blueprint-specific fields not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A global set's payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSet {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub api_url: Option<String>,

    /// The set's fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One node in a navigation tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavNode {
    /// The page this node points at.
    pub page: NavPage,
    #[serde(default)]
    pub depth: u32,
    /// Child nodes, one level deeper.
    #[serde(default)]
    pub children: Vec<NavNode>,
}

/// Page payload of a navigation node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavPage {
    #[serde(default)]
    pub entry_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A form definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub handle: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub api_url: Option<String>,
    /// Field definitions keyed by field handle.
    #[serde(default)]
    pub fields: BTreeMap<String, FormField>,
}

/// Attributes shared by every form field type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldBase {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub localizable: bool,
    /// Listing visibility: `visible`, `hidden`, or `not_listable`.
    #[serde(default)]
    pub listable: Option<String>,
    /// Form visibility: `visible`, `hidden`, `computed`, or `read_only`.
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub validate: Option<Vec<String>>,
}

/// A form field definition, discriminated by its `type` tag.
///
/// Unknown field types added upstream decode as [`FormField::Other`] rather
/// than failing the whole form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormField {
    Text {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default)]
        input_type: Option<String>,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        character_limit: Option<u32>,
        #[serde(default)]
        autocomplete: Option<String>,
    },
    Textarea {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        character_limit: Option<u32>,
    },
    Checkboxes {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default)]
        inline: bool,
        #[serde(default)]
        options: BTreeMap<String, Option<String>>,
    },
    Radio {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default)]
        inline: bool,
        #[serde(default)]
        options: BTreeMap<String, Option<String>>,
    },
    Toggle {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default, rename = "default")]
        default_value: bool,
    },
    Assets {
        #[serde(flatten)]
        base: FieldBase,
        /// `list` or `grid`.
        #[serde(default)]
        mode: Option<String>,
        #[serde(default)]
        container: Option<String>,
        #[serde(default)]
        allow_uploads: bool,
        #[serde(default)]
        max_files: Option<u32>,
    },
    Integer {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default)]
        prepend: Option<String>,
        #[serde(default)]
        append: Option<String>,
    },
    Spacer {
        #[serde(flatten)]
        base: FieldBase,
    },
    Select {
        #[serde(flatten)]
        base: FieldBase,
        #[serde(default)]
        multiple: bool,
        #[serde(default)]
        clearable: bool,
        #[serde(default)]
        searchable: bool,
        #[serde(default)]
        taggable: bool,
        #[serde(default)]
        options: BTreeMap<String, Option<String>>,
    },
    /// A field type this client does not model.
    #[serde(other)]
    Other,
}
