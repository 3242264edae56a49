/*!
 * Data model for Zotero publication items.
 *
 * Mirrors the shape returned by the public API with `include=data`: each
 * item carries a `data` object with the bibliographic fields and a `meta`
 * object with derived values such as the parsed date. Unknown fields are
 * ignored; fields the renderer needs are checked at render time.
 */

use serde::{Deserialize, Serialize};

/// One publication item returned by the Zotero API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Publication {
    /// Bibliographic fields of the item
    pub data: PublicationData,

    /// Derived metadata
    #[serde(default)]
    pub meta: PublicationMeta,
}

/// Bibliographic fields of a publication item
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PublicationData {
    /// Item key, also the basename of a locally hosted PDF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Title of the publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Name of the conference proceedings; presence marks the item as a
    /// proceedings record
    #[serde(rename = "proceedingsTitle", default, skip_serializing_if = "Option::is_none")]
    pub proceedings_title: Option<String>,

    /// Page range within the proceedings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    /// Digital object identifier, used to build the resolver link
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// ISBN of the proceedings volume
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// Ordered list of creators
    #[serde(default)]
    pub creators: Vec<Creator>,
}

/// One creator entry of a publication
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Creator {
    /// Given name
    #[serde(rename = "firstName", default)]
    pub first_name: String,

    /// Family name
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

impl Creator {
    /// Create a creator from a given and a family name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Full name as rendered in the author string
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Derived metadata of a publication item
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PublicationMeta {
    /// Normalized publication date, e.g. "2021-09-14"
    #[serde(rename = "parsedDate", default, skip_serializing_if = "Option::is_none")]
    pub parsed_date: Option<String>,
}

impl Publication {
    /// Whether this item is a conference-proceedings record
    ///
    /// Presence of the proceedings title is the inclusion filter; items
    /// without one (journal articles, theses, ...) are skipped silently.
    pub fn is_proceedings(&self) -> bool {
        self.data.proceedings_title.is_some()
    }

    /// Item key used for error reporting and PDF links
    pub fn key_or_unknown(&self) -> &str {
        self.data.key.as_deref().unwrap_or("<unknown>")
    }
}
