use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Page — the document returned by the Notion page-retrieve endpoint
// ---------------------------------------------------------------------------

/// A Notion page document as returned by `GET /v1/pages/{page_id}`.
///
/// Every field is optional: the upstream document is treated as opaque and
/// only the fields the viewer needs are modeled. Unknown fields are ignored
/// on deserialize. Extraction helpers on this type are total — no shape of
/// input produces an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub properties: Option<PageProperties>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageProperties {
    #[serde(default)]
    pub title: Option<TitleProperty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitleProperty {
    #[serde(default)]
    pub title: Option<Vec<TextRun>>,
}

/// One rich-text run inside a title property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub plain_text: Option<String>,
}

impl Page {
    /// Fallback title when a page has no usable title runs.
    pub const UNTITLED: &'static str = "Untitled";

    /// Extract the page title.
    ///
    /// Reads the first run of `properties.title.title` and returns its
    /// `plain_text`. Absent, empty, or malformed title structure yields the
    /// literal `"Untitled"`.
    pub fn title(&self) -> String {
        self.properties
            .as_ref()
            .and_then(|p| p.title.as_ref())
            .and_then(|t| t.title.as_ref())
            .and_then(|runs| runs.first())
            .and_then(|run| run.plain_text.clone())
            .unwrap_or_else(|| Self::UNTITLED.to_string())
    }

    /// Extracted metadata view: title plus verbatim pass-through of the
    /// timestamp and URL fields. Absence of any pass-through field is the
    /// caller's concern; they stay `None`.
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            title: self.title(),
            created_time: self.created_time.clone(),
            last_edited_time: self.last_edited_time.clone(),
            url: self.url.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// PageMetadata
// ---------------------------------------------------------------------------

/// The fields the page viewer renders: title plus timestamps and URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub created_time: Option<String>,
    pub last_edited_time: Option<String>,
    pub url: Option<String>,
}
