//! Data model shared by the loader, the engine and the renderers.
//!
//! These types mirror the three JSON documents a portfolio is described by:
//!
//! ```text
//! config.json    →  SiteConfig      (one object)
//! projects.json  →  Vec<Project>    (array)
//! artists.json   →  Vec<Artist>     (array)
//! ```
//!
//! JSON keys are camelCase. Optional content (gallery, audio, links, …) is
//! modelled so that "absent" and "empty" read the same to the renderers: a
//! missing section is simply not rendered, never an error. The same holds
//! for a present but malformed optional field (`null`, wrong type): it reads
//! as absent, so one bad field never costs the rest of its document.
//!
//! Everything here is loaded once and never mutated afterwards.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Optional field: `null` or a value of the wrong shape reads as `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_ticker_interval<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or_else(default_ticker_interval))
}

fn lenient_pause_on_hover<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or_else(default_pause_on_hover))
}

/// Site-wide configuration from `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub tagline: String,
    /// Rotated through by the ticker on the home view.
    #[serde(default, deserialize_with = "lenient")]
    pub skills: Vec<String>,
    #[serde(default = "default_ticker_interval", deserialize_with = "lenient_ticker_interval")]
    pub ticker_interval_ms: u64,
    #[serde(default = "default_pause_on_hover", deserialize_with = "lenient_pause_on_hover")]
    pub pause_on_hover: bool,
    /// Project ids pinned to the front of the home showcase, in order.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub home_showcase: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub about_headline: String,
    /// Multiline text; rendered as markdown with raw HTML escaped.
    #[serde(default, deserialize_with = "lenient")]
    pub about_body: String,
    #[serde(default, deserialize_with = "lenient")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient")]
    pub socials: Vec<Link>,
}

fn default_ticker_interval() -> u64 {
    2500
}

fn default_pause_on_hover() -> bool {
    true
}

impl SiteConfig {
    /// Minimal config substituted when `config.json` cannot be fetched.
    pub fn fallback() -> Self {
        Self {
            site_name: "Portfolio".to_string(),
            tagline: "Selected work".to_string(),
            skills: vec!["Creative Direction".to_string()],
            ticker_interval_ms: default_ticker_interval(),
            pause_on_hover: default_pause_on_hover(),
            home_showcase: None,
            about_headline: String::new(),
            about_body: String::new(),
            location: String::new(),
            email: String::new(),
            socials: Vec::new(),
        }
    }
}

/// A `{label, url}` pair used for project links, artist links and socials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Project description: a single string or a list of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Paragraphs(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Description::Text(String::new())
    }
}

impl Description {
    /// Non-empty paragraphs in order. A single string is split on blank lines.
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            Description::Text(text) => text
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect(),
            Description::Paragraphs(paras) => paras
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// True if any part of the description contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn contains_lower(&self, needle_lower: &str) -> bool {
        match self {
            Description::Text(text) => text.to_lowercase().contains(needle_lower),
            Description::Paragraphs(paras) => paras
                .iter()
                .any(|p| p.to_lowercase().contains(needle_lower)),
        }
    }
}

/// Discriminator from the JSON `type` field. Anything but `"artwork"` is a
/// plain project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Artwork,
    #[default]
    #[serde(other)]
    Project,
}

/// One gallery entry: either `{url, label}` or a bare URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryItem {
    Labeled {
        url: String,
        #[serde(default, deserialize_with = "lenient")]
        label: String,
    },
    Url(String),
}

impl GalleryItem {
    pub fn url(&self) -> &str {
        match self {
            GalleryItem::Labeled { url, .. } => url,
            GalleryItem::Url(url) => url,
        }
    }

    /// Label if one was given; empty for bare URLs.
    pub fn label(&self) -> &str {
        match self {
            GalleryItem::Labeled { label, .. } => label,
            GalleryItem::Url(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub src: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
}

/// A portfolio entry from `projects.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Free-form: `"2021"`, `"March 2019"`, or anything a date parser accepts.
    #[serde(default, deserialize_with = "lenient")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Description,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub featured: bool,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: ProjectKind,
    #[serde(default, deserialize_with = "lenient")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Vec<Link>,
}

/// The reduced view of an artwork: no role, summary, links or audio.
///
/// Constructed only through [`Project::variant`], so the artwork renderer
/// has no way to reach the fields an artwork must not show.
#[derive(Debug, Clone, Copy)]
pub struct ArtworkView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub year: &'a str,
    pub gallery: &'a [GalleryItem],
    pub tags: &'a [String],
}

/// A project seen through its kind.
#[derive(Debug, Clone, Copy)]
pub enum ProjectVariant<'a> {
    Standard(&'a Project),
    Artwork(ArtworkView<'a>),
}

impl Project {
    pub fn variant(&self) -> ProjectVariant<'_> {
        match self.kind {
            ProjectKind::Project => ProjectVariant::Standard(self),
            ProjectKind::Artwork => ProjectVariant::Artwork(ArtworkView {
                id: &self.id,
                title: &self.title,
                year: &self.year,
                gallery: &self.gallery,
                tags: &self.tags,
            }),
        }
    }

    /// Thumbnail for grid cards: explicit `thumb`, else the first gallery image.
    pub fn card_image(&self) -> Option<&str> {
        self.thumb
            .as_deref()
            .or_else(|| self.gallery.first().map(GalleryItem::url))
    }
}

/// A collaborator from `artists.json`. `name` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient")]
    pub year_range: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub notable_works: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Vec<Link>,
}

/// First project with the given id. Later duplicates are shadowed.
pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

/// First artist with the given name. Later duplicates are shadowed.
pub fn find_artist<'a>(artists: &'a [Artist], name: &str) -> Option<&'a Artist> {
    artists.iter().find(|a| a.name == name)
}
