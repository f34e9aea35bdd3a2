//! Shared test utilities for the folio test suite.
//!
//! Provides terse builders for projects and artists, a canned catalog, a
//! fixture directory writer for loader tests, and a [`RecordingSurface`]
//! that captures every call the orchestrator makes.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let projects = vec![
//!     project("z", "Zeta", "2020", &["Design"]),
//!     project("a", "Alpha", "March 2019", &["Music Production"]),
//! ];
//! let visible = compute_visible_projects(&projects, &FilterState::default());
//! assert_eq!(ids(&visible), vec!["z", "a"]);
//! ```

use maud::Markup;
use std::path::Path;
use tempfile::TempDir;

use crate::app::Surface;
use crate::model::{Artist, Description, Project, ProjectKind};

// =========================================================================
// Builders
// =========================================================================

/// A standard project with only the fields the engine looks at.
pub fn project(id: &str, title: &str, year: &str, tags: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        description: Description::default(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        role: None,
        thumb: None,
        featured: false,
        kind: ProjectKind::Project,
        gallery: Vec::new(),
        audio: None,
        links: Vec::new(),
    }
}

pub fn description(paragraphs: &[&str]) -> Description {
    Description::Paragraphs(paragraphs.iter().map(|p| p.to_string()).collect())
}

pub fn artist(name: &str, role: &str) -> Artist {
    Artist {
        name: name.to_string(),
        role: role.to_string(),
        year_range: String::new(),
        image: None,
        notable_works: Vec::new(),
        links: Vec::new(),
    }
}

/// A small mixed catalog: standard projects and one artwork.
pub fn sample_projects() -> Vec<Project> {
    serde_json::from_str(SAMPLE_PROJECTS_JSON).unwrap()
}

pub fn sample_artists() -> Vec<Artist> {
    serde_json::from_str(SAMPLE_ARTISTS_JSON).unwrap()
}

pub const SAMPLE_CONFIG_JSON: &str = r#"{
    "siteName": "Harbor Studio",
    "tagline": "Records, rooms and pictures",
    "skills": ["Design", "Mixing", "Field Recording"],
    "tickerIntervalMs": 2000,
    "pauseOnHover": true,
    "homeShowcase": ["lighthouse", "missing-id"],
    "aboutHeadline": "About the studio",
    "aboutBody": "We make **records**.\n\nAnd sometimes <b>pictures</b>.",
    "location": "Porto",
    "email": "studio@example.com",
    "socials": [{"label": "Bandcamp", "url": "https://example.bandcamp.com"}]
}"#;

pub const SAMPLE_PROJECTS_JSON: &str = r#"[
    {
        "id": "zeta",
        "title": "Zeta",
        "year": "2021",
        "description": "A brand identity.",
        "tags": ["Design"],
        "role": "Art Director",
        "featured": true,
        "links": [{"label": "Case study", "url": "https://example.com/zeta"}]
    },
    {
        "id": "alpha",
        "title": "Alpha",
        "year": "March 2019",
        "description": ["First paragraph.", "Second paragraph."],
        "tags": ["Music Production"],
        "audio": {"src": "alpha.mp3", "title": "Alpha (excerpt)"}
    },
    {
        "id": "lighthouse",
        "title": "Lighthouse Sessions",
        "year": "2020-06-01",
        "description": "Recorded in a lighthouse.",
        "tags": ["Design", "Music Production"],
        "gallery": [{"url": "lh-1.jpg", "label": "Lamp room"}, "lh-2.jpg"]
    },
    {
        "id": "tide",
        "title": "Tide Study",
        "year": "",
        "type": "artwork",
        "role": "Painter",
        "description": "Should never show.",
        "tags": ["Photography"],
        "gallery": ["tide.jpg"],
        "audio": {"src": "never.mp3"},
        "links": [{"label": "Never", "url": "https://example.com/never"}]
    }
]"#;

pub const SAMPLE_ARTISTS_JSON: &str = r#"[
    {"name": "Ada Vale", "role": "Vocalist", "yearRange": "2018–2022", "image": "ada.jpg",
     "notableWorks": ["Alpha"], "links": [{"label": "Site", "url": "https://ada.example"}]},
    {"name": "Bruno Reis", "role": "Producer", "yearRange": "2019–"},
    {"name": "Cleo Park", "role": "Vocalist", "yearRange": "2021"}
]"#;

// =========================================================================
// Extractors
// =========================================================================

pub fn ids<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

pub fn titles<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
    projects.iter().map(|p| p.title.as_str()).collect()
}

// =========================================================================
// Fixture directory
// =========================================================================

/// Write the sample documents into a fresh temp directory.
///
/// Pass `None` for a document to leave it out, which the loader treats as a
/// failed fetch.
pub fn fixture_dir(config: Option<&str>, projects: Option<&str>, artists: Option<&str>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_if(tmp.path(), "config.json", config);
    write_if(tmp.path(), "projects.json", projects);
    write_if(tmp.path(), "artists.json", artists);
    tmp
}

/// Fixture directory with all three sample documents.
pub fn sample_fixture_dir() -> TempDir {
    fixture_dir(
        Some(SAMPLE_CONFIG_JSON),
        Some(SAMPLE_PROJECTS_JSON),
        Some(SAMPLE_ARTISTS_JSON),
    )
}

fn write_if(dir: &Path, name: &str, content: Option<&str>) {
    if let Some(content) = content {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

// =========================================================================
// Recording surface
// =========================================================================

/// Surface that keeps every call as rendered strings for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// `(container_id, rendered items)` in call order.
    pub lists: Vec<(String, Vec<String>)>,
    pub errors: Vec<String>,
    pub scrolled_to: Vec<String>,
    /// Every fragment written, in order. Empty string means cleared.
    pub fragments: Vec<String>,
    pub modal: Option<String>,
    pub modal_opens: usize,
}

impl RecordingSurface {
    /// Items from the most recent render of `container_id`.
    pub fn last_list(&self, container_id: &str) -> Option<&[String]> {
        self.lists
            .iter()
            .rev()
            .find(|(id, _)| id == container_id)
            .map(|(_, items)| items.as_slice())
    }

    pub fn render_count(&self, container_id: &str) -> usize {
        self.lists.iter().filter(|(id, _)| id == container_id).count()
    }
}

impl Surface for RecordingSurface {
    fn render_list(&mut self, container_id: &str, items: Vec<Markup>) {
        self.lists.push((
            container_id.to_string(),
            items.into_iter().map(Markup::into_string).collect(),
        ));
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn scroll_to_element(&mut self, id: &str) {
        self.scrolled_to.push(id.to_string());
    }

    fn set_location_fragment(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    fn show_modal(&mut self, content: Markup) {
        self.modal = Some(content.into_string());
        self.modal_opens += 1;
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}
