//! Content renderer: entity → structured content description.
//!
//! The renderer decides *what* a modal shows and in which order; turning the
//! description into HTML is [`crate::markup`]'s job. Keeping the two apart
//! lets the section rules be tested without string matching on markup.
//!
//! ## Section order
//!
//! ```text
//! project:  header(title, year, role)  summary  links  audio  gallery  tags
//! artwork:  header(title, year)                              gallery  tags
//! artist:   header(name, role, years, image)  notable works  links
//! ```
//!
//! Empty or absent data produces no section at all.
//!
//! ## Escaping
//!
//! Every string in a [`Content`] comes from editable JSON and is treated as
//! untrusted text. The markup layer interpolates it through maud, which
//! escapes it; nothing here is ever emitted as raw HTML.

use crate::model::{Artist, ArtworkView, Audio, GalleryItem, Link, Project, ProjectVariant};

/// Rendered description of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub header: Header,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    /// Secondary line items in display order (year, role, year range).
    pub meta: Vec<String>,
    /// Portrait shown as a circle; artists only.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Summary(Vec<String>),
    Links(Vec<Link>),
    Audio(Audio),
    Gallery(Vec<GalleryItem>),
    Tags(Vec<String>),
    NotableWorks(Vec<String>),
}

impl Section {
    /// Stable name, used as a CSS class and in tests.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Summary(_) => "summary",
            Section::Links(_) => "links",
            Section::Audio(_) => "audio",
            Section::Gallery(_) => "gallery",
            Section::Tags(_) => "tags",
            Section::NotableWorks(_) => "notable-works",
        }
    }
}

impl Content {
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::name).collect()
    }
}

/// Modal content for a project, dispatched on its kind.
pub fn render_modal(project: &Project) -> Content {
    match project.variant() {
        ProjectVariant::Standard(project) => render_project(project),
        ProjectVariant::Artwork(artwork) => render_artwork(&artwork),
    }
}

pub fn render_project(project: &Project) -> Content {
    let mut meta = non_empty(&[project.year.as_str()]);
    if let Some(role) = project.role.as_deref().filter(|r| !r.trim().is_empty()) {
        meta.push(role.to_string());
    }

    let mut sections = Vec::new();
    let paragraphs: Vec<String> = project
        .description
        .paragraphs()
        .into_iter()
        .map(str::to_string)
        .collect();
    if !paragraphs.is_empty() {
        sections.push(Section::Summary(paragraphs));
    }
    push_links(&mut sections, &project.links);
    if let Some(audio) = project.audio.as_ref().filter(|a| !a.src.trim().is_empty()) {
        sections.push(Section::Audio(audio.clone()));
    }
    push_gallery(&mut sections, &project.gallery);
    push_tags(&mut sections, &project.tags);

    Content {
        header: Header {
            title: project.title.clone(),
            meta,
            image: None,
        },
        sections,
    }
}

pub fn render_artwork(artwork: &ArtworkView<'_>) -> Content {
    let mut sections = Vec::new();
    push_gallery(&mut sections, artwork.gallery);
    push_tags(&mut sections, artwork.tags);

    Content {
        header: Header {
            title: artwork.title.to_string(),
            meta: non_empty(&[artwork.year]),
            image: None,
        },
        sections,
    }
}

pub fn render_artist(artist: &Artist) -> Content {
    let mut sections = Vec::new();
    let works = non_empty_owned(&artist.notable_works);
    if !works.is_empty() {
        sections.push(Section::NotableWorks(works));
    }
    push_links(&mut sections, &artist.links);

    Content {
        header: Header {
            title: artist.name.clone(),
            meta: non_empty(&[artist.role.as_str(), artist.year_range.as_str()]),
            image: artist.image.clone().filter(|i| !i.trim().is_empty()),
        },
        sections,
    }
}

fn push_links(sections: &mut Vec<Section>, links: &[Link]) {
    let links: Vec<Link> = links
        .iter()
        .filter(|l| !l.url.trim().is_empty())
        .cloned()
        .collect();
    if !links.is_empty() {
        sections.push(Section::Links(links));
    }
}

fn push_gallery(sections: &mut Vec<Section>, gallery: &[GalleryItem]) {
    let items: Vec<GalleryItem> = gallery
        .iter()
        .filter(|g| !g.url().trim().is_empty())
        .cloned()
        .collect();
    if !items.is_empty() {
        sections.push(Section::Gallery(items));
    }
}

fn push_tags(sections: &mut Vec<Section>, tags: &[String]) {
    let tags = non_empty_owned(tags);
    if !tags.is_empty() {
        sections.push(Section::Tags(tags));
    }
}

fn non_empty(values: &[&str]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty_owned(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect()
}
