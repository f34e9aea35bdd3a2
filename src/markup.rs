//! HTML templates for content descriptions, grid cards and chips.
//!
//! Uses [maud](https://maud.lambda.xyz/): every `(expr)` interpolation is
//! HTML-escaped, which is what makes it safe to feed editable JSON straight
//! into these templates. The only `PreEscaped` output in this module is the
//! about body, and that goes through [`markdown_to_html`], which demotes any
//! raw HTML in the source to escaped text first.

use crate::filter::{RoleFilter, SortMode};
use crate::model::{Artist, GalleryItem, Link, Project, ProjectKind, SiteConfig};
use crate::render::{Content, Section};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

// ============================================================================
// Modal content
// ============================================================================

/// Renders a content description as the body of a modal.
pub fn content(content: &Content) -> Markup {
    html! {
        article.content {
            header.content-header {
                @if let Some(image) = &content.header.image {
                    img.portrait src=(image) alt=(content.header.title);
                }
                h2 { (content.header.title) }
                @if !content.header.meta.is_empty() {
                    p.meta {
                        @for (idx, item) in content.header.meta.iter().enumerate() {
                            @if idx > 0 { " · " }
                            span { (item) }
                        }
                    }
                }
            }
            @for section in &content.sections {
                (render_section(section))
            }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    html! {
        section class=(section.name()) {
            @match section {
                Section::Summary(paragraphs) => {
                    @for para in paragraphs { p { (para) } }
                },
                Section::Links(links) => {
                    (link_list(links))
                },
                Section::Audio(track) => {
                    @if !track.title.is_empty() {
                        p.audio-title { (track.title) }
                    }
                    audio controls preload="none" src=(track.src) {}
                },
                Section::Gallery(items) => {
                    @for item in items { (gallery_figure(item)) }
                },
                Section::Tags(tags) => {
                    ul.tag-list {
                        @for tag in tags { li { (tag) } }
                    }
                },
                Section::NotableWorks(works) => {
                    h3 { "Notable works" }
                    ul {
                        @for work in works { li { (work) } }
                    }
                },
            }
        }
    }
}

fn gallery_figure(item: &GalleryItem) -> Markup {
    let label = item.label();
    html! {
        figure {
            img src=(item.url()) alt=(label) loading="lazy";
            @if !label.is_empty() {
                figcaption { (label) }
            }
        }
    }
}

fn link_list(links: &[Link]) -> Markup {
    html! {
        ul.link-list {
            @for link in links {
                li {
                    a href=(link.url) target="_blank" rel="noopener" { (link.label) }
                }
            }
        }
    }
}

// ============================================================================
// Grid cards
// ============================================================================

/// Element id of a project card, used as a scroll target.
pub fn card_id(project_id: &str) -> String {
    format!("project-{project_id}")
}

/// Site-relative path of a project's standalone page.
///
/// The id is reduced to a filesystem-safe slug; ids are unique, and
/// distinct ids that collapse to the same slug share a page.
pub fn project_page_path(project_id: &str) -> String {
    let slug: String = deunicode::deunicode(project_id)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("project/{slug}.html")
}

/// A project tile in the project grid.
pub fn project_card(project: &Project) -> Markup {
    let kind = match project.kind {
        ProjectKind::Project => "project",
        ProjectKind::Artwork => "artwork",
    };
    html! {
        a.card id=(card_id(&project.id)) href=(project_page_path(&project.id)) data-project=(project.id) data-kind=(kind) {
            @if let Some(image) = project.card_image() {
                img src=(image) alt=(project.title) loading="lazy";
            }
            span.card-title { (project.title) }
            @if !project.year.is_empty() {
                span.card-meta { (project.year) }
            }
            @if project.featured {
                span.badge { "Featured" }
            }
        }
    }
}

/// An artist tile in the artist grid.
pub fn artist_card(artist: &Artist) -> Markup {
    html! {
        div.card.artist-card data-artist=(artist.name) {
            @if let Some(image) = &artist.image {
                img.portrait src=(image) alt=(artist.name) loading="lazy";
            }
            span.card-title { (artist.name) }
            @if !artist.role.is_empty() {
                span.card-meta { (artist.role) }
            }
        }
    }
}

// ============================================================================
// Chips and controls
// ============================================================================

/// A tag chip. `None` is the "All" chip.
pub fn tag_chip(tag: Option<&str>, active: bool) -> Markup {
    html! {
        button.chip.active[active] type="button" data-tag=(tag.unwrap_or("all")) {
            (tag.unwrap_or("All"))
        }
    }
}

pub fn role_chip(role: &RoleFilter, active: bool) -> Markup {
    let label = match role {
        RoleFilter::All => "All",
        RoleFilter::Only(role) => role.as_str(),
    };
    html! {
        button.chip.active[active] type="button" data-role=(role.as_str()) { (label) }
    }
}

pub fn sort_option(mode: SortMode, selected: bool) -> Markup {
    html! {
        option value=(mode.as_str()) selected[selected] { (mode.label()) }
    }
}

// ============================================================================
// Static regions
// ============================================================================

pub fn hero(config: &SiteConfig) -> Markup {
    html! {
        h1 { (config.site_name) }
        @if !config.tagline.is_empty() {
            p.tagline { (config.tagline) }
        }
    }
}

/// One ticker item. Only the item at `current` is visible initially.
pub fn ticker_item(skill: &str, index: usize, current: usize) -> Markup {
    html! {
        span.ticker-item.current[index == current] data-index=(index) { (skill) }
    }
}

pub fn about(config: &SiteConfig) -> Markup {
    html! {
        @if !config.about_headline.is_empty() {
            h2 { (config.about_headline) }
        }
        @if !config.about_body.is_empty() {
            div.about-body { (PreEscaped(markdown_to_html(&config.about_body))) }
        }
    }
}

pub fn contact(config: &SiteConfig) -> Markup {
    html! {
        @if !config.location.is_empty() {
            p.location { (config.location) }
        }
        @if !config.email.is_empty() {
            a.email href={ "mailto:" (config.email) } { (config.email) }
        }
        @if !config.socials.is_empty() {
            (link_list(&config.socials))
        }
    }
}

/// Markdown to HTML with raw HTML blocks and inline tags rendered as text.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
