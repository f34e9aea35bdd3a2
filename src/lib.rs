//! # Folio
//!
//! Content layer and static site generator for a portfolio of projects and
//! collaborating artists. Three JSON documents are the data source:
//!
//! ```text
//! config.json     site identity, skills, about text, contact, showcase pins
//! projects.json   projects and artworks, with tags, galleries, audio, links
//! artists.json    collaborators, with roles and notable works
//! ```
//!
//! They are read from a directory or an http(s) base URL. Any of them may be
//! missing or malformed: the load falls back per document and the page shows
//! an error banner instead of failing.
//!
//! # Architecture
//!
//! ```text
//! loader   Source → Loaded            (fetch, parse, fall back)
//! filter   projects + FilterState → visible list
//! render   project/artist → Content   (structured modal description)
//! markup   Content / cards / chips → HTML
//! app      Loaded + View + UiState → calls on a Surface
//! generate App × HtmlSurface → dist/*.html
//! ```
//!
//! The engine ([`filter`], [`render`], [`state`]) is pure: no I/O, no
//! globals. [`app::App`] owns all mutable state and talks to the page only
//! through the [`app::Surface`] trait, so the same orchestration drives both
//! the static build and any interactive host.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Serde types for the three documents, `Project::variant` |
//! | [`dates`] | Free-form year strings to sortable dates |
//! | [`collate`] | Locale-aware title comparison for A–Z / Z–A |
//! | [`loader`] | Directory and HTTP sources, concurrent fetch with fallbacks |
//! | [`filter`] | Tag/search/sort pipeline, showcase selection, artist roles |
//! | [`render`] | Content descriptions for projects, artworks and artists |
//! | [`markup`] | Maud templates; everything user-supplied is escaped |
//! | [`state`] | UI state store, events, `#project=<id>` fragments |
//! | [`ticker`] | Skill ticker rotation |
//! | [`app`] | Orchestrator, `Surface` trait, views and regions |
//! | [`generate`] | Writes home, work and per-project pages |
//! | [`config`] | `folio.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Artworks Are a Separate Variant
//!
//! A project with `"type": "artwork"` renders only title, year, gallery and
//! tags. [`model::Project::variant`] returns a sum type whose artwork arm
//! does not carry role, description, audio or links at all, so a renderer
//! cannot show them by mistake.
//!
//! ## Views Declare Their Regions
//!
//! The home page and the work page share one codebase. Each
//! [`app::View`] lists the regions it renders; there is no probing for
//! which containers happen to exist.
//!
//! ## Deep Links Wait for the Page
//!
//! `#project=<id>` opens its modal on [`app::App::render_complete`], the
//! host's signal that the initial render is done, not after a delay.

pub mod app;
pub mod collate;
pub mod config;
pub mod dates;
pub mod filter;
pub mod generate;
pub mod loader;
pub mod logging;
pub mod markup;
pub mod model;
pub mod output;
pub mod render;
pub mod state;
pub mod ticker;

#[cfg(test)]
pub(crate) mod test_helpers;
