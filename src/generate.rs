//! HTML site generation.
//!
//! Drives an [`App`] per page against an [`HtmlSurface`] and writes the
//! collected regions out as static HTML.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, skill ticker, showcase, about, contact
//! - **Work** (`/work.html`): full project grid with tag chips and sort
//!   control, plus the artist roster with role chips
//! - **Project pages** (`/project/{slug}.html`): the work page with that
//!   project's modal already open. These are server-free targets for
//!   `#project=<id>` links.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── work.html
//! ├── project/
//! │   ├── alpha.html
//! │   └── ...
//! └── assets/                 # Copied from a directory source
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time; color custom properties
//! generated from `folio.toml` are prepended and the result is inlined into
//! every page.
//!
//! ## Load failures
//!
//! A degraded load still produces a full site. Each failure becomes an
//! error banner at the top of every page.

use crate::app::{App, Region, Surface, View};
use crate::config::{self, BuildConfig};
use crate::loader::Loaded;
use crate::markup;
use crate::state::{UiState, project_fragment};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub const HOME_PAGE: &str = "index.html";
pub const WORK_PAGE: &str = "work.html";

const CSS_STATIC: &str = include_str!("../static/style.css");

/// What a build wrote, for CLI reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Site-relative paths of the written pages, in write order.
    pub pages: Vec<String>,
    pub assets_copied: usize,
    /// Banners shown on every page.
    pub errors: Vec<String>,
}

// ============================================================================
// Surface
// ============================================================================

/// Surface that keeps the latest markup of each region for serialization.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    regions: BTreeMap<String, Vec<Markup>>,
    errors: Vec<String>,
    modal: Option<Markup>,
    fragment: String,
    scrolled_to: Option<String>,
}

impl HtmlSurface {
    pub fn region(&self, id: &str) -> Option<&[Markup]> {
        self.regions.get(id).map(Vec::as_slice)
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn modal(&self) -> Option<&Markup> {
        self.modal.as_ref()
    }

    /// Fragment the page would carry in its location, without `#`.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }
}

impl Surface for HtmlSurface {
    fn render_list(&mut self, container_id: &str, items: Vec<Markup>) {
        self.regions.insert(container_id.to_string(), items);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn scroll_to_element(&mut self, id: &str) {
        self.scrolled_to = Some(id.to_string());
    }

    fn set_location_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }

    fn show_modal(&mut self, content: Markup) {
        self.modal = Some(content);
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Write the whole site into `output_dir`.
///
/// `source_dir` is the directory source the data came from, if any; its
/// assets directory is copied next to the pages. `fragment` pre-opens a
/// modal on the home page, the same way a `#project=<id>` link would.
pub fn generate(
    loaded: &Loaded,
    config: &BuildConfig,
    source_dir: Option<&Path>,
    fragment: Option<&str>,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    fs::create_dir_all(output_dir)?;

    let mut summary = GenerateSummary::default();
    let initial = || UiState::with_sort(config.default_sort);

    let home = run_page(
        loaded,
        View::Home {
            limit: config.home_limit,
        },
        initial(),
        fragment,
    );
    summary.errors = home.surface().errors().to_vec();
    write_page(output_dir, HOME_PAGE, &render_page(&home, &css, None, None), &mut summary)?;

    let work = run_page(loaded, View::Gallery, initial(), None);
    write_page(output_dir, WORK_PAGE, &render_page(&work, &css, None, None), &mut summary)?;

    if !loaded.projects.is_empty() {
        fs::create_dir_all(output_dir.join("project"))?;
    }
    for project in &loaded.projects {
        let link = project_fragment(&project.id);
        let page = run_page(loaded, View::Gallery, initial(), Some(&link));
        let html = render_page(&page, &css, Some(&project.title), Some("../"));
        write_page(output_dir, &markup::project_page_path(&project.id), &html, &mut summary)?;
    }

    if let Some(source_dir) = source_dir {
        let assets = source_dir.join(&config.assets_dir);
        if assets.is_dir() {
            summary.assets_copied = copy_assets(&assets, &output_dir.join(&config.assets_dir))?;
            info!(count = summary.assets_copied, "copied assets");
        }
    }

    info!(
        pages = summary.pages.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(summary)
}

/// Start an app for one page and let it settle, deep link included.
fn run_page(loaded: &Loaded, view: View, state: UiState, fragment: Option<&str>) -> App<HtmlSurface> {
    let mut app = App::start(loaded.clone(), view, state, fragment, HtmlSurface::default());
    app.render_complete();
    app
}

fn write_page(
    output_dir: &Path,
    relative: &str,
    html: &Markup,
    summary: &mut GenerateSummary,
) -> Result<(), GenerateError> {
    fs::write(output_dir.join(relative), &html.0)?;
    debug!(page = relative, "wrote page");
    summary.pages.push(relative.to_string());
    Ok(())
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target: PathBuf = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)?;
        copied += 1;
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
///
/// `base` sets `<base href>` so pages in subdirectories resolve links and
/// images against the site root. The CSS is build-owned and inlined as is.
fn base_document(title: &str, css: &str, base: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(base) = base {
                    base href=(base);
                }
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(view: View) -> Markup {
    let home = matches!(view, View::Home { .. });
    html! {
        header.site-header {
            nav.site-nav {
                a.current[home] href=(HOME_PAGE) { "Home" }
                a.current[!home] href=(WORK_PAGE) { "Work" }
            }
        }
    }
}

fn error_banners(errors: &[String]) -> Markup {
    html! {
        @for error in errors {
            p.error-banner role="alert" { (error) }
        }
    }
}

/// One region's container with its rendered items.
fn region(app: &App<HtmlSurface>, region: Region) -> Markup {
    let id = region.id();
    let items = app.surface().region(id).unwrap_or_default();
    html! {
        @match region {
            Region::SortControl => {
                section.controls {
                    label for=(id) { "Sort" }
                    select id=(id) name="sort" {
                        @for item in items { (item) }
                    }
                }
            },
            Region::Ticker => {
                @let ticker = app.ticker();
                @let interval = ticker.interval().map(|d| d.as_millis().to_string());
                section id=(id) data-interval=[interval] data-pause-on-hover=(app.catalog().config.pause_on_hover) {
                    @for item in items { (item) }
                }
            },
            _ => {
                section id=(id) {
                    @for item in items { (item) }
                }
            },
        }
    }
}

fn modal(app: &App<HtmlSurface>, close_href: &str) -> Markup {
    html! {
        @if let Some(content) = app.surface().modal() {
            dialog.modal open {
                a.modal-close href=(close_href) aria-label="Close" { "×" }
                (content)
            }
        }
    }
}

/// Serialize a settled app into a full page.
fn render_page(app: &App<HtmlSurface>, css: &str, title: Option<&str>, base: Option<&str>) -> Markup {
    let view = app.view();
    let close_href = match view {
        View::Home { .. } => HOME_PAGE,
        View::Gallery => WORK_PAGE,
    };
    let site_name = &app.catalog().config.site_name;
    let title = match title {
        Some(title) => format!("{title} · {site_name}"),
        None => site_name.clone(),
    };
    let content = html! {
        (site_header(view))
        (error_banners(app.surface().errors()))
        main {
            @for r in view.regions() {
                (region(app, *r))
            }
        }
        (modal(app, close_href))
    };
    base_document(&title, css, base, content)
}
