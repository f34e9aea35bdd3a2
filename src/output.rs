//! CLI output formatting for every subcommand.
//!
//! # Information-First Display
//!
//! The primary display for every entity (project, artist, page) is its
//! identity: positional index plus title or name. Details follow on the
//! same line in brackets, or as indented context lines. Output reads as a
//! content inventory.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Harbor Studio
//!     Source: content
//!     Skills: 3
//! Projects: 4 (1 artwork)
//! Artists: 3
//! Tags: Design, Music Production, Photography
//!
//! Failures
//!     Could not load artists.json: HTTP status 404
//! ```
//!
//! ## List
//!
//! ```text
//! 001 Zeta (2021) [Design] *
//! 002 Lighthouse (2020-06-01) [Design, Music Production]
//!
//! 2 of 4 projects
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Work → work.html
//! Projects
//!     001 Zeta → project/zeta.html
//! Assets: 2 files
//!
//! Generated 3 pages
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::filter::all_tags;
use crate::generate::{GenerateSummary, HOME_PAGE, WORK_PAGE};
use crate::loader::Loaded;
use crate::markup::project_page_path;
use crate::model::{Artist, Project, ProjectKind};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Summary of a load: site identity, counts, tags and any failures.
pub fn format_load_output(loaded: &Loaded, source: &str) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(loaded.config.site_name.clone());
    lines.push(format!("{}Source: {}", indent(1), source));
    lines.push(format!("{}Skills: {}", indent(1), loaded.config.skills.len()));

    let artworks = loaded
        .projects
        .iter()
        .filter(|p| p.kind == ProjectKind::Artwork)
        .count();
    if artworks > 0 {
        lines.push(format!(
            "Projects: {} ({})",
            loaded.projects.len(),
            plural(artworks, "artwork", "artworks")
        ));
    } else {
        lines.push(format!("Projects: {}", loaded.projects.len()));
    }
    lines.push(format!("Artists: {}", loaded.artists.len()));

    let tags = all_tags(&loaded.projects);
    if !tags.is_empty() {
        lines.push(format!("Tags: {}", tags.join(", ")));
    }

    if loaded.is_degraded() {
        lines.push(String::new());
        lines.push("Failures".to_string());
        for failure in &loaded.failures {
            lines.push(format!("{}{}", indent(1), failure.banner()));
        }
    }
    lines
}

pub fn print_load_output(loaded: &Loaded, source: &str) {
    print_lines(format_load_output(loaded, source));
}

// ============================================================================
// list / artists
// ============================================================================

/// One line per visible project, then a count against the total.
///
/// Featured projects are marked with a trailing `*`.
pub fn format_project_list(visible: &[&Project], total: usize) -> Vec<String> {
    let mut lines: Vec<String> = visible
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let mut line = format!("{} {}", format_index(i + 1), project.title);
            if !project.year.is_empty() {
                line.push_str(&format!(" ({})", project.year));
            }
            if !project.tags.is_empty() {
                line.push_str(&format!(" [{}]", project.tags.join(", ")));
            }
            if project.featured {
                line.push_str(" *");
            }
            line
        })
        .collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("{} of {}", visible.len(), plural(total, "project", "projects")));
    lines
}

pub fn print_project_list(visible: &[&Project], total: usize) {
    print_lines(format_project_list(visible, total));
}

/// One line per artist: name, then role and years when present.
pub fn format_artist_list(visible: &[&Artist], total: usize) -> Vec<String> {
    let mut lines: Vec<String> = visible
        .iter()
        .enumerate()
        .map(|(i, artist)| {
            let details: Vec<&str> = [artist.role.as_str(), artist.year_range.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            if details.is_empty() {
                format!("{} {}", format_index(i + 1), artist.name)
            } else {
                format!("{} {} ({})", format_index(i + 1), artist.name, details.join(", "))
            }
        })
        .collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("{} of {}", visible.len(), plural(total, "artist", "artists")));
    lines
}

pub fn print_artist_list(visible: &[&Artist], total: usize) {
    print_lines(format_artist_list(visible, total));
}

// ============================================================================
// build
// ============================================================================

/// What a build wrote, keyed by the entity each page shows.
pub fn format_generate_output(summary: &GenerateSummary, projects: &[Project]) -> Vec<String> {
    let mut lines = Vec::new();
    let has_page = |path: &str| summary.pages.iter().any(|p| p == path);

    if has_page(HOME_PAGE) {
        lines.push(format!("Home → {}", HOME_PAGE));
    }
    if has_page(WORK_PAGE) {
        lines.push(format!("Work → {}", WORK_PAGE));
    }

    let project_pages: Vec<(&Project, String)> = projects
        .iter()
        .map(|p| (p, project_page_path(&p.id)))
        .filter(|(_, path)| has_page(path))
        .collect();
    if !project_pages.is_empty() {
        lines.push("Projects".to_string());
        for (i, (project, path)) in project_pages.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}",
                indent(1),
                format_index(i + 1),
                project.title,
                path
            ));
        }
    }

    if summary.assets_copied > 0 {
        lines.push(format!("Assets: {}", plural(summary.assets_copied, "file", "files")));
    }

    if !summary.errors.is_empty() {
        lines.push(String::new());
        lines.push("Banners".to_string());
        for error in &summary.errors {
            lines.push(format!("{}{}", indent(1), error));
        }
    }

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(summary.pages.len(), "page", "pages")));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary, projects: &[Project]) {
    print_lines(format_generate_output(summary, projects));
}
