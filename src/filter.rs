//! Filter/sort engine: derived views over the loaded project and artist lists.
//!
//! Every function here is pure. Views are recomputed from the full lists on
//! each state change and never cached, so the same inputs always yield the
//! same output and nothing the engine returns aliases mutable state.
//!
//! ## Pipeline
//!
//! ```text
//! projects ──▶ tag filter (OR) ──▶ text filter ──▶ stable sort ──▶ visible
//!                                                                    │
//!                      home view only: select_showcase(limit) ◀──────┘
//! ```

use crate::collate::compare_titles;
use crate::dates::parse_year;
use crate::model::{Artist, Project};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Project ordering selected by the sort control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "a-z")]
    AZ,
    #[serde(rename = "z-a")]
    ZA,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [SortMode::Newest, SortMode::Oldest, SortMode::AZ, SortMode::ZA];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::AZ => "a-z",
            SortMode::ZA => "z-a",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
            SortMode::AZ => "A–Z",
            SortMode::ZA => "Z–A",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort mode '{s}' (expected newest, oldest, a-z or z-a)"))
    }
}

/// Current tag/sort/search selection for the project grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_tags: BTreeSet<String>,
    pub sort: SortMode,
    pub search: String,
}

/// Artist role selection: everyone, or one exact role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(String),
}

impl RoleFilter {
    /// `"all"` (any case) selects everyone; anything else is an exact role.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") {
            RoleFilter::All
        } else {
            RoleFilter::Only(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleFilter::All => "all",
            RoleFilter::Only(role) => role,
        }
    }
}

/// Filter and sort the project list for display.
pub fn compute_visible_projects<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    let needle = state.search.trim().to_lowercase();

    let mut visible: Vec<&Project> = projects
        .iter()
        .filter(|p| matches_tags(p, &state.active_tags))
        .filter(|p| needle.is_empty() || matches_text(p, &needle))
        .collect();

    sort_projects(&mut visible, state.sort);
    visible
}

/// OR semantics: any shared tag keeps the project. An empty set keeps all.
fn matches_tags(project: &Project, active: &BTreeSet<String>) -> bool {
    active.is_empty() || project.tags.iter().any(|t| active.contains(t))
}

/// `needle` is already lowercased and non-empty.
fn matches_text(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.contains_lower(needle)
        || project.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Stable sort: projects with equal keys keep their input order.
fn sort_projects(projects: &mut [&Project], mode: SortMode) {
    match mode {
        SortMode::Newest | SortMode::Oldest => {
            // Parse once per project rather than once per comparison.
            let mut keyed: Vec<_> = projects.iter().map(|p| (parse_year(&p.year), *p)).collect();
            match mode {
                SortMode::Newest => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
                _ => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            }
            for (slot, (_, project)) in projects.iter_mut().zip(keyed) {
                *slot = project;
            }
        }
        SortMode::AZ => projects.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::ZA => projects.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
}

/// Shape the visible list for the home view's limited preview.
///
/// - `limit == None` (full gallery): the list is returned as is.
/// - Pinned ids present: pinned projects first in the given order (ids not
///   in `visible` are skipped, repeats count once), then the remaining
///   visible projects featured-first until `limit` is reached.
/// - No pinned ids: visible projects featured-first, first `limit` taken.
///
/// Featured-first ordering is stable.
pub fn select_showcase<'a>(
    visible: &[&'a Project],
    limit: Option<usize>,
    home_showcase: Option<&[String]>,
) -> Vec<&'a Project> {
    let Some(limit) = limit else {
        return visible.to_vec();
    };

    let mut selected: Vec<&'a Project> = Vec::with_capacity(limit);
    if let Some(ids) = home_showcase.filter(|ids| !ids.is_empty()) {
        for id in ids {
            if selected.len() == limit {
                break;
            }
            if selected.iter().any(|p| p.id == *id) {
                continue;
            }
            if let Some(project) = visible.iter().find(|p| p.id == *id) {
                selected.push(*project);
            }
        }
    }

    let rest: Vec<&'a Project> = visible
        .iter()
        .copied()
        .filter(|p| !selected.iter().any(|s| std::ptr::eq(*s, *p)))
        .collect();
    let remaining = limit.saturating_sub(selected.len());
    selected.extend(featured_first(rest).into_iter().take(remaining));
    selected
}

fn featured_first(mut projects: Vec<&Project>) -> Vec<&Project> {
    projects.sort_by_key(|p| !p.featured);
    projects
}

/// Filter the artist list by role.
pub fn compute_visible_artists<'a>(artists: &'a [Artist], role: &RoleFilter) -> Vec<&'a Artist> {
    match role {
        RoleFilter::All => artists.iter().collect(),
        RoleFilter::Only(role) => artists.iter().filter(|a| a.role == *role).collect(),
    }
}

/// Distinct tags across all projects, in first-seen order.
pub fn all_tags(projects: &[Project]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    projects
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .filter(|t| seen.insert(*t))
        .collect()
}

/// Distinct non-empty artist roles, in first-seen order.
pub fn artist_roles(artists: &[Artist]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    artists
        .iter()
        .map(|a| a.role.as_str())
        .filter(|r| !r.is_empty() && seen.insert(*r))
        .collect()
}
