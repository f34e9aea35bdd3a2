//! UI state store and its transitions.
//!
//! [`UiState`] is the single mutable record of what the visitor has selected.
//! It changes only through [`UiState::apply`], which takes one [`Event`] and
//! reports which derived view has to be rebuilt. Nothing is derived or cached
//! here; the orchestrator recomputes the affected list from scratch.
//!
//! ## Location fragment
//!
//! An open project modal is mirrored in the URL fragment as
//! `#project=<id>` (percent-encoded). [`parse_fragment`] reads it back on load.

use crate::filter::{FilterState, RoleFilter, SortMode};
use crate::model::{Artist, Project, find_artist, find_project};

/// A chip in the tag row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChoice {
    All,
    Tag(String),
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TagChip(TagChoice),
    Sort(SortMode),
    Search(String),
    RoleChip(RoleFilter),
    OpenProject(String),
    OpenArtist(String),
    CloseModal,
}

/// What is currently shown in the modal. Holds the lookup key only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Project(String),
    Artist(String),
}

/// Which derived view an event invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Nothing,
    Projects,
    Artists,
    Modal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub filter: FilterState,
    pub artist_role: RoleFilter,
    pub modal: Option<Modal>,
}

impl UiState {
    pub fn with_sort(sort: SortMode) -> Self {
        Self {
            filter: FilterState {
                sort,
                ..FilterState::default()
            },
            ..Self::default()
        }
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Apply one event. Lookups that miss leave the state untouched.
    pub fn apply(&mut self, event: Event, projects: &[Project], artists: &[Artist]) -> Change {
        match event {
            Event::TagChip(TagChoice::All) => {
                self.filter.active_tags.clear();
                Change::Projects
            }
            Event::TagChip(TagChoice::Tag(tag)) => {
                if !self.filter.active_tags.remove(&tag) {
                    self.filter.active_tags.insert(tag);
                }
                Change::Projects
            }
            Event::Sort(mode) => {
                self.filter.sort = mode;
                Change::Projects
            }
            Event::Search(text) => {
                self.filter.search = text;
                Change::Projects
            }
            Event::RoleChip(role) => {
                self.artist_role = role;
                Change::Artists
            }
            Event::OpenProject(id) => match find_project(projects, &id) {
                Some(_) => {
                    self.modal = Some(Modal::Project(id));
                    Change::Modal
                }
                None => Change::Nothing,
            },
            Event::OpenArtist(name) => match find_artist(artists, &name) {
                Some(_) => {
                    self.modal = Some(Modal::Artist(name));
                    Change::Modal
                }
                None => Change::Nothing,
            },
            Event::CloseModal => {
                if self.modal.take().is_some() {
                    Change::Modal
                } else {
                    Change::Nothing
                }
            }
        }
    }
}

const PROJECT_KEY: &str = "project";

/// Fragment text for an open project modal, without the leading `#`.
pub fn project_fragment(id: &str) -> String {
    format!("{PROJECT_KEY}={}", urlencoding::encode(id))
}

/// Project id from a location fragment such as `#project=abc`.
///
/// Accepts the fragment with or without `#` and with other `&`-separated
/// pairs around it. Returns `None` if no non-empty `project` pair exists.
pub fn parse_fragment(fragment: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == PROJECT_KEY)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|id| id.into_owned())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn tag(t: &str) -> Event {
        Event::TagChip(TagChoice::Tag(t.to_string()))
    }

    fn active(state: &UiState) -> Vec<&str> {
        state.filter.active_tags.iter().map(String::as_str).collect()
    }

    #[test]
    fn tag_chip_toggles_membership() {
        let mut state = UiState::default();
        assert_eq!(state.apply(tag("Design"), &[], &[]), Change::Projects);
        state.apply(tag("Music"), &[], &[]);
        assert_eq!(active(&state), vec!["Design", "Music"]);

        state.apply(tag("Design"), &[], &[]);
        assert_eq!(active(&state), vec!["Music"]);
    }

    #[test]
    fn all_chip_clears_tags() {
        let mut state = UiState::default();
        state.apply(tag("Design"), &[], &[]);
        state.apply(tag("Music"), &[], &[]);
        state.apply(Event::TagChip(TagChoice::All), &[], &[]);
        assert!(state.filter.active_tags.is_empty());
    }

    #[test]
    fn sort_search_and_role_replace_values() {
        let mut state = UiState::with_sort(SortMode::Oldest);
        assert_eq!(state.filter.sort, SortMode::Oldest);
        state.apply(Event::Sort(SortMode::ZA), &[], &[]);
        assert_eq!(state.filter.sort, SortMode::ZA);

        state.apply(Event::Search("tide".to_string()), &[], &[]);
        assert_eq!(state.filter.search, "tide");

        let change = state.apply(Event::RoleChip(RoleFilter::parse("Producer")), &[], &[]);
        assert_eq!(change, Change::Artists);
        state.apply(Event::RoleChip(RoleFilter::parse("Vocalist")), &[], &[]);
        assert_eq!(state.artist_role, RoleFilter::Only("Vocalist".to_string()));
    }

    #[test]
    fn open_and_close_modal() {
        let projects = sample_projects();
        let artists = sample_artists();
        let mut state = UiState::default();

        let change = state.apply(Event::OpenProject("alpha".to_string()), &projects, &artists);
        assert_eq!(change, Change::Modal);
        assert_eq!(state.modal, Some(Modal::Project("alpha".to_string())));

        let change = state.apply(Event::OpenArtist("Ada Vale".to_string()), &projects, &artists);
        assert_eq!(change, Change::Modal);
        assert_eq!(state.modal, Some(Modal::Artist("Ada Vale".to_string())));

        assert_eq!(state.apply(Event::CloseModal, &projects, &artists), Change::Modal);
        assert!(!state.modal_open());
        assert_eq!(state.apply(Event::CloseModal, &projects, &artists), Change::Nothing);
    }

    #[test]
    fn unresolved_lookups_are_silent_no_ops() {
        let projects = sample_projects();
        let artists = sample_artists();
        let mut state = UiState::default();
        state.apply(Event::OpenProject("alpha".to_string()), &projects, &artists);
        let before = state.clone();

        assert_eq!(
            state.apply(Event::OpenProject("nope".to_string()), &projects, &artists),
            Change::Nothing
        );
        assert_eq!(
            state.apply(Event::OpenArtist("Nobody".to_string()), &projects, &artists),
            Change::Nothing
        );
        assert_eq!(state, before);
    }

    #[test]
    fn fragment_round_trip() {
        assert_eq!(project_fragment("alpha"), "project=alpha");
        assert_eq!(project_fragment("a b/c"), "project=a%20b%2Fc");
        assert_eq!(parse_fragment(&project_fragment("a b/c")).as_deref(), Some("a b/c"));
    }

    #[test]
    fn parse_fragment_variants() {
        assert_eq!(parse_fragment("#project=abc").as_deref(), Some("abc"));
        assert_eq!(parse_fragment("project=abc").as_deref(), Some("abc"));
        assert_eq!(parse_fragment("#x=1&project=abc").as_deref(), Some("abc"));
        assert_eq!(parse_fragment("#project="), None);
        assert_eq!(parse_fragment("#about"), None);
        assert_eq!(parse_fragment(""), None);
    }
}
