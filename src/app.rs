//! Orchestrator: wires loaded data, UI state, the engine and the renderers
//! to a rendering [`Surface`].
//!
//! ## Lifecycle
//!
//! ```text
//! App::start(loaded, view, …)   report load failures, render every region
//!                               of the view, remember a #project=<id> link
//! host finishes painting
//! App::render_complete()        open the deep-linked modal, if any
//! App::dispatch(event)          apply to UiState, re-render what changed
//! ```
//!
//! The host calls `render_complete` once its own rendering is done, so a
//! deep link never opens against a half-built page.
//!
//! ## Views
//!
//! One codebase serves two pages. Instead of probing for elements, each
//! [`View`] declares its regions up front; regions a view does not declare
//! are never rendered.

use crate::filter::{
    RoleFilter, SortMode, all_tags, artist_roles, compute_visible_artists, compute_visible_projects,
    select_showcase,
};
use crate::loader::{LoadFailure, Loaded};
use crate::markup;
use crate::model::{Artist, Project, SiteConfig, find_artist, find_project};
use crate::render::{render_artist, render_modal};
use crate::state::{Change, Event, Modal, UiState, parse_fragment, project_fragment};
use crate::ticker::Ticker;
use maud::Markup;
use tracing::debug;

/// Rendering collaborator: the DOM in a browser, an HTML writer in the CLI.
pub trait Surface {
    /// Replace the contents of a container with the given items.
    fn render_list(&mut self, container_id: &str, items: Vec<Markup>);
    /// Show a non-blocking error banner.
    fn show_error(&mut self, message: &str);
    fn scroll_to_element(&mut self, id: &str);
    /// Write the location fragment (without `#`). Empty clears it.
    fn set_location_fragment(&mut self, fragment: &str);
    fn show_modal(&mut self, content: Markup);
    fn hide_modal(&mut self);
}

/// Template each item and hand the result to the surface.
pub fn render_with<S, T>(
    surface: &mut S,
    container_id: &str,
    items: impl IntoIterator<Item = T>,
    template: impl Fn(T) -> Markup,
) where
    S: Surface + ?Sized,
{
    let items = items.into_iter().map(template).collect();
    surface.render_list(container_id, items);
}

/// A named container on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Hero,
    Ticker,
    TagChips,
    SortControl,
    Projects,
    RoleChips,
    Artists,
    About,
    Contact,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::Hero => "hero",
            Region::Ticker => "ticker",
            Region::TagChips => "tag-chips",
            Region::SortControl => "sort-control",
            Region::Projects => "project-grid",
            Region::RoleChips => "role-chips",
            Region::Artists => "artist-grid",
            Region::About => "about",
            Region::Contact => "contact",
        }
    }
}

/// Page variant, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Landing page: curated showcase of at most `limit` projects.
    Home { limit: usize },
    /// Full gallery with filters, sorting and the artist roster.
    Gallery,
}

impl View {
    /// Regions this view renders, in page order.
    pub fn regions(self) -> &'static [Region] {
        match self {
            View::Home { .. } => &[
                Region::Hero,
                Region::Ticker,
                Region::Projects,
                Region::About,
                Region::Contact,
            ],
            View::Gallery => &[
                Region::Hero,
                Region::TagChips,
                Region::SortControl,
                Region::Projects,
                Region::RoleChips,
                Region::Artists,
            ],
        }
    }

    pub fn has(self, region: Region) -> bool {
        self.regions().contains(&region)
    }

    fn showcase_limit(self) -> Option<usize> {
        match self {
            View::Home { limit } => Some(limit),
            View::Gallery => None,
        }
    }
}

/// The loaded documents, immutable for the app's lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub config: SiteConfig,
    pub projects: Vec<Project>,
    pub artists: Vec<Artist>,
}

#[derive(Debug)]
pub struct App<S: Surface> {
    catalog: Catalog,
    view: View,
    state: UiState,
    ticker: Ticker,
    pending_deep_link: Option<String>,
    surface: S,
}

impl<S: Surface> App<S> {
    /// Render the initial page and remember any deep link in `fragment`.
    pub fn start(loaded: Loaded, view: View, state: UiState, fragment: Option<&str>, surface: S) -> Self {
        let Loaded {
            config,
            projects,
            artists,
            failures,
        } = loaded;
        let ticker = Ticker::new(config.skills.len(), config.ticker_interval_ms, config.pause_on_hover);
        let mut app = Self {
            catalog: Catalog {
                config,
                projects,
                artists,
            },
            view,
            state,
            ticker,
            pending_deep_link: fragment.and_then(parse_fragment),
            surface,
        };
        app.report_failures(&failures);
        app.render_all();
        app
    }

    /// Signal from the host that the initial render is on screen.
    pub fn render_complete(&mut self) {
        if let Some(id) = self.pending_deep_link.take() {
            debug!(project = %id, "opening deep link");
            let opened = self.dispatch(Event::OpenProject(id.clone()));
            if opened {
                self.surface.scroll_to_element(&markup::card_id(&id));
            }
        }
    }

    /// Apply a user event and re-render what it affected.
    ///
    /// Returns whether anything changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        debug!(?event, "dispatch");
        let had_project_modal = matches!(self.state.modal, Some(Modal::Project(_)));
        let change = self.state.apply(event, &self.catalog.projects, &self.catalog.artists);
        match change {
            Change::Nothing => return false,
            Change::Projects => {
                self.render_tag_chips();
                self.render_sort_control();
                self.render_projects();
            }
            Change::Artists => {
                self.render_role_chips();
                self.render_artists();
            }
            Change::Modal => self.render_modal(had_project_modal),
        }
        true
    }

    /// Timer callback for the skill ticker.
    pub fn tick(&mut self) {
        if self.ticker.tick().is_some() {
            self.render_ticker();
        }
    }

    pub fn hover_ticker(&mut self, inside: bool) {
        self.ticker.hover(inside);
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        let visible = compute_visible_projects(&self.catalog.projects, &self.state.filter);
        select_showcase(
            &visible,
            self.view.showcase_limit(),
            self.catalog.config.home_showcase.as_deref(),
        )
    }

    pub fn visible_artists(&self) -> Vec<&Artist> {
        compute_visible_artists(&self.catalog.artists, &self.state.artist_role)
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    fn report_failures(&mut self, failures: &[LoadFailure]) {
        for failure in failures {
            self.surface.show_error(&failure.banner());
        }
    }

    fn render_all(&mut self) {
        let config = &self.catalog.config;
        if self.view.has(Region::Hero) {
            self.surface
                .render_list(Region::Hero.id(), vec![markup::hero(config)]);
        }
        if self.view.has(Region::About) {
            self.surface
                .render_list(Region::About.id(), vec![markup::about(config)]);
        }
        if self.view.has(Region::Contact) {
            self.surface
                .render_list(Region::Contact.id(), vec![markup::contact(config)]);
        }
        self.render_ticker();
        self.render_tag_chips();
        self.render_sort_control();
        self.render_projects();
        self.render_role_chips();
        self.render_artists();
    }

    fn render_ticker(&mut self) {
        if !self.view.has(Region::Ticker) {
            return;
        }
        let current = self.ticker.index();
        render_with(
            &mut self.surface,
            Region::Ticker.id(),
            self.catalog.config.skills.iter().enumerate(),
            |(idx, skill)| markup::ticker_item(skill, idx, current),
        );
    }

    fn render_tag_chips(&mut self) {
        if !self.view.has(Region::TagChips) {
            return;
        }
        let active = &self.state.filter.active_tags;
        let mut chips = vec![markup::tag_chip(None, active.is_empty())];
        chips.extend(
            all_tags(&self.catalog.projects)
                .into_iter()
                .map(|tag| markup::tag_chip(Some(tag), active.contains(tag))),
        );
        self.surface.render_list(Region::TagChips.id(), chips);
    }

    fn render_sort_control(&mut self) {
        if !self.view.has(Region::SortControl) {
            return;
        }
        let current = self.state.filter.sort;
        render_with(
            &mut self.surface,
            Region::SortControl.id(),
            SortMode::ALL,
            |mode| markup::sort_option(mode, mode == current),
        );
    }

    fn render_projects(&mut self) {
        if !self.view.has(Region::Projects) {
            return;
        }
        let items: Vec<Markup> = self
            .visible_projects()
            .into_iter()
            .map(markup::project_card)
            .collect();
        self.surface.render_list(Region::Projects.id(), items);
    }

    fn render_role_chips(&mut self) {
        if !self.view.has(Region::RoleChips) {
            return;
        }
        let current = &self.state.artist_role;
        let mut chips = vec![markup::role_chip(&RoleFilter::All, *current == RoleFilter::All)];
        chips.extend(artist_roles(&self.catalog.artists).into_iter().map(|role| {
            let filter = RoleFilter::Only(role.to_string());
            let active = *current == filter;
            markup::role_chip(&filter, active)
        }));
        self.surface.render_list(Region::RoleChips.id(), chips);
    }

    fn render_artists(&mut self) {
        if !self.view.has(Region::Artists) {
            return;
        }
        let items: Vec<Markup> = self
            .visible_artists()
            .into_iter()
            .map(markup::artist_card)
            .collect();
        self.surface.render_list(Region::Artists.id(), items);
    }

    fn render_modal(&mut self, had_project_modal: bool) {
        match &self.state.modal {
            Some(Modal::Project(id)) => {
                // Resolved in UiState::apply; a miss here means no modal.
                if let Some(project) = find_project(&self.catalog.projects, id) {
                    self.surface
                        .show_modal(markup::content(&render_modal(project)));
                    self.surface.set_location_fragment(&project_fragment(id));
                }
            }
            Some(Modal::Artist(name)) => {
                if let Some(artist) = find_artist(&self.catalog.artists, name) {
                    self.surface
                        .show_modal(markup::content(&render_artist(artist)));
                }
                if had_project_modal {
                    self.surface.set_location_fragment("");
                }
            }
            None => {
                self.surface.hide_modal();
                if had_project_modal {
                    self.surface.set_location_fragment("");
                }
            }
        }
    }
}
