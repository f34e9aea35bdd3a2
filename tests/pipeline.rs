//! End-to-end tests through the public API: directory source → load →
//! filter / app / generate.

use folio::app::{App, Region, Surface, View};
use folio::config::BuildConfig;
use folio::filter::{FilterState, SortMode, compute_visible_projects};
use folio::generate::{HtmlSurface, generate};
use folio::loader::{DirSource, Resource, load};
use folio::render::render_modal;
use folio::state::{Event, TagChoice, UiState};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"{
    "siteName": "Northlight",
    "tagline": "Sound and image",
    "skills": ["Mixing", "Mastering"],
    "homeShowcase": ["beta"]
}"#;

const PROJECTS: &str = r#"[
    {"id": "zeta", "title": "Zeta", "year": "2020", "tags": ["Design"], "description": "Poster series."},
    {"id": "alpha", "title": "Alpha", "year": "2018", "tags": ["Music Production"]},
    {"id": "beta", "title": "Beta", "year": "March 2021", "tags": ["Design", "Music Production"],
     "featured": true, "description": ["Cover art.", "Liner notes."]},
    {"id": "ölm", "title": "Ölmühle", "year": "2019", "type": "artwork", "tags": ["Photography"],
     "role": "Photographer", "gallery": ["olm.jpg"]}
]"#;

const ARTISTS: &str = r#"[
    {"name": "Ines Moor", "role": "Vocalist"},
    {"name": "Tom Lark", "role": "Drummer"}
]"#;

fn content_dir(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, body) in files {
        fs::write(tmp.path().join(name), body).unwrap();
    }
    tmp
}

fn full_content() -> TempDir {
    content_dir(&[
        ("config.json", CONFIG),
        ("projects.json", PROJECTS),
        ("artists.json", ARTISTS),
    ])
}

fn titles(dir: &Path, state: &FilterState) -> Vec<String> {
    let loaded = load(&DirSource::new(dir));
    compute_visible_projects(&loaded.projects, state)
        .iter()
        .map(|p| p.title.clone())
        .collect()
}

#[test]
fn design_tag_sorted_a_to_z() {
    let dir = full_content();
    let state = FilterState {
        active_tags: ["Design".to_string()].into_iter().collect(),
        sort: SortMode::AZ,
        search: String::new(),
    };
    assert_eq!(titles(dir.path(), &state), vec!["Beta", "Zeta"]);
}

#[test]
fn newest_first_across_year_formats() {
    let dir = full_content();
    let state = FilterState::default();
    assert_eq!(
        titles(dir.path(), &state),
        vec!["Beta", "Zeta", "Ölmühle", "Alpha"]
    );
}

#[test]
fn search_matches_description_paragraphs() {
    let dir = full_content();
    let state = FilterState {
        search: "  LINER ".to_string(),
        ..FilterState::default()
    };
    assert_eq!(titles(dir.path(), &state), vec!["Beta"]);
}

#[test]
fn missing_documents_fall_back_independently() {
    let dir = content_dir(&[("projects.json", PROJECTS), ("artists.json", "{ not json")]);
    let loaded = load(&DirSource::new(dir.path()));

    assert_eq!(loaded.config.site_name, "Portfolio");
    assert_eq!(loaded.projects.len(), 4);
    assert!(loaded.artists.is_empty());
    let failed: Vec<Resource> = loaded.failures.iter().map(|f| f.resource).collect();
    assert_eq!(failed, vec![Resource::Config, Resource::Artists]);
}

#[test]
fn malformed_optional_fields_drop_only_their_sections() {
    let projects = r#"[
        {"id": "tide", "title": "Tide", "type": "installation", "gallery": null,
         "audio": "tide.mp3", "tags": ["Sound"], "description": "Harbor recordings."},
        {"id": "kelp", "title": "Kelp", "tags": ["Sound"]}
    ]"#;
    let dir = content_dir(&[
        ("config.json", CONFIG),
        ("projects.json", projects),
        ("artists.json", ARTISTS),
    ]);
    let loaded = load(&DirSource::new(dir.path()));

    assert!(!loaded.is_degraded());
    assert_eq!(loaded.projects.len(), 2);
    let content = render_modal(&loaded.projects[0]);
    assert_eq!(content.section_names(), vec!["summary", "tags"]);
}

#[test]
fn gallery_tag_chip_updates_grid() {
    let dir = full_content();
    let loaded = load(&DirSource::new(dir.path()));
    let mut app = App::start(
        loaded,
        View::Gallery,
        UiState::with_sort(SortMode::AZ),
        None,
        HtmlSurface::default(),
    );
    assert_eq!(app.surface().region(Region::Projects.id()).unwrap().len(), 4);

    app.dispatch(Event::TagChip(TagChoice::Tag("Photography".to_string())));
    let grid = app.surface().region(Region::Projects.id()).unwrap();
    assert_eq!(grid.len(), 1);
    assert!(grid[0].0.contains(r#"data-kind="artwork""#));
}

#[test]
fn deep_link_opens_after_render_complete() {
    let dir = full_content();
    let loaded = load(&DirSource::new(dir.path()));
    let mut app = App::start(
        loaded,
        View::Gallery,
        UiState::default(),
        Some("#project=%C3%B6lm"),
        HtmlSurface::default(),
    );
    assert!(app.surface().modal().is_none());

    app.render_complete();
    let surface = app.surface();
    let modal = &surface.modal().unwrap().0;
    assert!(modal.contains("Ölmühle"));
    assert!(modal.contains("olm.jpg"));
    // Artwork details never include the role.
    assert!(!modal.contains("Photographer"));
    assert_eq!(surface.scrolled_to(), Some("project-ölm"));
    assert_eq!(surface.fragment(), "project=%C3%B6lm");

    app.dispatch(Event::CloseModal);
    assert!(app.surface().modal().is_none());
    assert_eq!(app.surface().fragment(), "");
}

#[test]
fn build_writes_site_with_banner_for_degraded_load() {
    let dir = content_dir(&[("config.json", CONFIG), ("projects.json", PROJECTS)]);
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/olm.jpg"), b"jpeg").unwrap();
    let loaded = load(&DirSource::new(dir.path()));
    let out = TempDir::new().unwrap();

    let summary = generate(
        &loaded,
        &BuildConfig::default(),
        Some(dir.path()),
        None,
        out.path(),
    )
    .unwrap();

    assert_eq!(summary.pages.len(), 6);
    assert_eq!(summary.assets_copied, 1);
    assert!(out.path().join("project/olm.html").is_file());
    assert!(out.path().join("assets/olm.jpg").is_file());

    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(home.contains("Could not load artists.json"));
    assert!(home.contains("<title>Northlight</title>"));
    // The pinned project leads the showcase.
    let beta = home.find(r#"data-project="beta""#).unwrap();
    let zeta = home.find(r#"data-project="zeta""#).unwrap();
    assert!(beta < zeta);
}

#[test]
fn surface_trait_is_implementable_outside_the_crate() {
    #[derive(Default)]
    struct Counting {
        lists: usize,
    }
    impl Surface for Counting {
        fn render_list(&mut self, _: &str, _: Vec<maud::Markup>) {
            self.lists += 1;
        }
        fn show_error(&mut self, _: &str) {}
        fn scroll_to_element(&mut self, _: &str) {}
        fn set_location_fragment(&mut self, _: &str) {}
        fn show_modal(&mut self, _: maud::Markup) {}
        fn hide_modal(&mut self) {}
    }

    let dir = full_content();
    let app = App::start(
        load(&DirSource::new(dir.path())),
        View::Home { limit: 2 },
        UiState::default(),
        None,
        Counting::default(),
    );
    let visible: Vec<&str> = app.visible_projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(visible, vec!["beta", "zeta"]);
    assert_eq!(app.into_surface().lists, View::Home { limit: 2 }.regions().len());
}
