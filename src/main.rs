use clap::{Parser, Subcommand};
use folio::filter::{
    FilterState, RoleFilter, SortMode, compute_visible_artists, compute_visible_projects,
    select_showcase,
};
use folio::loader::{self, Loaded, Source};
use folio::{config, generate, logging, output};
use std::path::{Path, PathBuf};
use tracing::info;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site generator for projects and collaborating artists")]
#[command(long_about = "\
Portfolio site generator for projects and collaborating artists

Three JSON documents are the data source, read from a directory or an
http(s) base URL:

  content/
  ├── config.json        # Site name, tagline, skills, about, contact, homeShowcase
  ├── projects.json      # Projects and artworks (\"type\": \"artwork\")
  ├── artists.json       # Collaborators with roles and notable works
  └── assets/            # Images and audio → copied to output/assets/

A missing or malformed document never stops the build: it falls back to
defaults (or an empty list) and every page shows an error banner.

Generated site:

  dist/
  ├── index.html         # Home: hero, skill ticker, showcase, about, contact
  ├── work.html          # All projects with tag chips and sort, artist roster
  └── project/<id>.html  # Work page with that project's details open

Run 'folio gen-config' to generate a documented folio.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory or http(s) base URL [default: from folio.toml]
    #[arg(long, global = true)]
    source: Option<String>,

    /// Output directory [default: from folio.toml]
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Build config file [default: ./folio.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the data and report counts and failures
    Check,
    /// List projects through the tag/search/sort filter
    List {
        /// Keep projects carrying any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// newest, oldest, a-z or z-a [default: from folio.toml]
        #[arg(long)]
        sort: Option<SortMode>,
        /// Case-insensitive match on title, description or tag
        #[arg(long, default_value = "")]
        search: String,
        /// Show at most N, picked like the home showcase (pinned, then featured)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List artists, optionally by role
    Artists {
        /// Exact role, or "all"
        #[arg(long, default_value = "all")]
        role: String,
    },
    /// Generate the static site
    Build {
        /// Pre-open a modal on the home page, e.g. "project=alpha"
        #[arg(long)]
        fragment: Option<String>,
    },
    /// Print a stock folio.toml with all options documented
    GenConfig,
}

/// Everything a data-backed command needs.
struct Context {
    build_config: config::BuildConfig,
    location: String,
    source: Box<dyn Source>,
    loaded: Loaded,
}

impl Context {
    fn load(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let build_config = match &cli.config {
            Some(path) => config::load_config_file(path)?,
            None => config::load_config(Path::new("."))?,
        };
        let location = cli.source.clone().unwrap_or_else(|| build_config.source.clone());
        let source = loader::source_for(&location, build_config.fetch_timeout())?;
        let loaded = loader::load(&*source);
        Ok(Self {
            build_config,
            location,
            source,
            loaded,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match &cli.command {
        Command::Check => {
            let ctx = Context::load(&cli)?;
            output::print_load_output(&ctx.loaded, &ctx.source.describe());
        }
        Command::List {
            tags,
            sort,
            search,
            limit,
        } => {
            let ctx = Context::load(&cli)?;
            let state = FilterState {
                active_tags: tags.iter().cloned().collect(),
                sort: sort.unwrap_or(ctx.build_config.default_sort),
                search: search.clone(),
            };
            let projects = &ctx.loaded.projects;
            let visible = compute_visible_projects(projects, &state);
            let shown = select_showcase(&visible, *limit, ctx.loaded.config.home_showcase.as_deref());
            output::print_project_list(&shown, projects.len());
        }
        Command::Artists { role } => {
            let ctx = Context::load(&cli)?;
            let artists = &ctx.loaded.artists;
            let visible = compute_visible_artists(artists, &RoleFilter::parse(role));
            output::print_artist_list(&visible, artists.len());
        }
        Command::Build { fragment } => {
            let ctx = Context::load(&cli)?;
            let output_dir = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&ctx.build_config.output));
            info!(output = %output_dir.display(), "building site");
            let summary = generate::generate(
                &ctx.loaded,
                &ctx.build_config,
                source_dir(&ctx.location),
                fragment.as_deref(),
                &output_dir,
            )?;
            output::print_generate_output(&summary, &ctx.loaded.projects);
            report_degraded(&ctx.loaded, &*ctx.source);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Directory holding the documents, when the source is local.
fn source_dir(location: &str) -> Option<&Path> {
    (!loader::is_url(location)).then(|| Path::new(location))
}

fn report_degraded(loaded: &Loaded, source: &dyn Source) {
    if loaded.is_degraded() {
        eprintln!(
            "==> Built with {} fallback(s) from {}",
            loaded.failures.len(),
            source.describe()
        );
    }
}
