#![allow(non_snake_case)]

mod app;
mod stories;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use plinth_core::ThemeSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::Story;

/// Theme overrides loaded from the command line
static THEMES: OnceLock<ThemeSet> = OnceLock::new();

/// Story to open first
static START_STORY: OnceLock<Story> = OnceLock::new();

/// Theme overrides for the running gallery (defaults when none were loaded)
pub fn themes() -> ThemeSet {
    THEMES.get().cloned().unwrap_or_default()
}

pub fn start_story() -> Option<Story> {
    START_STORY.get().copied()
}

/// Plinth component gallery
#[derive(Parser, Debug)]
#[command(name = "plinth-gallery")]
#[command(about = "Interactive gallery for the Plinth component library")]
struct Args {
    /// JSON theme file with per-family overrides
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Override one family from a JSON file, e.g. `--family tabs=tabs.json`
    #[arg(short, long, value_name = "FAMILY=FILE")]
    family: Vec<String>,

    /// Story to open on launch
    #[arg(short, long, value_enum)]
    story: Option<Story>,
}

fn load_themes(path: &Path) -> anyhow::Result<ThemeSet> {
    let themes = ThemeSet::load(path)
        .with_context(|| format!("failed to load theme file {}", path.display()))?;
    info!(families = ?themes.families(), "loaded theme overrides");
    Ok(themes)
}

/// Apply a `FAMILY=FILE` override on top of `themes`
fn apply_family(themes: &mut ThemeSet, spec: &str) -> anyhow::Result<()> {
    let (family, path) = spec
        .split_once('=')
        .with_context(|| format!("expected FAMILY=FILE, got {spec:?}"))?;
    let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    themes
        .set_family(family, &json)
        .with_context(|| format!("invalid {family} override in {path}"))?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PLINTH_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut themes = match &args.theme {
        Some(path) => load_themes(path).unwrap_or_else(|err| {
            warn!("{:#}; using default themes", err);
            ThemeSet::default()
        }),
        None => ThemeSet::default(),
    };
    for spec in &args.family {
        if let Err(err) = apply_family(&mut themes, spec) {
            warn!("{:#}; skipping override", err);
        }
    }
    let _ = THEMES.set(themes);
    if let Some(story) = args.story {
        let _ = START_STORY.set(story);
    }

    info!(story = ?args.story, "starting Plinth gallery");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Plinth Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
