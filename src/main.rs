#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result};
use clap::Parser;
use mapty::app::App;
use mapty::cli::{self, Cmd};
use mapty::form::RawForm;
use mapty::geo::{FixedLocator, Locator};
use mapty::render::{HtmlRenderer, ListEntry, Renderer, TextRenderer};
use mapty::store::JsonFileStore;
use mapty::types::Workout;
use mapty::utils;

#[macro_use]
extern crate mapty;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let store_path = cli.store.unwrap_or_else(utils::default_store_path);
    let store = JsonFileStore::new(&store_path);
    let position = FixedLocator(cli.here).locate();
    dlog!("store={} here={:?}", store_path.display(), cli.here);

    match cli.cmd.unwrap_or(Cmd::List { markers: false }) {
        Cmd::Add {
            kind,
            at,
            distance,
            duration,
            cadence,
            elevation,
        } => {
            let mut app = App::new(store, TextRenderer::new(false))
                .with_context(|| format!("loading {}", store_path.display()))?;
            app.on_position(position)?;
            app.on_map_click(at)?;
            app.on_kind_change(kind);

            let form = RawForm {
                distance: distance.unwrap_or_default(),
                duration: duration.unwrap_or_default(),
                cadence: cadence.unwrap_or_default(),
                elevation: elevation.unwrap_or_default(),
            };
            let added = app.submit(&form)?;
            let mut out = TextRenderer::new(false);
            out.render_entry(&ListEntry::from(added));
            print_lines(&out);
        }
        Cmd::List { markers } => {
            let mut app = App::new(store, TextRenderer::new(markers))
                .with_context(|| format!("loading {}", store_path.display()))?;
            if let Err(e) = app.on_position(position) {
                tracing::warn!(err = %e, "listing without the map");
                let mut out = TextRenderer::new(false);
                render_entries(app.workouts(), &mut out);
                print_lines(&out);
            } else {
                print_lines(app.renderer());
            }
        }
        Cmd::Html => {
            let mut app = App::new(store, HtmlRenderer::new())
                .with_context(|| format!("loading {}", store_path.display()))?;
            let html = if let Err(e) = app.on_position(position) {
                tracing::warn!(err = %e, "rendering without the map");
                let mut out = HtmlRenderer::new();
                render_entries(app.workouts(), &mut out);
                out
            } else {
                app.into_renderer()
            };

            print!("{}", html.list_html());
            for m in html.markers() {
                println!("<!-- marker {} {}: {} -->", m.coords, m.popup_class(), m.popup);
            }
        }
        Cmd::Show { id } => {
            let mut app = App::new(store, TextRenderer::new(false))
                .with_context(|| format!("loading {}", store_path.display()))?;
            app.on_position(position)?;
            let view = app.focus(id)?;
            println!("{}\tzoom={}", view.center, view.zoom);
        }
        Cmd::Clear => {
            let mut app = App::new(store, TextRenderer::new(false))
                .with_context(|| format!("loading {}", store_path.display()))?;
            app.clear()?;
        }
    }

    Ok(())
}

fn render_entries(workouts: &[Workout], out: &mut impl Renderer) {
    for w in workouts {
        out.render_entry(&ListEntry::from(w));
    }
}

fn print_lines(r: &TextRenderer) {
    for line in r.lines() {
        println!("{line}");
    }
}
