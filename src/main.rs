// What you SEE:
// • The mascot, scaled to fit and centered in the window.
// • Its pupils follow the mouse pointer (or jump on click release with --follow false).
// • ESC or closing the window quits.

mod app;
mod assets;
mod config;
mod draw;
mod error;
mod event;
mod geometry;
mod logging;
mod mascot;
mod render;
mod shape;
mod types;

use app::{run, App};
use assets::AssetSource;
use clap::Parser;
use config::Args;
use draw::Drawer;
use error::Error;
use mascot::{default_eyes, Mascot};

fn main() -> Result<(), Error> {
    /* --- Flags + logging ---
       Visual: nothing yet; --debug turns on per-frame log lines. */
    let args = Args::parse();
    let config = args.config();
    logging::init_logging(config.debug);

    /* --- Sprite + eye layers ---
       Visual: nothing yet; a bad asset fails before any window shows up. */
    let source = AssetSource::from_path(args.asset.clone());
    let sprite = source.load()?;
    log::info!("loaded {source} ({}x{})", sprite.width(), sprite.height());

    let mascot = Mascot::new(sprite, &default_eyes(), &config)?;

    /* --- Window ---
       Visual: an empty window opens; the first resize draws the mascot. */
    let mut drawer = Drawer::new(&args.title, args.width, args.height)?;
    log::info!("window open {}x{}", args.width, args.height);

    let mut app = App::new(mascot, config);
    run(&mut app, &mut drawer)?;

    log::info!("bye");
    Ok(())
}
