//! Binary entry point: parse flags, set up file logging, and run the
//! catalog browser until the user exits.
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use shibadoption::{logging, run_app, App, Catalog, SystemMailComposer};

#[derive(Parser)]
#[command(name = "shibadoption", about = "Browse adoptable shibas in the terminal")]
struct Args {
    /// Where to write the log (defaults to ~/.shibadoption/shibadoption.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Leave mouse events to the terminal instead of capturing clicks
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Raw mode has not started yet, so stderr is still visible.
    if let Err(err) = logging::setup(args.log_file.as_deref(), args.log_level) {
        eprintln!("logging disabled: {err:#}");
    }

    let catalog = Catalog::shibas();
    info!("starting with {} catalog entries", catalog.len());

    let mut app = App::new(catalog, Box::new(SystemMailComposer));
    run_app(&mut app, !args.no_mouse)
}
