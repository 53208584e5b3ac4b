//! A one-line ASCII slider moved by typed commands.
//!
//! Run the binary for a single prompt-and-move round, or with
//! `-i`/`--interactive` to keep moving the thumb until `q`.

mod app;
mod core;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::app::{
    handler,
    state::{AppState, Mode},
};
use crate::core::slider::Slider;
use crate::ui::{console::StdConsole, view::SliderView};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "One-line ASCII slider, moved by typed commands",
    override_usage = "ascii-slider [-i|--interactive]"
)]
struct Cli {
    /// Keep reading commands until `q` instead of exiting after one.
    #[arg(short, long)]
    interactive: bool,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let mode = if cli.interactive {
        Mode::Interactive
    } else {
        Mode::OneShot
    };

    let mut state = AppState::new(Slider::default(), mode);
    let mut view = SliderView::new();
    let mut console = StdConsole::new();

    handler::run(&mut state, &mut view, &mut console)
}
