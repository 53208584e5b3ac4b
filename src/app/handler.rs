//! Command interpretation — maps parsed commands to state mutations.
//!
//! Every applied command performs exactly one model mutation (or one
//! presentation toggle) and at most one render, then reports whether the
//! read-evaluate loop keeps going.

use std::io;

use anyhow::{Context, Result};

use crate::app::state::{AppState, Mode};
use crate::core::command::Command;
use crate::ui::console::Console;
use crate::ui::view::SliderView;

pub const EXIT_MESSAGE: &str = "Exiting";
pub const OUT_OF_RANGE_MESSAGE: &str =
    "Error: please enter an integer between -10 and 10 or a float between -1 and 1";
pub const INTERACTIVE_BANNER: &str =
    "Enter 'q' to exit. 's' to change the track character, or 'c' to toggle screen clearing mode";

/// Whether the read-evaluate loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Apply one parsed command to the state and view.
pub fn apply_command(
    state: &mut AppState,
    view: &mut SliderView,
    console: &mut dyn Console,
    command: Command,
) -> io::Result<LoopControl> {
    tracing::debug!("apply: {:?} mode={:?}", command, state.mode);
    match command {
        Command::Quit => {
            console.print_line(EXIT_MESSAGE)?;
            return Ok(LoopControl::Quit);
        }
        Command::Reskin => {
            // One-shot dispatch has no reskin arm; it just redraws.
            if state.mode == Mode::Interactive {
                view.prompt_skin(console)?;
            }
            view.draw(console, &state.slider)?;
        }
        Command::ToggleClear => {
            // Takes effect on the next draw; no immediate re-render.
            if state.mode == Mode::Interactive {
                view.clear_screen = !view.clear_screen;
            } else {
                view.draw(console, &state.slider)?;
            }
        }
        Command::RelativeMove(delta) => {
            state.slider.move_relative(delta);
            view.draw(console, &state.slider)?;
        }
        Command::MagnitudeMove(input) => {
            if state.slider.shift_thumb(input).is_err() {
                tracing::debug!("magnitude rejected: {:?}", input);
                console.print_line(OUT_OF_RANGE_MESSAGE)?;
            }
            // A rejected move still redraws.
            view.draw(console, &state.slider)?;
        }
    }
    Ok(LoopControl::Continue)
}

/// Run the program in the mode selected at startup.
///
/// Both modes open with the skin prompt and an initial render.  One-shot
/// reads a single command and exits; interactive prints the help banner
/// and loops until [`Command::Quit`] or end of input.
pub fn run(state: &mut AppState, view: &mut SliderView, console: &mut dyn Console) -> Result<()> {
    view.prompt_skin(console).context("reading skin")?;
    view.draw(console, &state.slider).context("drawing slider")?;

    match state.mode {
        Mode::OneShot => {
            let command = view.prompt_move(console)?.unwrap_or(Command::Quit);
            apply_command(state, view, console, command)?;
        }
        Mode::Interactive => {
            console.print_line(INTERACTIVE_BANNER)?;
            loop {
                // End of input quits the same way an explicit `q` does.
                let command = view.prompt_move(console)?.unwrap_or(Command::Quit);
                if apply_command(state, view, console, command)? == LoopControl::Quit {
                    break;
                }
            }
        }
    }
    Ok(())
}

// ───────────────────────────────────────── tests ─────────────
