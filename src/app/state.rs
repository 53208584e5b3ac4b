//! Central application state.

use crate::core::slider::Slider;

/// How the program consumes commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read one command, apply it, exit.
    #[default]
    OneShot,
    /// Loop until an explicit quit (or end of input).
    Interactive,
}

/// Top-level application state.
pub struct AppState {
    /// The slider model.  Owned here for the whole run.
    pub slider: Slider,
    /// Selected once at startup from the CLI; fixed thereafter.
    pub mode: Mode,
}

impl AppState {
    pub fn new(slider: Slider, mode: Mode) -> Self {
        Self { slider, mode }
    }
}
