//! UI / rendering layer — everything that touches the terminal.
//!
//! The core model never prints.  This layer turns it into a line of text,
//! runs the user prompts, and owns the real stdin/stdout handles behind
//! the [`console::Console`] seam.

pub mod console;
pub mod view;
