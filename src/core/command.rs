//! Command vocabulary — classifies one raw input line.
//!
//! The parser is total: every line maps to a command.  Unrecognized text
//! falls through the numeric path and coerces to zero, which recenters
//! the thumb.

use crate::core::slider::MagnitudeInput;

/// One parsed user command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    Reskin,
    ToggleClear,
    RelativeMove(i64),
    MagnitudeMove(MagnitudeInput),
}

/// Classify one input line (trailing newline already stripped).
pub fn parse(line: &str) -> Command {
    if line.starts_with('q') {
        return Command::Quit;
    }
    match line {
        // The zero-ish literals keep their written form: "0" takes the
        // integer regime, "0.0" the float regime.
        "0" => return Command::MagnitudeMove(MagnitudeInput::Integer(0)),
        "0.0" => return Command::MagnitudeMove(MagnitudeInput::Float(0.0)),
        "1.0" => return Command::MagnitudeMove(MagnitudeInput::Float(1.0)),
        "-1.0" => return Command::MagnitudeMove(MagnitudeInput::Float(-1.0)),
        "<" => return Command::RelativeMove(-1),
        ">" => return Command::RelativeMove(1),
        "|" => return Command::RelativeMove(0),
        "s" => return Command::Reskin,
        "c" => return Command::ToggleClear,
        _ => {}
    }
    // Numeric fallback.  Non-numeric text coerces to 0.0; whole-valued
    // numbers take the integer regime, the rest stay floats.
    let value: f64 = line.parse().unwrap_or(0.0);
    if value.fract() == 0.0 {
        Command::MagnitudeMove(MagnitudeInput::Integer(value as i64))
    } else {
        Command::MagnitudeMove(MagnitudeInput::Float(value))
    }
}

// ───────────────────────────────────────── tests ─────────────
