//! The slider model — a fixed-size track with a single movable thumb.
//!
//! The thumb position is an absolute cell index.  Magnitude commands
//! express a desired position as a signed fraction of the track's
//! half-length; relative commands nudge the thumb cell by cell.
//! Nothing in this module touches the terminal.

use thiserror::Error;

/// Track length used when no explicit size is given.
pub const DEFAULT_TRACK_SIZE: i64 = 16;

// ───────────────────────────────────────── magnitude input ───

/// A magnitude, tagged by the form the user wrote it in.
///
/// The two forms carry different accepted ranges: integers are a
/// tenfold-scaled convenience (`7` means `0.7`), floats are used as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagnitudeInput {
    /// Whole-number form, accepted in `[-10, 10]`.
    Integer(i64),
    /// Fractional form, accepted in `[-1.0, 1.0]`.
    Float(f64),
}

// ───────────────────────────────────────── errors ────────────

/// A magnitude fell outside its form's accepted range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("magnitude out of range")]
pub struct OutOfRangeMagnitude;

// ───────────────────────────────────────── slider ────────────

/// The slider: a fixed number of track cells plus the thumb's cell index.
#[derive(Debug, Clone)]
pub struct Slider {
    size: i64,
    position: i64,
}

impl Slider {
    /// Create a slider with the thumb centered on the track.
    pub fn new(size: i64) -> Self {
        Self {
            size,
            position: size / 2,
        }
    }

    /// Number of track cells.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Absolute cell index of the thumb.
    ///
    /// In `[0, size]` after any successful magnitude move; relative moves
    /// may push it outside (see [`Slider::move_relative`]).
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Map a magnitude in `[-1.0, 1.0]` to an absolute cell index.
    ///
    /// Magnitude 0.0 lands on the center cell and ±1.0 spans the full
    /// track.  Exactly 1.0 is pinned to the far end rather than going
    /// through the truncating path, so the positive boundary never falls
    /// one cell short.
    pub fn magnitude_to_absolute_position(&self, magnitude: f64) -> i64 {
        let half = self.size / 2;
        let deflection = if magnitude == 1.0 {
            half
        } else {
            // Truncation toward zero, not flooring.
            (half as f64 * magnitude) as i64
        };
        deflection + half
    }

    /// Move the thumb to the absolute position named by `input`.
    ///
    /// Validation happens before any mutation — an out-of-range magnitude
    /// leaves the position untouched.
    pub fn shift_thumb(&mut self, input: MagnitudeInput) -> Result<(), OutOfRangeMagnitude> {
        let magnitude = match input {
            MagnitudeInput::Integer(m) => {
                if !(-10..=10).contains(&m) {
                    return Err(OutOfRangeMagnitude);
                }
                m as f64 / 10.0
            }
            MagnitudeInput::Float(f) => {
                if !(-1.0..=1.0).contains(&f) {
                    return Err(OutOfRangeMagnitude);
                }
                f
            }
        };
        self.position = self.magnitude_to_absolute_position(magnitude);
        Ok(())
    }

    /// Nudge the thumb by `delta` cells; zero recenters it.
    ///
    /// Nonzero deltas apply without bounds checking — the thumb can leave
    /// `[0, size]`.  The view clamps for display; the model keeps the raw
    /// value.
    pub fn move_relative(&mut self, delta: i64) {
        if delta == 0 {
            self.position = self.size / 2;
        } else {
            self.position += delta;
        }
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(DEFAULT_TRACK_SIZE)
    }
}

// ───────────────────────────────────────── tests ─────────────
