//! The slider view — presentation state and track rendering.
//!
//! Owns what the model deliberately does not: the fill character (the
//! "skin") and the screen-clearing flag.

use std::io;

use crate::core::command::{self, Command};
use crate::core::slider::Slider;
use crate::ui::console::Console;

pub const SKIN_PROMPT: &str = "What would you like the slider to look like?";
pub const MOVE_PROMPT: &str = "Enter a position";

/// Renders the track and runs the two user prompts.
pub struct SliderView {
    skin: char,
    /// When set, every draw wipes the screen first.
    pub clear_screen: bool,
}

impl SliderView {
    pub fn new() -> Self {
        Self {
            skin: '=',
            clear_screen: false,
        }
    }

    /// Ask for a new fill character.  A non-empty answer replaces the skin
    /// with its first character; empty input keeps the current one.
    pub fn prompt_skin(&mut self, console: &mut dyn Console) -> io::Result<()> {
        console.print_line(SKIN_PROMPT)?;
        if let Some(line) = console.read_line()? {
            if let Some(first) = line.chars().next() {
                self.skin = first;
            }
        }
        Ok(())
    }

    /// Ask for the next command.  `None` when the input is exhausted.
    pub fn prompt_move(&self, console: &mut dyn Console) -> io::Result<Option<Command>> {
        console.print_line(MOVE_PROMPT)?;
        Ok(console.read_line()?.map(|line| command::parse(&line)))
    }

    /// The track as a single line: `size` fill cells with the 2-character
    /// thumb marker spliced in at the thumb's index.
    ///
    /// Relative moves can push the position outside `[0, size]`; the index
    /// is clamped here for display only — the stored position stays raw.
    pub fn render_line(&self, slider: &Slider) -> String {
        let size = slider.size().max(0) as usize;
        let thumb = slider.position().clamp(0, size as i64) as usize;

        let mut line = String::with_capacity(size + 2);
        for _ in 0..thumb {
            line.push(self.skin);
        }
        line.push_str("[]");
        for _ in thumb..size {
            line.push(self.skin);
        }
        line
    }

    /// Draw the slider, clearing the screen first when the flag is set.
    pub fn draw(&self, console: &mut dyn Console, slider: &Slider) -> io::Result<()> {
        if self.clear_screen {
            console.clear_screen()?;
        }
        console.print_line(&self.render_line(slider))
    }
}

impl Default for SliderView {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::console::scripted::ScriptedConsole;

    #[test]
    fn renders_thumb_at_its_index() {
        let view = SliderView::new();
        let slider = Slider::new(4); // centered at 2
        assert_eq!(view.render_line(&slider), "==[]==");
    }

    #[test]
    fn renders_thumb_at_both_ends() {
        let view = SliderView::new();
        let mut slider = Slider::new(4);
        slider.move_relative(-2);
        assert_eq!(view.render_line(&slider), "[]====");
        slider.move_relative(4);
        assert_eq!(view.render_line(&slider), "====[]");
    }

    #[test]
    fn out_of_range_positions_are_clamped_for_display_only() {
        let view = SliderView::new();
        let mut slider = Slider::new(4);
        slider.move_relative(100);
        assert_eq!(slider.position(), 102);
        assert_eq!(view.render_line(&slider), "====[]");
        slider.move_relative(-200);
        assert_eq!(slider.position(), -98);
        assert_eq!(view.render_line(&slider), "[]====");
    }

    #[test]
    fn prompt_skin_takes_the_first_character() {
        let mut view = SliderView::new();
        let mut console = ScriptedConsole::new(["#!"]);
        view.prompt_skin(&mut console).unwrap();
        assert_eq!(console.lines, vec![SKIN_PROMPT.to_string()]);
        assert_eq!(view.render_line(&Slider::new(2)), "#[]#");
    }

    #[test]
    fn empty_skin_answer_keeps_the_previous_skin() {
        let mut view = SliderView::new();
        let mut console = ScriptedConsole::new([""]);
        view.prompt_skin(&mut console).unwrap();
        assert_eq!(view.render_line(&Slider::new(2)), "=[]=");
    }

    #[test]
    fn draw_clears_only_when_the_flag_is_set() {
        let mut view = SliderView::new();
        let slider = Slider::new(4);
        let mut console = ScriptedConsole::new([]);

        view.draw(&mut console, &slider).unwrap();
        assert_eq!(console.clears, 0);

        view.clear_screen = true;
        view.draw(&mut console, &slider).unwrap();
        assert_eq!(console.clears, 1);
        assert_eq!(console.lines, vec!["==[]==".to_string(), "==[]==".to_string()]);
    }
}
