//! Line-based terminal I/O.
//!
//! The interpreter and view never touch stdin/stdout directly — they talk
//! to a [`Console`].  That keeps the rest of the crate testable with a
//! scripted double and confines real terminal handling to one place.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Minimal line-oriented terminal contract.
pub trait Console {
    /// Read one line, without its trailing newline.  `None` means the
    /// input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write `text` followed by a newline.
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Erase the screen and home the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;
}

/// The real terminal: stdin lines in, stdout lines out.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.stdin.lock().read_line(&mut buf)? == 0 {
            return Ok(None); // EOF
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{text}")?;
        self.stdout.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }
}

// ───────────────────────────────────────── test double ───────

#[cfg(test)]
pub(crate) mod scripted {
    //! In-memory console used by view and handler tests.

    use std::collections::VecDeque;
    use std::io;

    use super::Console;

    pub struct ScriptedConsole {
        inputs: VecDeque<String>,
        /// Every line printed, in order.
        pub lines: Vec<String>,
        /// Number of screen clears requested.
        pub clears: usize,
    }

    impl ScriptedConsole {
        pub fn new<'a, I: IntoIterator<Item = &'a str>>(inputs: I) -> Self {
            Self {
                inputs: inputs.into_iter().map(String::from).collect(),
                lines: Vec::new(),
                clears: 0,
            }
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.inputs.pop_front())
        }

        fn print_line(&mut self, text: &str) -> io::Result<()> {
            self.lines.push(text.to_string());
            Ok(())
        }

        fn clear_screen(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }
    }
}
