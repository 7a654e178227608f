use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::Res;

/// Line based console prompt.
///
/// Generic over its input and output so sessions can be driven from a
/// buffer in tests.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the next line without its line ending.
    ///
    /// Fails once the input is closed.
    pub fn ask(&mut self, question: &str) -> Res<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err("standard input closed".into());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks a yes/no question. Only `y` or `Y` counts as yes.
    pub fn confirm(&mut self, question: &str) -> Res<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("y"))
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_endings_only() {
        let mut prompt = Prompt::new(Cursor::new(" Despacito \r\n"), Vec::new());
        assert_eq!(prompt.ask("Song: ").unwrap(), " Despacito ");
        assert_eq!(String::from_utf8(prompt.output().clone()).unwrap(), "Song: ");
    }

    #[test]
    fn ask_fails_on_closed_input() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        assert!(prompt.ask("Song: ").is_err());
    }

    #[test]
    fn confirm_accepts_only_y() {
        let mut prompt = Prompt::new(Cursor::new("Y\ny\nyes\nn\n"), Vec::new());
        assert!(prompt.confirm("? ").unwrap());
        assert!(prompt.confirm("? ").unwrap());
        assert!(!prompt.confirm("? ").unwrap());
        assert!(!prompt.confirm("? ").unwrap());
    }
}
