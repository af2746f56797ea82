//! Line-oriented prompting over any reader/writer pair

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped and
    /// bytes that are not UTF-8 become U+FFFD, so a stray byte ends up as
    /// invalid field text instead of an I/O failure.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print a full line
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_lines_until_eof() {
        let mut prompt = Prompter::new(Cursor::new("call\r\n 100 \n"), Vec::new());

        assert_eq!(prompt.ask("Type: ").unwrap().as_deref(), Some("call"));
        assert_eq!(prompt.ask("Strike: ").unwrap().as_deref(), Some(" 100 "));
        assert_eq!(prompt.ask("More: ").unwrap(), None);

        let out = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(out, "Type: Strike: More: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompt = Prompter::new(Cursor::new("3"), Vec::new());
        assert_eq!(prompt.ask("Select: ").unwrap().as_deref(), Some("3"));
        assert_eq!(prompt.ask("Select: ").unwrap(), None);
    }

    #[test]
    fn test_non_utf8_line_is_decoded_lossily() {
        let mut prompt = Prompter::new(Cursor::new(&b"c\xe7all\nput\n"[..]), Vec::new());

        assert_eq!(prompt.ask("Type: ").unwrap().as_deref(), Some("c\u{FFFD}all"));
        assert_eq!(prompt.ask("Type: ").unwrap().as_deref(), Some("put"));
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut prompt = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompt.ask("Quantity: ").unwrap().as_deref(), Some(""));
    }
}
