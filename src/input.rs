use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Something the menu loop and lessons can pull tokens or whole lines from.
pub trait InputSource {
    /// Returns the next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;

    /// Returns the rest of the current line, or the next whole line when
    /// nothing is pending, trimmed. `None` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Drops whatever is left of the line the last token came from.
    fn discard_line(&mut self) {}
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        (**self).next_token()
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }

    fn discard_line(&mut self) {
        (**self).discard_line()
    }
}

/// Splits a line-oriented reader into tokens, one line at a time.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(Some(rest.join(" ")));
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Writes a prompt without a trailing newline and flushes it so it shows up
/// before the next read blocks.
pub fn prompt<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}
