//! User-facing status reporting
//!
//! Success lines go to stdout. Errors, detail lines and response bodies go to stderr.

use futures_util::StreamExt;
use std::io::{self, Stderr, Stdout, Write};

pub struct Console<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
}

impl Console {
    pub fn stdio() -> Self {
        Console::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Console { out, err }
    }

    /// Returns the stdout write error; the stderr levels below are best-effort.
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Success: {message}")?;
        self.out.flush()
    }

    /// Writes one error line built from `parts` joined with single spaces.
    pub fn error(&mut self, parts: &[&str]) {
        let _ = writeln!(self.err, "Error: {}", parts.join(" "));
    }

    pub fn detail(&mut self, message: &str) {
        let _ = writeln!(self.err, "{message}");
    }

    /// Streams the remaining body of `response` to stderr verbatim.
    pub async fn print_response(&mut self, response: reqwest::Response) {
        let mut body = response.bytes_stream();
        let mut last_byte = None;

        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(bytes) => {
                    if let Some(&byte) = bytes.last() {
                        last_byte = Some(byte);
                    }
                    let _ = self.err.write_all(&bytes);
                }
                Err(e) => {
                    let _ = writeln!(self.err);
                    self.detail(&format!("Failed to read response body: {e}"));
                    return;
                }
            }
        }

        if last_byte.is_some_and(|byte| byte != b'\n') {
            let _ = writeln!(self.err);
        }
        let _ = self.err.flush();
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
