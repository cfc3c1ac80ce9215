use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Writes either the plain-text view or the JSON model of a result.
pub struct ConsoleRenderer<W: Write> {
    json_mode: bool,
    out: W,
}

impl ConsoleRenderer<std::io::Stdout> {
    pub fn stdout(json_mode: bool) -> Self {
        Self::new(json_mode, std::io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(json_mode: bool, out: W) -> Self {
        Self { json_mode, out }
    }

    pub fn render<T, V>(&mut self, model: &T, view: V) -> Result<()>
    where
        T: Serialize + ?Sized,
        V: Display,
    {
        if self.json_mode {
            writeln!(self.out, "{}", serde_json::to_string_pretty(model)?)?;
        } else {
            write!(self.out, "{}", view)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Raw text, regardless of mode (exports)
    pub fn text(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
