use std::io::Write;

use anyhow::{Context, Result};
use tile_quest_core::Dialogue;
use tile_quest_rendering::{paginate, SPEECH_LINE_WIDTH};
use tracing::warn;

use crate::input::LineReader;

const CONTROLS: &[&str] = &[
    "Game Controls",
    "",
    "Nav Switch:",
    "  w -> North",
    "  s -> South",
    "  a -> West",
    "  d -> East",
    "  c -> Run",
    "Buttons:",
    "  e -> Action",
    "  m -> Inventory",
    "  r -> Special",
];

/// Speech bubbles printed to the terminal.
///
/// With a pause reader the player confirms every page with Enter; scripted
/// sessions run without one.
#[derive(Debug)]
pub(crate) struct ConsoleDialogue<W, R> {
    out: W,
    pause: Option<R>,
}

impl<W: Write, R: LineReader> ConsoleDialogue<W, R> {
    pub(crate) fn new(out: W, pause: Option<R>) -> Self {
        Self { out, pause }
    }

    fn bubble(&mut self, lines: &[&str]) -> Result<()> {
        let edge = "-".repeat(SPEECH_LINE_WIDTH + 2);
        let pages = paginate(lines);
        let count = pages.len();
        for (index, page) in pages.into_iter().enumerate() {
            writeln!(self.out, "+{edge}+")?;
            writeln!(self.out, "| {:<width$} |", page.top, width = SPEECH_LINE_WIDTH)?;
            writeln!(self.out, "| {:<width$} |", page.bottom, width = SPEECH_LINE_WIDTH)?;
            writeln!(self.out, "+{edge}+")?;
            if index + 1 < count {
                self.wait()?;
            }
        }
        self.out.flush().context("failed to flush speech output")
    }

    fn wait(&mut self) -> Result<()> {
        let Some(reader) = self.pause.as_mut() else {
            return Ok(());
        };
        write!(self.out, "  (press Enter)")?;
        self.out.flush()?;
        let mut line = String::new();
        let _ = reader
            .read_line(&mut line)
            .context("failed to wait for confirmation")?;
        Ok(())
    }

    fn configuration(&mut self) -> Result<()> {
        for line in CONTROLS {
            writeln!(self.out, "{line}")?;
        }
        self.wait()?;
        self.out.flush().context("failed to flush configuration screen")
    }
}

impl<W: Write, R: LineReader> Dialogue for ConsoleDialogue<W, R> {
    fn speak(&mut self, lines: &[&str]) {
        if let Err(error) = self.bubble(lines) {
            warn!(%error, "failed to present speech");
        }
    }

    fn show_configuration(&mut self) {
        if let Err(error) = self.configuration() {
            warn!(%error, "failed to present configuration");
        }
    }
}
