use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

use anyhow::{Context, Result};
use tile_quest_core::InputSnapshot;

/// Key accepted in both scripts and interactive lines that ends the session.
const QUIT: char = 'q';
/// Script key for a frame with no input.
const IDLE: char = '.';

/// Maps one key to the buttons it presses.
///
/// Layout: `w`/`a`/`s`/`d` push the navigation switch, `c` or space presses
/// it in, `e` is the action button, `m` the menu button and `r` the special
/// button.
pub(crate) fn snapshot_for(key: char) -> Option<InputSnapshot> {
    let mut snapshot = InputSnapshot::default();
    match key.to_ascii_lowercase() {
        'w' => snapshot.up = true,
        'a' => snapshot.left = true,
        's' => snapshot.down = true,
        'd' => snapshot.right = true,
        'c' | ' ' => snapshot.center = true,
        'e' => snapshot.action_button = true,
        'm' => snapshot.menu_button = true,
        'r' => snapshot.special_button = true,
        IDLE => {}
        _ => return None,
    }
    Some(snapshot)
}

/// Source of one input snapshot per frame. `None` ends the session.
pub(crate) trait InputSource {
    fn next_frame(&mut self) -> Result<Option<InputSnapshot>>;
}

/// Replays a fixed key script, one key per frame.
#[derive(Debug)]
pub(crate) struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub(crate) fn parse(script: &str) -> Result<Self> {
        let mut frames = VecDeque::new();
        for (index, key) in script.chars().enumerate() {
            if key == QUIT {
                break;
            }
            if key.is_whitespace() && key != ' ' {
                continue;
            }
            let snapshot = snapshot_for(key)
                .with_context(|| format!("unknown key {key:?} at offset {index} of the script"))?;
            frames.push_back(snapshot);
        }
        Ok(Self { frames })
    }

    #[cfg(test)]
    fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_frame(&mut self) -> Result<Option<InputSnapshot>> {
        Ok(self.frames.pop_front())
    }
}

/// Line-oriented reader that does not hold the terminal lock between reads,
/// so frame input and speech confirmations can share stdin.
pub(crate) trait LineReader {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl LineReader for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Reads one line per frame; every recognised key on the line is held down
/// together and the usual priority picks the action.
#[derive(Debug)]
pub(crate) struct LineInput<R> {
    reader: R,
}

impl<R: LineReader> LineInput<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: LineReader> InputSource for LineInput<R> {
    fn next_frame(&mut self) -> Result<Option<InputSnapshot>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read input line")?;
        if read == 0 || line.trim() == QUIT.to_string() {
            return Ok(None);
        }

        let held = line
            .trim_end_matches(['\r', '\n'])
            .chars()
            .filter_map(snapshot_for)
            .fold(InputSnapshot::default(), merge);
        Ok(Some(held))
    }
}

fn merge(left: InputSnapshot, right: InputSnapshot) -> InputSnapshot {
    InputSnapshot {
        action_button: left.action_button || right.action_button,
        menu_button: left.menu_button || right.menu_button,
        special_button: left.special_button || right.special_button,
        left: left.left || right.left,
        right: left.right || right.right,
        up: left.up || right.up,
        down: left.down || right.down,
        center: left.center || right.center,
    }
}
