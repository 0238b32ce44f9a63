//! Two-line speech bubble pagination.

/// Maximum number of characters shown on one bubble line.
pub const SPEECH_LINE_WIDTH: usize = 17;

/// One bubble worth of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeechPage {
    /// Upper line.
    pub top: String,
    /// Lower line, empty when the script has an odd number of lines.
    pub bottom: String,
}

/// Splits a script into bubbles of two lines, truncating each line to
/// [`SPEECH_LINE_WIDTH`] characters.
#[must_use]
pub fn paginate(lines: &[&str]) -> Vec<SpeechPage> {
    lines
        .chunks(2)
        .map(|pair| SpeechPage {
            top: truncate(pair[0]),
            bottom: pair.get(1).map(|line| truncate(line)).unwrap_or_default(),
        })
        .collect()
}

fn truncate(line: &str) -> String {
    line.chars().take(SPEECH_LINE_WIDTH).collect()
}
