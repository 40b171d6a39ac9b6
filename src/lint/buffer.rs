//! Immutable line buffer for a single linting pass.
//!
//! A [`LineBuffer`] holds the raw text lines of one file, 0-indexed, in file
//! order. It is created when a file's content is split on line boundaries and
//! replaced when the next file in a batch is processed. Neither the
//! structural validator nor any style rule may mutate it.

/// The ordered, immutable sequence of a file's text lines for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Create a buffer from pre-split lines (terminators already stripped).
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split raw file content on line-feed boundaries.
    ///
    /// A trailing `\r` (CRLF input) is stripped from each line. Empty content
    /// yields a single empty line, mirroring `str::split`.
    pub fn from_content(content: &str) -> Self {
        let lines = content
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        Self { lines }
    }

    /// Number of lines in the buffer.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The last line of the buffer, if any.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Iterate over the lines in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
