//! Domain models for bundle requests, entries, and the generated header shape.

use std::path::PathBuf;

/// Guard token written around every header produced by the command line.
pub const DEFAULT_GUARD: &str = "BUNDLE_H";
/// Prefix of each generated array name and of the index array.
pub const DEFAULT_SYMBOL: &str = "bundle";
/// Entries emitted per line inside an array literal.
pub const DEFAULT_BYTES_PER_LINE: usize = 10;
/// Indentation preceding every line of entries.
pub const DEFAULT_INDENT: &str = "    ";

/// One invocation: where to write and what to embed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequest {
    pub output: PathBuf,
    pub inputs: Vec<PathBuf>,
}

impl BundleRequest {
    pub fn new(output: impl Into<PathBuf>, inputs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            output: output.into(),
            inputs: inputs.into_iter().collect(),
        }
    }
}

/// An input that was streamed into the header as `<symbol><index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub index: usize,
    pub path: PathBuf,
    /// Bytes read from the input, not counting the terminator.
    pub len: u64,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BundleSummary {
    pub output: PathBuf,
    pub entries: Vec<BundleEntry>,
}

impl BundleSummary {
    /// Total input bytes embedded across all entries.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|entry| entry.len).sum()
    }
}

/// Textual shape of a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub guard: String,
    pub symbol: String,
    pub bytes_per_line: usize,
    pub indent: String,
}

impl HeaderLayout {
    /// Replace the include guard token, e.g. to keep two generated headers
    /// includable from the same translation unit.
    pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = guard.into();
        self
    }

    /// Name of the array holding the input at `index`.
    pub fn array_name(&self, index: usize) -> String {
        format!("{}{index}", self.symbol)
    }
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            guard: DEFAULT_GUARD.to_owned(),
            symbol: DEFAULT_SYMBOL.to_owned(),
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
            indent: DEFAULT_INDENT.to_owned(),
        }
    }
}
