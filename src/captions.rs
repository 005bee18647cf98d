//! Caption file parsing.
//!
//! The caption file is plain text, one image per line:
//!
//! ```text
//! sunset.jpg<TAB>Evening over the *harbour*
//! portrait.png<TAB>Study in charcoal, 2019
//! ```
//!
//! Each line is stripped of surrounding whitespace and split on tabs. Only
//! lines with exactly two fields become entries; anything else (blank lines,
//! comments without a tab, extra columns) is skipped. Captions may contain
//! Markdown.
//!
//! The order of lines matters: it is the order of the gallery.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptionsError {
    #[error("IO error reading captions: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered mapping from image filename to caption text.
#[derive(Debug, Clone, Default)]
pub struct Captions {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Captions {
    /// Parse caption file content.
    ///
    /// A repeated filename keeps the position of its first line and the
    /// caption of its last.
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut captions = Self::default();

        // `lines()` splits on LF and CRLF; a bare CR also ends a line.
        let lines = content.lines().flat_map(|line| line.split('\r'));
        for (lineno, line) in lines.enumerate() {
            let fields: Vec<&str> = line.trim().split('\t').collect();
            let [filename, caption] = fields.as_slice() else {
                if !line.trim().is_empty() {
                    log::debug!(
                        "captions line {}: expected 2 tab-separated fields, found {}",
                        lineno + 1,
                        fields.len()
                    );
                }
                continue;
            };
            let filename = filename.trim();
            if filename.is_empty() {
                log::debug!("captions line {}: empty filename", lineno + 1);
                continue;
            }
            captions.insert(filename, caption.trim(), lineno + 1);
        }

        captions
    }

    /// Read and parse a caption file.
    pub fn load(path: &Path) -> Result<Self, CaptionsError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    fn insert(&mut self, filename: &str, caption: &str, lineno: usize) {
        match self.index.get(filename) {
            Some(&pos) => {
                log::warn!(
                    "captions line {lineno}: duplicate entry for {filename}, replacing earlier caption"
                );
                self.entries[pos].1 = caption.to_string();
            }
            None => {
                self.index.insert(filename.to_string(), self.entries.len());
                self.entries
                    .push((filename.to_string(), caption.to_string()));
            }
        }
    }

    /// Caption for `filename`, if the file lists one.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.index
            .get(filename)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Zero-based position of `filename` in caption-file order.
    pub fn position(&self, filename: &str) -> Option<usize> {
        self.index.get(filename).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(filename, caption)` pairs in caption-file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, c)| (f.as_str(), c.as_str()))
    }
}
