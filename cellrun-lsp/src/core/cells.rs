//! Detection of notebook style code cells inside an ordinary text document.
//!
//! A cell starts at a line matching the configured marker pattern and runs
//! to the line before the next marker, or to the end of the document.

use crate::{core::document::TextDocument, error::CellError};
use lsp_types::{Position, Range};
use regex::Regex;

/// Recognizes the markers emitted by the common notebook exporters, covering
/// `# %%`, `#%%`, `# <codecell>`, and `# In[..]` style lines.
pub const DEFAULT_CELL_MARKER: &str = r"^(#\s*%%|#\s*<codecell>|#\s*In\[)";

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Cell {
    /// The part of the document the cell covers, from the marker line to the
    /// end of the line before the next marker.
    pub range: Range,
}

pub trait CellFinder: Send + Sync {
    fn find_cells(&self, document: &TextDocument) -> Result<Vec<Cell>, CellError>;
}

/// Finds cells by matching each line of the document against a marker
/// pattern. The pattern comes from the client configuration and is compiled
/// on every call, so an invalid pattern surfaces as an error rather than at
/// construction time.
#[derive(Debug, Clone)]
pub struct MarkerCellFinder {
    pattern: String,
}

impl MarkerCellFinder {
    pub fn new(pattern: String) -> Self {
        Self { pattern }
    }
}

impl CellFinder for MarkerCellFinder {
    fn find_cells(&self, document: &TextDocument) -> Result<Vec<Cell>, CellError> {
        let marker = Regex::new(&self.pattern).map_err(|err| CellError::InvalidMarkerPattern {
            pattern: self.pattern.clone(),
            message: err.to_string(),
        })?;

        let line_count = document.line_count();
        let marker_lines: Vec<usize> = (0..line_count)
            .filter(|&line| {
                let text = document.get_line(line);
                marker.is_match(text.trim_end_matches(|c| c == '\n' || c == '\r'))
            })
            .collect();

        let cells = marker_lines
            .iter()
            .enumerate()
            .map(|(i, &start_line)| {
                let end_line = match marker_lines.get(i + 1) {
                    Some(&next_marker) => next_marker - 1,
                    None => line_count - 1,
                };
                Cell {
                    range: Range {
                        start: Position::new(start_line as u32, 0),
                        end: document.line_end_position(end_line),
                    },
                }
            })
            .collect();
        Ok(cells)
    }
}
