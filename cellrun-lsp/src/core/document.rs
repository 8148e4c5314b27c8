use lsp_types::{Position, Range, TextDocumentContentChangeEvent, Url};
use ropey::Rope;

#[derive(Debug, Clone)]
pub struct TextDocument {
    #[allow(dead_code)]
    language_id: String,
    version: i32,
    uri: Url,
    content: Rope,
}

impl TextDocument {
    pub fn new(uri: Url, language_id: String, version: i32, text: &str) -> Self {
        Self {
            language_id,
            version,
            uri,
            content: Rope::from_str(text),
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    pub fn get_line(&self, line: usize) -> String {
        self.content.line(line).to_string()
    }

    pub fn line_count(&self) -> usize {
        self.content.len_lines()
    }

    /// The position just past the last character of `line`, excluding any
    /// line break characters.
    pub fn line_end_position(&self, line: usize) -> Position {
        let line_start_char = self.content.line_to_char(line);
        let mut line_end_char = self.content.line_to_char(line + 1);
        while line_end_char > line_start_char
            && matches!(self.content.char(line_end_char - 1), '\n' | '\r')
        {
            line_end_char -= 1;
        }
        let line_start_cu = self.content.char_to_utf16_cu(line_start_char);
        let line_end_cu = self.content.char_to_utf16_cu(line_end_char);
        Position::new(line as u32, (line_end_cu - line_start_cu) as u32)
    }

    pub fn apply_change(&mut self, change: &TextDocumentContentChangeEvent) {
        match change.range {
            Some(range) => {
                let (start_index, end_index) = self.range_to_char_indices(range);
                self.content.remove(start_index..end_index);
                self.content.insert(start_index, &change.text);
            }
            None => {
                // A change without a range replaces the whole document.
                self.content = Rope::from_str(&change.text);
            }
        }
    }

    pub fn get_text(&self) -> String {
        self.content.to_string()
    }
}

// private methods
impl TextDocument {
    fn range_to_char_indices(&self, range: Range) -> (usize, usize) {
        let start_index = self.position_to_char(range.start);
        let end_index = self.position_to_char(range.end);
        (start_index, end_index)
    }

    /// Converts an LSP position, whose `character` counts UTF-16 code units
    /// within the line, into a char index of the rope. A line past the end
    /// of the document is clamped to the last line, and a character past
    /// the end of its line to the line length.
    fn position_to_char(&self, position: Position) -> usize {
        let line_index = (position.line as usize).min(self.content.len_lines() - 1);
        let line_char_index = self.content.line_to_char(line_index);
        let line_utf16_cu_index = self.content.char_to_utf16_cu(line_char_index);
        let line_length_cu = self.line_end_position(line_index).character as usize;
        let utf16_cu_index =
            line_utf16_cu_index + (position.character as usize).min(line_length_cu);
        self.content.utf16_cu_to_char(utf16_cu_index)
    }
}
