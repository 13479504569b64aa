//! Text Area
//!
//! Line-based edit buffer behind the terminal's text region.

/// Line terminator used when joining the buffer back into a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Cursor movement or text edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp(usize),
    PageDown(usize),
}

/// Editable lines with a cursor and a scroll offset.
///
/// Columns count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    col: usize,
    top: usize,
    left: usize,
    line_ending: LineEnding,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            top: 0,
            left: 0,
            line_ending: LineEnding::Lf,
        }
    }

    /// Load `text`, remembering whether it used CRLF line endings
    pub fn set_text(&mut self, text: &str) {
        self.line_ending = if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        };
        self.lines = match self.line_ending {
            LineEnding::CrLf => text.split("\r\n").map(str::to_string).collect(),
            LineEnding::Lf => text.split('\n').map(str::to_string).collect(),
        };
        self.row = 0;
        self.col = 0;
        self.top = 0;
        self.left = 0;
    }

    pub fn text(&self) -> String {
        self.lines.join(self.line_ending.as_str())
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// `(row, column)` of the cursor in the buffer
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Apply an edit, returning true when the text changed
    pub fn apply(&mut self, edit: Edit) -> bool {
        match edit {
            Edit::Insert(c) => {
                let at = self.byte_offset(self.col);
                self.lines[self.row].insert(at, c);
                self.col += 1;
                true
            }
            Edit::Newline => {
                let at = self.byte_offset(self.col);
                let rest = self.lines[self.row].split_off(at);
                self.lines.insert(self.row + 1, rest);
                self.row += 1;
                self.col = 0;
                true
            }
            Edit::Backspace => {
                if self.col > 0 {
                    let at = self.byte_offset(self.col - 1);
                    self.lines[self.row].remove(at);
                    self.col -= 1;
                    true
                } else if self.row > 0 {
                    let line = self.lines.remove(self.row);
                    self.row -= 1;
                    self.col = self.line_len(self.row);
                    self.lines[self.row].push_str(&line);
                    true
                } else {
                    false
                }
            }
            Edit::Delete => {
                if self.col < self.line_len(self.row) {
                    let at = self.byte_offset(self.col);
                    self.lines[self.row].remove(at);
                    true
                } else if self.row + 1 < self.lines.len() {
                    let next = self.lines.remove(self.row + 1);
                    self.lines[self.row].push_str(&next);
                    true
                } else {
                    false
                }
            }
            Edit::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.line_len(self.row);
                }
                false
            }
            Edit::Right => {
                if self.col < self.line_len(self.row) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
                false
            }
            Edit::Up => {
                self.move_to_row(self.row.saturating_sub(1));
                false
            }
            Edit::Down => {
                self.move_to_row(self.row + 1);
                false
            }
            Edit::Home => {
                self.col = 0;
                false
            }
            Edit::End => {
                self.col = self.line_len(self.row);
                false
            }
            Edit::PageUp(rows) => {
                self.move_to_row(self.row.saturating_sub(rows));
                false
            }
            Edit::PageDown(rows) => {
                self.move_to_row(self.row.saturating_add(rows));
                false
            }
        }
    }

    /// Adjust the scroll offset so the cursor is inside a `width` x `height` view
    pub fn scroll_to_cursor(&mut self, width: usize, height: usize) {
        let (width, height) = (width.max(1), height.max(1));
        if self.row < self.top {
            self.top = self.row;
        } else if self.row >= self.top + height {
            self.top = self.row + 1 - height;
        }
        if self.col < self.left {
            self.left = self.col;
        } else if self.col >= self.left + width {
            self.left = self.col + 1 - width;
        }
    }

    /// The slice of each line inside a `width` x `height` view
    pub fn visible_lines(&self, width: usize, height: usize) -> impl Iterator<Item = String> + '_ {
        self.lines
            .iter()
            .skip(self.top)
            .take(height)
            .map(move |line| {
                line.chars()
                    .skip(self.left)
                    .take(width)
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect()
            })
    }

    /// Cursor position relative to the top-left corner of the view
    pub fn view_cursor(&self) -> (usize, usize) {
        (self.col - self.left, self.row - self.top)
    }

    fn move_to_row(&mut self, row: usize) {
        self.row = row.min(self.lines.len() - 1);
        self.col = self.col.min(self.line_len(self.row));
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_offset(&self, col: usize) -> usize {
        let line = &self.lines[self.row];
        line.char_indices()
            .nth(col)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(area: &mut TextArea, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                area.apply(Edit::Newline);
            } else {
                area.apply(Edit::Insert(c));
            }
        }
    }

    #[test]
    fn test_typing_builds_text() {
        let mut area = TextArea::new();
        type_str(&mut area, "hello\nworld");
        assert_eq!(area.text(), "hello\nworld");
        assert_eq!(area.cursor(), (1, 5));
        assert_eq!(area.line_count(), 2);
    }

    #[test]
    fn test_set_text_preserves_line_endings() {
        let mut area = TextArea::new();

        area.set_text("one\r\ntwo\r\n");
        assert_eq!(area.line_ending(), LineEnding::CrLf);
        assert_eq!(area.line_count(), 3);
        assert_eq!(area.text(), "one\r\ntwo\r\n");

        area.set_text("one\ntwo");
        assert_eq!(area.line_ending(), LineEnding::Lf);
        assert_eq!(area.text(), "one\ntwo");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::new();
        area.set_text("ab\ncd");
        area.apply(Edit::Down);
        assert_eq!(area.cursor(), (1, 0));

        assert!(area.apply(Edit::Backspace));
        assert_eq!(area.text(), "abcd");
        assert_eq!(area.cursor(), (0, 2));

        area.apply(Edit::Home);
        assert!(!area.apply(Edit::Backspace));
    }

    #[test]
    fn test_delete_at_end_of_line_joins_next() {
        let mut area = TextArea::new();
        area.set_text("ab\ncd");
        area.apply(Edit::End);
        assert!(area.apply(Edit::Delete));
        assert_eq!(area.text(), "abcd");

        area.apply(Edit::End);
        assert!(!area.apply(Edit::Delete));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut area = TextArea::new();
        area.set_text("héllo");
        area.apply(Edit::Right);
        area.apply(Edit::Right);
        assert!(area.apply(Edit::Backspace));
        assert_eq!(area.text(), "hllo");
        area.apply(Edit::Insert('é'));
        assert_eq!(area.text(), "héllo");
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let mut area = TextArea::new();
        area.set_text("long line\nab\nlonger line");
        area.apply(Edit::End);
        area.apply(Edit::Down);
        assert_eq!(area.cursor(), (1, 2));
        area.apply(Edit::PageDown(10));
        assert_eq!(area.cursor(), (2, 2));
        area.apply(Edit::PageUp(10));
        assert_eq!(area.cursor(), (0, 2));
    }

    #[test]
    fn test_movement_does_not_report_changes() {
        let mut area = TextArea::new();
        area.set_text("abc");
        for edit in [Edit::Right, Edit::Left, Edit::End, Edit::Home, Edit::Up, Edit::Down] {
            assert!(!area.apply(edit));
        }
        assert_eq!(area.text(), "abc");
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut area = TextArea::new();
        area.set_text("0\n1\n2\n3\n4\n5");
        area.apply(Edit::PageDown(5));
        area.scroll_to_cursor(10, 3);

        let visible: Vec<String> = area.visible_lines(10, 3).collect();
        assert_eq!(visible, vec!["3", "4", "5"]);
        assert_eq!(area.view_cursor(), (0, 2));
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut area = TextArea::new();
        area.set_text("abcdefghij");
        area.apply(Edit::End);
        area.scroll_to_cursor(4, 1);

        let visible: Vec<String> = area.visible_lines(4, 1).collect();
        assert_eq!(visible, vec!["hij"]);
        assert_eq!(area.view_cursor(), (3, 0));
    }
}
