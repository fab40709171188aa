use super::enums::SessionMode;

/// Capture step shown after a session finishes.
///
/// Holds the mode that was active at completion, so confirming later logs
/// that mode no matter what the timer shows meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCapture {
    pub mode: SessionMode,
    pub selected: Vec<String>,
    pub input: String,
    /// Chip under the cursor; `None` while the input field has focus
    pub focused: Option<usize>,
}

impl TagCapture {
    pub fn new(mode: SessionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
            input: String::new(),
            focused: None,
        }
    }

    /// Add a trimmed tag unless it is empty or already selected
    pub fn add_tag(&mut self, text: &str) {
        let tag = text.trim();
        if tag.is_empty() || self.selected.iter().any(|t| t == tag) {
            return;
        }
        self.selected.push(tag.to_string());
    }

    pub fn remove_tag(&mut self, text: &str) {
        self.selected.retain(|t| t != text);
        self.clamp_focus();
    }

    /// Drop the most recently added chip
    pub fn remove_last(&mut self) {
        self.selected.pop();
        self.clamp_focus();
    }

    /// Move chip focus left; from the input field this lands on the last chip
    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            _ if self.selected.is_empty() => None,
            None => Some(self.selected.len() - 1),
            Some(i) => Some(i.saturating_sub(1)),
        };
    }

    /// Move chip focus right; past the last chip focus returns to the input field
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            Some(i) if i + 1 < self.selected.len() => Some(i + 1),
            _ => None,
        };
    }

    /// Remove the chip under the cursor, keeping focus on a neighbour
    pub fn remove_focused(&mut self) {
        let Some(tag) = self.focused.and_then(|i| self.selected.get(i)).cloned() else {
            return;
        };
        self.remove_tag(&tag);
    }

    fn clamp_focus(&mut self) {
        self.focused = match self.focused {
            _ if self.selected.is_empty() => None,
            Some(i) => Some(i.min(self.selected.len() - 1)),
            None => None,
        };
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        self.mode.suggested_tags()
    }

    /// Quick-add the suggestion at `index`, if there is one
    pub fn add_suggestion(&mut self, index: usize) {
        if let Some(tag) = self.suggestions().get(index) {
            self.add_tag(tag);
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Turn the input buffer into a tag; the buffer is kept if only whitespace
    pub fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.input);
        self.add_tag(&text);
    }

    /// Consume the capture, yielding the tags to log
    pub fn into_tags(self) -> Vec<String> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_tag_trims_and_dedups() {
        let mut capture = TagCapture::new(SessionMode::Work);
        capture.add_tag("  Coding ");
        capture.add_tag("Coding");
        capture.add_tag("   ");
        capture.add_tag("coding");

        assert_eq!(capture.selected, vec!["Coding".to_string(), "coding".to_string()]);
    }

    #[test]
    fn test_remove_tag() {
        let mut capture = TagCapture::new(SessionMode::Work);
        capture.add_tag("a");
        capture.add_tag("b");
        capture.remove_tag("a");
        capture.remove_tag("missing");

        assert_eq!(capture.selected, vec!["b".to_string()]);
    }

    #[test]
    fn test_submit_input_clears_buffer() {
        let mut capture = TagCapture::new(SessionMode::Break);
        for c in " Walk ".chars() {
            capture.push_char(c);
        }
        capture.submit_input();

        assert_eq!(capture.selected, vec!["Walk".to_string()]);
        assert!(capture.input.is_empty());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut capture = TagCapture::new(SessionMode::Break);
        capture.push_char(' ');
        capture.submit_input();

        assert!(capture.selected.is_empty());
        assert_eq!(capture.input, " ");
        capture.backspace();
        assert!(capture.input.is_empty());
    }

    #[test]
    fn test_add_suggestion() {
        let mut capture = TagCapture::new(SessionMode::Work);
        capture.add_suggestion(2);
        capture.add_suggestion(2);
        capture.add_suggestion(99);

        assert_eq!(capture.into_tags(), vec!["Writing".to_string()]);
    }

    #[test]
    fn test_selection_keeps_insertion_order() {
        let mut capture = TagCapture::new(SessionMode::Work);
        capture.add_tag("z");
        capture.add_tag("a");
        capture.add_tag("m");
        capture.remove_last();

        assert_eq!(capture.selected, vec!["z".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_chip_focus_moves_and_wraps_to_input() {
        let mut capture = TagCapture::new(SessionMode::Work);
        capture.focus_prev();
        assert_eq!(capture.focused, None);

        capture.add_tag("a");
        capture.add_tag("b");
        capture.add_tag("c");

        capture.focus_prev();
        assert_eq!(capture.focused, Some(2));
        capture.focus_prev();
        capture.focus_prev();
        capture.focus_prev();
        assert_eq!(capture.focused, Some(0));

        capture.focus_next();
        assert_eq!(capture.focused, Some(1));
        capture.focus_next();
        capture.focus_next();
        assert_eq!(capture.focused, None);
    }

    #[test]
    fn test_remove_focused_middle_chip() {
        let mut capture = TagCapture::new(SessionMode::Work);
        capture.add_tag("a");
        capture.add_tag("b");
        capture.add_tag("c");
        capture.focused = Some(1);

        capture.remove_focused();
        assert_eq!(capture.selected, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(capture.focused, Some(1));

        capture.remove_focused();
        assert_eq!(capture.selected, vec!["a".to_string()]);
        assert_eq!(capture.focused, Some(0));

        capture.remove_focused();
        assert!(capture.selected.is_empty());
        assert_eq!(capture.focused, None);

        // Nothing focused, nothing removed
        capture.add_tag("d");
        capture.remove_focused();
        assert_eq!(capture.selected, vec!["d".to_string()]);
    }
}
