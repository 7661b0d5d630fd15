//! Answer text field.

/// Longest answer the field accepts.
pub const MAX_ANSWER_LEN: usize = 16;

/// Single-line numeric answer buffer.
///
/// The field only filters which characters can be typed; whether the text is
/// a number is decided by the engine when the answer is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerField {
    text: String,
}

impl AnswerField {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(MAX_ANSWER_LEN),
        }
    }

    /// Append `c`. Returns false when the field is full or `c` is not part
    /// of a number.
    pub fn insert(&mut self, c: char) -> bool {
        if self.text.len() >= MAX_ANSWER_LEN || !(c.is_ascii_digit() || c == '-' || c == '.') {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
