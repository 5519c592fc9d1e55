//! Structural metadata extracted from the note body

use serde::{Deserialize, Serialize};

/// Parsed body structure
///
/// Markdown-level facts about the body text. Plain text is capped to
/// the first 1000 characters for preview purposes; the full body stays
/// on the note record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStructure {
    /// Plain text excerpt (markdown syntax stripped)
    pub plain_text: String,

    /// Extracted heading outline
    pub headings: Vec<Heading>,

    /// Paragraph count
    pub paragraph_count: usize,

    /// Word count (approximate)
    pub word_count: usize,

    /// Character count
    pub char_count: usize,
}

impl NoteStructure {
    /// Create empty structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Set plain text and update counts
    pub fn with_plain_text(mut self, text: String) -> Self {
        self.word_count = text.split_whitespace().count();
        self.char_count = text.chars().count();
        if text.chars().count() > 1000 {
            self.plain_text = text.chars().take(1000).collect();
            self.plain_text.push_str("...");
        } else {
            self.plain_text = text;
        }
        self
    }

    /// First top-level heading, if any
    pub fn first_h1(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|h| h.level == 1)
            .map(|h| h.text.as_str())
    }

    /// Get the heading outline, indented by level
    pub fn outline(&self) -> Vec<String> {
        self.headings
            .iter()
            .map(|h| format!("{}{}", "  ".repeat((h.level.saturating_sub(1)) as usize), h.text))
            .collect()
    }
}

/// Markdown heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,

    /// Heading text (without #)
    pub text: String,

    /// Byte offset in the body text
    pub offset: usize,

    /// Generated heading ID (for linking)
    pub id: Option<String>,
}

impl Heading {
    /// Create a new heading
    pub fn new(level: u8, text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let id = Some(Self::generate_id(&text));
        Self {
            level,
            text,
            offset,
            id,
        }
    }

    /// Generate a heading ID from text (slugify)
    fn generate_id(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_id_generation() {
        let heading = Heading::new(1, "Hello World!", 0);
        assert_eq!(heading.id, Some("hello-world".to_string()));

        let heading = Heading::new(2, "API Reference (v2)", 10);
        assert_eq!(heading.id, Some("api-reference-v2".to_string()));
    }

    #[test]
    fn test_word_count() {
        let structure = NoteStructure::new().with_plain_text("Hello world test".to_string());
        assert_eq!(structure.word_count, 3);
        assert_eq!(structure.char_count, 16);
    }

    #[test]
    fn test_plain_text_cap() {
        let long = "word ".repeat(400);
        let structure = NoteStructure::new().with_plain_text(long.clone());
        assert_eq!(structure.word_count, 400);
        assert_eq!(structure.char_count, long.chars().count());
        assert!(structure.plain_text.ends_with("..."));
        assert_eq!(structure.plain_text.chars().count(), 1003);
    }

    #[test]
    fn test_first_h1_and_outline() {
        let mut structure = NoteStructure::new();
        structure.headings.push(Heading::new(1, "Neural Networks", 0));
        structure.headings.push(Heading::new(2, "History", 20));

        assert_eq!(structure.first_h1(), Some("Neural Networks"));
        let outline = structure.outline();
        assert_eq!(outline[0], "Neural Networks");
        assert_eq!(outline[1], "  History");
    }
}
