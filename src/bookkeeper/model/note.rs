use super::fields::{strip_tag_marker, NoteText, Tag};
use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PREVIEW_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: NoteText,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Note {
    pub fn new(id: u32, text: NoteText) -> Self {
        Self {
            id,
            text,
            tags: Vec::new(),
        }
    }

    pub fn set_text(&mut self, raw: &str) -> Result<()> {
        self.text = NoteText::new(raw)?;
        Ok(())
    }

    pub fn has_tag(&self, value: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == value)
    }

    pub fn add_tag(&mut self, raw: &str) -> Result<&Tag> {
        let tag = Tag::new(raw)?;
        if self.has_tag(tag.as_str()) {
            return Err(AssistantError::duplicate(format!(
                "Tag #{} already exists",
                tag
            )));
        }
        self.tags.push(tag);
        Ok(&self.tags[self.tags.len() - 1])
    }

    pub fn delete_tag(&mut self, raw: &str) -> Result<()> {
        let value = strip_tag_marker(raw);
        let position = self
            .tags
            .iter()
            .position(|t| t.as_str() == value)
            .ok_or_else(|| {
                AssistantError::not_found(format!("Tag #{} not found in note {}", value, self.id))
            })?;
        self.tags.remove(position);
        Ok(())
    }

    pub fn delete_all_tags(&mut self) {
        self.tags.clear();
    }

    pub fn tags_line(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The text cut to a display width, single line.
    pub fn preview(&self) -> String {
        let text: String = self
            .text
            .as_str()
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        truncate_to_width(&text, PREVIEW_WIDTH)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {:>4} | Text: {}", self.id, self.preview())?;
        if !self.tags.is_empty() {
            write!(f, " | Tags: {}", self.tags_line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(text: &str) -> Note {
        Note::new(1, NoteText::new(text).unwrap())
    }

    #[test]
    fn add_tag_strips_marker_and_rejects_duplicates() {
        let mut n = note("groceries for the week");
        assert_eq!(n.add_tag("#home").unwrap().as_str(), "home");
        assert!(matches!(
            n.add_tag("home"),
            Err(AssistantError::Duplicate(_))
        ));
        assert!(matches!(n.add_tag("#ab"), Err(AssistantError::Validation(_))));
        assert_eq!(n.tags_line(), "#home");
    }

    #[test]
    fn delete_tag() {
        let mut n = note("groceries for the week");
        n.add_tag("home").unwrap();
        n.add_tag("shopping").unwrap();
        n.delete_tag("#home").unwrap();
        assert_eq!(n.tags_line(), "#shopping");
        assert!(matches!(
            n.delete_tag("home"),
            Err(AssistantError::NotFound(_))
        ));
        n.delete_all_tags();
        assert!(n.tags.is_empty());
    }

    #[test]
    fn set_text_validates() {
        let mut n = note("first version");
        assert!(n.set_text("no").is_err());
        assert_eq!(n.text.as_str(), "first version");
        n.set_text("second version").unwrap();
        assert_eq!(n.text.as_str(), "second version");
    }

    #[test]
    fn display_truncates_long_text() {
        let mut n = note("a rather long note that goes well past the preview width");
        n.add_tag("long").unwrap();
        let rendered = n.to_string();
        assert!(rendered.starts_with("ID:    1 | Text: a rather long note"));
        assert!(rendered.contains('…'));
        assert!(rendered.ends_with("| Tags: #long"));
    }

    #[test]
    fn short_text_is_kept_whole() {
        assert_eq!(note("short").preview(), "short");
    }
}
