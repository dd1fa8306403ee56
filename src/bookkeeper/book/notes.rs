use crate::error::{AssistantError, Result};
use crate::model::fields::strip_tag_marker;
use crate::model::{Note, NoteText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Notes keyed by integer id.
///
/// `last_id` is the highest id ever issued, so deleting the newest note does
/// not make its id available again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NoteCollectionData", into = "NoteCollectionData")]
pub struct NoteCollection {
    notes: BTreeMap<u32, Note>,
    last_id: u32,
}

#[derive(Serialize, Deserialize)]
struct NoteCollectionData {
    #[serde(default)]
    last_id: u32,
    #[serde(default)]
    notes: Vec<Note>,
}

impl From<NoteCollectionData> for NoteCollection {
    fn from(data: NoteCollectionData) -> Self {
        let mut collection = Self {
            notes: BTreeMap::new(),
            last_id: data.last_id,
        };
        for note in data.notes {
            collection.insert(note);
        }
        collection
    }
}

impl From<NoteCollection> for NoteCollectionData {
    fn from(collection: NoteCollection) -> Self {
        Self {
            last_id: collection.last_id,
            notes: collection.notes.into_values().collect(),
        }
    }
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// One past the highest id ever issued; fails once ids are exhausted.
    pub fn next_id(&self) -> Result<u32> {
        let max_key = self.notes.keys().next_back().copied().unwrap_or(0);
        max_key
            .max(self.last_id)
            .checked_add(1)
            .ok_or_else(|| AssistantError::validation("Note id limit reached"))
    }

    /// Creates a note with the next id.
    pub fn add(&mut self, text: NoteText) -> Result<&Note> {
        let id = self.next_id()?;
        self.insert(Note::new(id, text));
        Ok(&self.notes[&id])
    }

    fn insert(&mut self, note: Note) {
        self.last_id = self.last_id.max(note.id);
        self.notes.insert(note.id, note);
    }

    pub fn find(&self, raw_id: &str) -> Result<&Note> {
        let id = parse_id(raw_id)?;
        self.notes.get(&id).ok_or_else(|| not_found(raw_id))
    }

    pub fn find_mut(&mut self, raw_id: &str) -> Result<&mut Note> {
        let id = parse_id(raw_id)?;
        self.notes.get_mut(&id).ok_or_else(|| not_found(raw_id))
    }

    pub fn delete(&mut self, raw_id: &str) -> Result<Note> {
        let id = parse_id(raw_id)?;
        self.notes.remove(&id).ok_or_else(|| not_found(raw_id))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Notes whose text contains any of `words`.
    pub fn search<S: AsRef<str>>(&self, words: &[S]) -> Vec<&Note> {
        self.iter()
            .filter(|n| words.iter().any(|w| n.text.as_str().contains(w.as_ref())))
            .collect()
    }

    /// Notes carrying any of `tags`; a leading `#` on a query is ignored.
    pub fn search_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Note> {
        self.iter()
            .filter(|n| {
                tags.iter()
                    .any(|t| n.has_tag(strip_tag_marker(t.as_ref())))
            })
            .collect()
    }
}

fn parse_id(raw_id: &str) -> Result<u32> {
    raw_id
        .parse()
        .map_err(|_| AssistantError::validation("Note id must be integer"))
}

fn not_found(raw_id: &str) -> AssistantError {
    AssistantError::not_found(format!("Note with id [{}] is not found", raw_id))
}
