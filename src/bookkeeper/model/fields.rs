//! Validated scalar fields.
//!
//! Every field type is built through a smart constructor (`new` / `parse`) that
//! either returns a value satisfying the field's format rule or an
//! [`AssistantError::Validation`]. There are no unchecked setters: changing a
//! field means building a new one. Serde goes through the same constructors
//! (`try_from = "String"`), so a hand-edited data file cannot smuggle in an
//! invalid phone or tag.
//!
//! | Field      | Rule                                                        |
//! |------------|-------------------------------------------------------------|
//! | `Name`     | none (the key of a contact)                                 |
//! | `Phone`    | exactly [`PHONE_LEN`] ASCII digits                          |
//! | `Birthday` | a real date in [`DATE_FORMAT`] (`DD.MM.YYYY`)               |
//! | `Email`    | letter, word/dot chars, `@`, letters, `.`, 2+ letter TLD    |
//! | `Address`  | at least [`ADDRESS_MIN_LEN`] characters                     |
//! | `NoteText` | at least [`NOTE_TEXT_MIN_LEN`] characters                   |
//! | `Tag`      | leading `#` stripped, then at least [`TAG_MIN_LEN`] chars   |

use crate::error::{AssistantError, Result};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_LEN: usize = 10;
pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const ADDRESS_MIN_LEN: usize = 3;
pub const NOTE_TEXT_MIN_LEN: usize = 3;
pub const TAG_MIN_LEN: usize = 3;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][\w.]+@[a-zA-Z]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// A single validated attribute of an entity.
pub trait Field: fmt::Display {
    /// Case-insensitive substring test against the canonical string form.
    fn contains_word(&self, word: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&word.to_lowercase())
    }
}

macro_rules! string_field {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = AssistantError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Field for $ty {}
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(raw.to_string()))
    }
}

string_field!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.len() != PHONE_LEN || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(AssistantError::validation(format!(
                "Phone must contain {} digits",
                PHONE_LEN
            )));
        }
        Ok(Self(raw.to_string()))
    }
}

string_field!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self> {
        if !EMAIL_RE.is_match(raw) {
            return Err(AssistantError::validation("Invalid email address."));
        }
        Ok(Self(raw.to_string()))
    }
}

string_field!(Email);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.chars().count() < ADDRESS_MIN_LEN {
            return Err(AssistantError::validation("Invalid address."));
        }
        Ok(Self(raw.to_string()))
    }
}

string_field!(Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteText(String);

impl NoteText {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.chars().count() < NOTE_TEXT_MIN_LEN {
            return Err(AssistantError::validation(format!(
                "Note text should contain at least {} characters",
                NOTE_TEXT_MIN_LEN
            )));
        }
        Ok(Self(raw.to_string()))
    }
}

string_field!(NoteText);

/// Tag text without the `#` marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self> {
        let stripped = strip_tag_marker(raw);
        if stripped.chars().count() < TAG_MIN_LEN {
            return Err(AssistantError::validation(format!(
                "Tag should contain at least {} characters",
                TAG_MIN_LEN
            )));
        }
        Ok(Self(stripped.to_string()))
    }
}

string_field!(Tag);

/// Removes every leading `#` from a tag as typed by the user.
pub fn strip_tag_marker(raw: &str) -> &str {
    raw.trim_start_matches('#')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| AssistantError::validation("Birthday should be in \"DD.MM.YYYY\" format"))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month/day in `year`. Feb 29 falls back to Feb 28 in
    /// years without a leap day.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }

    /// The next celebration on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.in_year(today.year());
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            this_year
        }
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    pub fn falls_on(&self, day: u32, month: u32) -> bool {
        self.0.day() == day && self.0.month() == month
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

impl Field for Birthday {}
