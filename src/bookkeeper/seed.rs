//! Starter data for a first run.
//!
//! Output is deterministic: the n-th contact and note always look the same,
//! which keeps first-run sessions reproducible.

use crate::book::Book;
use crate::error::Result;
use crate::model::{Contact, Name, NoteText};
use chrono::{Datelike, Days, NaiveDate};

const FIRST_NAMES: [&str; 16] = [
    "Alice", "Bohdan", "Carmen", "Dmytro", "Elena", "Farid", "Greta", "Hiro", "Ines", "Jonas",
    "Kateryna", "Lucas", "Maya", "Nikolai", "Olga", "Pavel",
];

const WORDS: [&str; 24] = [
    "meeting", "garden", "invoice", "train", "recipe", "library", "project", "river", "window",
    "coffee", "letter", "market", "ticket", "concert", "doctor", "school", "bicycle", "holiday",
    "budget", "kitchen", "report", "museum", "parcel", "weekend",
];

const TAGS: [&str; 6] = ["work", "home", "errands", "ideas", "travel", "health"];

const WORDS_PER_NOTE: usize = 10;

/// Adds `contacts` sample contacts (one phone and a birthday each, aged 18 to
/// 50 at `today`) and `notes` sample notes.
pub fn populate(book: &mut Book, contacts: usize, notes: usize, today: NaiveDate) -> Result<()> {
    for i in 0..contacts {
        book.contacts.add(sample_contact(i, today)?);
    }
    for i in 0..notes {
        let id = book.notes.add(sample_text(i)?)?.id;
        if i % 3 == 0 {
            book.notes
                .find_mut(&id.to_string())?
                .add_tag(TAGS[i % TAGS.len()])?;
        }
    }
    log::info!("populated {} starter contacts and {} notes", contacts, notes);
    Ok(())
}

fn sample_contact(i: usize, today: NaiveDate) -> Result<Contact> {
    let base = FIRST_NAMES[i % FIRST_NAMES.len()];
    let name = if i < FIRST_NAMES.len() {
        base.to_string()
    } else {
        format!("{}{}", base, i / FIRST_NAMES.len() + 1)
    };
    let mut contact = Contact::new(Name::new(&name)?);

    let phone = format!("0{:09}", (501_234_567 + i as u64 * 7_919) % 1_000_000_000);
    contact.add_phone(&phone)?;

    let age = 18 + (i * 7) % 33;
    let birthday = NaiveDate::from_ymd_opt(today.year() - age as i32, 1, 1)
        .and_then(|jan1| jan1.checked_add_days(Days::new(((i * 37) % 365) as u64)));
    if let Some(date) = birthday {
        contact.birthday = Some(date.into());
    }
    Ok(contact)
}

fn sample_text(i: usize) -> Result<NoteText> {
    let words: Vec<&str> = (0..WORDS_PER_NOTE)
        .map(|k| WORDS[(i * 5 + k * 7) % WORDS.len()])
        .collect();
    NoteText::new(&words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    #[test]
    fn populates_requested_counts() {
        let mut book = Book::new();
        populate(&mut book, 20, 7, today()).unwrap();
        assert_eq!(book.contacts.len(), 20);
        assert_eq!(book.notes.len(), 7);
        assert_eq!(book.notes.next_id().unwrap(), 8);
    }

    #[test]
    fn sample_contacts_are_valid_and_adult() {
        let mut book = Book::new();
        populate(&mut book, 40, 0, today()).unwrap();
        for contact in book.contacts.iter() {
            assert_eq!(contact.phones.len(), 1);
            let birthday = contact.birthday.unwrap().date();
            let age = today().year() - birthday.year();
            assert!((18..=50).contains(&age), "{} is {}", contact.name(), age);
        }
    }

    #[test]
    fn output_is_deterministic() {
        let mut a = Book::new();
        let mut b = Book::new();
        populate(&mut a, 5, 5, today()).unwrap();
        populate(&mut b, 5, 5, today()).unwrap();
        assert_eq!(a, b);
    }
}
