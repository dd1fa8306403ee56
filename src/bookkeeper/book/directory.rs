use crate::error::{AssistantError, Result};
use crate::model::Contact;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SEARCH_MIN_LEN: usize = 2;
const WINDOW_DAYS: i64 = 7;

/// Greeting days in display order.
pub const WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Bucket for a celebration date: Tuesday..Friday map to themselves, every
/// other index (Monday and the weekend) lands on Monday.
fn greeting_day(date: NaiveDate) -> Weekday {
    match date.weekday().num_days_from_monday() {
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        _ => Weekday::Mon,
    }
}

/// Contacts keyed by name. Stored as a plain list so keys are always
/// rebuilt from `contact.name` on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Contact>", into = "Vec<Contact>")]
pub struct ContactDirectory {
    records: BTreeMap<String, Contact>,
}

impl From<Vec<Contact>> for ContactDirectory {
    fn from(contacts: Vec<Contact>) -> Self {
        let mut directory = Self::new();
        for contact in contacts {
            directory.add(contact);
        }
        directory
    }
}

impl From<ContactDirectory> for Vec<Contact> {
    fn from(directory: ContactDirectory) -> Self {
        directory.records.into_values().collect()
    }
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the contact stored under its name.
    pub fn add(&mut self, contact: Contact) {
        self.records.insert(contact.name().to_string(), contact);
    }

    pub fn find(&self, name: &str) -> Result<&Contact> {
        self.records.get(name).ok_or_else(not_found)
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Contact> {
        self.records.get_mut(name).ok_or_else(not_found)
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        self.records.remove(name).ok_or_else(not_found)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.values()
    }

    pub fn search(&self, word: &str) -> Result<Vec<&Contact>> {
        if word.chars().count() < SEARCH_MIN_LEN {
            return Err(AssistantError::validation(format!(
                "The search word must consist of at least {} characters",
                SEARCH_MIN_LEN
            )));
        }
        Ok(self.iter().filter(|c| c.matches_word(word)).collect())
    }

    /// Contacts celebrating within the next week, grouped by greeting day.
    /// Every workday is present, possibly empty.
    pub fn birthdays_per_week(&self, today: NaiveDate) -> Vec<(Weekday, Vec<&Contact>)> {
        let mut buckets: Vec<(Weekday, Vec<&Contact>)> =
            WORKDAYS.iter().map(|d| (*d, Vec::new())).collect();

        for contact in self.iter() {
            let Some(birthday) = contact.birthday else {
                continue;
            };
            let next = birthday.next_occurrence(today);
            if (next - today).num_days() >= WINDOW_DAYS {
                continue;
            }
            let day = greeting_day(next);
            if let Some((_, bucket)) = buckets.iter_mut().find(|(d, _)| *d == day) {
                bucket.push(contact);
            }
        }

        buckets
    }

    pub fn birthdays_in_days(&self, days: i64, today: NaiveDate) -> Vec<&Contact> {
        self.iter()
            .filter(|c| c.days_until_birthday(today) == Some(days))
            .collect()
    }

    pub fn birthdays_on_date(&self, day: u32, month: u32) -> Vec<&Contact> {
        self.iter()
            .filter(|c| c.birthday.is_some_and(|b| b.falls_on(day, month)))
            .collect()
    }
}

fn not_found() -> AssistantError {
    AssistantError::not_found("Contact is not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;

    fn contact(name: &str, birthday: Option<&str>) -> Contact {
        let mut c = Contact::new(Name::new(name).unwrap());
        if let Some(b) = birthday {
            c.add_birthday(b).unwrap();
        }
        c
    }

    fn directory(entries: &[(&str, Option<&str>)]) -> ContactDirectory {
        let mut dir = ContactDirectory::new();
        for (name, birthday) in entries {
            dir.add(contact(name, *birthday));
        }
        dir
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name().to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let dir = directory(&[("Anna", None), ("Ban", None), ("Joe", None)]);
        let found = dir.search("an").unwrap();
        assert_eq!(names(&found), vec!["Anna", "Ban"]);
    }

    #[test]
    fn search_requires_two_characters() {
        let dir = directory(&[("Anna", None)]);
        assert!(matches!(dir.search("a"), Err(AssistantError::Validation(_))));
    }

    #[test]
    fn add_overwrites_by_name() {
        let mut dir = ContactDirectory::new();
        let mut first = contact("John", None);
        first.add_phone("1111111111").unwrap();
        dir.add(first);
        dir.add(contact("John", None));
        assert_eq!(dir.len(), 1);
        assert!(dir.find("John").unwrap().phones.is_empty());
    }

    #[test]
    fn find_and_delete_missing() {
        let mut dir = directory(&[("John", None)]);
        assert!(matches!(dir.find("Jane"), Err(AssistantError::NotFound(_))));
        assert!(matches!(dir.delete("Jane"), Err(AssistantError::NotFound(_))));
        dir.delete("John").unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn weekly_buckets_fold_weekend_into_monday() {
        // 2025-06-04 is a Wednesday
        let today = date(2025, 6, 4);
        let dir = directory(&[
            ("Wed", Some("04.06.1990")),
            ("Thu", Some("05.06.1990")),
            ("Fri", Some("06.06.1990")),
            ("Sat", Some("07.06.1990")),
            ("Sun", Some("08.06.1990")),
            ("Mon", Some("09.06.1990")),
            ("Tue", Some("10.06.1990")),
            ("NextWed", Some("11.06.1990")),
            ("Past", Some("03.06.1990")),
            ("NoBirthday", None),
        ]);

        let buckets = dir.birthdays_per_week(today);
        let labels: Vec<_> = buckets.iter().map(|(d, _)| weekday_name(*d)).collect();
        assert_eq!(
            labels,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        );

        let by_day = |day: Weekday| {
            let (_, contacts) = buckets.iter().find(|(d, _)| *d == day).unwrap();
            names(contacts)
        };
        assert_eq!(by_day(Weekday::Mon), vec!["Mon", "Sat", "Sun"]);
        assert_eq!(by_day(Weekday::Tue), vec!["Tue"]);
        assert_eq!(by_day(Weekday::Wed), vec!["Wed"]);
        assert_eq!(by_day(Weekday::Thu), vec!["Thu"]);
        assert_eq!(by_day(Weekday::Fri), vec!["Fri"]);
    }

    #[test]
    fn leap_day_birthday_lands_on_feb_28_in_common_years() {
        // 2025-02-25 is a Tuesday; 2025-02-28 is a Friday
        let today = date(2025, 2, 25);
        let dir = directory(&[("Leap", Some("29.02.2000"))]);

        let buckets = dir.birthdays_per_week(today);
        let (day, contacts) = buckets
            .iter()
            .find(|(_, contacts)| !contacts.is_empty())
            .unwrap();
        assert_eq!(*day, Weekday::Fri);
        assert_eq!(names(contacts), vec!["Leap"]);
        assert_eq!(names(&dir.birthdays_in_days(3, today)), vec!["Leap"]);
    }

    #[test]
    fn birthdays_in_days_is_exact() {
        let today = date(2025, 6, 4);
        let dir = directory(&[
            ("Two", Some("06.06.1990")),
            ("Three", Some("07.06.1990")),
            ("None", None),
        ]);
        assert_eq!(names(&dir.birthdays_in_days(2, today)), vec!["Two"]);
        assert!(dir.birthdays_in_days(1, today).is_empty());
    }

    #[test]
    fn birthdays_on_date_ignores_year() {
        let dir = directory(&[
            ("A", Some("02.11.1980")),
            ("B", Some("02.11.2001")),
            ("C", Some("11.02.1980")),
        ]);
        assert_eq!(names(&dir.birthdays_on_date(2, 11)), vec!["A", "B"]);
    }
}
