use super::fields::{Address, Birthday, Email, Field, Name, Phone};
use crate::error::{AssistantError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        if self.find_phone(raw).is_some() {
            return Err(AssistantError::duplicate("Phone already exists"));
        }
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let position = self.find_phone(old).ok_or_else(|| {
            AssistantError::not_found(format!(
                "Phone {} number not found for record {}",
                old, self.name
            ))
        })?;
        self.phones[position] = Phone::new(new)?;
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<()> {
        let position = self.find_phone(raw).ok_or_else(|| {
            AssistantError::not_found(format!(
                "Phone {} number not found for record {}",
                raw, self.name
            ))
        })?;
        self.phones.remove(position);
        Ok(())
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    pub fn add_email(&mut self, raw: &str) -> Result<()> {
        self.email = Some(Email::new(raw)?);
        Ok(())
    }

    pub fn add_address(&mut self, raw: &str) -> Result<()> {
        self.address = Some(Address::new(raw)?);
        Ok(())
    }

    /// Every populated field, name first.
    pub fn fields(&self) -> Vec<&dyn Field> {
        let mut fields: Vec<&dyn Field> = vec![&self.name];
        if let Some(birthday) = &self.birthday {
            fields.push(birthday);
        }
        fields.extend(self.phones.iter().map(|p| p as &dyn Field));
        if let Some(email) = &self.email {
            fields.push(email);
        }
        if let Some(address) = &self.address {
            fields.push(address);
        }
        fields
    }

    pub fn matches_word(&self, word: &str) -> bool {
        self.fields().iter().any(|f| f.contains_word(word))
    }

    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }

    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn or_none<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "None".to_string())
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {:15} | Birthday: {:10} | Email: {:25} | Phones: {} | Address: {}",
            self.name.as_str(),
            or_none(&self.birthday),
            or_none(&self.email),
            self.phones_line(),
            or_none(&self.address)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::new(Name::new(name).unwrap())
    }

    #[test]
    fn duplicate_phone_is_rejected() {
        let mut c = contact("John");
        c.add_phone("0991911155").unwrap();
        assert!(matches!(
            c.add_phone("0991911155"),
            Err(AssistantError::Duplicate(_))
        ));
        c.add_phone("0671234567").unwrap();
        assert_eq!(c.phones_line(), "0991911155; 0671234567");
    }

    #[test]
    fn invalid_phone_is_not_stored() {
        let mut c = contact("John");
        assert!(matches!(
            c.add_phone("12345"),
            Err(AssistantError::Validation(_))
        ));
        assert!(c.phones.is_empty());
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut c = contact("John");
        c.add_phone("1111111111").unwrap();
        c.add_phone("2222222222").unwrap();
        c.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(c.phones_line(), "3333333333; 2222222222");
    }

    #[test]
    fn edit_phone_errors() {
        let mut c = contact("John");
        c.add_phone("1111111111").unwrap();
        assert!(matches!(
            c.edit_phone("9999999999", "3333333333"),
            Err(AssistantError::NotFound(_))
        ));
        assert!(matches!(
            c.edit_phone("1111111111", "33"),
            Err(AssistantError::Validation(_))
        ));
        assert_eq!(c.phones_line(), "1111111111");
    }

    #[test]
    fn remove_phone() {
        let mut c = contact("John");
        c.add_phone("1111111111").unwrap();
        c.remove_phone("1111111111").unwrap();
        assert!(c.phones.is_empty());
        assert!(matches!(
            c.remove_phone("1111111111"),
            Err(AssistantError::NotFound(_))
        ));
    }

    #[test]
    fn optional_fields_overwrite() {
        let mut c = contact("John");
        c.add_email("john@mail.com").unwrap();
        c.add_email("john@work.org").unwrap();
        assert_eq!(c.email.as_ref().unwrap().as_str(), "john@work.org");
        c.add_birthday("01.01.1990").unwrap();
        c.add_birthday("02.02.1992").unwrap();
        assert_eq!(c.birthday.unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn matches_word_checks_every_field() {
        let mut c = contact("John");
        c.add_phone("0991911155").unwrap();
        c.add_email("jd@mail.com").unwrap();
        c.add_address("Baker Street").unwrap();
        c.add_birthday("19.07.1999").unwrap();
        assert!(c.matches_word("jo"));
        assert!(c.matches_word("9119"));
        assert!(c.matches_word("MAIL"));
        assert!(c.matches_word("baker"));
        assert!(c.matches_word("07.19"));
        assert!(!c.matches_word("zz"));
    }

    #[test]
    fn days_until_birthday_absent_without_birthday() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut c = contact("John");
        assert_eq!(c.days_until_birthday(today), None);
        c.add_birthday("03.05.1990").unwrap();
        assert_eq!(c.days_until_birthday(today), Some(2));
    }

    #[test]
    fn display_renders_missing_fields() {
        let mut c = contact("John");
        c.add_phone("0991911155").unwrap();
        let rendered = c.to_string();
        assert!(rendered.starts_with("Contact name: John"));
        assert!(rendered.contains("Phones: 0991911155"));
        assert!(rendered.contains("Address: None"));
    }
}
