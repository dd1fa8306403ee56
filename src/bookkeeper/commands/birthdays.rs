use super::{exact_args, CmdMessage, Command, Context, Flow, Registry};
use crate::book::weekday_name;
use crate::error::{AssistantError, Result};
use chrono::{Datelike, NaiveDate};

// Leap year, so 29.02 is accepted as a date to search by.
const LEAP_YEAR: i32 = 2000;

pub fn register(registry: &mut Registry) {
    registry.register(
        "birthdays",
        Command {
            summary: "Show all birthdays in a week period",
            usage: "birthdays",
            arguments: &[],
            handler: birthdays,
        },
    );
    registry.register(
        "birthdays-in-days",
        Command {
            summary: "Show contacts with birthday in N days",
            usage: "birthdays-in-days [days]",
            arguments: &[("days", "number of days")],
            handler: birthdays_in_days,
        },
    );
    registry.register(
        "birthdays-by-date",
        Command {
            summary: "Show contacts with birthday by date",
            usage: "birthdays-by-date [date]",
            arguments: &[("date", "a date in 'DD.MM' format (example 02.11)")],
            handler: birthdays_by_date,
        },
    );
}

fn birthdays(ctx: &mut Context<'_>, _: &[String]) -> Result<Flow> {
    let lines: Vec<String> = ctx
        .book
        .contacts
        .birthdays_per_week(ctx.today)
        .into_iter()
        .map(|(day, contacts)| {
            let names: Vec<&str> = contacts.iter().map(|c| c.name()).collect();
            format!("{}: {}", weekday_name(day), names.join(", "))
        })
        .collect();
    Ok(Flow::Continue(CmdMessage::info(lines.join("\n"))))
}

fn birthdays_in_days(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [raw] = exact_args(ctx, args)?;
    let days: i64 = raw
        .parse()
        .ok()
        .filter(|d| *d >= 0)
        .ok_or_else(|| AssistantError::validation("Invalid input. Please provide a valid number of days."))?;

    let found = ctx.book.contacts.birthdays_in_days(days, ctx.today);
    if found.is_empty() {
        return Ok(Flow::Continue(CmdMessage::info(format!(
            "No birthdays in {} days",
            days
        ))));
    }

    let mut out = format!("List of users with birthday in {} days:", days);
    for contact in found {
        if let Some(birthday) = contact.birthday {
            out.push_str(&format!("\n{} date born {}", contact.name(), birthday));
        }
    }
    Ok(Flow::Continue(CmdMessage::info(out)))
}

/// Parses `DD.MM` into a (day, month) pair that exists on some calendar.
fn parse_day_month(raw: &str) -> Result<(u32, u32)> {
    NaiveDate::parse_from_str(&format!("{}.{}", raw, LEAP_YEAR), "%d.%m.%Y")
        .map(|date| (date.day(), date.month()))
        .map_err(|_| {
            AssistantError::validation("Invalid date format. Please provide a date in 'DD.MM' format.")
        })
}

fn birthdays_by_date(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [raw] = exact_args(ctx, args)?;
    let (day, month) = parse_day_month(raw)?;
    let label = format!("{:02}.{:02}", day, month);

    let found = ctx.book.contacts.birthdays_on_date(day, month);
    if found.is_empty() {
        return Ok(Flow::Continue(CmdMessage::info(format!(
            "No contacts with birthday on {}.",
            label
        ))));
    }

    let mut out = format!("List of contacts with birthday on {}:", label);
    for contact in found {
        if let Some(birthday) = contact.birthday {
            out.push_str(&format!(
                "\n Contact : {} date born : {}",
                contact.name(),
                birthday
            ));
        }
    }
    Ok(Flow::Continue(CmdMessage::info(out)))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{run, text, ScriptedPrompt};
    use super::*;
    use crate::book::Book;
    use crate::store::memory::fixtures::BookFixture;

    fn exec(book: &mut Book, name: &str, args: &[&str]) -> Result<String> {
        run(book, &mut ScriptedPrompt::default(), name, args).map(text)
    }

    // the test "today" is Wednesday 2025-06-04
    fn book() -> Book {
        BookFixture::new()
            .with_birthday("Sat", "07.06.1990")
            .with_birthday("Thu", "05.06.1985")
            .with_birthday("Fri", "06.06.1992")
            .with_birthday("Leap", "29.02.2000")
            .with_birthday("Far", "20.08.1990")
            .book
    }

    #[test]
    fn weekly_listing_has_five_days() {
        let mut book = book();
        let out = exec(&mut book, "birthdays", &[]).unwrap();
        assert_eq!(
            out,
            "Monday: Sat\nTuesday: \nWednesday: \nThursday: Thu\nFriday: Fri"
        );
    }

    #[test]
    fn in_days_matches_exactly() {
        let mut book = book();
        assert_eq!(
            exec(&mut book, "birthdays-in-days", &["1"]).unwrap(),
            "List of users with birthday in 1 days:\nThu date born 05.06.1985"
        );
        assert_eq!(
            exec(&mut book, "birthdays-in-days", &["2"]).unwrap(),
            "List of users with birthday in 2 days:\nFri date born 06.06.1992"
        );
        assert_eq!(
            exec(&mut book, "birthdays-in-days", &["4"]).unwrap(),
            "No birthdays in 4 days"
        );
        for bad in ["x", "-3"] {
            assert!(matches!(
                exec(&mut book, "birthdays-in-days", &[bad]),
                Err(AssistantError::Validation(_))
            ));
        }
    }

    #[test]
    fn by_date_ignores_year() {
        let mut book = book();
        assert_eq!(
            exec(&mut book, "birthdays-by-date", &["29.02"]).unwrap(),
            "List of contacts with birthday on 29.02:\n Contact : Leap date born : 29.02.2000"
        );
        assert_eq!(
            exec(&mut book, "birthdays-by-date", &["01.01"]).unwrap(),
            "No contacts with birthday on 01.01."
        );
        assert!(matches!(
            exec(&mut book, "birthdays-by-date", &["31.02"]),
            Err(AssistantError::Validation(_))
        ));
        assert!(matches!(
            exec(&mut book, "birthdays-by-date", &[]),
            Err(AssistantError::Syntax(_))
        ));
    }

    #[test]
    fn parse_day_month_accepts_valid_pairs() {
        assert_eq!(parse_day_month("02.11").unwrap(), (2, 11));
        assert!(parse_day_month("32.01").is_err());
        assert!(parse_day_month("0211").is_err());
    }
}
