use super::{exact_args, first_arg, CmdMessage, Command, Context, Flow, Registry};
use crate::error::Result;
use crate::model::{Contact, Name};

const NAME_ARG: (&str, &str) = ("contact_name", "name of contact");
const PHONE_HINT: &str = "phone number, 10 digits (example 0991911155)";

pub fn register(registry: &mut Registry) {
    registry.register(
        "add",
        Command {
            summary: "Create new contact with a phone, or add a phone to an existing one",
            usage: "add [contact_name] [phone]",
            arguments: &[NAME_ARG, ("phone", PHONE_HINT)],
            handler: add,
        },
    );
    registry.register(
        "change-phone",
        Command {
            summary: "Change contact phone",
            usage: "change-phone [contact_name] [old_phone] [new_phone]",
            arguments: &[
                NAME_ARG,
                ("old_phone", "contact phone number"),
                ("new_phone", PHONE_HINT),
            ],
            handler: change_phone,
        },
    );
    registry.register(
        "remove-phone",
        Command {
            summary: "Remove a phone from a contact",
            usage: "remove-phone [contact_name] [phone]",
            arguments: &[NAME_ARG, ("phone", "contact phone number")],
            handler: remove_phone,
        },
    );
    registry.register(
        "phone",
        Command {
            summary: "Show contact phones",
            usage: "phone [contact_name]",
            arguments: &[NAME_ARG],
            handler: phone,
        },
    );
    registry.register(
        "add-birthday",
        Command {
            summary: "Add contact birthday",
            usage: "add-birthday [contact_name] [birthdate]",
            arguments: &[NAME_ARG, ("birthdate", "contact birthdate (example 19.07.1999)")],
            handler: add_birthday,
        },
    );
    registry.register(
        "show-birthday",
        Command {
            summary: "Show contact birthday",
            usage: "show-birthday [contact_name]",
            arguments: &[NAME_ARG],
            handler: show_birthday,
        },
    );
    registry.register(
        "add-email",
        Command {
            summary: "Add contact email",
            usage: "add-email [contact_name] [email]",
            arguments: &[NAME_ARG, ("email", "valid email address")],
            handler: add_email,
        },
    );
    registry.register(
        "add-ad",
        Command {
            summary: "Add contact address",
            usage: "add-ad [contact_name] [address]",
            arguments: &[NAME_ARG, ("address", "contact address, e.g. \"221B Baker Street\"")],
            handler: add_address,
        },
    );
    registry.register(
        "all-contacts",
        Command {
            summary: "Show all contacts",
            usage: "all-contacts",
            arguments: &[],
            handler: all_contacts,
        },
    );
    registry.register(
        "del-contact",
        Command {
            summary: "Delete contact",
            usage: "del-contact [contact_name]",
            arguments: &[NAME_ARG],
            handler: delete_contact,
        },
    );
    registry.register(
        "search-contacts",
        Command {
            summary: "Search contacts on all the fields",
            usage: "search-contacts [word]",
            arguments: &[("word", "search word min 2 characters length")],
            handler: search_contacts,
        },
    );
}

fn done(message: impl Into<String>) -> Result<Flow> {
    Ok(Flow::Continue(CmdMessage::success(message)))
}

fn reply(message: impl Into<String>) -> Result<Flow> {
    Ok(Flow::Continue(CmdMessage::info(message)))
}

fn render(contacts: &[&Contact]) -> String {
    contacts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [name, phone] = exact_args(ctx, args)?;
    match ctx.book.contacts.find_mut(name) {
        Ok(contact) => contact.add_phone(phone)?,
        Err(_) => {
            let mut contact = Contact::new(Name::new(name)?);
            contact.add_phone(phone)?;
            ctx.book.contacts.add(contact);
        }
    }
    done("Contact added.")
}

fn change_phone(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [name, old, new] = exact_args(ctx, args)?;
    ctx.book.contacts.find_mut(name)?.edit_phone(old, new)?;
    done("Contact changed.")
}

fn remove_phone(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [name, phone] = exact_args(ctx, args)?;
    ctx.book.contacts.find_mut(name)?.remove_phone(phone)?;
    done("Phone removed.")
}

fn phone(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let name = first_arg(ctx, args)?;
    reply(ctx.book.contacts.find(name)?.phones_line())
}

fn add_birthday(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [name, birthday] = exact_args(ctx, args)?;
    ctx.book.contacts.find_mut(name)?.add_birthday(birthday)?;
    done("Birthday added.")
}

fn show_birthday(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let name = first_arg(ctx, args)?;
    match ctx.book.contacts.find(name)?.birthday {
        Some(birthday) => reply(birthday.to_string()),
        None => reply(format!("No birthday set for {}", name)),
    }
}

fn add_email(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [name, email] = exact_args(ctx, args)?;
    ctx.book.contacts.find_mut(name)?.add_email(email)?;
    done("Email added.")
}

fn add_address(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let Some((name, words)) = args.split_first() else {
        return Err(ctx.syntax_error());
    };
    let address = words.join(" ");
    if address.trim().is_empty() {
        return Err(ctx.syntax_error());
    }
    ctx.book.contacts.find_mut(name)?.add_address(address.trim())?;
    done(format!("Address added to contact {}", name))
}

fn all_contacts(ctx: &mut Context<'_>, _: &[String]) -> Result<Flow> {
    if ctx.book.contacts.is_empty() {
        return reply("No contacts yet.");
    }
    let contacts: Vec<&Contact> = ctx.book.contacts.iter().collect();
    reply(render(&contacts))
}

fn delete_contact(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let name = first_arg(ctx, args)?;
    ctx.book.contacts.delete(name)?;
    done(format!("Contact {} removed from Address Book!", name))
}

fn search_contacts(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [word] = exact_args(ctx, args)?;
    let found = ctx.book.contacts.search(word)?;
    if found.is_empty() {
        return reply("Nothing found.");
    }
    reply(render(&found))
}
