use super::{exact_args, first_arg, CmdMessage, Command, Context, Flow, Registry};
use crate::error::Result;
use crate::model::fields::strip_tag_marker;
use crate::model::{Note, NoteText};

const ID_ARG: (&str, &str) = ("note-id", "note identifier");
const TAG_MODE: &str = "-tag";
const ALL_TAGS: &str = "-all";

pub fn register(registry: &mut Registry) {
    registry.register(
        "add-note",
        Command {
            summary: "Add note to the notebook",
            usage: "add-note",
            arguments: &[],
            handler: add_note,
        },
    );
    registry.register(
        "edit-note",
        Command {
            summary: "Edit existing note",
            usage: "edit-note [note-id]",
            arguments: &[ID_ARG],
            handler: edit_note,
        },
    );
    registry.register(
        "delete-note",
        Command {
            summary: "Delete existing note",
            usage: "delete-note [note-id]",
            arguments: &[ID_ARG],
            handler: delete_note,
        },
    );
    registry.register(
        "all-notes",
        Command {
            summary: "Show list of all notes",
            usage: "all-notes",
            arguments: &[],
            handler: all_notes,
        },
    );
    registry.register(
        "note",
        Command {
            summary: "Show note",
            usage: "note [note-id]",
            arguments: &[ID_ARG],
            handler: show_note,
        },
    );
    registry.register(
        "search-notes",
        Command {
            summary: "Search notes by text or tag",
            usage: "search-notes [-tag] [search-term]",
            arguments: &[
                ("-tag", "search by tag mode (optional)"),
                ("search-term", "text/tag to search, several terms match any"),
            ],
            handler: search_notes,
        },
    );
    registry.register(
        "tag-note",
        Command {
            summary: "Add tag to note",
            usage: "tag-note [note-id] [tag]",
            arguments: &[("note-id", "updated note identifier"), ("tag", "tag to add")],
            handler: tag_note,
        },
    );
    registry.register(
        "untag-note",
        Command {
            summary: "Remove tag(s) from note",
            usage: "untag-note [note-id] [-all|tag-name]",
            arguments: &[
                ("note-id", "note to remove tag(s) from"),
                ("-all", "remove all tags from note"),
                ("tag-name", "remove tag by name"),
            ],
            handler: untag_note,
        },
    );
}

fn done(message: impl Into<String>) -> Result<Flow> {
    Ok(Flow::Continue(CmdMessage::success(message)))
}

fn reply(message: impl Into<String>) -> Result<Flow> {
    Ok(Flow::Continue(CmdMessage::info(message)))
}

fn render(notes: &[&Note]) -> String {
    notes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_note(ctx: &mut Context<'_>, _: &[String]) -> Result<Flow> {
    let raw = ctx.prompt.ask("Enter note text: ")?;
    let text = NoteText::new(raw.trim())?;
    let id = ctx.book.notes.add(text)?.id;
    done(format!("Note [{}] created.", id))
}

fn edit_note(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let id = first_arg(ctx, args)?;
    // fail on a bad id before asking for text
    ctx.book.notes.find(id)?;
    let raw = ctx.prompt.ask("Enter new text: ")?;
    let note = ctx.book.notes.find_mut(id)?;
    note.set_text(raw.trim())?;
    done(format!("Note [{}] updated.", note.id))
}

fn delete_note(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let id = first_arg(ctx, args)?;
    let note = ctx.book.notes.delete(id)?;
    done(format!("Note [{}] deleted.", note.id))
}

fn all_notes(ctx: &mut Context<'_>, _: &[String]) -> Result<Flow> {
    if ctx.book.notes.is_empty() {
        return reply("No notes yet.");
    }
    let notes: Vec<&Note> = ctx.book.notes.iter().collect();
    reply(render(&notes))
}

fn show_note(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let id = first_arg(ctx, args)?;
    let note = ctx.book.notes.find(id)?;
    reply(format!(
        "id: {}\ntext: {}\ntags: {}",
        note.id,
        note.text,
        note.tags_line()
    ))
}

fn search_notes(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let found = match args.split_first() {
        None => return Err(ctx.syntax_error()),
        Some((mode, tags)) if mode == TAG_MODE => {
            if tags.is_empty() {
                return Err(ctx.syntax_error());
            }
            ctx.book.notes.search_by_tags(tags)
        }
        Some(_) => ctx.book.notes.search(args),
    };
    if found.is_empty() {
        return reply("Nothing found");
    }
    reply(render(&found))
}

fn tag_note(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [id, tag] = exact_args(ctx, args)?;
    let note = ctx.book.notes.find_mut(id)?;
    let note_id = note.id;
    let tag = note.add_tag(tag)?;
    done(format!("Tag #{} added to note {}", tag, note_id))
}

fn untag_note(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    let [id, tag] = exact_args(ctx, args)?;
    let note = ctx.book.notes.find_mut(id)?;
    if tag == ALL_TAGS {
        note.delete_all_tags();
        return done(format!("Deleted all tags from note {}", note.id));
    }
    note.delete_tag(tag)?;
    done(format!(
        "Tag #{} deleted from note {}",
        strip_tag_marker(tag),
        note.id
    ))
}
