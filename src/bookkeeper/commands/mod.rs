//! # Command Registry
//!
//! Every user command is a plain function with the [`Handler`] signature,
//! described by a [`Command`] (help text + handler) and registered under one
//! or more names in a [`Registry`]. The registry is an ordered map filled by
//! an explicit registration pass ([`builtin_registry`]); registration order is
//! the order `help` lists commands in.
//!
//! Handlers are glue: check arity, call into [`crate::book`], format a
//! [`CmdMessage`]. They return domain errors as `Err` and leave rendering to
//! the dispatcher. Ending the session is not an error either: the `exit`
//! handler returns [`Flow::Exit`].

use crate::book::Book;
use crate::error::{AssistantError, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;

pub mod birthdays;
pub mod contacts;
pub mod general;
pub mod notes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What the session loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(CmdMessage),
    Exit(CmdMessage),
}

impl Flow {
    pub fn message(&self) -> &CmdMessage {
        match self {
            Flow::Continue(m) | Flow::Exit(m) => m,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Flow::Exit(_))
    }
}

/// Source of follow-up input for commands that ask for more text.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub book: &'a mut Book,
    pub prompt: &'a mut dyn Prompt,
    pub today: NaiveDate,
    pub registry: &'a Registry,
    pub command: &'a Command,
}

impl Context<'_> {
    /// Wrong arity/shape for the running command.
    pub fn syntax_error(&self) -> AssistantError {
        AssistantError::Syntax(self.command.usage.to_string())
    }
}

pub type Handler = fn(&mut Context<'_>, &[String]) -> Result<Flow>;

#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// One line shown by `help`
    pub summary: &'static str,
    /// Expected shape, shown on syntax errors
    pub usage: &'static str,
    /// Argument descriptions shown by `help <command>`
    pub arguments: &'static [(&'static str, &'static str)],
    pub handler: Handler,
}

impl Command {
    pub fn doc(&self) -> String {
        let mut doc = format!("{}\nusage:\n    {}", self.summary, self.usage);
        if !self.arguments.is_empty() {
            doc.push_str("\narguments:");
            for (name, description) in self.arguments {
                doc.push_str(&format!("\n    {} - {}", name, description));
            }
        }
        doc
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    commands: IndexMap<String, Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `command` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: &str, command: Command) {
        if self.commands.insert(name.to_string(), command).is_some() {
            log::debug!("command '{}' re-registered", name);
        }
    }

    pub fn get(&self, name: &str) -> Result<&Command> {
        self.commands
            .get(name)
            .ok_or_else(|| AssistantError::InvalidCommand(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Command)> {
        self.commands.iter().map(|(name, cmd)| (name.as_str(), cmd))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// The full command set, in help order.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    general::register(&mut registry);
    contacts::register(&mut registry);
    birthdays::register(&mut registry);
    notes::register(&mut registry);
    registry
}

/// Matches `args` against an exact arity, or reports the command's usage.
pub fn exact_args<'a, const N: usize>(ctx: &Context<'_>, args: &'a [String]) -> Result<[&'a str; N]> {
    if args.len() != N {
        return Err(ctx.syntax_error());
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

/// First argument, or the command's usage when there is none.
pub fn first_arg<'a>(ctx: &Context<'_>, args: &'a [String]) -> Result<&'a str> {
    args.first().map(String::as_str).ok_or_else(|| ctx.syntax_error())
}
