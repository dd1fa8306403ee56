//! Turns an input line into a command call and every outcome into a message.
//!
//! Domain errors stop here: the caller always gets a [`Flow`]. An unknown
//! command name is answered with the closest registered names from
//! [`crate::suggest`].

use crate::book::Book;
use crate::commands::{builtin_registry, CmdMessage, Context, Flow, Prompt, Registry};
use crate::error::AssistantError;
use crate::suggest::suggest;
use chrono::NaiveDate;

/// Splits a line on whitespace into a lowercased command name and its
/// arguments. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?.to_lowercase();
    Some((name, parts.map(str::to_string).collect()))
}

pub struct Dispatcher {
    registry: Registry,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(builtin_registry())
    }
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn execute(
        &self,
        book: &mut Book,
        prompt: &mut dyn Prompt,
        today: NaiveDate,
        name: &str,
        args: &[String],
    ) -> Flow {
        let name = name.to_lowercase();
        log::debug!("dispatching '{}' with {} argument(s)", name, args.len());

        let result = self.registry.get(&name).and_then(|command| {
            let mut ctx = Context {
                book,
                prompt,
                today,
                registry: &self.registry,
                command,
            };
            (command.handler)(&mut ctx, args)
        });

        match result {
            Ok(flow) => flow,
            Err(AssistantError::InvalidCommand(unknown)) => {
                log::info!("unknown command '{}'", unknown);
                Flow::Continue(self.unknown_command(&unknown))
            }
            Err(e) => {
                if e.is_recoverable() {
                    log::debug!("'{}' failed: {}", name, e);
                } else {
                    log::warn!("'{}' failed: {}", name, e);
                }
                Flow::Continue(CmdMessage::error(e.to_string()))
            }
        }
    }

    /// Parses and runs one input line. Blank lines run nothing.
    pub fn execute_line(
        &self,
        book: &mut Book,
        prompt: &mut dyn Prompt,
        today: NaiveDate,
        line: &str,
    ) -> Option<Flow> {
        let (name, args) = parse_input(line)?;
        Some(self.execute(book, prompt, today, &name, &args))
    }

    fn unknown_command(&self, name: &str) -> CmdMessage {
        let mut message = AssistantError::InvalidCommand(name.to_string()).to_string();
        let guesses = suggest(name, self.registry.names());
        if !guesses.is_empty() {
            let quoted: Vec<String> = guesses.iter().map(|g| format!("'{}'", g)).collect();
            message.push_str(&format!("\n    did you mean {} ?", quoted.join(", ")));
        }
        CmdMessage::warning(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{today, ScriptedPrompt};
    use crate::commands::{Command, MessageLevel};
    use crate::error::Result;

    fn run_line(book: &mut Book, line: &str) -> Flow {
        Dispatcher::default()
            .execute_line(book, &mut ScriptedPrompt::default(), today(), line)
            .unwrap()
    }

    #[test]
    fn parse_splits_and_lowercases_the_name() {
        let (name, args) = parse_input("  ADD   John  0991911155 ").unwrap();
        assert_eq!(name, "add");
        assert_eq!(args, vec!["John", "0991911155"]);
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn command_names_are_case_insensitive() {
        let mut book = Book::new();
        let flow = run_line(&mut book, "Add John 0991911155");
        assert_eq!(flow.message().content, "Contact added.");
        assert_eq!(flow.message().level, MessageLevel::Success);
        assert!(book.contacts.find("John").is_ok());
    }

    #[test]
    fn domain_errors_become_error_messages() {
        let mut book = Book::new();
        let flow = run_line(&mut book, "phone Ghost");
        assert!(!flow.is_exit());
        assert_eq!(flow.message().level, MessageLevel::Error);
        assert_eq!(flow.message().content, "Contact is not found");
    }

    #[test]
    fn unknown_command_suggests_closest() {
        let mut book = Book::new();
        let flow = run_line(&mut book, "hlep");
        assert_eq!(flow.message().level, MessageLevel::Warning);
        assert_eq!(
            flow.message().content,
            "'hlep' is not a bot-helper command. See 'help'.\n    did you mean 'help' ?"
        );
    }

    #[test]
    fn unknown_command_without_suggestion() {
        let mut book = Book::new();
        let flow = run_line(&mut book, "xyzzy");
        assert_eq!(
            flow.message().content,
            "'xyzzy' is not a bot-helper command. See 'help'."
        );
    }

    #[test]
    fn tied_suggestions_are_comma_separated() {
        fn noop(_: &mut Context<'_>, _: &[String]) -> Result<Flow> {
            Ok(Flow::Continue(CmdMessage::info("")))
        }
        let command = Command {
            summary: "",
            usage: "",
            arguments: &[],
            handler: noop,
        };
        let mut registry = Registry::new();
        registry.register("hello", command);
        registry.register("help", command);
        let dispatcher = Dispatcher::new(registry);

        let flow = dispatcher
            .execute_line(&mut Book::new(), &mut ScriptedPrompt::default(), today(), "hel")
            .unwrap();
        assert!(flow
            .message()
            .content
            .ends_with("did you mean 'hello', 'help' ?"));
    }

    #[test]
    fn exit_is_a_flow_not_an_error() {
        let mut book = Book::new();
        let flow = run_line(&mut book, "close");
        assert!(flow.is_exit());
        assert_eq!(flow.message().content, "Good bye!");
    }

    #[test]
    fn failed_prompt_is_reported_and_session_continues() {
        let mut book = Book::new();
        let flow = run_line(&mut book, "add-note");
        assert!(!flow.is_exit());
        assert_eq!(flow.message().level, MessageLevel::Error);
        assert!(book.notes.is_empty());
    }
}
