use super::{CmdMessage, Command, Context, Flow, Registry};
use crate::error::Result;

const NAME_COLUMN: usize = 20;

pub const HELLO: Command = Command {
    summary: "Just greet yourself",
    usage: "hello",
    arguments: &[],
    handler: hello,
};

pub const HELP: Command = Command {
    summary: "Show info about all commands, or one command in detail",
    usage: "help [command]",
    arguments: &[("command", "name of a command (optional)")],
    handler: help,
};

pub const EXIT: Command = Command {
    summary: "Exit from assistant",
    usage: "exit",
    arguments: &[],
    handler: exit,
};

pub fn register(registry: &mut Registry) {
    registry.register("hello", HELLO);
    registry.register("help", HELP);
    registry.register("exit", EXIT);
    registry.register("close", EXIT);
}

fn hello(_: &mut Context<'_>, _: &[String]) -> Result<Flow> {
    Ok(Flow::Continue(CmdMessage::info("How can I help you?")))
}

fn help(ctx: &mut Context<'_>, args: &[String]) -> Result<Flow> {
    if let Some(name) = args.first() {
        let command = ctx.registry.get(&name.to_lowercase())?;
        return Ok(Flow::Continue(CmdMessage::info(command.doc())));
    }

    let lines: Vec<String> = ctx
        .registry
        .iter()
        .map(|(name, command)| format!("{:<width$}: {}", name, command.summary, width = NAME_COLUMN))
        .collect();
    Ok(Flow::Continue(CmdMessage::info(lines.join("\n"))))
}

fn exit(_: &mut Context<'_>, _: &[String]) -> Result<Flow> {
    Ok(Flow::Exit(CmdMessage::info("Good bye!")))
}
