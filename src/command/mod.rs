//! Commands: the registered, invocable units of behavior.
//!
//! Each phase has its own type. [`CommandBuilder`] is only available while a
//! command is being registered, [`Command`] is the immutable registered
//! entity, and [`Invocation`] is the context handed to an action when the
//! command runs.

pub mod help;
mod registry;

use std::cell::RefCell;
use std::fmt;
use std::io;

use crate::error::ActionResult;
use crate::parser::ParseResult;
use crate::tui::input::{self, LineSource};
use crate::tui::style::{State, Tone};
use crate::tui::terminal::TerminalProbe;
use crate::ui::render::RenderSink;

pub use registry::CommandRegistry;

/// Callback run when a command is invoked.
pub type Action = Box<dyn Fn(&mut Invocation<'_>) -> ActionResult>;

/// Documented positional argument of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: String,
    pub description: String,
}

/// Documented flag of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: String,
    pub description: String,
}

/// A registered command.
///
/// Declared arguments and flags are documentation: they feed help output
/// and [`Command::is_registered_param_or_arg`] but are not enforced when
/// parsing.
pub struct Command {
    name: String,
    description: String,
    arguments: Vec<ArgumentSpec>,
    flags: Vec<FlagSpec>,
    action: Option<Action>,
}

impl Command {
    fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            arguments: Vec::new(),
            flags: Vec::new(),
            action: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    /// Whether `name` is a declared argument or flag of this command.
    pub fn is_registered_param_or_arg(&self, name: &str) -> bool {
        self.arguments.iter().any(|arg| arg.name == name)
            || self.flags.iter().any(|flag| flag.name == name)
    }

    /// Run the action; commands without one succeed without doing anything.
    pub fn execute(&self, invocation: &mut Invocation<'_>) -> ActionResult {
        match &self.action {
            Some(action) => action(invocation),
            None => Ok(()),
        }
    }

    /// Rendered help text for this command.
    pub fn help(&self) -> String {
        help::render_command_help(self)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("flags", &self.flags)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Configures a command while it is being registered.
pub struct CommandBuilder {
    command: Command,
}

impl CommandBuilder {
    fn new(name: String, description: String) -> Self {
        Self {
            command: Command::new(name, description),
        }
    }

    fn finish(self) -> Command {
        self.command
    }

    /// Name the command is being registered under.
    pub fn name(&self) -> &str {
        &self.command.name
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.command.description = description.into();
        self
    }

    /// Declare a positional argument, in order.
    pub fn argument(&mut self, name: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.command.arguments.push(ArgumentSpec {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    pub fn flag(&mut self, name: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.command.flags.push(FlagSpec {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Set the action, replacing any earlier one.
    pub fn action<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&mut Invocation<'_>) -> ActionResult + 'static,
    {
        self.command.action = Some(Box::new(action));
        self
    }
}

/// Adapt a callback that only needs the parsed arguments into an action.
pub fn with_args<F>(callback: F) -> impl Fn(&mut Invocation<'_>) -> ActionResult
where
    F: Fn(&ParseResult) -> ActionResult,
{
    move |invocation| callback(invocation.args())
}

/// Context handed to a command action for one invocation.
pub struct Invocation<'a> {
    command: &'a Command,
    args: &'a ParseResult,
    sink: &'a dyn RenderSink,
    input: &'a RefCell<Box<dyn LineSource>>,
    terminal: &'a dyn TerminalProbe,
}

impl<'a> Invocation<'a> {
    pub fn new(
        command: &'a Command,
        args: &'a ParseResult,
        sink: &'a dyn RenderSink,
        input: &'a RefCell<Box<dyn LineSource>>,
        terminal: &'a dyn TerminalProbe,
    ) -> Self {
        Self {
            command,
            args,
            sink,
            input,
            terminal,
        }
    }

    pub fn command(&self) -> &Command {
        self.command
    }

    pub fn args(&self) -> &ParseResult {
        self.args
    }

    pub fn flag(&self, name: &str) -> bool {
        self.args.flag(name)
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.args.option(name)
    }

    pub fn positionals(&self) -> &[String] {
        self.args.positionals()
    }

    /// Value of a declared argument.
    ///
    /// An option with the argument's name wins; otherwise the positional at
    /// the argument's declared index is used (position 0 is the command).
    pub fn argument(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.args.option(name) {
            return Some(value);
        }
        let index = self
            .command
            .arguments
            .iter()
            .position(|arg| arg.name == name)?;
        self.args.positional(index + 1)
    }

    pub fn sink(&self) -> &dyn RenderSink {
        self.sink
    }

    pub fn terminal(&self) -> &dyn TerminalProbe {
        self.terminal
    }

    pub fn println(&self, text: &str) {
        self.sink.line(text);
    }

    pub fn tinted(&self, text: &str, tone: Tone) {
        self.sink.tinted(text, tone);
    }

    /// Print a status line colored for `state`.
    pub fn status(&self, state: State, text: &str) {
        self.sink.tinted(text, state.into());
    }

    /// Prompt with `label` and read one line; `None` once input is closed.
    pub fn read_line(&self, label: &str) -> io::Result<Option<String>> {
        let mut source = self.input.borrow_mut();
        input::read_input(&mut **source, self.sink, label)
    }

    pub fn confirm(&self, question: &str) -> io::Result<bool> {
        let mut source = self.input.borrow_mut();
        input::confirm(&mut **source, self.sink, question)
    }

    /// Numbered menu; returns the chosen index into `options`.
    pub fn select(&self, options: &[String]) -> io::Result<usize> {
        let mut source = self.input.borrow_mut();
        input::select(&mut **source, self.sink, options)
    }

    pub fn read_password(&self, label: &str) -> io::Result<String> {
        input::read_password(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ArgParser;
    use crate::testsupport::{CaptureSink, FakeTerminal, ScriptedInput};

    fn greet() -> Command {
        let mut builder = CommandBuilder::new("greet".to_string(), String::new());
        builder
            .description("Greets the user")
            .argument("name", "The name to greet")
            .argument("title", "Honorific")
            .flag("shout", "Shout the greeting")
            .action(|inv| {
                let name = inv.argument("name").unwrap_or("stranger");
                let line = format!("Hello, {name}");
                if inv.flag("shout") {
                    inv.println(&line.to_uppercase());
                } else {
                    inv.println(&line);
                }
                Ok(())
            });
        builder.finish()
    }

    fn run(command: &Command, tokens: &[&str], lines: &[&str]) -> (ActionResult, Vec<String>) {
        let sink = CaptureSink::default();
        let input: RefCell<Box<dyn LineSource>> =
            RefCell::new(Box::new(ScriptedInput::new(lines.iter().copied())));
        let terminal = FakeTerminal::default();
        let args = ArgParser::parse(tokens);
        let result = {
            let mut invocation = Invocation::new(command, &args, &sink, &input, &terminal);
            command.execute(&mut invocation)
        };
        (result, sink.lines())
    }

    #[test]
    fn declared_names_are_recognized() {
        let command = greet();
        assert!(command.is_registered_param_or_arg("name"));
        assert!(command.is_registered_param_or_arg("shout"));
        assert!(!command.is_registered_param_or_arg("help"));
    }

    #[test]
    fn argument_reads_option_then_declared_position() {
        let command = greet();
        let (_, lines) = run(&command, &["greet", "Alice"], &[]);
        assert_eq!(lines, vec!["Hello, Alice"]);

        let (_, lines) = run(&command, &["greet", "--name", "Bob", "--shout"], &[]);
        assert_eq!(lines, vec!["HELLO, BOB"]);

        let (_, lines) = run(&command, &["greet"], &[]);
        assert_eq!(lines, vec!["Hello, stranger"]);
    }

    #[test]
    fn command_without_action_is_a_no_op() {
        let command = CommandBuilder::new("noop".to_string(), String::new()).finish();
        let (result, lines) = run(&command, &["noop"], &[]);
        assert!(result.is_ok());
        assert!(lines.is_empty());
    }

    #[test]
    fn with_args_adapts_parse_only_callbacks() {
        let mut builder = CommandBuilder::new("count".to_string(), String::new());
        builder.action(with_args(|args| {
            if args.positionals().len() > 2 {
                return Err("too many".into());
            }
            Ok(())
        }));
        let command = builder.finish();
        assert!(run(&command, &["count", "a"], &[]).0.is_ok());
        let err = run(&command, &["count", "a", "b"], &[]).0.unwrap_err();
        assert_eq!(err.to_string(), "too many");
    }

    #[test]
    fn actions_can_read_input_through_the_invocation() {
        let mut builder = CommandBuilder::new("ask".to_string(), String::new());
        builder.action(|inv| {
            let answer = inv.read_line("Enter your name")?.unwrap_or_default();
            if inv.confirm("Sure?")? {
                inv.status(State::Success, &format!("ok {answer}"));
            }
            Ok(())
        });
        let command = builder.finish();
        let (result, lines) = run(&command, &["ask"], &["Zoe", "y"]);
        assert!(result.is_ok());
        assert_eq!(
            lines,
            vec!["prompt: Enter your name", "prompt: Sure? [y/N]", "ok Zoe"]
        );
    }

    #[test]
    fn debug_output_omits_the_action() {
        let rendered = format!("{:?}", greet());
        assert!(rendered.contains("has_action: true"));
    }
}
