//! Application assembly and argument dispatch.
//!
//! [`AppBuilder`] collects configuration and commands; [`Dispatcher`] owns the
//! result and routes one token vector (or an interactive session) to the
//! matching command. Everything reaching the crash boundary is reported
//! through a single `on_crash` handler and never escapes `execute`.

mod interactive;

use std::any::Any;
use std::cell::RefCell;
use std::error::Error as _;
use std::panic::{self, AssertUnwindSafe};

use crate::command::help::{render_command_help, render_global_help};
use crate::command::{Command, CommandBuilder, CommandRegistry, Invocation};
use crate::config::AppConfig;
use crate::error::{Crash, DuplicateCommandError};
use crate::parser::{ArgParser, ParseResult};
use crate::tui::input::{LineSource, StdinLineReader};
use crate::tui::settings;
use crate::tui::style::Tone;
use crate::tui::terminal::{CrosstermTerminal, TerminalProbe};
use crate::tui::Renderer;
use crate::ui::render::{render_block, RenderSink};

/// Callback invoked for every crash that reaches a boundary.
pub type CrashHandler = Box<dyn Fn(&Crash, &dyn RenderSink)>;

/// What one call to [`Dispatcher::execute`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    GlobalHelp,
    CommandHelp(String),
    Version,
    Executed(String),
    CommandNotFound(String),
    InteractiveFinished,
    Crashed,
}

impl DispatchOutcome {
    /// Conventional process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandNotFound(_) | Self::Crashed => 1,
            _ => 0,
        }
    }
}

/// Configuration-phase builder for a [`Dispatcher`].
pub struct AppBuilder {
    config: AppConfig,
    registry: CommandRegistry,
    registration_errors: Vec<DuplicateCommandError>,
    on_crash: Option<CrashHandler>,
    sink: Option<Box<dyn RenderSink>>,
    input: Option<Box<dyn LineSource>>,
    terminal: Option<Box<dyn TerminalProbe>>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            registry: CommandRegistry::new(),
            registration_errors: Vec::new(),
            on_crash: None,
            sink: None,
            input: None,
            terminal: None,
        }
    }

    /// Adjust the configuration in place.
    pub fn configure<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        configure(&mut self.config);
        self
    }

    /// Replace the configuration wholesale, e.g. with one loaded from disk.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a command.
    ///
    /// A duplicate name keeps the first registration; the error is reported
    /// through the crash handler when the dispatcher first runs.
    pub fn command<F>(mut self, name: &str, description: &str, configure: F) -> Self
    where
        F: FnOnce(&mut CommandBuilder),
    {
        if let Err(err) = self.registry.register(name, description, configure) {
            tracing::warn!(command = %err.name, "duplicate command registration");
            self.registration_errors.push(err);
        }
        self
    }

    /// Replace the default crash report.
    pub fn on_crash<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Crash, &dyn RenderSink) + 'static,
    {
        self.on_crash = Some(Box::new(handler));
        self
    }

    pub fn sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn input(mut self, input: impl LineSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn terminal(mut self, terminal: impl TerminalProbe + 'static) -> Self {
        self.terminal = Some(Box::new(terminal));
        self
    }

    /// Finish configuration. Unset collaborators fall back to the terminal.
    pub fn build(self) -> Dispatcher {
        let config = self.config;
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(Renderer::new(config.color, config.colors)));
        let input = self
            .input
            .unwrap_or_else(|| Box::new(StdinLineReader::new()));
        let terminal = self
            .terminal
            .unwrap_or_else(|| Box::new(CrosstermTerminal));
        Dispatcher {
            config,
            registry: self.registry,
            sink,
            input: RefCell::new(input),
            terminal,
            on_crash: self.on_crash,
            registration_errors: RefCell::new(self.registration_errors),
        }
    }
}

/// Routes token vectors to registered commands.
pub struct Dispatcher {
    config: AppConfig,
    registry: CommandRegistry,
    sink: Box<dyn RenderSink>,
    input: RefCell<Box<dyn LineSource>>,
    terminal: Box<dyn TerminalProbe>,
    on_crash: Option<CrashHandler>,
    registration_errors: RefCell<Vec<DuplicateCommandError>>,
}

impl Dispatcher {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatch one process argument vector.
    ///
    /// No tokens with interactive mode enabled starts the read loop; anything
    /// else is processed once. Never panics and never exits the process.
    pub fn execute<I, S>(&self, tokens: I) -> DispatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|token| token.as_ref().to_string())
            .collect();

        let pending: Vec<_> = self.registration_errors.borrow_mut().drain(..).collect();
        for err in pending {
            self.report(&Crash::Registration(err));
        }

        let result = guard(|| {
            if tokens.is_empty() && self.config.interactive.enabled {
                tracing::debug!("no arguments; entering interactive mode");
                interactive::run(self)
            } else {
                self.process_arguments(&tokens)
            }
        });
        match result {
            Ok(outcome) => outcome,
            Err(crash) => {
                self.report(&crash);
                DispatchOutcome::Crashed
            }
        }
    }

    /// Process one token vector without a crash boundary of its own.
    ///
    /// Action failures come back as `Err`; panics inside the action are
    /// converted to [`Crash::Panic`].
    pub fn process_arguments<S: AsRef<str>>(&self, tokens: &[S]) -> Result<DispatchOutcome, Crash> {
        let args = ArgParser::parse(tokens);
        let first = args.command_name();

        if first.is_some_and(is_help_word) {
            self.print_global_help();
            return Ok(DispatchOutcome::GlobalHelp);
        }

        let command = first.and_then(|name| self.registry.find(name));
        tracing::debug!(
            requested = first.unwrap_or_default(),
            resolved = command.is_some(),
            "resolving command"
        );

        if args.flag("version") {
            self.sink.tinted(&self.config.version_line(), Tone::Success);
            return Ok(DispatchOutcome::Version);
        }

        if let Some(command) = command {
            if args.flag("help") || args.flag("h") {
                render_block(self.sink.as_ref(), &render_command_help(command));
                return Ok(DispatchOutcome::CommandHelp(command.name().to_string()));
            }
            return self.run_command(command, &args);
        }

        if args.flag("help") || args.flag("h") {
            self.print_global_help();
            return Ok(DispatchOutcome::GlobalHelp);
        }

        let Some(name) = first else {
            self.print_global_help();
            return Ok(DispatchOutcome::GlobalHelp);
        };

        self.sink.error(&format!("Command not found: '{name}'"));
        if self.config.show_usage_on_error {
            self.print_global_help();
        }
        Ok(DispatchOutcome::CommandNotFound(name.to_string()))
    }

    fn run_command(&self, command: &Command, args: &ParseResult) -> Result<DispatchOutcome, Crash> {
        let name = command.name();
        let mut invocation = Invocation::new(
            command,
            args,
            self.sink.as_ref(),
            &self.input,
            self.terminal.as_ref(),
        );
        tracing::debug!(command = name, "executing command");
        match panic::catch_unwind(AssertUnwindSafe(|| command.execute(&mut invocation))) {
            Ok(Ok(())) => Ok(DispatchOutcome::Executed(name.to_string())),
            Ok(Err(source)) => Err(Crash::Action {
                command: name.to_string(),
                source,
            }),
            Err(payload) => Err(Crash::Panic {
                command: Some(name.to_string()),
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    fn print_global_help(&self) {
        render_block(
            self.sink.as_ref(),
            &render_global_help(&self.config, &self.registry),
        );
    }

    /// Hand a crash to the configured handler, or print the default report.
    fn report(&self, crash: &Crash) {
        tracing::error!(
            command = crash.command().unwrap_or_default(),
            error = %crash,
            cause = ?crash.source().map(ToString::to_string),
            "command crashed"
        );
        match &self.on_crash {
            Some(handler) => {
                if panic::catch_unwind(AssertUnwindSafe(|| handler(crash, self.sink.as_ref())))
                    .is_err()
                {
                    tracing::error!("crash handler panicked");
                }
            }
            None => default_crash_report(crash, self.sink.as_ref()),
        }
    }
}

/// Print `crash` and its source chain.
pub fn default_crash_report(crash: &Crash, sink: &dyn RenderSink) {
    sink.error(&crash.to_string());
    let mut source = crash.source();
    while let Some(err) = source {
        sink.detail(&format!("{} {err}", settings::LABEL_CAUSE));
        source = err.source();
    }
}

/// Run `body`, turning a panic into [`Crash::Panic`].
fn guard<F>(body: F) -> Result<DispatchOutcome, Crash>
where
    F: FnOnce() -> Result<DispatchOutcome, Crash>,
{
    panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        Err(Crash::Panic {
            command: None,
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn is_help_word(token: &str) -> bool {
    ["help", "--help", "-h"]
        .iter()
        .any(|word| token.eq_ignore_ascii_case(word))
}
