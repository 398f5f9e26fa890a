//! Interactive read loop.

use super::{guard, DispatchOutcome, Dispatcher};
use crate::command::help::render_listing;
use crate::config::Banner;
use crate::error::Crash;
use crate::tui::settings;
use crate::tui::style::Tone;
use crate::ui::render::render_block;
use std::io;

/// Run the read loop until `exit`.
///
/// Each line runs behind its own crash boundary so a failing command never
/// ends the session. Input errors and end of input leave the loop as
/// [`Crash::Input`] without the farewell banner.
pub(super) fn run(dispatcher: &Dispatcher) -> Result<DispatchOutcome, Crash> {
    let config = &dispatcher.config;
    let sink = dispatcher.sink.as_ref();

    show_banner(dispatcher, config.interactive.greet.as_ref());
    sink.tinted(settings::INTERACTIVE_HINT, Tone::Info);

    loop {
        if config.show_prompt {
            sink.prompt(&config.name);
        }
        let line = dispatcher.input.borrow_mut().read_line()?;
        let Some(line) = line else {
            return Err(Crash::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before 'exit'",
            )));
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            render_block(sink, &render_listing(&dispatcher.registry));
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        tracing::debug!(?tokens, "interactive line");
        if let Err(crash) = guard(|| dispatcher.process_arguments(&tokens)) {
            dispatcher.report(&crash);
        }
    }

    show_banner(dispatcher, config.interactive.goodbye.as_ref());
    Ok(DispatchOutcome::InteractiveFinished)
}

fn show_banner(dispatcher: &Dispatcher, banner: Option<&Banner>) {
    if let Some(banner) = banner.filter(|banner| banner.show) {
        dispatcher
            .sink
            .colored(&banner.render(&dispatcher.config.name), banner.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{BrokenInput, CaptureSink, FakeTerminal, ScriptedInput};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dispatcher(sink: &CaptureSink, lines: &[&str]) -> (Dispatcher, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&calls);
        let dispatcher = Dispatcher::builder()
            .configure(|config| config.name = "mycli".to_string())
            .sink(sink.clone())
            .input(ScriptedInput::new(lines.iter().copied()))
            .terminal(FakeTerminal::default())
            .command("greet", "Greets the user", move |cmd| {
                cmd.action(move |inv| {
                    record.borrow_mut().push(inv.positionals().to_vec());
                    Ok(())
                });
            })
            .command("fail", "Always fails", |cmd| {
                cmd.action(|_| Err("broken".into()));
            })
            .build();
        (dispatcher, calls)
    }

    fn count(sink: &CaptureSink, needle: &str) -> usize {
        sink.lines().iter().filter(|line| line.contains(needle)).count()
    }

    #[test]
    fn runs_lines_until_exit_then_says_goodbye() {
        let sink = CaptureSink::default();
        let (dispatcher, calls) = dispatcher(&sink, &["greet Alice", "exit"]);
        let empty: [&str; 0] = [];

        assert_eq!(dispatcher.execute(empty), DispatchOutcome::InteractiveFinished);
        assert_eq!(calls.borrow().as_slice(), [vec!["greet", "Alice"]]);
        assert_eq!(count(&sink, "Goodbye!"), 1);

        let lines = sink.lines();
        assert_eq!(lines[0], "Welcome to mycli interactive mode!");
        assert_eq!(lines[1], settings::INTERACTIVE_HINT);
        assert_eq!(lines[2], "prompt: mycli");
    }

    #[test]
    fn failing_commands_do_not_end_the_session() {
        let sink = CaptureSink::default();
        let (dispatcher, calls) = dispatcher(&sink, &["fail", "greet  Bob ", "EXIT"]);
        let empty: [&str; 0] = [];

        assert_eq!(dispatcher.execute(empty), DispatchOutcome::InteractiveFinished);
        assert_eq!(count(&sink, "error executing command 'fail'"), 1);
        assert_eq!(count(&sink, "caused by: broken"), 1);
        assert_eq!(calls.borrow().as_slice(), [vec!["greet", "Bob"]]);
    }

    #[test]
    fn blank_lines_and_help_are_handled_in_place() {
        let sink = CaptureSink::default();
        let (dispatcher, calls) = dispatcher(&sink, &["", "   ", "Help", "exit"]);
        let empty: [&str; 0] = [];

        dispatcher.execute(empty);
        assert!(calls.borrow().is_empty());
        assert_eq!(count(&sink, "Available commands:"), 1);
        assert_eq!(count(&sink, "prompt: mycli"), 4);
    }

    #[test]
    fn unknown_commands_are_reported_and_loop_continues() {
        let sink = CaptureSink::default();
        let (dispatcher, calls) = dispatcher(&sink, &["nope", "greet", "exit"]);
        let empty: [&str; 0] = [];

        dispatcher.execute(empty);
        assert_eq!(count(&sink, "Command not found: 'nope'"), 1);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn end_of_input_crashes_without_farewell() {
        let sink = CaptureSink::default();
        let (dispatcher, _) = dispatcher(&sink, &["greet"]);
        let empty: [&str; 0] = [];

        assert_eq!(dispatcher.execute(empty), DispatchOutcome::Crashed);
        assert_eq!(count(&sink, "Goodbye!"), 0);
        assert_eq!(count(&sink, "input unavailable"), 1);
    }

    #[test]
    fn read_errors_reach_the_outer_boundary() {
        let sink = CaptureSink::default();
        let dispatcher = Dispatcher::builder()
            .sink(sink.clone())
            .input(BrokenInput)
            .terminal(FakeTerminal::default())
            .build();
        let empty: [&str; 0] = [];

        assert_eq!(dispatcher.execute(empty), DispatchOutcome::Crashed);
        assert!(sink.text().contains("caused by: stdin closed"));
    }

    #[test]
    fn banners_and_prompt_follow_config() {
        let sink = CaptureSink::default();
        let dispatcher = Dispatcher::builder()
            .configure(|config| {
                config.show_prompt = false;
                config.interactive.greet = None;
                if let Some(goodbye) = config.interactive.goodbye.as_mut() {
                    goodbye.show = false;
                }
            })
            .sink(sink.clone())
            .input(ScriptedInput::new(["exit"]))
            .terminal(FakeTerminal::default())
            .build();
        let empty: [&str; 0] = [];

        assert_eq!(dispatcher.execute(empty), DispatchOutcome::InteractiveFinished);
        assert_eq!(sink.lines(), vec![settings::INTERACTIVE_HINT]);
    }

    #[test]
    fn actions_share_the_line_source_with_the_loop() {
        let sink = CaptureSink::default();
        let dispatcher = Dispatcher::builder()
            .sink(sink.clone())
            .input(ScriptedInput::new(["ask", "Zoe", "exit"]))
            .terminal(FakeTerminal::default())
            .command("ask", "", |cmd| {
                cmd.action(|inv| {
                    let name = inv.read_line("Name")?.unwrap_or_default();
                    inv.println(&format!("hi {name}"));
                    Ok(())
                });
            })
            .build();
        let empty: [&str; 0] = [];

        assert_eq!(dispatcher.execute(empty), DispatchOutcome::InteractiveFinished);
        assert_eq!(count(&sink, "hi Zoe"), 1);
    }
}
