//! CLI entry point for the kli demo application.

mod cli;

use clap::Parser;
use kli::build_info;
use kli::config::{load_config_with_base, AppConfig};
use kli::error::FzfError;
use kli::logging::init_tracing;
use kli::process::fzf::Fzf;
use kli::tui::{ProgressBar, ProgressKind, Renderer, State, Tone};
use kli::{AppBuilder, ActionResult, Invocation};
use std::thread;
use std::time::Duration;

const PICK_ITEMS: [&str; 5] = ["apple", "banana", "cherry", "durian", "elderberry"];

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let base = AppConfig {
        name: "kli".to_string(),
        version: build_info::app_version(),
        description: "Demo application for the kli toolkit".to_string(),
        ..AppConfig::default()
    };
    let mut config = match load_config_with_base(base, args.config.as_deref()) {
        Ok(loaded) => loaded.config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if args.no_color {
        config.color = false;
    }

    let renderer = Renderer::new(config.color, config.colors);
    let dispatcher = AppBuilder::new()
        .config(config)
        .sink(renderer)
        .command("greet", "Greets the user", |cmd| {
            cmd.argument("name", "The name to greet")
                .flag("shout", "Print the greeting in capitals")
                .action(greet);
        })
        .command("progress", "Show a progress indicator", |cmd| {
            cmd.flag("style", "bar, spinner, dots, blocks or pulse")
                .action(progress);
        })
        .command("pick", "Pick a fruit with fzf or a numbered menu", |cmd| {
            cmd.action(pick);
        })
        .command("term", "Show terminal information", |cmd| {
            cmd.action(term);
        })
        .build();

    let outcome = dispatcher.execute(&args.tokens);
    std::process::exit(outcome.exit_code());
}

fn greet(inv: &mut Invocation<'_>) -> ActionResult {
    let name = inv.argument("name").unwrap_or("stranger");
    let mut line = format!("Hello, {name}!");
    if inv.flag("shout") {
        line = line.to_uppercase();
    }
    inv.tinted(&line, Tone::Primary);
    Ok(())
}

fn progress(inv: &mut Invocation<'_>) -> ActionResult {
    let kind: ProgressKind = inv.option("style").unwrap_or("bar").parse()?;
    let mut bar = progress_bar(kind);
    bar.start(100, false, |bar| {
        for _ in 0..20 {
            thread::sleep(Duration::from_millis(50));
            bar.increment(5);
        }
    });
    inv.status(State::Success, "Done");
    Ok(())
}

fn progress_bar(kind: ProgressKind) -> ProgressBar {
    ProgressBar::new().with_prefix("Working").with_kind(kind)
}

fn pick(inv: &mut Invocation<'_>) -> ActionResult {
    let choice = match Fzf::new().prompt("fruit> ").select_one(&PICK_ITEMS) {
        Ok(choice) => choice,
        Err(FzfError::NotInstalled) => {
            let options: Vec<String> = PICK_ITEMS.iter().map(|item| item.to_string()).collect();
            let index = inv.select(&options)?;
            Some(options[index].clone())
        }
        Err(err) => return Err(err.into()),
    };
    match choice {
        Some(choice) => inv.status(State::Success, &format!("You picked {choice}")),
        None => inv.status(State::Warning, "Nothing picked"),
    }
    Ok(())
}

fn term(inv: &mut Invocation<'_>) -> ActionResult {
    let terminal = inv.terminal();
    match terminal.size() {
        Some(size) => inv.println(&format!("Size: {}x{}", size.columns, size.rows)),
        None => inv.status(State::Warning, "Size: unknown"),
    }
    let ansi = if terminal.supports_ansi() { "yes" } else { "no" };
    inv.println(&format!("ANSI: {ansi}"));
    Ok(())
}
