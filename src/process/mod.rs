//! Child-process execution behind a narrow capability interface.
//!
//! Helpers that shell out (such as [`fzf::Fzf`]) take a [`ProcessRunner`] so
//! tests can script process results without spawning anything.

pub mod fzf;

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Result of one finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit status code; `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
}

/// Spawns a program and collects its standard output.
pub trait ProcessRunner {
    /// Run `program` with `args`, optionally piping `stdin` to it.
    ///
    /// Standard error is inherited so interactive programs can draw on the
    /// terminal.
    fn run(&self, program: &str, args: &[String], stdin: Option<&str>) -> io::Result<ProcessOutput>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&str>) -> io::Result<ProcessOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::inherit());
        if stdin.is_some() {
            cmd.stdin(Stdio::piped());
        }

        let mut child = cmd.spawn()?;
        if let Some(input) = stdin {
            if let Some(mut child_stdin) = child.stdin.take() {
                child_stdin.write_all(input.as_bytes())?;
                // Dropping closes the pipe so the child sees end of input.
            }
        }

        let output = child.wait_with_output()?;
        tracing::debug!(program, status = ?output.status.code(), "process finished");
        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}
