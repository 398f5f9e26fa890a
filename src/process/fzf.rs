//! Wrapper around the external `fzf` fuzzy finder.

use super::{ProcessRunner, SystemProcessRunner};
use crate::error::FzfError;

const FZF: &str = "fzf";

/// Options for one fzf selection.
///
/// Defaults mirror a compact picker: `> ` prompt, 40% height, preview
/// window on the right when a preview command is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fzf {
    pub prompt: String,
    pub pointer: String,
    pub marker: String,
    pub layout: String,
    pub height: String,
    pub preview: Option<String>,
    pub preview_window: String,
    pub title: Option<String>,
    pub header: Option<String>,
    pub header_lines: usize,
    pub multi: bool,
    binds: Vec<String>,
}

impl Default for Fzf {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            pointer: "➤".to_string(),
            marker: "✓".to_string(),
            layout: "default".to_string(),
            height: "40%".to_string(),
            preview: None,
            preview_window: "right:50%".to_string(),
            title: None,
            header: None,
            header_lines: 0,
            multi: false,
            binds: Vec::new(),
        }
    }
}

impl Fzf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    pub fn preview(mut self, command: impl Into<String>) -> Self {
        self.preview = Some(command.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Add a `--bind key:action` entry.
    pub fn bind(mut self, key: &str, action: &str) -> Self {
        self.binds.push(format!("{key}:{action}"));
        self
    }

    /// Argument vector passed to fzf.
    ///
    /// Both `title` and `header` render through `--header`; when both are
    /// set, fzf keeps the later one, which is `header`.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        let mut push = |flag: &str, value: &str| {
            args.push(flag.to_string());
            args.push(value.to_string());
        };
        push("--prompt", &self.prompt);
        push("--pointer", &self.pointer);
        push("--marker", &self.marker);
        push("--layout", &self.layout);
        push("--height", &self.height);
        if let Some(preview) = self.preview.as_deref().filter(|p| !p.is_empty()) {
            push("--preview", preview);
        }
        push("--preview-window", &self.preview_window);
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            push("--header", title);
        }
        if let Some(header) = &self.header {
            push("--header", header);
        }
        if self.header_lines > 0 {
            push("--header-lines", &self.header_lines.to_string());
        }
        for bind in &self.binds {
            push("--bind", bind);
        }
        if self.multi {
            args.push("--multi".to_string());
        }
        args
    }

    /// Let the user pick from `items` using the system fzf.
    pub fn select<S: AsRef<str>>(&self, items: &[S]) -> Result<Vec<String>, FzfError> {
        self.select_with(&SystemProcessRunner, items)
    }

    /// Single selection; `None` when nothing was chosen.
    pub fn select_one<S: AsRef<str>>(&self, items: &[S]) -> Result<Option<String>, FzfError> {
        self.select_one_with(&SystemProcessRunner, items)
    }

    pub fn select_one_with<S: AsRef<str>>(
        &self,
        runner: &dyn ProcessRunner,
        items: &[S],
    ) -> Result<Option<String>, FzfError> {
        let single = Self {
            multi: false,
            ..self.clone()
        };
        Ok(single.select_with(runner, items)?.into_iter().next())
    }

    /// Like [`Fzf::select`], through an explicit runner.
    ///
    /// Exit status 0 yields the selected lines; 1 (no match) and 130
    /// (interrupted) yield nothing.
    pub fn select_with<S: AsRef<str>>(
        &self,
        runner: &dyn ProcessRunner,
        items: &[S],
    ) -> Result<Vec<String>, FzfError> {
        ensure_installed(runner)?;

        let mut input = String::new();
        for item in items {
            input.push_str(item.as_ref());
            input.push('\n');
        }

        let output = runner.run(FZF, &self.command_args(), Some(&input))?;
        match output.status {
            Some(0) => Ok(output.stdout.lines().map(str::to_string).collect()),
            Some(1) | Some(130) => Ok(Vec::new()),
            Some(2) => Err(FzfError::Failed(output.stdout.trim().to_string())),
            Some(code) => Err(FzfError::UnknownExit(code)),
            None => Err(FzfError::UnknownExit(-1)),
        }
    }
}

fn ensure_installed(runner: &dyn ProcessRunner) -> Result<(), FzfError> {
    match runner.run(FZF, &["--version".to_string()], None) {
        Ok(output) if output.status == Some(0) && !output.stdout.trim().is_empty() => Ok(()),
        Ok(_) => Err(FzfError::NotInstalled),
        Err(err) => {
            tracing::debug!(error = %err, "fzf version probe failed");
            Err(FzfError::NotInstalled)
        }
    }
}
