//! Dependency installer invocation.
//!
//! The scaffolded starters declare their dependencies for Composer, so
//! the final pipeline step hands the new project directory to
//! `composer install --no-scripts`, exactly as a user would run it.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Where the installer's output goes.
pub enum InstallerOutput<'a> {
    /// Attach the subprocess directly to the terminal, preserving
    /// interactive prompts and coloring.
    Passthrough,
    /// Forward each line of the subprocess's standard output to the
    /// given sink as it becomes available; standard error passes through
    /// to the parent process.
    Sink(&'a mut dyn Write),
}

/// A resolved dependency-installer invocation.
#[derive(Debug, Clone)]
pub struct Installer {
    program: String,
    args: Vec<String>,
}

impl Installer {
    /// An arbitrary installer command.
    #[must_use]
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The Composer invocation for this environment: a `composer.phar`
    /// in `work_dir` takes precedence over a `composer` on `PATH`.
    #[must_use]
    pub fn composer(work_dir: &Path, no_ansi: bool) -> Self {
        let mut installer = if work_dir.join("composer.phar").exists() {
            Self::new("php", ["composer.phar", "install", "--no-scripts"])
        } else {
            Self::new("composer", ["install", "--no-scripts"])
        };
        if no_ansi {
            installer.args.push("--no-ansi".to_string());
        }
        installer
    }

    /// The program this installer runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether the program can be run at all (`--version` probe with
    /// discarded output).
    #[must_use]
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Run the installer inside `project_dir`, blocking until it exits.
    ///
    /// No timeout is imposed; a hung installer blocks the tool, which is
    /// acceptable for an interactive developer tool.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InstallerSpawn`] when the process cannot
    /// be started or its output cannot be forwarded, and
    /// [`ScaffoldError::Installer`] when it exits with a failure status,
    /// carrying the status so the caller can propagate the subprocess's
    /// own exit code.
    pub fn run(&self, project_dir: &Path, output: InstallerOutput<'_>) -> ScaffoldResult<()> {
        let spawn_error = |reason: String| ScaffoldError::InstallerSpawn {
            program: self.program.clone(),
            reason,
        };

        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(project_dir);

        let status = match output {
            InstallerOutput::Passthrough => {
                command.status().map_err(|e| spawn_error(e.to_string()))?
            }
            InstallerOutput::Sink(sink) => {
                let mut child = command
                    .stdout(Stdio::piped())
                    .spawn()
                    .map_err(|e| spawn_error(e.to_string()))?;
                if let Some(stdout) = child.stdout.take() {
                    forward_lines(stdout, sink).map_err(|e| spawn_error(e.to_string()))?;
                }
                child.wait().map_err(|e| spawn_error(e.to_string()))?
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::Installer { status })
        }
    }
}

/// Forward `reader` into `sink` line by line, as output arrives.
fn forward_lines(reader: impl io::Read, sink: &mut dyn Write) -> io::Result<()> {
    for line in BufReader::new(reader).lines() {
        let line = line?;
        writeln!(sink, "{line}")?;
    }
    Ok(())
}
