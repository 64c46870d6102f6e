//! Terminal output for the Folio CLI.
//!
//! Folio writes two kinds of output. Derived data (the catalog JSON, a
//! landing path) goes to stdout uncolored so it can be piped into a site
//! generator or captured by a script. Status lines for humans go to stderr,
//! styled by [`Tone`], next to the `tracing` log output.

use std::io;

use console::{Style, Term};

/// How a status line is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    /// Neutral detail line.
    Plain,
    /// Completed or valid (green).
    Good,
    /// Suspicious but not fatal, e.g. a category without a landing entry (yellow).
    Caution,
    /// Command failed (red).
    Failure,
    /// Section heading such as the registry size (cyan bold).
    Heading,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Good => Style::new().green(),
            Self::Caution => Style::new().yellow(),
            Self::Failure => Style::new().red(),
            Self::Heading => Style::new().cyan().bold(),
        }
    }
}

/// Split stdout/stderr writer.
pub(crate) struct Output {
    status: Term,
    data: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
        }
    }

    /// Write a styled status line to stderr.
    ///
    /// Failures to write status are ignored; they must not mask the
    /// command's own result.
    pub(crate) fn status(&self, tone: Tone, msg: &str) {
        let _ = self.status.write_line(&tone.style().apply_to(msg).to_string());
    }

    /// Write derived data to stdout verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is closed, so a broken pipe fails the command.
    pub(crate) fn data(&self, text: &str) -> io::Result<()> {
        self.data.write_str(text)?;
        self.data.flush()
    }
}
