use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Driver-level failures: anything that stops a file from being tokenized at
/// all, as opposed to lexical errors inside the source, which flow through
/// [`Diagnostics`].
#[derive(Debug)]
pub enum FrontendError {
    FileNotFound(PathBuf),
    Io(std::io::Error),
}

impl Error for FrontendError {}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrontendError::FileNotFound(path) => {
                write!(f, "FileNotFoundError: no such script: {}", path.display())
            }
            FrontendError::Io(err) => write!(f, "IOError: {}", err),
        }
    }
}

/// A single line-tagged report from the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    /// Context slot; the scanner always leaves it empty. A parser would fill
    /// it with something like ` at 'token'`.
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[line {}] Error {}: {}", self.line, self.location, self.message)
    }
}

/// Collects reports produced during one unit of work. Passed by mutable
/// reference into each scan and drained by the driver afterwards, so there is
/// no process-wide error flag to forget to reset.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error with an empty location slot.
    pub fn error(&mut self, line: usize, message: impl Into<String>) {
        self.report(line, String::new(), message);
    }

    pub fn report(&mut self, line: usize, location: impl Into<String>, message: impl Into<String>) {
        self.reports.push(Diagnostic {
            line,
            location: location.into(),
            message: message.into(),
        });
    }

    pub fn had_error(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn reports(&self) -> &[Diagnostic] {
        &self.reports
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display_matches_report_format() {
        let diag = Diagnostic {
            line: 4,
            location: String::new(),
            message: "Unexpected character.".to_string(),
        };
        assert_eq!(diag.to_string(), "[line 4] Error : Unexpected character.");
    }

    #[test]
    fn collector_latches_and_clears() {
        let mut diags = Diagnostics::new();
        assert!(!diags.had_error());

        diags.error(1, "Unterminated string.");
        assert!(diags.had_error());
        assert_eq!(diags.reports().len(), 1);

        diags.clear();
        assert!(!diags.had_error());
        assert!(diags.reports().is_empty());
    }
}
