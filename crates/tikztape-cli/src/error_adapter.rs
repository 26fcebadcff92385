//! Error adapter for converting TapeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Tape
//! errors carry no source spans, so the adapter contributes stable error
//! codes and, for spec errors, a usage hint.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tikztape::TapeError;

/// Adapter wrapping a [`TapeError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a TapeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TapeError::Io(_) => "tikztape::io",
            TapeError::Spec(_) => "tikztape::spec",
            TapeError::Config(_) => "tikztape::config",
            TapeError::Compile(_) => "tikztape::compile",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TapeError::Spec(_) => {
                "the head index is zero-based and must address one of the --length squares; \
                 the symbol string may not be longer than the tape"
            }
            TapeError::Compile(_) => {
                "the .tex file has been written; rerun the LaTeX compiler by hand to inspect \
                 its log"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
