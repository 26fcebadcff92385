//! Error types for tikztape operations.
//!
//! This module provides the main error type [`TapeError`] which wraps the
//! error conditions that can occur while rendering a tape diagram, writing
//! it out, or compiling it to a PDF.

use std::io;

use thiserror::Error;

use crate::{compile::CompileError, spec::SpecError};

/// The main error type for tikztape operations.
///
/// Validation failures ([`TapeError::Spec`]) are raised before any output is
/// produced. Compilation failures ([`TapeError::Compile`]) happen after the
/// `.tex` file has been written and do not invalidate it.
#[derive(Debug, Error)]
pub enum TapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid tape spec: {0}")]
    Spec(#[from] SpecError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}
