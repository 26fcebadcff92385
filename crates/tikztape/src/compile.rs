//! External LaTeX compilation.
//!
//! The compilation step is an opaque collaborator: it receives the path of
//! an already written `.tex` file and an output directory, runs the
//! configured compiler as a subprocess, and surfaces success or failure.
//! Nothing is retried, and a failed compile does not invalidate the written
//! file.

use std::{
    fs, io,
    path::Path,
    process::{Command, ExitStatus},
};

use log::{debug, info};
use thiserror::Error;

use crate::{config::CompileConfig, error::TapeError};

/// Failures of the external LaTeX compiler.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Compiles a LaTeX file to a PDF in `output_dir`.
///
/// The output directory is created if it does not exist. The compiler runs
/// in non-interactive mode and its output is logged at debug level; on a
/// non-zero exit the last lines are logged at info level to aid diagnosis.
///
/// # Errors
///
/// Returns [`CompileError::Launch`] if the compiler binary cannot be
/// started, [`CompileError::Failed`] if it exits non-zero, and
/// [`TapeError::Io`] if the output directory cannot be created.
pub fn compile_pdf(
    tex_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &CompileConfig,
) -> Result<(), TapeError> {
    let tex_path = tex_path.as_ref();
    let output_dir = output_dir.as_ref();
    let program = config.program();

    fs::create_dir_all(output_dir)?;

    info!(
        program = program,
        tex_path = tex_path.display().to_string(),
        output_dir = output_dir.display().to_string();
        "Compiling LaTeX file"
    );

    let output = Command::new(program)
        .arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(output_dir)
        .arg(tex_path)
        .output()
        .map_err(|source| CompileError::Launch {
            program: program.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    debug!(output = stdout.as_ref(); "Compiler output");

    if !output.status.success() {
        // pdflatex reports errors on stdout rather than stderr
        let tail: Vec<&str> = stdout.lines().rev().take(10).collect();
        for line in tail.iter().rev() {
            info!("{line}");
        }
        return Err(CompileError::Failed {
            program: program.to_string(),
            status: output.status,
        }
        .into());
    }

    info!(output_dir = output_dir.display().to_string(); "PDF generated");
    Ok(())
}
