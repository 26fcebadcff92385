//! CLI logic for the tikztape tool.
//!
//! This module contains the core CLI logic for the tikztape tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use tikztape::{StyleFlags, TapeError, TapeRenderer, TapeSpec, compile_pdf};

/// Run the tikztape CLI application
///
/// This function renders the requested tape diagram, writes the LaTeX
/// source to the output file, and optionally compiles it to a PDF.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TapeError` for:
/// - Invalid style flags
/// - Spec validation errors
/// - Configuration loading errors
/// - File I/O errors
/// - LaTeX compilation errors
pub fn run(args: &Args) -> Result<(), TapeError> {
    info!(
        symbols = args.symbols,
        output_path = args.output;
        "Processing tape diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Build the tape spec from the arguments
    let style: StyleFlags = args.style.parse().map_err(TapeError::Config)?;
    let spec = TapeSpec::new(&args.symbols, args.head, args.length, style);

    // Render using the TapeRenderer API
    let renderer = TapeRenderer::new(app_config);
    let diagram = if args.fragment {
        renderer.render(&spec)?
    } else {
        renderer.render_document(&spec)?
    };

    // Write output file
    fs::write(&args.output, diagram.as_str())?;

    info!(output_file = args.output; "LaTeX source exported successfully");

    // Hand the written file to the external compiler
    if args.pdf {
        compile_pdf(&args.output, &args.output_dir, renderer.config().compile())?;
    }

    Ok(())
}
