//! Command-line argument definitions for the tikztape CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments describe the tape to render, control output
//! paths, optional PDF compilation, configuration file selection, and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the tikztape tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Symbols to write on the tape, one character per square
    #[arg(default_value = "", help = "Symbols to write on the tape")]
    pub symbols: String,

    /// Zero-based index of the square highlighted as the head
    #[arg(short = 'H', long, default_value_t = 0)]
    pub head: usize,

    /// Number of squares on the tape, excluding ellipsis squares
    #[arg(short = 'n', long)]
    pub length: usize,

    /// Style flags: c (center), l (left ellipsis), r (right ellipsis)
    #[arg(short, long, default_value = "")]
    pub style: String,

    /// Path to the output LaTeX file
    #[arg(short, long, default_value = "tape.tex")]
    pub output: String,

    /// Write a bare TikZ fragment instead of a complete document
    #[arg(long)]
    pub fragment: bool,

    /// Compile the written file to a PDF with the configured LaTeX compiler
    #[arg(long)]
    pub pdf: bool,

    /// Directory where the compiled PDF is placed
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_debug_assert() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_minimal() {
        let args = Args::try_parse_from(["tikztape", "AB", "--length", "2"]).unwrap();
        assert_eq!(args.symbols, "AB");
        assert_eq!(args.head, 0);
        assert_eq!(args.length, 2);
        assert_eq!(args.style, "");
        assert_eq!(args.output, "tape.tex");
        assert!(!args.fragment);
        assert!(!args.pdf);
    }

    #[test]
    fn test_args_empty_symbols() {
        let args = Args::try_parse_from(["tikztape", "--length", "3", "--style", "l"]).unwrap();
        assert_eq!(args.symbols, "");
        assert_eq!(args.style, "l");
    }

    #[test]
    fn test_args_length_required() {
        assert!(Args::try_parse_from(["tikztape", "AB"]).is_err());
    }
}
