//! Configuration types for tape diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered and compiled. All types implement [`serde::Deserialize`] for
//! loading from TOML configuration files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and compile settings.
//! - [`RenderConfig`] - Controls markup generation (symbol escaping, document class).
//! - [`CompileConfig`] - Controls the external LaTeX compiler invocation.
//!
//! # Example
//!
//! ```
//! # use tikztape::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.compile().program(), "pdflatex");
//! ```

use serde::Deserialize;

/// Top-level application configuration combining render and compile settings.
///
/// Groups [`RenderConfig`] and [`CompileConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Compile configuration section.
    #[serde(default)]
    compile: CompileConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and compile configurations.
    pub fn new(render: RenderConfig, compile: CompileConfig) -> Self {
        Self { render, compile }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the compile configuration.
    pub fn compile(&self) -> &CompileConfig {
        &self.compile
    }
}

/// Markup generation options.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Replace TeX-special symbol characters with their escaped forms.
    ///
    /// Off by default: symbols are emitted verbatim and callers own the
    /// trust assumption (see the crate-level documentation).
    #[serde(default)]
    escape_symbols: bool,

    /// Document class used by the whole-document variant.
    #[serde(default = "default_document_class")]
    document_class: String,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(escape_symbols: bool, document_class: impl Into<String>) -> Self {
        Self {
            escape_symbols,
            document_class: document_class.into(),
        }
    }

    /// Returns whether TeX-special symbol characters are escaped.
    pub fn escape_symbols(&self) -> bool {
        self.escape_symbols
    }

    /// Returns the document class for the whole-document variant.
    pub fn document_class(&self) -> &str {
        &self.document_class
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape_symbols: false,
            document_class: default_document_class(),
        }
    }
}

fn default_document_class() -> String {
    "article".to_string()
}

/// External LaTeX compiler options.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    /// Name or path of the LaTeX compiler binary.
    #[serde(default = "default_program")]
    program: String,
}

impl CompileConfig {
    /// Creates a new [`CompileConfig`] with the specified compiler program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the compiler program name.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    "pdflatex".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.render().escape_symbols());
        assert_eq!(config.render().document_class(), "article");
        assert_eq!(config.compile().program(), "pdflatex");
    }

    #[test]
    fn test_deserialize_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.compile().program(), "pdflatex");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            escape_symbols = true

            [compile]
            program = "lualatex"
            "#,
        )
        .unwrap();

        assert!(config.render().escape_symbols());
        assert_eq!(config.render().document_class(), "article");
        assert_eq!(config.compile().program(), "lualatex");
    }
}
