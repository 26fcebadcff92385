//! Tikztape - Turing-machine tape diagrams rendered as TikZ.
//!
//! Renders the tape of a Turing machine as a TikZ picture, in the style of
//! Petzold's "The Annotated Turing": a row of half-unit squares carrying one
//! symbol each, an ultra-thick border around the head's square, and optional
//! ellipsis squares marking a tape that extends indefinitely. The rendered
//! markup can be wrapped in a minimal document and handed to `pdflatex`.
//!
//! # Trust assumption
//!
//! Symbol characters are interpolated into the markup verbatim by default;
//! callers are responsible for supplying TeX-safe characters. Set
//! [`RenderConfig::escape_symbols`](config::RenderConfig) when the symbols
//! come from untrusted input.

pub mod config;

mod compile;
mod document;
mod error;
mod render;
mod spec;

pub use compile::{CompileError, compile_pdf};
pub use error::TapeError;
pub use render::RenderedDiagram;
pub use spec::{SpecError, StyleFlags, TapeSpec};

use log::{debug, info};

use config::AppConfig;

/// Renderer for tape diagrams.
///
/// Turns a [`TapeSpec`] into TikZ markup, either as a bare fragment or as a
/// complete compilable document. Rendering is a pure function of the spec
/// and the configuration: identical inputs produce byte-identical output.
///
/// # Examples
///
/// ```
/// use tikztape::{StyleFlags, TapeRenderer, TapeSpec, config::AppConfig};
///
/// let spec = TapeSpec::new("AB", 0, 2, StyleFlags::new().with_center());
///
/// // With custom config
/// let config = AppConfig::default();
/// let renderer = TapeRenderer::new(config);
///
/// // Render a complete document
/// let document = renderer.render_document(&spec)
///     .expect("Failed to render");
/// assert!(document.as_str().contains("\\begin{tikzpicture}"));
///
/// // Or use default config
/// let renderer = TapeRenderer::default();
/// ```
#[derive(Default)]
pub struct TapeRenderer {
    config: AppConfig,
}

impl TapeRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and compile settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the renderer's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render a tape spec to a bare TikZ fragment.
    ///
    /// The fragment contains the `tikzpicture` environment (wrapped in
    /// `center` when the flag is set) and is meant for inclusion in an
    /// existing document.
    ///
    /// # Errors
    ///
    /// Returns [`TapeError::Spec`] if the spec violates an invariant; no
    /// output is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tikztape::{StyleFlags, TapeRenderer, TapeSpec};
    ///
    /// let spec = TapeSpec::new("01", 1, 4, StyleFlags::new());
    /// let fragment = TapeRenderer::default().render(&spec)
    ///     .expect("Failed to render");
    ///
    /// assert!(!fragment.as_str().contains("\\documentclass"));
    /// ```
    pub fn render(&self, spec: &TapeSpec) -> Result<RenderedDiagram, TapeError> {
        info!(
            head = spec.head(),
            length = spec.length(),
            symbols = spec.symbols().len(),
            style = spec.style().to_string();
            "Rendering tape diagram"
        );

        let fragment = render::fragment(spec, self.config.render())?;

        debug!(bytes = fragment.len(); "Diagram rendered");
        Ok(RenderedDiagram::new(fragment))
    }

    /// Render a tape spec to a complete LaTeX document.
    ///
    /// The same fragment produced by [`render`](Self::render), wrapped in a
    /// minimal preamble and footer so it compiles standalone. The document
    /// class comes from the render configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TapeError::Spec`] if the spec violates an invariant.
    pub fn render_document(&self, spec: &TapeSpec) -> Result<RenderedDiagram, TapeError> {
        let fragment = self.render(spec)?;
        let document = document::wrap(fragment.as_str(), self.config.render().document_class());
        Ok(RenderedDiagram::new(document))
    }
}
