//! Minimal LaTeX document wrapping.
//!
//! The renderer produces a bare TikZ fragment; this module owns the
//! "standalone document" concern, wrapping a fragment in a preamble and
//! footer so the result compiles on its own.

/// Wraps a TikZ fragment in a minimal LaTeX document.
pub(crate) fn wrap(fragment: &str, document_class: &str) -> String {
    let mut doc = String::with_capacity(fragment.len() + 96);
    doc.push_str(&format!("\\documentclass{{{document_class}}}\n"));
    doc.push_str("\\usepackage{tikz}\n");
    doc.push('\n');
    doc.push_str("\\begin{document}\n");
    doc.push_str(fragment);
    doc.push_str("\\end{document}\n");
    doc
}
