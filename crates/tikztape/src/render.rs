//! TikZ markup generation for tape diagrams.
//!
//! This module turns a validated [`TapeSpec`] into TikZ markup laid out on a
//! half-unit grid. Square `i` is bounded by the coordinates `(A{i})`/`(B{i})`
//! at its bottom-left and top-left corners; symbol cells get a center
//! coordinate `(C{i})` carrying a `\node`. The output is deterministic:
//! identical specs produce byte-identical markup.
//!
//! Symbol characters are emitted verbatim unless
//! [`RenderConfig::escape_symbols`](crate::config::RenderConfig::escape_symbols)
//! is set, in which case TeX-special characters are replaced with their
//! escaped forms.

use std::fmt;

use crate::{
    config::RenderConfig,
    spec::{SpecError, TapeSpec},
};

/// The generated markup for one tape diagram.
///
/// An immutable wrapper around the markup text produced by
/// [`TapeRenderer`](crate::TapeRenderer). Consumed by the file writer and
/// compilation collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram(String);

impl RenderedDiagram {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    /// Returns the markup text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the diagram and returns the markup text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedDiagram {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Line-oriented markup writer with tab indentation.
///
/// Indentation is cosmetic and follows the environment nesting, starting one
/// level deep so the fragment embeds cleanly in a document body.
struct Emitter {
    out: String,
    depth: usize,
}

impl Emitter {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 1,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: &str) {
        self.depth -= 1;
        self.line(text);
    }
}

/// Formats a grid position as a TikZ length.
///
/// All positions are multiples of 0.25, so the shortest `f64` representation
/// is always exact (`0`, `0.25`, `0.5`, ...).
fn pos(quarters: usize) -> f64 {
    quarters as f64 / 4.0
}

/// Returns the markup for a single symbol character.
fn symbol_markup(c: char, escape: bool) -> String {
    if !escape {
        return c.to_string();
    }
    match c {
        '#' | '$' | '%' | '&' | '_' | '{' | '}' => format!("\\{c}"),
        '\\' => "\\textbackslash{}".to_string(),
        '~' => "\\textasciitilde{}".to_string(),
        '^' => "\\textasciicircum{}".to_string(),
        _ => c.to_string(),
    }
}

/// Renders the TikZ fragment for a tape spec.
///
/// Validates the spec first; no output is produced for an invalid spec.
pub(crate) fn fragment(spec: &TapeSpec, config: &RenderConfig) -> Result<String, SpecError> {
    spec.validate()?;

    let style = spec.style();
    let left_extra = if style.left_ellipsis() { 2 } else { 0 };
    let right_extra = if style.right_ellipsis() { 2 } else { 0 };
    let total = spec.length() + left_extra + right_extra;

    let mut em = Emitter::new();

    if style.center() {
        em.open("\\begin{center}");
    }
    em.open("\\begin{tikzpicture}");

    // Bottom (A) and top (B) corners bounding each square.
    em.line("% Square corner coordinates:");
    for i in 0..=total {
        em.line(&format!("\\coordinate (A{i}) at ({}, 0);", pos(2 * i)));
        em.line(&format!("\\coordinate (B{i}) at ({}, 0.5);", pos(2 * i)));
    }

    if !spec.symbols().is_empty() {
        em.line("% Cell contents:");
        for (i, &c) in spec.symbols().iter().enumerate() {
            let cell = i + left_extra;
            em.line(&format!(
                "\\coordinate (C{cell}) at ({}, 0.25);",
                pos(2 * cell + 1)
            ));
            em.line(&format!(
                "\\node at (C{cell}) {{{}}};",
                symbol_markup(c, config.escape_symbols())
            ));
        }
    }

    // Ellipsis markers sit centered over the two decorative squares and
    // replace the physical wall on that side of the tape.
    if style.left_ellipsis() {
        em.line("% Left ellipsis marker:");
        em.line("\\coordinate (D) at (0.5, 0.25);");
        em.line("\\node at (D) {$ \\cdots $};");
    }
    if style.right_ellipsis() {
        em.line("% Right ellipsis marker:");
        em.line(&format!(
            "\\coordinate (E) at ({}, 0.25);",
            pos(2 * (total - 2))
        ));
        em.line("\\node at (E) {$ \\cdots $};");
    }

    // One vertical edge per core square boundary; the decorative squares
    // have no inner edges. The index-0 wall is drawn unless the left
    // ellipsis leaves the tape open on that side.
    em.line("% Vertical square boundaries:");
    for i in left_extra..spec.length() + left_extra {
        em.line(&format!("\\draw (B{i}) -- (A{i});"));
    }
    if !style.left_ellipsis() {
        em.line("\\draw (B0) -- (A0);");
    }

    // A single continuous rail at the bottom and top, shortened by one
    // square on each open end.
    let b = if style.left_ellipsis() { 1 } else { 0 };
    let e = if style.right_ellipsis() {
        total - 2
    } else {
        total - 1
    };
    em.line("% Top and bottom rails:");
    em.line(&format!("\\draw (A{b}) -- (A{e});"));
    em.line(&format!("\\draw (B{b}) -- (B{e});"));

    let h = spec.head() + left_extra;
    em.line("% Head highlight:");
    em.line(&format!(
        "\\draw[ultra thick] (B{h}) -- (A{h}) -- (A{}) -- (B{}) -- cycle;",
        h + 1,
        h + 1
    ));

    em.close("\\end{tikzpicture}");
    if style.center() {
        em.close("\\end{center}");
    }
    em.out.push_str("\\medskip\n");

    Ok(em.out)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::spec::StyleFlags;

    use super::*;

    fn render(symbols: &str, head: usize, length: usize, flags: &str) -> String {
        let spec = TapeSpec::new(symbols, head, length, flags.parse().unwrap());
        fragment(&spec, &RenderConfig::default()).unwrap()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_plain_tape() {
        // symbols "AB", head 0, length 2, no flags
        let out = render("AB", 0, 2, "");

        // Grid coordinates for squares 0..=2
        assert_eq!(count(&out, "\\coordinate (A"), 3);
        assert_eq!(count(&out, "\\coordinate (B"), 3);

        // Two labels, no ellipsis markers
        assert!(out.contains("\\node at (C0) {A};"));
        assert!(out.contains("\\node at (C1) {B};"));
        assert_eq!(count(&out, "\\cdots"), 0);

        // Single rail from 0 to 1 at the bottom and top
        assert!(out.contains("\\draw (A0) -- (A1);"));
        assert!(out.contains("\\draw (B0) -- (B1);"));

        // Highlight around square 0
        assert!(out.contains("\\draw[ultra thick] (B0) -- (A0) -- (A1) -- (B1) -- cycle;"));
    }

    #[test]
    fn test_left_ellipsis_tape() {
        // empty symbols, head 1, length 3, left ellipsis
        let out = render("", 1, 3, "l");

        // No labels, exactly one ellipsis marker near x = 0.5
        assert_eq!(count(&out, "\\node at (C"), 0);
        assert_eq!(count(&out, "\\cdots"), 1);
        assert!(out.contains("\\coordinate (D) at (0.5, 0.25);"));

        // The index-0 wall is left open
        assert!(!out.contains("\\draw (B0) -- (A0);"));

        // Highlight shifts by the two decorative squares: 1 + 2 = 3
        assert!(out.contains("\\draw[ultra thick] (B3) -- (A3) -- (A4) -- (B4) -- cycle;"));

        // Rails start after the open end; total = 5
        assert!(out.contains("\\draw (A1) -- (A4);"));
        assert!(out.contains("\\draw (B1) -- (B4);"));
    }

    #[test]
    fn test_right_ellipsis_tape() {
        let out = render("X", 0, 3, "r");

        // total = 5, marker centered at 0.5 * (5 - 2) = 1.5
        assert_eq!(count(&out, "\\cdots"), 1);
        assert!(out.contains("\\coordinate (E) at (1.5, 0.25);"));

        // Rails stop before the open end
        assert!(out.contains("\\draw (A0) -- (A3);"));
        assert!(out.contains("\\draw (B0) -- (B3);"));

        // The left wall is still closed
        assert!(out.contains("\\draw (B0) -- (A0);"));
    }

    #[test]
    fn test_both_ellipses_coordinate_count() {
        let out = render("01", 1, 4, "lr");

        // total = 4 + 2 + 2 = 8, so 9 coordinate pairs
        assert_eq!(count(&out, "\\coordinate (A"), 9);
        assert_eq!(count(&out, "\\coordinate (B"), 9);
        assert_eq!(count(&out, "\\cdots"), 2);
    }

    #[test]
    fn test_center_wrapping() {
        let out = render("A", 0, 1, "c");
        assert!(out.starts_with("\t\\begin{center}\n"));
        assert!(out.contains("\\end{center}"));

        let plain = render("A", 0, 1, "");
        assert!(plain.starts_with("\t\\begin{tikzpicture}\n"));
        assert!(!plain.contains("center}"));
    }

    #[test]
    fn test_symbols_offset_by_left_extra() {
        let out = render("Q", 0, 1, "l");

        // Symbol 0 lands in cell 2, centered at 0.5 * 2 + 0.25
        assert!(out.contains("\\coordinate (C2) at (1.25, 0.25);"));
        assert!(out.contains("\\node at (C2) {Q};"));
    }

    #[test]
    fn test_head_out_of_range_fails() {
        let spec = TapeSpec::new("X", 5, 3, StyleFlags::new());
        assert_eq!(
            fragment(&spec, &RenderConfig::default()),
            Err(SpecError::HeadOutOfRange { head: 5, length: 3 })
        );
    }

    #[test]
    fn test_symbols_too_long_fails() {
        let spec = TapeSpec::new("TOOLONG", 0, 3, StyleFlags::new());
        assert_eq!(
            fragment(&spec, &RenderConfig::default()),
            Err(SpecError::SymbolsTooLong {
                symbols: 7,
                length: 3
            })
        );
    }

    #[test]
    fn test_idempotent() {
        let spec = TapeSpec::new("@1 1 0", 3, 10, "clr".parse::<StyleFlags>().unwrap());
        let config = RenderConfig::default();
        assert_eq!(
            fragment(&spec, &config).unwrap(),
            fragment(&spec, &config).unwrap()
        );
    }

    #[test]
    fn test_symbols_verbatim_by_default() {
        let out = render("$", 0, 1, "");
        assert!(out.contains("\\node at (C0) {$};"));
    }

    #[test]
    fn test_symbol_escaping_opt_in() {
        let spec = TapeSpec::new("$", 0, 1, StyleFlags::new());
        let config = RenderConfig::new(true, "article");
        let out = fragment(&spec, &config).unwrap();
        assert!(out.contains("\\node at (C0) {\\$};"));
    }

    #[test]
    fn test_symbol_markup_escapes() {
        assert_eq!(symbol_markup('a', true), "a");
        assert_eq!(symbol_markup('&', true), "\\&");
        assert_eq!(symbol_markup('_', true), "\\_");
        assert_eq!(symbol_markup('\\', true), "\\textbackslash{}");
        assert_eq!(symbol_markup('~', true), "\\textasciitilde{}");
        assert_eq!(symbol_markup('^', true), "\\textasciicircum{}");
        assert_eq!(symbol_markup('%', false), "%");
    }

    #[test]
    fn test_positions_format_exactly() {
        assert_eq!(pos(0).to_string(), "0");
        assert_eq!(pos(1).to_string(), "0.25");
        assert_eq!(pos(2).to_string(), "0.5");
        assert_eq!(pos(3).to_string(), "0.75");
        assert_eq!(pos(4).to_string(), "1");
        assert_eq!(pos(7).to_string(), "1.75");
    }

    proptest! {
        #[test]
        fn prop_render_agrees_with_validate(
            symbols in "[A-Za-z0-9]{0,8}",
            head in 0usize..12,
            length in 0usize..12,
            center in any::<bool>(),
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let mut flags = StyleFlags::new();
            flags.set_center(center);
            flags.set_left_ellipsis(left);
            flags.set_right_ellipsis(right);

            let spec = TapeSpec::new(&symbols, head, length, flags);
            let result = fragment(&spec, &RenderConfig::default());

            if symbols.chars().count() <= length && head < length {
                let out = result.unwrap();
                prop_assert!(!out.is_empty());

                let left_extra = if left { 2 } else { 0 };
                let right_extra = if right { 2 } else { 0 };
                let total = length + left_extra + right_extra;

                // One bottom and one top coordinate per grid index
                prop_assert_eq!(count(&out, "\\coordinate (A"), total + 1);
                prop_assert_eq!(count(&out, "\\coordinate (B"), total + 1);

                // One label per symbol, plus one marker per ellipsis flag
                prop_assert_eq!(count(&out, "\\node at (C"), symbols.chars().count());
                let markers = usize::from(left) + usize::from(right);
                prop_assert_eq!(count(&out, "\\cdots"), markers);

                // Exactly one head highlight
                prop_assert_eq!(count(&out, "ultra thick"), 1);
            } else {
                prop_assert!(result.is_err());
            }
        }

        #[test]
        fn prop_render_is_pure(
            symbols in "[A-Za-z]{0,5}",
            head in 0usize..6,
            length in 1usize..8,
        ) {
            let spec = TapeSpec::new(&symbols, head, length, StyleFlags::new());
            let config = RenderConfig::default();
            prop_assert_eq!(fragment(&spec, &config), fragment(&spec, &config));
        }
    }
}
