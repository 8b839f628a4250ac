use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, FontStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

use crate::domain::node::Node;

const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Turns source code into one inline node per line, with coloured runs.
pub trait SyntaxHighlighter: Send + Sync {
    fn highlight(&self, code: &str, lang: Option<&str>) -> Vec<Node>;
}

pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    #[must_use]
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(DEFAULT_THEME).unwrap_or_default();
        Self { syntaxes, theme }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, lang: Option<&str>) -> Vec<Node> {
        let syntax = lang
            .and_then(|l| self.syntaxes.find_syntax_by_token(l))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            let Ok(ranges) = highlighter.highlight_line(line, &self.syntaxes) else {
                debug!(lang = ?lang, "Highlighting failed, falling back to plain text");
                return PlainHighlighter.highlight(code, lang);
            };

            let spans = ranges
                .into_iter()
                .filter_map(|(style, segment)| {
                    let segment = segment.trim_end_matches(['\n', '\r']);
                    if segment.is_empty() {
                        return None;
                    }
                    let mut span = Node::text(segment).with_style("color", hex(style.foreground));
                    if style.font_style.contains(FontStyle::BOLD) {
                        span.style.set("font-weight", "700");
                    }
                    if style.font_style.contains(FontStyle::ITALIC) {
                        span.style.set("font-style", "italic");
                    }
                    Some(span)
                })
                .collect();
            lines.push(Node::inline(spans));
        }
        lines
    }
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Highlighter that leaves code uncoloured.
pub struct PlainHighlighter;

impl SyntaxHighlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _lang: Option<&str>) -> Vec<Node> {
        code.lines()
            .map(|line| Node::inline(vec![Node::text(line)]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_highlighter_one_inline_per_line() {
        let lines = PlainHighlighter.highlight("a\nb", None);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text_content(), "b");
    }

    #[test]
    fn test_syntect_keeps_text_and_colours_runs() {
        let highlighter = SyntectHighlighter::new();
        let code = "fn main() {\n    let x = 1;\n}";
        let lines = highlighter.highlight(code, Some("rust"));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text_content(), "    let x = 1;");
        assert!(
            lines[0]
                .children
                .iter()
                .all(|span| span.style.get("color").is_some_and(|c| c.starts_with('#')))
        );
    }

    #[test]
    fn test_unknown_language_is_plain_text() {
        let highlighter = SyntectHighlighter::new();
        let lines = highlighter.highlight("just words", Some("no-such-lang"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text_content(), "just words");
    }
}
