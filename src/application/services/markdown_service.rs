use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use super::markdown_parser::{ListMarker, MdBlock, MdInline, parse_markdown};
use super::syntax_highlighting::{SyntaxHighlighter, SyntectHighlighter};
use crate::domain::node::{Node, StyleMap};
use crate::domain::ports::MarkdownPort;

const CODE_COLOR: &str = "#bf616a";
const LINK_COLOR: &str = "#8fa1b3";
const CODE_BACKGROUND: &str = "#2b303b";

/// Markdown collaborator backed by the in-crate parser.
pub struct MarkdownService {
    highlighter: Arc<dyn SyntaxHighlighter>,
}

impl MarkdownService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: Arc::new(SyntectHighlighter::new()),
        }
    }

    #[must_use]
    pub fn with_highlighter(highlighter: Arc<dyn SyntaxHighlighter>) -> Self {
        Self { highlighter }
    }

    fn render_blocks(&self, blocks: Vec<MdBlock>) -> Vec<Node> {
        blocks
            .into_iter()
            .map(|block| self.render_block(block))
            .collect()
    }

    fn render_block(&self, block: MdBlock) -> Node {
        match block {
            MdBlock::Empty => Node::text(""),
            MdBlock::Paragraph(inlines) => Node::inline(render_inlines(inlines, &StyleMap::new())),
            MdBlock::Header(level, inlines) => {
                let style: StyleMap = [("font-weight", "700"), ("font-size", header_size(level))]
                    .into_iter()
                    .collect();
                Node::inline(render_inlines(inlines, &style)).with_class(format!("h{level}"))
            }
            MdBlock::List {
                indent,
                content,
                marker,
            } => {
                let prefix = match marker {
                    ListMarker::Bullet(_) => "• ".to_string(),
                    ListMarker::Ordered(n) => format!("{n}. "),
                };
                let mut spans = vec![Node::text(format!(
                    "{}{prefix}",
                    "  ".repeat(usize::from(indent))
                ))];
                spans.extend(render_inlines(content, &StyleMap::new()));
                Node::inline(spans).with_class("list-item")
            }
            MdBlock::BlockQuote(inner) => Node::container(self.render_blocks(inner))
                .with_class("blockquote")
                .with_style("border-left", "solid 0.25rem"),
            MdBlock::CodeBlock { lang, code } => {
                Node::container(self.highlighter.highlight(&code, lang.as_deref()))
                    .with_class("code-block")
                    .with_style("background", CODE_BACKGROUND)
            }
            MdBlock::Table(rows) => render_table(rows),
            MdBlock::Rule => Node::rule(),
        }
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownPort for MarkdownService {
    fn render(&self, markdown: &str) -> Node {
        let blocks = parse_markdown(markdown);
        Node::container(self.render_blocks(blocks)).with_class("markdown-body")
    }
}

fn header_size(level: u8) -> &'static str {
    match level {
        1 => "2rem",
        2 => "1.5rem",
        3 => "1.25rem",
        _ => "1rem",
    }
}

fn render_inlines(inlines: Vec<MdInline>, style: &StyleMap) -> Vec<Node> {
    let mut spans = Vec::new();
    for inline in inlines {
        render_inline(inline, style, &mut spans);
    }
    spans
}

fn render_inline(inline: MdInline, style: &StyleMap, spans: &mut Vec<Node>) {
    let nested = |property: &str, value: &str| {
        let mut style = style.clone();
        style.set(property, value);
        style
    };

    match inline {
        MdInline::Text(text) => spans.push(styled(text, style.clone())),
        MdInline::Bold(children) => {
            let style = nested("font-weight", "700");
            spans.extend(render_inlines(children, &style));
        }
        MdInline::Italic(children) => {
            let style = nested("font-style", "italic");
            spans.extend(render_inlines(children, &style));
        }
        MdInline::Strike(children) => {
            let style = nested("text-decoration", "line-through");
            spans.extend(render_inlines(children, &style));
        }
        MdInline::Code(code) => {
            spans.push(styled(code, nested("color", CODE_COLOR)).with_class("code"));
        }
        MdInline::Link { text, .. } => {
            let mut style = nested("text-decoration", "underline");
            style.set("color", LINK_COLOR);
            spans.extend(render_inlines(text, &style));
        }
    }
}

fn styled(text: String, style: StyleMap) -> Node {
    let mut node = Node::text(text);
    node.style = style;
    node
}

fn render_table(rows: Vec<Vec<Vec<MdInline>>>) -> Node {
    let rendered: Vec<Vec<Vec<Node>>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| render_inlines(cell, &StyleMap::new()))
                .collect()
        })
        .collect();

    let columns = rendered.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell_width(cell));
        }
    }

    let lines = rendered
        .into_iter()
        .enumerate()
        .map(|(row_index, row)| {
            let header = row_index == 0;
            let mut spans = Vec::new();
            for (i, cell) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Node::text(" │ "));
                }
                let pad = widths[i].saturating_sub(cell_width(&cell));
                for mut span in cell {
                    if header {
                        span.style.set("font-weight", "700");
                    }
                    spans.push(span);
                }
                if pad > 0 {
                    spans.push(Node::text(" ".repeat(pad)));
                }
            }
            Node::inline(spans)
        })
        .collect();

    Node::container(lines).with_class("table")
}

fn cell_width(cell: &[Node]) -> usize {
    cell.iter().map(|span| span.text_content().width()).sum()
}
