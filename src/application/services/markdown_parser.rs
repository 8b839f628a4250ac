use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Bullet(char),
    Ordered(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdBlock {
    Header(u8, Vec<MdInline>),
    List {
        indent: u8,
        content: Vec<MdInline>,
        marker: ListMarker,
    },
    BlockQuote(Vec<MdBlock>),
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    Table(Vec<Vec<Vec<MdInline>>>),
    Rule,
    Paragraph(Vec<MdInline>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdInline {
    Text(String),
    Bold(Vec<MdInline>),
    Italic(Vec<MdInline>),
    Strike(Vec<MdInline>),
    Code(String),
    Link { text: Vec<MdInline>, url: String },
}

#[must_use]
pub fn parse_markdown(content: &str) -> Vec<MdBlock> {
    Parser::parse(content)
}

struct Parser;

impl Parser {
    fn parse(input: &str) -> Vec<MdBlock> {
        let mut blocks = Vec::new();
        let mut lines = input.lines().peekable();

        while let Some(line) = lines.next() {
            let line_trim_end = line.trim_end();
            let trimmed = line_trim_end.trim_start();

            if trimmed.is_empty() {
                blocks.push(MdBlock::Empty);
                continue;
            }

            if trimmed.starts_with("```") {
                let lang = trimmed.trim_start_matches('`').trim().to_string();
                let lang = if lang.is_empty() { None } else { Some(lang) };
                let mut code = String::new();

                for code_line in lines.by_ref() {
                    if code_line.trim().starts_with("```") {
                        break;
                    }
                    code.push_str(code_line);
                    code.push('\n');
                }

                if code.ends_with('\n') {
                    code.pop();
                }

                blocks.push(MdBlock::CodeBlock { lang, code });
                continue;
            }

            if is_rule(trimmed) {
                blocks.push(MdBlock::Rule);
                continue;
            }

            if let Some((level, content)) = header(trimmed) {
                blocks.push(MdBlock::Header(level, parse_inline(content)));
                continue;
            }

            if let Some(content) = trimmed.strip_prefix("> ") {
                let mut quote = String::from(content);
                while let Some(next_line) = lines.peek() {
                    match next_line.trim_start().strip_prefix("> ") {
                        Some(next_content) => {
                            quote.push('\n');
                            quote.push_str(next_content);
                            lines.next();
                        }
                        None => break,
                    }
                }
                blocks.push(MdBlock::BlockQuote(Parser::parse(&quote)));
                continue;
            }

            if trimmed.starts_with('|') {
                let mut rows = vec![table_row(trimmed)];
                while let Some(next_line) = lines.peek() {
                    let next = next_line.trim();
                    if !next.starts_with('|') {
                        break;
                    }
                    if !is_table_separator(next) {
                        rows.push(table_row(next));
                    }
                    lines.next();
                }
                blocks.push(MdBlock::Table(rows));
                continue;
            }

            let indent_len = line.len() - line.trim_start().len();
            let indent = u8::try_from(indent_len / 2).unwrap_or(0);

            if let Some((marker, content)) = list_item(trimmed) {
                blocks.push(MdBlock::List {
                    indent,
                    content: parse_inline(content),
                    marker,
                });
                continue;
            }

            blocks.push(MdBlock::Paragraph(parse_inline(line_trim_end)));
        }

        blocks
    }
}

fn header(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let content = line[hashes..].strip_prefix(' ')?;
    Some((u8::try_from(hashes).unwrap_or(6), content))
}

fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next().filter(|c| matches!(c, '-' | '*' | '_')) else {
        return false;
    };
    let mut count = 1;
    for c in marks {
        if c != first {
            return false;
        }
        count += 1;
    }
    count >= 3
}

fn list_item(line: &str) -> Option<(ListMarker, &str)> {
    for bullet in ['-', '*', '+'] {
        if let Some(content) = line
            .strip_prefix(bullet)
            .and_then(|rest| rest.strip_prefix(' '))
        {
            return Some((ListMarker::Bullet(bullet), content));
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let content = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().ok()?;
    Some((ListMarker::Ordered(number), content))
}

fn table_row(line: &str) -> Vec<Vec<MdInline>> {
    line.trim_matches('|')
        .split('|')
        .map(|cell| parse_inline(cell.trim()))
        .collect()
}

fn is_table_separator(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

fn parse_inline(input: &str) -> Vec<MdInline> {
    InlineScanner::new(input).scan()
}

fn text(raw: &str) -> MdInline {
    MdInline::Text(raw.replace("&nbsp;", "\u{a0}"))
}

/// Single pass over one line of inline markdown.
///
/// `pending` is the byte offset where the current run of plain text began.
struct InlineScanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    pending: usize,
    out: Vec<MdInline>,
}

impl<'a> InlineScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pending: 0,
            out: Vec::new(),
        }
    }

    fn scan(mut self) -> Vec<MdInline> {
        let input = self.input;
        while let Some((idx, ch)) = self.chars.next() {
            let rest = &input[idx..];
            match ch {
                '*' if rest.starts_with("***") => {
                    self.delimited(idx, "***", |c| MdInline::Italic(vec![MdInline::Bold(c)]));
                }
                '*' if rest.starts_with("**") => self.delimited(idx, "**", MdInline::Bold),
                '*' => self.delimited(idx, "*", MdInline::Italic),
                '_' if rest.starts_with("__") => self.delimited(idx, "__", MdInline::Bold),
                '_' => self.delimited(idx, "_", MdInline::Italic),
                '~' if rest.starts_with("~~") => self.delimited(idx, "~~", MdInline::Strike),
                '`' => self.code(idx),
                '[' => self.link(idx),
                '\\' => self.escape(idx),
                _ => {}
            }
        }

        if self.pending < input.len() {
            self.out.push(text(&input[self.pending..]));
        }
        self.out
    }

    /// Emits the plain text before `idx`.
    fn flush(&mut self, idx: usize) {
        let input = self.input;
        if idx > self.pending {
            self.out.push(text(&input[self.pending..idx]));
        }
    }

    /// Continues scanning at byte `end`.
    fn resume_at(&mut self, end: usize) {
        while self.chars.next_if(|&(i, _)| i < end).is_some() {}
        self.pending = end;
    }

    fn delimited(&mut self, idx: usize, delimiter: &str, wrap: impl Fn(Vec<MdInline>) -> MdInline) {
        let input = self.input;
        let inner_start = idx + delimiter.len();
        let Some(len) = input[inner_start..].find(delimiter) else {
            return;
        };

        self.flush(idx);
        let inner = &input[inner_start..inner_start + len];
        self.out.push(wrap(parse_inline(inner)));
        self.resume_at(inner_start + len + delimiter.len());
    }

    fn code(&mut self, idx: usize) {
        let input = self.input;
        let Some(len) = input[idx + 1..].find('`') else {
            return;
        };

        self.flush(idx);
        let end = idx + 1 + len;
        self.out.push(MdInline::Code(input[idx + 1..end].to_string()));
        self.resume_at(end + 1);
    }

    fn link(&mut self, idx: usize) {
        let input = self.input;
        let rest = &input[idx..];
        let Some(close) = rest.find("](") else {
            return;
        };
        let Some(url_len) = rest[close + 2..].find(')') else {
            return;
        };

        self.flush(idx);
        self.out.push(MdInline::Link {
            text: parse_inline(&rest[1..close]),
            url: rest[close + 2..close + 2 + url_len].to_string(),
        });
        self.resume_at(idx + close + 2 + url_len + 1);
    }

    fn escape(&mut self, idx: usize) {
        self.flush(idx);
        match self.chars.next() {
            Some((_, escaped)) => {
                self.out.push(MdInline::Text(escaped.to_string()));
                self.pending = idx + 1 + escaped.len_utf8();
            }
            None => {
                self.out.push(MdInline::Text("\\".to_string()));
                self.pending = idx + 1;
            }
        }
    }
}
