#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::application::services::markdown_parser::{
        ListMarker, MdBlock, MdInline, parse_markdown,
    };
    use crate::application::services::markdown_service::MarkdownService;
    use crate::application::services::syntax_highlighting::PlainHighlighter;
    use crate::domain::node::NodeKind;
    use crate::domain::ports::MarkdownPort;

    fn service() -> MarkdownService {
        MarkdownService::with_highlighter(Arc::new(PlainHighlighter))
    }

    #[test]
    fn test_parse_simple_bold() {
        let blocks = parse_markdown("Hello **world**");

        match &blocks[0] {
            MdBlock::Paragraph(inlines) => {
                assert_eq!(inlines.len(), 2);
                assert_eq!(inlines[0], MdInline::Text("Hello ".into()));
                assert_eq!(
                    inlines[1],
                    MdInline::Bold(vec![MdInline::Text("world".into())])
                );
            }
            other => panic!("Expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_headers() {
        let blocks = parse_markdown("### Header 3\nText");
        assert_eq!(blocks.len(), 2);

        if let MdBlock::Header(level, inlines) = &blocks[0] {
            assert_eq!(*level, 3);
            assert_eq!(inlines[0], MdInline::Text("Header 3".into()));
        } else {
            panic!("Expected header");
        }
    }

    #[test]
    fn test_parse_nested_styles() {
        let blocks = parse_markdown("***Bold Italic***");

        assert_eq!(
            blocks[0],
            MdBlock::Paragraph(vec![MdInline::Italic(vec![MdInline::Bold(vec![
                MdInline::Text("Bold Italic".into())
            ])])])
        );
    }

    #[test]
    fn test_parse_fenced_code_with_language() {
        let blocks = parse_markdown("```json\n{\n  \"a\": 1\n}\n```\nafter");

        assert_eq!(
            blocks[0],
            MdBlock::CodeBlock {
                lang: Some("json".into()),
                code: "{\n  \"a\": 1\n}".into(),
            }
        );
        assert!(matches!(blocks[1], MdBlock::Paragraph(_)));
    }

    #[test]
    fn test_parse_lists() {
        let blocks = parse_markdown("- first\n  * nested\n3. third");

        assert!(matches!(
            &blocks[0],
            MdBlock::List { indent: 0, marker: ListMarker::Bullet('-'), .. }
        ));
        assert!(matches!(
            &blocks[1],
            MdBlock::List { indent: 1, marker: ListMarker::Bullet('*'), .. }
        ));
        assert!(matches!(
            &blocks[2],
            MdBlock::List { marker: ListMarker::Ordered(3), .. }
        ));
    }

    #[test]
    fn test_parse_table_skips_separator_row() {
        let blocks = parse_markdown("| Scorer | R@10 |\n| --- | --- |\n| BM-25 | 0.59 |");

        let MdBlock::Table(rows) = &blocks[0] else {
            panic!("Expected table");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], vec![MdInline::Text("BM-25".into())]);
    }

    #[test]
    fn test_nbsp_entity_becomes_non_breaking_space() {
        let blocks = parse_markdown("R@10&nbsp;&nbsp;");
        assert_eq!(
            blocks[0],
            MdBlock::Paragraph(vec![MdInline::Text("R@10\u{a0}\u{a0}".into())])
        );
    }

    #[test]
    fn test_parse_link_and_rule() {
        let blocks = parse_markdown("see [docs](https://example.com)\n---");

        let MdBlock::Paragraph(inlines) = &blocks[0] else {
            panic!("Expected paragraph");
        };
        assert_eq!(
            inlines[1],
            MdInline::Link {
                text: vec![MdInline::Text("docs".into())],
                url: "https://example.com".into(),
            }
        );
        assert_eq!(blocks[1], MdBlock::Rule);
    }

    #[test]
    fn test_unclosed_delimiters_stay_text() {
        let blocks = parse_markdown("2 * 3 and `tick");
        let MdBlock::Paragraph(inlines) = &blocks[0] else {
            panic!("Expected paragraph");
        };
        let text: String = inlines
            .iter()
            .map(|i| match i {
                MdInline::Text(t) => t.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(text, "2 * 3 and `tick");
    }

    #[test]
    fn test_service_renders_styled_spans() {
        let node = service().render("Hello **world**");

        assert!(node.has_class("markdown-body"));
        let paragraph = &node.children[0];
        assert_eq!(paragraph.kind, NodeKind::Inline);
        assert_eq!(paragraph.text_content(), "Hello world");
        assert_eq!(paragraph.children[1].style.get("font-weight"), Some("700"));
        assert_eq!(paragraph.children[0].style.get("font-weight"), None);
    }

    #[test]
    fn test_service_renders_code_block_lines() {
        let node = service().render("```python\nprint(1)\nprint(2)\n```");

        let code = &node.children[0];
        assert!(code.has_class("code-block"));
        assert_eq!(code.children.len(), 2);
        assert_eq!(code.children[1].text_content(), "print(2)");
    }

    #[test]
    fn test_service_aligns_table_columns() {
        let node = service().render("| a | bb |\n|---|---|\n| ccc | d |");

        let table = &node.children[0];
        assert!(table.has_class("table"));
        let header = table.children[0].text_content();
        let body = table.children[1].text_content();
        assert_eq!(header.find('│'), body.find('│'));
        assert_eq!(table.children[0].children[0].style.get("font-weight"), Some("700"));
    }

    #[test]
    fn test_service_numbered_list_prefix() {
        let node = service().render("1. one\n2. two");
        assert_eq!(node.children[0].text_content(), "1. one");
        assert_eq!(node.children[1].text_content(), "2. two");
    }
}
