//! Terminal rendering of slide node trees.
//!
//! Nodes carry CSS-flavoured classes and styles; this widget maps the subset
//! the deck uses onto ratatui layouts: flex rows and columns, wrapping grids,
//! percentage sizes, scroll regions, absolute badges and backgrounds.

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    StatefulWidget, Widget, Wrap,
};

use crate::domain::node::{Node, NodeKind};
use crate::domain::slides::BADGE_CLASS;
use crate::presentation::theme::{Background, try_parse_color};

/// Scroll offsets keyed by slide id.
pub type ScrollOffsets = HashMap<String, u16>;

/// Draws the pixels behind image nodes.
pub trait ImageRenderer {
    /// Draws `src` into `area`. Returns `false` when the image cannot be shown.
    fn render_image(&mut self, src: &str, area: Rect, buf: &mut Buffer) -> bool;
}

const BORDER_CLASS: &str = "border";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Column,
    Row,
    Wrap,
}

/// Style state flowing from a node to its children.
#[derive(Debug, Clone, Copy, Default)]
struct Inherited<'a> {
    style: Style,
    /// Inherited `text-align: center`.
    center_text: bool,
    /// Set by the parent's `align-items-center`; applies to this node only.
    center_self: bool,
    /// Depth of the node about to be entered; the root is 0.
    depth: usize,
    /// Id of the enclosing slide, a numeric id on a child of the root.
    scroll_key: Option<&'a str>,
}

impl<'a> Inherited<'a> {
    fn enter(self, node: &'a Node) -> Self {
        let scroll_key = match node.id.as_deref() {
            Some(id) if self.depth == 1 && id.parse::<usize>().is_ok() => Some(id),
            _ => self.scroll_key,
        };
        Self {
            style: self.style.patch(node_style(node)),
            center_text: self.center_text || node.style.get("text-align") == Some("center"),
            center_self: self.center_self,
            depth: self.depth.saturating_add(1),
            scroll_key,
        }
    }

    fn for_children(self, node: &Node) -> Self {
        Self {
            center_self: node.has_class("align-items-center"),
            ..self
        }
    }

    const fn alignment(self) -> Alignment {
        if self.center_text || self.center_self {
            Alignment::Center
        } else {
            Alignment::Left
        }
    }
}

/// Renders a [`Node`] tree into a terminal buffer.
pub struct NodeView<'a> {
    node: &'a Node,
    scroll: Option<&'a mut ScrollOffsets>,
    images: Option<&'a mut dyn ImageRenderer>,
    badge_style: Style,
    show_badges: bool,
}

impl<'a> NodeView<'a> {
    #[must_use]
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            scroll: None,
            images: None,
            badge_style: Style::default().add_modifier(Modifier::BOLD),
            show_badges: true,
        }
    }

    /// Scroll offsets read for, and clamped into, scrollable regions.
    #[must_use]
    pub fn scroll(mut self, scroll: &'a mut ScrollOffsets) -> Self {
        self.scroll = Some(scroll);
        self
    }

    #[must_use]
    pub fn images(mut self, images: &'a mut dyn ImageRenderer) -> Self {
        self.images = Some(images);
        self
    }

    #[must_use]
    pub const fn badge_style(mut self, style: Style) -> Self {
        self.badge_style = style;
        self
    }

    #[must_use]
    pub const fn show_badges(mut self, show: bool) -> Self {
        self.show_badges = show;
        self
    }

    fn is_drawn(&self, node: &Node) -> bool {
        !node.is_hidden() && (self.show_badges || !node.has_class(BADGE_CLASS))
    }

    fn draw(&mut self, node: &'a Node, area: Rect, buf: &mut Buffer, parent: Inherited<'a>) {
        if !self.is_drawn(node) || area.is_empty() {
            return;
        }

        let ctx = parent.enter(node);
        let area = sized_area(node, area);
        paint_background(node, area, buf);

        match &node.kind {
            NodeKind::Container => self.draw_container(node, area, buf, ctx),
            NodeKind::Image { src } => self.draw_image(node, src, area, buf),
            _ => {
                let lines = node_lines(node, ctx, area.width);
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(area, buf);
            }
        }
    }

    fn draw_container(&mut self, node: &'a Node, area: Rect, buf: &mut Buffer, ctx: Inherited<'a>) {
        let mut inner = area;
        if node.has_class(BORDER_CLASS) {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(ctx.style);
            inner = block.inner(area);
            block.render(area, buf);
        }

        let children = ctx.for_children(node);

        if is_scrollable(node) {
            self.draw_scrollable(node, inner, buf, children);
            return;
        }

        let (flow, absolute): (Vec<&'a Node>, Vec<&'a Node>) = node
            .children
            .iter()
            .filter(|child| self.is_drawn(child))
            .partition(|child| child.style.get("position") != Some("absolute"));

        if !flow.is_empty() {
            match flow_of(node) {
                Flow::Column => self.draw_column(node, &flow, inner, buf, children),
                Flow::Row => self.draw_row(node, &flow, inner, buf, children),
                Flow::Wrap => self.draw_wrapped(node, &flow, inner, buf, children),
            }
        }

        for child in absolute {
            self.draw_absolute(child, area, buf, children);
        }
    }

    fn draw_column(
        &mut self,
        node: &Node,
        flow: &[&'a Node],
        area: Rect,
        buf: &mut Buffer,
        ctx: Inherited<'a>,
    ) {
        let constraints: Vec<Constraint> = flow
            .iter()
            .map(|child| {
                if wants_fill(child) {
                    Constraint::Fill(1)
                } else {
                    Constraint::Length(measure_height(child, area.width))
                }
            })
            .collect();

        let flex = if node.has_class("justify-content-center") {
            Flex::Center
        } else {
            Flex::Start
        };

        let rects = Layout::vertical(constraints)
            .flex(flex)
            .spacing(gap(node))
            .split(area);

        for (child, rect) in flow.iter().copied().zip(rects.iter()) {
            self.draw(child, *rect, buf, ctx);
        }
    }

    fn draw_row(
        &mut self,
        node: &Node,
        flow: &[&'a Node],
        area: Rect,
        buf: &mut Buffer,
        ctx: Inherited<'a>,
    ) {
        let rects = Layout::horizontal(vec![Constraint::Fill(1); flow.len()])
            .spacing(gap(node).saturating_mul(2))
            .split(area);

        let center_cross = node.has_class("align-items-center");
        for (child, rect) in flow.iter().copied().zip(rects.iter()) {
            let mut rect = *rect;
            if center_cross && !wants_fill(child) {
                let height = measure_height(child, rect.width).min(rect.height);
                rect.y += (rect.height - height) / 2;
                rect.height = height;
            }
            self.draw(child, rect, buf, ctx);
        }
    }

    fn draw_wrapped(
        &mut self,
        node: &Node,
        flow: &[&'a Node],
        area: Rect,
        buf: &mut Buffer,
        ctx: Inherited<'a>,
    ) {
        let per_row = tiles_per_row(flow.first().and_then(|tile| tile.style.get("flex")))
            .clamp(1, flow.len());
        let row_count = flow.len().div_ceil(per_row);
        let spacing = gap(node);

        let rows = Layout::vertical(vec![Constraint::Fill(1); row_count])
            .spacing(spacing)
            .split(area);

        for (tiles, row) in flow.chunks(per_row).zip(rows.iter()) {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); per_row])
                .spacing(spacing.saturating_mul(2))
                .split(*row);
            for (tile, cell) in tiles.iter().copied().zip(cells.iter()) {
                self.draw(tile, *cell, buf, ctx);
            }
        }
    }

    fn draw_scrollable(&mut self, node: &'a Node, area: Rect, buf: &mut Buffer, ctx: Inherited<'a>) {
        if area.is_empty() {
            return;
        }

        let mut lines = Vec::new();
        let blank_between = gap(node) > 0;
        for child in node.children.iter().filter(|child| self.is_drawn(child)) {
            if blank_between && !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.extend(node_lines(child, ctx.enter(child), area.width));
        }

        let text_area = Rect {
            width: area.width.saturating_sub(1),
            ..area
        };
        let total = wrapped_height(&lines, text_area.width);
        let max_offset = total.saturating_sub(text_area.height);

        let offset = match (ctx.scroll_key, self.scroll.as_deref_mut()) {
            (Some(key), Some(scroll)) => {
                let offset = scroll.get(key).copied().unwrap_or(0).min(max_offset);
                if offset > 0 || scroll.contains_key(key) {
                    scroll.insert(key.to_string(), offset);
                }
                offset
            }
            _ => 0,
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .render(text_area, buf);

        if max_offset > 0 {
            let mut state =
                ScrollbarState::new(usize::from(max_offset)).position(usize::from(offset));
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(ctx.style)
                .render(area, buf, &mut state);
        }
    }

    fn draw_absolute(&mut self, node: &'a Node, area: Rect, buf: &mut Buffer, ctx: Inherited<'a>) {
        let text = format!(" {} ", node.text_content());
        let width = u16::try_from(unicode_width::UnicodeWidthStr::width(text.as_str()))
            .unwrap_or(u16::MAX)
            .min(area.width);
        if width == 0 || area.height == 0 {
            return;
        }

        let top = css_offset(node.style.get("top"), area.height, 1);
        let left = css_offset(node.style.get("left"), area.height, 2);
        let rect = Rect {
            x: area.x + left.min(area.width - width),
            y: area.y + top.min(area.height - 1),
            width,
            height: 1,
        };

        let style = if node.has_class(BADGE_CLASS) {
            self.badge_style
        } else {
            ctx.enter(node).style
        };
        Paragraph::new(Line::styled(text, style)).render(rect, buf);
    }

    fn draw_image(&mut self, node: &Node, src: &str, area: Rect, buf: &mut Buffer) {
        let mut inner = area;
        if border_thickness(node) > 0.0 {
            let block = Block::bordered();
            inner = block.inner(area);
            block.render(area, buf);
        }

        let drawn = self
            .images
            .as_deref_mut()
            .is_some_and(|images| images.render_image(src, inner, buf));
        if drawn {
            return;
        }

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" image ");
        let placeholder = block.inner(inner);
        block.render(inner, buf);

        let height = placeholder.height.min(1);
        let line_area = Rect {
            y: placeholder.y + placeholder.height.saturating_sub(height) / 2,
            height,
            ..placeholder
        };
        Paragraph::new(Line::from(format!("[image: {src}]")).alignment(Alignment::Center))
            .render(line_area, buf);
    }
}

impl Widget for NodeView<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let root = self.node;
        self.draw(root, area, buf, Inherited::default());
    }
}

fn flow_of(node: &Node) -> Flow {
    if node.has_class("flex-wrap") {
        Flow::Wrap
    } else if node.has_class("flex-column") {
        Flow::Column
    } else if node.has_class("flex-row") || node.has_class("d-flex") {
        Flow::Row
    } else {
        Flow::Column
    }
}

fn is_scrollable(node: &Node) -> bool {
    ["overflow-y", "overflow"]
        .iter()
        .any(|property| matches!(node.style.get(property), Some("scroll" | "auto")))
}

/// Whether a node takes the remaining space instead of its measured height.
fn wants_fill(node: &Node) -> bool {
    match node.kind {
        NodeKind::Image { .. } => true,
        NodeKind::Container => {
            node.style.get("height") == Some("100%")
                || node.style.get("flex").is_some()
                || is_scrollable(node)
                || node.children.iter().filter(|c| !c.is_hidden()).any(wants_fill)
        }
        _ => false,
    }
}

fn gap(node: &Node) -> u16 {
    node.class_name
        .split_whitespace()
        .find_map(|class| class.strip_prefix("gap-"))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// Tiles per grid row from a `flex: grow shrink basis%` value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tiles_per_row(flex: Option<&str>) -> usize {
    let basis = flex
        .and_then(|flex| flex.split_whitespace().last())
        .and_then(|basis| basis.trim_end_matches('%').parse::<f64>().ok())
        .filter(|basis| *basis > 0.0);
    match basis {
        Some(basis) => (100.0 / basis).floor().max(1.0) as usize,
        None => 1,
    }
}

/// Parses `N%`, `Nvh` or `Nvw` as a fraction.
fn css_fraction(value: &str) -> Option<f32> {
    let number = value
        .strip_suffix('%')
        .or_else(|| value.strip_suffix("vh"))
        .or_else(|| value.strip_suffix("vw"))?;
    number.trim().parse::<f32>().ok().map(|n| n / 100.0)
}

/// Offset in cells; `scale` accounts for cells being taller than wide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn css_offset(value: Option<&str>, extent: u16, scale: u16) -> u16 {
    value
        .and_then(css_fraction)
        .map_or(0, |fraction| (fraction * f32::from(extent) * f32::from(scale)) as u16)
}

/// Shrinks `area` by percentage width and height, keeping it centered.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sized_area(node: &Node, area: Rect) -> Rect {
    let fraction = |properties: [&str; 2]| {
        properties
            .iter()
            .filter_map(|property| node.style.get(property).and_then(css_fraction))
            .fold(1.0_f32, f32::min)
            .clamp(0.0, 1.0)
    };

    let width = (f32::from(area.width) * fraction(["width", "max-width"])).round() as u16;
    let height = (f32::from(area.height) * fraction(["height", "max-height"])).round() as u16;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn paint_background(node: &Node, area: Rect, buf: &mut Buffer) {
    let Some(background) = node.style.get("background").and_then(Background::parse) else {
        return;
    };
    let area = area.intersection(buf.area);
    for y in 0..area.height {
        for x in 0..area.width {
            let color = background.color_at(x, y, area.width, area.height);
            buf[(area.x + x, area.y + y)].set_bg(color);
        }
    }
}

fn border_thickness(node: &Node) -> f32 {
    node.style
        .get("border")
        .and_then(|border| border.split_whitespace().last())
        .and_then(|width| width.trim_end_matches("rem").trim_end_matches("px").parse().ok())
        .unwrap_or(0.0)
}

/// Terminal style for a node's own CSS properties.
fn node_style(node: &Node) -> Style {
    let mut style = Style::default();

    if let Some(color) = node.style.get("color").and_then(try_parse_color) {
        style = style.fg(color);
    }
    if let Some(Background::Solid(color)) = node.style.get("background").and_then(Background::parse) {
        style = style.bg(color);
    }

    match node.style.get("font-weight") {
        Some("bold" | "bolder") => style = style.add_modifier(Modifier::BOLD),
        Some(weight) => match weight.parse::<u16>() {
            Ok(w) if w >= 600 => style = style.add_modifier(Modifier::BOLD),
            Ok(w) if w <= 300 => style = style.add_modifier(Modifier::DIM),
            _ => {}
        },
        None => {}
    }

    let large = node.style.get("font-size").is_some_and(|size| {
        size == "large"
            || size
                .strip_suffix("rem")
                .and_then(|rem| rem.parse::<f32>().ok())
                .is_some_and(|rem| rem >= 1.5)
    });
    if large {
        style = style.add_modifier(Modifier::BOLD);
    }

    if node.style.get("font-style") == Some("italic") {
        style = style.add_modifier(Modifier::ITALIC);
    }
    match node.style.get("text-decoration") {
        Some("underline") => style = style.add_modifier(Modifier::UNDERLINED),
        Some("line-through") => style = style.add_modifier(Modifier::CROSSED_OUT),
        _ => {}
    }

    style
}

/// Flattens a node into styled lines of text.
fn node_lines(node: &Node, ctx: Inherited<'_>, width: u16) -> Vec<Line<'static>> {
    if node.is_hidden() {
        return Vec::new();
    }

    let alignment = ctx.alignment();
    let mut lines = match &node.kind {
        NodeKind::Text { text } => text
            .split('\n')
            .map(|part| Line::styled(part.to_string(), ctx.style))
            .collect(),
        NodeKind::Inline => {
            let mut lines = vec![Line::default()];
            for child in &node.children {
                push_spans(child, ctx.style, &mut lines);
            }
            lines
        }
        NodeKind::List { numbered } => node
            .children
            .iter()
            .filter(|item| !item.is_hidden())
            .enumerate()
            .flat_map(|(i, item)| {
                let marker = if *numbered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let mut item_lines = node_lines(item, ctx.enter(item), width);
                match item_lines.first_mut() {
                    Some(first) => first.spans.insert(0, Span::styled(marker, ctx.style)),
                    None => item_lines.push(Line::styled(marker, ctx.style)),
                }
                item_lines
            })
            .collect(),
        NodeKind::Rule => vec![Line::styled("─".repeat(usize::from(width)), ctx.style)],
        NodeKind::Image { src } => vec![Line::styled(format!("[image: {src}]"), ctx.style)],
        NodeKind::Container => {
            let children = ctx.for_children(node);
            node.children
                .iter()
                .flat_map(|child| node_lines(child, children.enter(child), width))
                .collect()
        }
    };

    for line in &mut lines {
        if line.alignment.is_none() {
            line.alignment = Some(alignment);
        }
    }
    lines
}

fn push_spans(node: &Node, style: Style, lines: &mut Vec<Line<'static>>) {
    if node.is_hidden() {
        return;
    }
    let style = style.patch(node_style(node));

    if let Some(text) = node.as_text() {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if let Some(line) = lines.last_mut() {
                line.spans.push(Span::styled(part.to_string(), style));
            }
        }
        return;
    }

    for child in &node.children {
        push_spans(child, style, lines);
    }
}

fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Rows a node needs at `width` when laid out at its natural height.
fn measure_height(node: &Node, width: u16) -> u16 {
    if node.is_hidden() {
        return 0;
    }
    match node.kind {
        NodeKind::Image { .. } => 3,
        NodeKind::Container => {
            let border = if node.has_class(BORDER_CLASS) { 2 } else { 0 };
            let inner_width = width.saturating_sub(border);
            let visible: Vec<&Node> = node
                .children
                .iter()
                .filter(|c| !c.is_hidden() && c.style.get("position") != Some("absolute"))
                .collect();
            let spacing = gap(node);

            let content = match flow_of(node) {
                Flow::Row => {
                    let count = u16::try_from(visible.len().max(1)).unwrap_or(u16::MAX);
                    let cell = inner_width / count;
                    visible
                        .iter()
                        .map(|c| measure_height(c, cell))
                        .max()
                        .unwrap_or(0)
                }
                Flow::Column | Flow::Wrap => {
                    let gaps = u16::try_from(visible.len().saturating_sub(1))
                        .unwrap_or(u16::MAX)
                        .saturating_mul(spacing);
                    visible
                        .iter()
                        .map(|c| measure_height(c, inner_width))
                        .fold(gaps, u16::saturating_add)
                }
            };
            content.saturating_add(border)
        }
        _ => wrapped_height(&node_lines(node, Inherited::default(), width), width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slides::test_support::title;

    fn render(node: &Node, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        NodeView::new(node).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn all_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        (0..buf.area.height).find_map(|y| {
            row_text(buf, y)
                .find(needle)
                .map(|x| (u16::try_from(x).unwrap(), y))
        })
    }

    struct FakeImages {
        drawn: Vec<String>,
    }

    impl ImageRenderer for FakeImages {
        fn render_image(&mut self, src: &str, _area: Rect, _buf: &mut Buffer) -> bool {
            self.drawn.push(src.to_string());
            true
        }
    }

    #[test]
    fn test_text_renders_in_first_row() {
        let node = Node::container(vec![Node::text("Hello")]);
        let buf = render(&node, 20, 3);
        assert!(row_text(&buf, 0).starts_with("Hello"));
    }

    #[test]
    fn test_hidden_nodes_are_skipped() {
        let node = Node::container(vec![
            Node::text("visible"),
            Node::text("secret").with_style("display", "none"),
        ]);
        let buf = render(&node, 20, 4);
        assert!(find(&buf, "visible").is_some());
        assert!(find(&buf, "secret").is_none());
    }

    #[test]
    fn test_title_slide_is_centered_with_badge() {
        let node = title("Welcome").render(3);
        let buf = render(&node, 40, 12);

        let (x, y) = find(&buf, "Welcome").expect("title drawn");
        assert!(x > 10, "title should be centered, found at column {x}");
        assert!(y > 2 && y < 10, "title should be vertically centered, found at row {y}");

        let (_, badge_row) = find(&buf, " 3 ").expect("badge drawn");
        assert_eq!(badge_row, 11);
    }

    #[test]
    fn test_badges_can_be_hidden() {
        let node = title("Welcome").render(7);
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        NodeView::new(&node).show_badges(false).render(area, &mut buf);
        assert!(find(&buf, " 7 ").is_none());
    }

    #[test]
    fn test_row_places_children_left_to_right() {
        let node = Node::container(vec![Node::text("left"), Node::text("right")])
            .with_class("d-flex flex-row");
        let buf = render(&node, 40, 2);

        let (left_x, _) = find(&buf, "left").unwrap();
        let (right_x, _) = find(&buf, "right").unwrap();
        assert!(left_x < 20);
        assert!(right_x >= 20);
    }

    #[test]
    fn test_wrap_grid_puts_two_of_four_tiles_per_row() {
        let tiles = (1..=4)
            .map(|i| Node::text(format!("tile{i}")).with_style("flex", "1 1 45%"))
            .map(|tile| Node::container(vec![tile]).with_style("flex", "1 1 45%"))
            .collect();
        let node = Node::container(tiles).with_class("d-flex flex-wrap");
        let buf = render(&node, 40, 10);

        let (_, y1) = find(&buf, "tile1").unwrap();
        let (_, y2) = find(&buf, "tile2").unwrap();
        let (_, y3) = find(&buf, "tile3").unwrap();
        assert_eq!(y1, y2);
        assert!(y3 > y1);
    }

    #[test]
    fn test_scroll_offset_is_applied_and_clamped() {
        let lines = (0..10).map(|i| Node::text(format!("line {i}"))).collect();
        let body = Node::container(lines).with_style("overflow-y", "scroll");
        let node = Node::container(vec![Node::container(vec![body]).with_id("0")]);

        let area = Rect::new(0, 0, 20, 3);
        let mut offsets = ScrollOffsets::from([("0".to_string(), 2)]);
        let mut buf = Buffer::empty(area);
        NodeView::new(&node).scroll(&mut offsets).render(area, &mut buf);
        assert!(row_text(&buf, 0).starts_with("line 2"));

        offsets.insert("0".to_string(), 100);
        let mut buf = Buffer::empty(area);
        NodeView::new(&node).scroll(&mut offsets).render(area, &mut buf);
        assert_eq!(offsets.get("0"), Some(&7));
        assert!(row_text(&buf, 2).starts_with("line 9"));
    }

    #[test]
    fn test_nested_numeric_id_does_not_take_another_slides_offset() {
        let lines = (0..10).map(|i| Node::text(format!("line {i}"))).collect();
        let body = Node::container(lines).with_style("overflow-y", "scroll");
        let custom = Node::container(vec![body]).with_id("3");
        let node = Node::container(vec![Node::container(vec![custom]).with_id("0")]);

        let area = Rect::new(0, 0, 20, 3);
        let mut offsets = ScrollOffsets::from([("3".to_string(), 4)]);
        let mut buf = Buffer::empty(area);
        NodeView::new(&node).scroll(&mut offsets).render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("line 0"));
        assert_eq!(offsets.get("3"), Some(&4));
    }

    #[test]
    fn test_root_id_is_not_a_scroll_key() {
        let lines = (0..10).map(|i| Node::text(format!("line {i}"))).collect();
        let body = Node::container(lines).with_style("overflow-y", "scroll");
        let node = Node::container(vec![body]).with_id("0");

        let area = Rect::new(0, 0, 20, 3);
        let mut offsets = ScrollOffsets::from([("0".to_string(), 2)]);
        let mut buf = Buffer::empty(area);
        NodeView::new(&node).scroll(&mut offsets).render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("line 0"));
    }

    #[test]
    fn test_huge_gap_renders_without_overflow() {
        let tiles = || vec![Node::text("a"), Node::text("b"), Node::text("c")];
        let row = Node::container(tiles()).with_class("d-flex flex-row gap-40000");
        let grid = Node::container(tiles()).with_class("d-flex flex-wrap gap-40000");

        for node in [row, grid] {
            let buf = render(&node, 20, 4);
            assert_eq!(buf.area, Rect::new(0, 0, 20, 4));
            assert!(measure_height(&node, 20) >= 1);
        }
    }

    #[test]
    fn test_image_placeholder_without_renderer() {
        let node = Node::image("assets/cat.png");
        let buf = render(&node, 40, 5);
        assert!(all_text(&buf).contains("[image: assets/cat.png]"));
    }

    #[test]
    fn test_image_renderer_is_used() {
        let node = Node::container(vec![Node::image("cat.png")]);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut images = FakeImages { drawn: Vec::new() };
        NodeView::new(&node).images(&mut images).render(area, &mut buf);

        assert_eq!(images.drawn, vec!["cat.png".to_string()]);
        assert!(!all_text(&buf).contains("[image:"));
    }

    #[test]
    fn test_solid_background_is_painted() {
        let node = Node::container(vec![]).with_style("background", "#112233");
        let buf = render(&node, 4, 2);
        assert_eq!(buf[(3, 1)].bg, Color::Rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_numbered_list_lines() {
        let list = Node::list(vec![Node::text("Task"), Node::text("Method")], true);
        let lines = node_lines(&list, Inherited::default(), 20);
        let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["1. Task", "2. Method"]);
    }

    #[test]
    fn test_style_mapping() {
        let node = Node::text("x")
            .with_style("font-weight", "700")
            .with_style("font-style", "italic")
            .with_style("color", "#ff0000");
        let style = node_style(&node);
        assert_eq!(style.fg, Some(Color::Rgb(255, 0, 0)));
        assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
    }

    #[test]
    fn test_measure_height_wraps_text() {
        let node = Node::text("abcdefghij");
        assert_eq!(measure_height(&node, 5), 2);
        assert_eq!(measure_height(&node, 10), 1);
    }
}
