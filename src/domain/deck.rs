//! Ordered slides with a navigation cursor.

use super::errors::DeckError;
use super::node::Node;
use super::slides::Slide;

/// Ordered slide sequence plus the active cursor.
///
/// The cursor is never clamped; the active slide is `cursor mod len` with a
/// non-negative result. A step that would overflow `i64` first folds the
/// cursor into `0..len`, which keeps the active slide unchanged.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    slides: Vec<Slide>,
    cursor: i64,
}

impl Presentation {
    /// Creates an empty presentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Moves the cursor back by one.
    pub fn previous(&mut self) {
        self.step(-1);
    }

    /// Moves the cursor forward by one.
    pub fn next(&mut self) {
        self.step(1);
    }

    fn step(&mut self, delta: i64) {
        self.cursor = match self.cursor.checked_add(delta) {
            Some(cursor) => cursor,
            None => self.folded_cursor() + delta,
        };
    }

    fn folded_cursor(&self) -> i64 {
        match i64::try_from(self.slides.len()) {
            Ok(len) if len > 0 => self.cursor.rem_euclid(len),
            _ => 0,
        }
    }

    /// Sets the cursor.
    pub fn go_to(&mut self, cursor: i64) {
        self.cursor = cursor;
    }

    /// Raw cursor value.
    #[must_use]
    pub const fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Slides in display order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns whether there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide, `None` without slides.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let len = i64::try_from(self.slides.len()).ok().filter(|&len| len > 0)?;
        usize::try_from(self.cursor.rem_euclid(len)).ok()
    }

    /// Renders every slide, showing only the active one.
    ///
    /// Inactive slides stay in the tree with `display: none`. Each rendered
    /// slide gets its sequence index as id.
    ///
    /// # Errors
    /// Returns [`DeckError::EmptyPresentation`] when no slide was added.
    pub fn render(&self) -> Result<Node, DeckError> {
        let active = self.active_index().ok_or(DeckError::EmptyPresentation)?;

        let children = self
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let mut node = slide.render(index);
                let display = if index == active { "block" } else { "none" };
                node.style.set("display", display);
                node.id = Some(index.to_string());
                node
            })
            .collect();

        Ok(Node::container(children)
            .with_class("d-flex flex-row")
            .with_style("width", "100%")
            .with_style("height", "100%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slides::test_support::title;
    use test_case::test_case;

    fn deck(count: usize) -> Presentation {
        let mut deck = Presentation::new();
        for i in 0..count {
            deck.add_slide(title(&format!("slide {i}")));
        }
        deck
    }

    fn visible(root: &Node) -> Vec<usize> {
        root.children
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_hidden())
            .map(|(i, _)| i)
            .collect()
    }

    #[test_case(5, 0, 0 ; "start")]
    #[test_case(5, 3, 3 ; "inside")]
    #[test_case(5, 5, 0 ; "wraps_once")]
    #[test_case(5, 12, 2 ; "wraps_twice")]
    #[test_case(1, 7, 0 ; "single_slide")]
    fn test_next_selects_k_mod_n(count: usize, steps: usize, expected: usize) {
        let mut deck = deck(count);
        for _ in 0..steps {
            deck.next();
        }

        let root = deck.render().expect("non-empty");
        assert_eq!(root.children.len(), count);
        assert_eq!(visible(&root), vec![expected]);
        assert_eq!(root.children[expected].style.get("display"), Some("block"));
    }

    #[test]
    fn test_previous_on_fresh_deck_selects_last() {
        let mut deck = deck(5);
        deck.previous();
        assert_eq!(deck.cursor(), -1);
        assert_eq!(deck.active_index(), Some(4));
        assert_eq!(visible(&deck.render().expect("non-empty")), vec![4]);
    }

    #[test]
    fn test_previous_then_next_restores_index() {
        let mut deck = deck(3);
        deck.next();
        let before = deck.active_index();

        deck.previous();
        deck.next();
        assert_eq!(deck.active_index(), before);

        deck.next();
        deck.previous();
        assert_eq!(deck.active_index(), before);
    }

    #[test]
    fn test_far_negative_cursor_stays_in_range() {
        let mut deck = deck(4);
        deck.go_to(-4001);
        assert_eq!(deck.active_index(), Some(3));
    }

    #[test_case(5, i64::MAX, 2, 3 ; "next past i64 max")]
    #[test_case(4, i64::MAX, 3, 0 ; "next past i64 max wraps")]
    fn test_next_at_cursor_limit_keeps_counting(
        count: usize,
        start: i64,
        at: usize,
        after: usize,
    ) {
        let mut deck = deck(count);
        deck.go_to(start);
        assert_eq!(deck.active_index(), Some(at));

        deck.next();
        assert_eq!(deck.active_index(), Some(after));
        assert_eq!(visible(&deck.render().expect("non-empty")), vec![after]);
    }

    #[test]
    fn test_previous_at_cursor_limit_keeps_counting() {
        let mut deck = deck(5);
        deck.go_to(i64::MIN);
        // i64::MIN mod 5 == 2
        assert_eq!(deck.active_index(), Some(2));

        deck.previous();
        assert_eq!(deck.active_index(), Some(1));
        deck.previous();
        assert_eq!(deck.active_index(), Some(0));
    }

    #[test]
    fn test_steps_on_empty_deck_at_limit_do_not_overflow() {
        let mut deck = Presentation::new();
        deck.go_to(i64::MAX);
        deck.next();
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.active_index(), None);
    }

    #[test]
    fn test_rendered_ids_follow_sequence_index() {
        let root = deck(3).render().expect("non-empty");
        let ids: Vec<_> = root.children.iter().map(|c| c.id.clone()).collect();
        assert_eq!(
            ids,
            vec![Some("0".into()), Some("1".into()), Some("2".into())]
        );
        assert!(root.has_class("flex-row"));
    }

    #[test]
    fn test_hidden_slides_remain_in_tree() {
        let mut deck = deck(3);
        deck.next();
        let root = deck.render().expect("non-empty");
        assert!(root.children[0].is_hidden());
        assert!(root.children[0].text_content().contains("slide 0"));
    }

    #[test]
    fn test_empty_presentation_fails_to_render() {
        let deck = Presentation::new();
        assert!(deck.is_empty());
        assert_eq!(deck.active_index(), None);
        let err = deck.render().expect_err("empty");
        assert_eq!(err, DeckError::EmptyPresentation);
        assert!(err.is_precondition());
    }

    #[test]
    fn test_slides_keep_insertion_order() {
        let deck = deck(3);
        let titles: Vec<_> = deck
            .slides()
            .iter()
            .map(|s| s.content().children[0].text_content())
            .collect();
        assert_eq!(titles, vec!["slide 0", "slide 1", "slide 2"]);
    }
}
