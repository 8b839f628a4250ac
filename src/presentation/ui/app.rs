//! Deck host shell: owns the presentation and the displayed tree.

use color_eyre::eyre::WrapErr;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::domain::deck::Presentation;
use crate::domain::errors::DeckError;
use crate::domain::keybinding::{Action, Keybind, default_keybinds};
use crate::domain::node::Node;
use crate::infrastructure::config::{AppConfig, UiConfig};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{help_line, padded_rect};
use crate::presentation::widgets::{ImageManager, NodeView, ScrollOffsets};

/// Terminal host for one presentation.
pub struct App {
    presentation: Presentation,
    displayed: Node,
    scroll: ScrollOffsets,
    images: ImageManager,
    theme: Theme,
    ui: UiConfig,
    screen_padding: u16,
    keybinds: Vec<Keybind>,
    exiting: bool,
}

impl App {
    /// # Errors
    /// Returns [`DeckError::EmptyPresentation`] when there is nothing to show.
    pub fn new(
        presentation: Presentation,
        config: &AppConfig,
        images: ImageManager,
    ) -> Result<Self, DeckError> {
        let displayed = presentation.render()?;

        Ok(Self {
            presentation,
            displayed,
            scroll: ScrollOffsets::new(),
            images,
            theme: Theme::new(&config.theme.accent_color),
            ui: config.ui.clone(),
            screen_padding: config.theme.deck.screen_padding,
            keybinds: default_keybinds(),
            exiting: false,
        })
    }

    #[must_use]
    pub const fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Tree currently on screen.
    #[must_use]
    pub const fn displayed(&self) -> &Node {
        &self.displayed
    }

    /// Applies one key press and replaces the displayed tree.
    ///
    /// # Errors
    /// Propagates [`DeckError`] from re-rendering the presentation.
    pub fn handle_key(&mut self, key_pressed: bool, key_name: &str) -> Result<EventResult, DeckError> {
        let mut result = EventResult::Continue;

        if key_pressed && let Some(action) = Action::from_key_name(key_name) {
            debug!(key = key_name, ?action, "Key dispatched");
            result = EventResult::Consumed;
            match action {
                Action::PreviousSlide => self.presentation.previous(),
                Action::NextSlide => self.presentation.next(),
                Action::FirstSlide => self.presentation.go_to(0),
                Action::LastSlide => {
                    let last = i64::try_from(self.presentation.len()).unwrap_or(i64::MAX) - 1;
                    self.presentation.go_to(last);
                }
                Action::ScrollUp => self.scroll_active(false),
                Action::ScrollDown => self.scroll_active(true),
                Action::Quit => result = EventResult::Exit,
            }
        }

        self.displayed = self.presentation.render()?;
        Ok(result)
    }

    fn scroll_active(&mut self, down: bool) {
        let Some(index) = self.presentation.active_index() else {
            return;
        };
        let offset = self.scroll.entry(index.to_string()).or_insert(0);
        *offset = if down {
            offset.saturating_add(self.ui.scroll_step)
        } else {
            offset.saturating_sub(self.ui.scroll_step)
        };
    }

    fn handle_terminal_event(&mut self, event: Event) -> Result<EventResult, DeckError> {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => {
                if EventHandler::is_quit_event(&key) {
                    return Ok(EventResult::Exit);
                }
                let name = EventHandler::key_name(&key);
                self.handle_key(true, &name)
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Ok(EventResult::Continue)
            }
            _ => Ok(EventResult::Continue),
        }
    }

    /// Handles one item of the terminal event stream.
    ///
    /// The end of the stream asks to exit; a read failure is returned.
    fn handle_stream_item(
        &mut self,
        item: Option<std::io::Result<Event>>,
    ) -> color_eyre::Result<EventResult> {
        match item {
            Some(Ok(event)) => Ok(self.handle_terminal_event(event)?),
            Some(Err(e)) => {
                warn!(error = %e, "Terminal event stream failed");
                Err(e).wrap_err("Failed to read terminal event")
            }
            None => {
                debug!("Terminal event stream closed");
                Ok(EventResult::Exit)
            }
        }
    }

    /// # Errors
    /// Returns error if reading terminal events, drawing, or re-rendering fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                item = terminal_events.next() => {
                    if self.handle_stream_item(item)? == EventResult::Exit {
                        self.exiting = true;
                    } else {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let mut area = padded_rect(self.screen_padding, frame.area());

        if self.ui.border {
            let position = match self.presentation.active_index() {
                Some(index) => format!(" {}/{} ", index + 1, self.presentation.len()),
                None => String::new(),
            };
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_style)
                .title_bottom(help_line(&self.keybinds, &self.theme))
                .title_bottom(Line::styled(position, self.theme.border_style).right_aligned());
            let inner = block.inner(area);
            frame.render_widget(block, area);
            area = inner;
        }

        let view = NodeView::new(&self.displayed)
            .scroll(&mut self.scroll)
            .images(&mut self.images)
            .badge_style(self.theme.badge_style)
            .show_badges(self.ui.show_badge);
        frame.render_widget(view, area);
    }
}
