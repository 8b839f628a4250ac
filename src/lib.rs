//! Slidedeck - keyboard-driven slide decks in the terminal.
//!
//! This crate composes slides (titles, paragraphs, markdown, lists, images,
//! split and tiled layouts) into a presentation tree with clean architecture,
//! and hosts it in a TUI driven by the arrow keys.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing slides, nodes, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing config, deck file and image adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "slidedeck";
