//! Data transfer objects for the application layer.

mod deck_dto;

pub use deck_dto::{DeckDto, SlideDto, SlideKindDto};
