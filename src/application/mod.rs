//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Markdown, highlighting and slide construction services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{DeckDto, SlideDto, SlideKindDto};
pub use services::markdown_service::MarkdownService;
pub use services::slide_factory::SlideFactory;
pub use use_cases::BuildPresentationUseCase;
