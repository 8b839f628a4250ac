//! Use case implementations.

mod build_presentation_use_case;

pub use build_presentation_use_case::BuildPresentationUseCase;
