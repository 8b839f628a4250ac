#[cfg(feature = "image")]
mod image_state;
#[cfg(not(feature = "image"))]
mod image_state_stub;
mod node_view;

#[cfg(feature = "image")]
pub use image_state::ImageManager;
#[cfg(not(feature = "image"))]
pub use image_state_stub::ImageManager;

pub use node_view::{ImageRenderer, NodeView, ScrollOffsets};
