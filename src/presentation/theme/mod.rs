//! Terminal colours and styles.

pub mod adapter;
pub mod background;
pub mod service;

pub use adapter::ColorConverter;
pub use background::{Background, GradientAxis};
pub use service::{Theme, parse_color, try_parse_color};
