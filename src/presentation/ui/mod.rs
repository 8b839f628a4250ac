//! UI screens.

mod app;
pub mod utils;

pub use app::App;
