//! TUI module for the LeitnerLang client.

mod app;
pub mod theme;
mod widgets;

pub use app::App;
pub use theme::Theme;
