//! UI layer: app shell, report panels, and widgets.

pub mod app;
pub mod panels;
pub mod widgets;

pub use app::DesktopGuiApp;
