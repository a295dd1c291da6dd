//! UI components

pub mod dialog;
mod dialog_helpers;
pub mod help;
pub mod status;
pub mod theme;
pub mod tree;

pub use dialog::ConfirmDialog;
pub use dialog::ErrorDialog;
pub use dialog::FuzzyMenuDialog;
pub use dialog::InputDialog;
pub use dialog::ListDialog;
pub use help::HelpOverlay;
pub use status::StatusBar;
pub use theme::Theme;
pub use theme::ThemeConfig;
pub use tree::TreeWidget;
