//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod browser;
pub mod filter_dialog;
pub mod help_dialog;
pub mod layout;
pub mod loading;
pub mod table;

pub use browser::{draw_browser_screen, max_h_scroll, BrowserComponent, BrowserRenderContext};
pub use filter_dialog::FilterDialog;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_browser_layout, centered_popup, BrowserLayout};
pub use loading::LoadingComponent;
pub use table::{build_table_lines, column_widths, table_width};
