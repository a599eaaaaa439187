//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `record` - Wire-shaped catalog entries and the flattened `CaseStudy`
//! - `view_state` - Search/filter/pagination state and its pure transitions
//! - `ModalStack` - Modal overlay management

pub mod modal;
pub mod record;
pub mod ui;
pub mod view_state;

// Re-export commonly used types
pub use record::{normalize, CaseStudy, Catalog, COLUMN_HEADERS};
pub use view_state::{Effect, FilterSemantics, ViewOp, ViewState, ITEMS_PER_PAGE};
