//! UI state - presentation enums separate from domain data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// First fetch has not resolved yet
    Loading,
    /// Normal table browsing
    Browsing,
}

/// Which record field a filter dialog selects over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Location,
    Industry,
}

impl FilterKind {
    /// Dialog title
    pub fn title(&self) -> &str {
        match self {
            FilterKind::Location => "Filter by Location",
            FilterKind::Industry => "Filter by Industry",
        }
    }

    /// Label of the clear entry at the top of the dialog
    pub fn clear_label(&self) -> &str {
        match self {
            FilterKind::Location => "All Locations",
            FilterKind::Industry => "All Industries",
        }
    }
}
