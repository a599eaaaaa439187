//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/fetch polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Start a fresh catalog fetch
    Refetch,
    /// Write the visible records to an xlsx workbook
    ExportXlsx,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to the search term
    SearchInput(char),
    /// Remove last character from the search term
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open location filter dialog
    OpenLocationFilter,
    /// Set location filter to a value
    SetLocationFilter(String),
    /// Clear location filter
    ClearLocationFilter,
    /// Open industry filter dialog
    OpenIndustryFilter,
    /// Set industry filter to a value
    SetIndustryFilter(String),
    /// Clear industry filter
    ClearIndustryFilter,
    /// Switch between composed and legacy filter semantics
    ToggleFilterSemantics,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next page
    NextPage,
    /// Move to previous page
    PrevPage,
    /// Jump to first page
    FirstPage,
    /// Jump to last page
    LastPage,
    /// Scroll the table left
    ScrollLeft,
    /// Scroll the table right
    ScrollRight,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Refetch => write!(f, "Refetch"),
            Action::ExportXlsx => write!(f, "ExportXlsx"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenLocationFilter => write!(f, "OpenLocationFilter"),
            Action::SetLocationFilter(value) => write!(f, "SetLocationFilter({})", value),
            Action::ClearLocationFilter => write!(f, "ClearLocationFilter"),
            Action::OpenIndustryFilter => write!(f, "OpenIndustryFilter"),
            Action::SetIndustryFilter(value) => write!(f, "SetIndustryFilter({})", value),
            Action::ClearIndustryFilter => write!(f, "ClearIndustryFilter"),
            Action::ToggleFilterSemantics => write!(f, "ToggleFilterSemantics"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::ScrollLeft => write!(f, "ScrollLeft"),
            Action::ScrollRight => write!(f, "ScrollRight"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
