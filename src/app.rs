//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. App owns
//! the view state, applies transitions to it, and executes the effects they
//! request; it contains no filter logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_browser_screen, max_h_scroll, BrowserComponent, BrowserRenderContext, FilterDialog,
    HelpDialog, LoadingComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, FilterKind};
use crate::model::{Effect, ViewOp, ViewState};
use crate::services::{self, FetchMessage, Fetcher};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Record collection, filters, and pagination
    pub view: ViewState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Background catalog fetches
    pub fetcher: Fetcher,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current config (endpoint and filter semantics)
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub loading: LoadingComponent,
    pub browser: BrowserComponent,
    pub location_dialog: FilterDialog,
    pub industry_dialog: FilterDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();

        App {
            mode: AppMode::Loading,
            view: ViewState::new(config.semantics),
            modals: ModalStack::new(),
            fetcher: Fetcher::new(),
            should_quit: false,
            status_message: None,
            // Components
            loading: LoadingComponent::new(),
            browser: BrowserComponent::new(),
            location_dialog: FilterDialog::new(FilterKind::Location),
            industry_dialog: FilterDialog::new(FilterKind::Industry),
            help_dialog: HelpDialog::default(),
            config,
        }
    }

    /// Start one background fetch and mark the view loading
    fn start_fetch(&mut self) {
        tracing::debug!(endpoint = %self.config.endpoint, "starting catalog fetch");
        self.fetcher.spawn(&self.config.endpoint);
        self.view.loading = true;
    }

    /// Apply one view transition and execute the effect it requests
    fn apply_op(&mut self, op: ViewOp) {
        let (next, effect) = std::mem::take(&mut self.view).apply(op);
        self.view = next;

        if let Some(Effect::Refetch) = effect {
            self.start_fetch();
        }
    }

    /// Drain completed fetches into the view.
    ///
    /// Completions are applied in spawn order; when fetches race, the last
    /// one applied determines the collection. Failures leave whatever the
    /// view already had.
    fn poll_fetches(&mut self) {
        for message in self.fetcher.poll() {
            match message {
                FetchMessage::Loaded(records) => {
                    tracing::debug!(count = records.len(), "catalog fetch resolved");
                    self.apply_op(ViewOp::DataLoaded(records));
                    self.mode = AppMode::Browsing;
                }
                FetchMessage::Failed(error) => {
                    tracing::warn!(error = %error, "catalog fetch failed");
                    self.apply_op(ViewOp::LoadFailed);
                    // Leave the loading screen even with nothing to show; the
                    // browser renders an empty table and r retries.
                    if self.mode == AppMode::Loading && self.fetcher.in_flight() == 0 {
                        self.mode = AppMode::Browsing;
                    }
                }
            }
        }
    }

    /// Move to a page, clamped to the valid range; no-op when already there
    fn change_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.view.total_pages().max(1));
        if clamped != self.view.page {
            self.apply_op(ViewOp::PageChanged(clamped));
        }
    }

    fn export_visible(&mut self) {
        let visible = self.view.visible();
        let count = visible.len();

        match services::export_to_file(&visible) {
            Ok(path) => {
                tracing::info!(count, path = %path.display(), "exported workbook");
                self.status_message = Some(format!(
                    "Exported {} records to {}",
                    count,
                    path.display()
                ));
            }
            Err(error) => {
                // No dialog for export failures; the log has the details.
                tracing::error!(error = %error, "xlsx export failed");
            }
        }
    }

    fn toggle_semantics(&mut self) {
        let semantics = self.view.semantics.toggled();
        self.view = std::mem::take(&mut self.view).with_semantics(semantics);

        self.config.semantics = semantics;
        if let Err(error) = self.config.save() {
            tracing::warn!(error = %error, "could not save config");
        }

        self.status_message = Some(format!("Filter semantics: {}", semantics.label()));
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.loading.init()?;
        self.start_fetch();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Loading => self.loading.handle_key_event(key),
            AppMode::Browsing => {
                if let Some(modal) = self.modals.top().copied() {
                    self.handle_modal_key_event(modal, key)
                } else if self.browser.search_mode {
                    self.handle_search_key_event(key)
                } else {
                    self.browser.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Loading {
                    self.loading.update(Action::Tick)?;
                }
                self.poll_fetches();
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Data
            // ─────────────────────────────────────────────────────────────────
            Action::Refetch => self.start_fetch(),
            Action::ExportXlsx => self.export_visible(),

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.browser.enter_search_mode(),
            Action::ExitSearchMode => self.browser.exit_search_mode(),
            Action::SearchInput(c) => {
                let mut term = self.view.search_term.clone();
                term.push(c);
                self.apply_op(ViewOp::SearchChanged(term));
            }
            Action::SearchBackspace => {
                let mut term = self.view.search_term.clone();
                term.pop();
                self.apply_op(ViewOp::SearchChanged(term));
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::OpenLocationFilter => {
                self.location_dialog
                    .set_values(self.view.location_values(), self.view.location_filter.as_deref());
                self.modals.push(Modal::LocationFilter);
            }
            Action::SetLocationFilter(value) => {
                self.apply_op(ViewOp::LocationChanged(Some(value)));
                self.modals.pop();
            }
            Action::ClearLocationFilter => {
                self.apply_op(ViewOp::LocationChanged(None));
                self.modals.pop();
            }
            Action::OpenIndustryFilter => {
                self.industry_dialog
                    .set_values(self.view.industry_values(), self.view.industry_filter.as_deref());
                self.modals.push(Modal::IndustryFilter);
            }
            Action::SetIndustryFilter(value) => {
                self.apply_op(ViewOp::IndustryChanged(Some(value)));
                self.modals.pop();
            }
            Action::ClearIndustryFilter => {
                self.apply_op(ViewOp::IndustryChanged(None));
                self.modals.pop();
            }
            Action::ToggleFilterSemantics => self.toggle_semantics(),

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => self.change_page(self.view.page.saturating_add(1)),
            Action::PrevPage => self.change_page(self.view.page.saturating_sub(1)),
            Action::FirstPage => self.change_page(1),
            Action::LastPage => self.change_page(self.view.total_pages().max(1)),
            Action::ScrollLeft => self.browser.scroll_left(),
            Action::ScrollRight => {
                let max = max_h_scroll(&self.view);
                self.browser.scroll_right(max);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Loading => self.loading.draw(frame, area)?,
            AppMode::Browsing => {
                let ctx = BrowserRenderContext {
                    view: &self.view,
                    status_message: self.status_message.as_deref(),
                    in_flight: self.fetcher.in_flight(),
                };
                draw_browser_screen(frame, area, &mut self.browser, &ctx)?;

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().copied() {
                    match modal {
                        Modal::LocationFilter => self.location_dialog.draw(frame, area)?,
                        Modal::IndustryFilter => self.industry_dialog.draw(frame, area)?,
                        Modal::Help => self.help_dialog.draw(frame, area)?,
                    }
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::LocationFilter => self.location_dialog.handle_key_event(key),
            Modal::IndustryFilter => self.industry_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }
}
