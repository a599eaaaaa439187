//! Browser view state: search, filters, pagination, and the pure
//! transition function that advances them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::record::CaseStudy;

/// Rows shown per table page
pub const ITEMS_PER_PAGE: usize = 15;

/// How filter operations combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSemantics {
    /// Visible records are the immutable source list with every active
    /// predicate applied together
    #[default]
    Composed,
    /// Each filter operation replaces the working collection outright,
    /// matching the historical client behavior
    Legacy,
}

impl FilterSemantics {
    /// Short name for the status bar and config file
    pub fn label(&self) -> &'static str {
        match self {
            FilterSemantics::Composed => "composed",
            FilterSemantics::Legacy => "legacy",
        }
    }

    /// The other semantics
    pub fn toggled(&self) -> Self {
        match self {
            FilterSemantics::Composed => FilterSemantics::Legacy,
            FilterSemantics::Legacy => FilterSemantics::Composed,
        }
    }
}

/// One state transition requested by the UI or the fetch poller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    /// A fetch resolved with a fresh normalized collection
    DataLoaded(Vec<CaseStudy>),
    /// A fetch failed; records stay as they were
    LoadFailed,
    /// The search term changed (every keystroke)
    SearchChanged(String),
    /// The location filter changed; None clears it
    LocationChanged(Option<String>),
    /// The industry filter changed; None clears it
    IndustryChanged(Option<String>),
    /// The current page changed (1-indexed)
    PageChanged(usize),
}

/// Side effect requested by a transition, executed by the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start one background fetch of the catalog
    Refetch,
}

/// Complete state of the browser view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    pub semantics: FilterSemantics,
    /// Full normalized collection from the last fetch, untouched by filters
    pub source: Vec<CaseStudy>,
    /// Working collection under legacy semantics; replaced by each operation
    pub working: Vec<CaseStudy>,
    pub search_term: String,
    pub location_filter: Option<String>,
    pub industry_filter: Option<String>,
    /// 1-indexed page into the visible records
    pub page: usize,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(FilterSemantics::default())
    }
}

impl ViewState {
    pub fn new(semantics: FilterSemantics) -> Self {
        ViewState {
            semantics,
            source: Vec::new(),
            working: Vec::new(),
            search_term: String::new(),
            location_filter: None,
            industry_filter: None,
            page: 1,
            loading: false,
        }
    }

    /// Apply one operation, returning the next state and at most one effect.
    ///
    /// Industry changes always request a refetch; page changes request one
    /// only under legacy semantics (the historical client refetched whenever
    /// its page changed). Every filter change resets the page to 1.
    pub fn apply(mut self, op: ViewOp) -> (ViewState, Option<Effect>) {
        match op {
            ViewOp::DataLoaded(records) => {
                self.working = records.clone();
                self.source = records;
                self.loading = false;
                (self, None)
            }

            ViewOp::LoadFailed => {
                self.loading = false;
                (self, None)
            }

            ViewOp::SearchChanged(term) => {
                if self.semantics == FilterSemantics::Legacy {
                    // First match only, or nothing; the search replaces the
                    // whole working collection.
                    let matched = self
                        .working
                        .iter()
                        .find(|record| {
                            record.customer_name.contains(&term)
                                || record.description_summary.contains(&term)
                        })
                        .cloned();
                    self.working = matched.into_iter().collect();
                }
                self.search_term = term;
                self.page = 1;
                (self, None)
            }

            ViewOp::LocationChanged(filter) => {
                if self.semantics == FilterSemantics::Legacy {
                    // Clearing maps to equality with "", which empties the
                    // collection unless a record really has no location.
                    let needle = filter.clone().unwrap_or_default();
                    self.working.retain(|record| record.location == needle);
                }
                self.location_filter = filter;
                self.page = 1;
                (self, None)
            }

            ViewOp::IndustryChanged(filter) => {
                self.industry_filter = filter;
                self.page = 1;
                (self, Some(Effect::Refetch))
            }

            ViewOp::PageChanged(page) => {
                self.page = page;
                if self.semantics == FilterSemantics::Legacy {
                    (self, Some(Effect::Refetch))
                } else {
                    (self, None)
                }
            }
        }
    }

    /// Switch semantics. Entering legacy mode restarts its working
    /// collection from the full source list.
    pub fn with_semantics(mut self, semantics: FilterSemantics) -> ViewState {
        if semantics == FilterSemantics::Legacy && self.semantics != FilterSemantics::Legacy {
            self.working = self.source.clone();
        }
        self.semantics = semantics;
        self
    }

    /// Records visible under the current semantics and filters, unpaged
    pub fn visible(&self) -> Vec<&CaseStudy> {
        match self.semantics {
            FilterSemantics::Legacy => self.working.iter().collect(),
            FilterSemantics::Composed => {
                let mut records: Vec<&CaseStudy> = self.source.iter().collect();

                if !self.search_term.is_empty() {
                    records.retain(|record| {
                        record.customer_name.contains(&self.search_term)
                            || record.description_summary.contains(&self.search_term)
                    });
                }

                if let Some(location) = &self.location_filter {
                    records.retain(|record| record.location == *location);
                }

                if let Some(industry) = &self.industry_filter {
                    records.retain(|record| record.industry == *industry);
                }

                records
            }
        }
    }

    /// Slice of the visible records for the current page
    pub fn page_records(&self) -> Vec<&CaseStudy> {
        let records = self.visible();
        let (start, end) = page_bounds(self.page, records.len());
        records[start..end].to_vec()
    }

    /// Number of pages the visible records span (0 when empty)
    pub fn total_pages(&self) -> usize {
        self.visible().len().div_ceil(ITEMS_PER_PAGE)
    }

    /// Values offered by the location dialog under the current semantics
    pub fn location_values(&self) -> Vec<String> {
        distinct(self.filter_source().iter().map(|record| &record.location))
    }

    /// Values offered by the industry dialog under the current semantics
    pub fn industry_values(&self) -> Vec<String> {
        distinct(self.filter_source().iter().map(|record| &record.industry))
    }

    // The historical client populated its dropdowns from the collection it
    // was mutating, so legacy mode lists values from the working records.
    fn filter_source(&self) -> &[CaseStudy] {
        match self.semantics {
            FilterSemantics::Legacy => &self.working,
            FilterSemantics::Composed => &self.source,
        }
    }
}

/// Half-open row range of a 1-indexed page over `len` items
pub fn page_bounds(page: usize, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE).min(len);
    let end = page.saturating_mul(ITEMS_PER_PAGE).min(len);
    (start, end)
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut values: Vec<String> = values
        .cloned()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    values.sort();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, location: &str, industry: &str) -> CaseStudy {
        CaseStudy {
            id: format!("case-study/{}", name.to_lowercase()),
            logo_url: format!("https://cdn.example.com/{}.png", name.to_lowercase()),
            customer_name: name.to_string(),
            headline: format!("{} headline", name),
            url: format!("https://example.com/{}", name.to_lowercase()),
            description_summary: format!("How {} modernized its data stack", name),
            page_url: format!("https://example.com/{}", name.to_lowercase()),
            location: location.to_string(),
            industry: industry.to_string(),
        }
    }

    fn loaded(semantics: FilterSemantics, records: Vec<CaseStudy>) -> ViewState {
        let (state, _) = ViewState::new(semantics).apply(ViewOp::DataLoaded(records));
        state
    }

    fn sample() -> Vec<CaseStudy> {
        vec![
            record("Quartz", "New York", "Finance"),
            record("Meridian", "Toronto", "Healthcare"),
            record("Nimbus", "London", "Retail"),
            record("Atlas", "London", "Finance"),
        ]
    }

    // ── data loading ────────────────────────────────────────────────────

    #[test]
    fn test_data_loaded_replaces_source_and_working() {
        let state = loaded(FilterSemantics::Composed, sample());
        assert_eq!(state.source.len(), 4);
        assert_eq!(state.working.len(), 4);
        assert!(!state.loading);
    }

    #[test]
    fn test_load_failure_keeps_previous_records() {
        let mut state = loaded(FilterSemantics::Composed, sample());
        state.loading = true;

        let (state, effect) = state.apply(ViewOp::LoadFailed);
        assert_eq!(effect, None);
        assert!(!state.loading);
        assert_eq!(state.source.len(), 4);
    }

    // ── pagination ──────────────────────────────────────────────────────

    #[test]
    fn test_page_bounds_slice_fifteen_rows() {
        assert_eq!(page_bounds(1, 20), (0, 15));
        assert_eq!(page_bounds(2, 20), (15, 20));
        assert_eq!(page_bounds(1, 7), (0, 7));
        assert_eq!(page_bounds(1, 0), (0, 0));
    }

    #[test]
    fn test_page_past_end_is_empty_not_an_error() {
        assert_eq!(page_bounds(3, 20), (20, 20));
        assert_eq!(page_bounds(50, 20), (20, 20));
        // Page 0 is never produced by the UI but must not underflow.
        assert_eq!(page_bounds(0, 20), (0, 0));

        let mut state = loaded(FilterSemantics::Composed, sample());
        state.page = 9;
        assert!(state.page_records().is_empty());
    }

    #[test]
    fn test_page_records_follow_visible_order() {
        let records: Vec<CaseStudy> = (0..20)
            .map(|i| record(&format!("Company{:02}", i), "London", "Retail"))
            .collect();
        let mut state = loaded(FilterSemantics::Composed, records);

        assert_eq!(state.page_records().len(), 15);
        assert_eq!(state.page_records()[0].customer_name, "Company00");

        state.page = 2;
        assert_eq!(state.page_records().len(), 5);
        assert_eq!(state.page_records()[0].customer_name, "Company15");
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn test_total_pages_is_zero_for_empty_collection() {
        let state = ViewState::new(FilterSemantics::Composed);
        assert_eq!(state.total_pages(), 0);
    }

    // ── legacy semantics ────────────────────────────────────────────────

    #[test]
    fn test_legacy_search_keeps_first_match_only() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, effect) = state.apply(ViewOp::SearchChanged("Quartz".to_string()));

        assert_eq!(effect, None);
        assert_eq!(state.working.len(), 1);
        assert_eq!(state.working[0].customer_name, "Quartz");
    }

    #[test]
    fn test_legacy_search_matches_description_summary() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged("How Meridian".to_string()));

        assert_eq!(state.working.len(), 1);
        assert_eq!(state.working[0].customer_name, "Meridian");
    }

    #[test]
    fn test_legacy_search_without_match_empties_collection() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged("zzz".to_string()));
        assert!(state.working.is_empty());
    }

    #[test]
    fn test_legacy_empty_term_keeps_first_record() {
        // "" is a substring of everything, so the first record survives.
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged(String::new()));
        assert_eq!(state.working.len(), 1);
        assert_eq!(state.working[0].customer_name, "Quartz");
    }

    #[test]
    fn test_search_over_empty_collection_does_not_panic() {
        let state = ViewState::new(FilterSemantics::Legacy);
        let (state, _) = state.apply(ViewOp::SearchChanged("anything".to_string()));
        assert!(state.working.is_empty());

        let mut state = ViewState::new(FilterSemantics::Composed);
        state.search_term = "anything".to_string();
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_legacy_location_narrows_current_working_collection() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::LocationChanged(Some("London".to_string())));
        assert_eq!(state.working.len(), 2);

        // A second location change filters what is left, not the source.
        let (state, _) = state.apply(ViewOp::LocationChanged(Some("Toronto".to_string())));
        assert!(state.working.is_empty());
        assert_eq!(state.source.len(), 4);
    }

    #[test]
    fn test_legacy_clear_location_runs_empty_string_equality() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::LocationChanged(None));
        assert!(state.working.is_empty());

        // With a record that has no location, the same operation keeps it.
        let mut records = sample();
        records.push(record("Gale", "", "Logistics"));
        let state = loaded(FilterSemantics::Legacy, records);
        let (state, _) = state.apply(ViewOp::LocationChanged(None));
        assert_eq!(state.working.len(), 1);
        assert_eq!(state.working[0].customer_name, "Gale");
    }

    #[test]
    fn test_legacy_filters_replace_rather_than_compose() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged("Nimbus".to_string()));
        assert_eq!(state.working.len(), 1);

        // The location filter runs over the single search survivor.
        let (state, _) = state.apply(ViewOp::LocationChanged(Some("London".to_string())));
        assert_eq!(state.working.len(), 1);

        let (state, _) = state.apply(ViewOp::LocationChanged(Some("New York".to_string())));
        assert!(state.working.is_empty());
    }

    // ── composed semantics ──────────────────────────────────────────────

    #[test]
    fn test_composed_search_keeps_every_match() {
        let mut state = loaded(FilterSemantics::Composed, sample());
        state.search_term = "modernized".to_string();
        assert_eq!(state.visible().len(), 4);

        state.search_term = "Quartz".to_string();
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_composed_predicates_apply_together() {
        let mut state = loaded(FilterSemantics::Composed, sample());
        state.location_filter = Some("London".to_string());
        state.industry_filter = Some("Finance".to_string());

        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].customer_name, "Atlas");
    }

    #[test]
    fn test_composed_source_never_mutates() {
        let state = loaded(FilterSemantics::Composed, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged("Quartz".to_string()));
        let (state, _) = state.apply(ViewOp::LocationChanged(Some("New York".to_string())));

        assert_eq!(state.source.len(), 4);
        assert_eq!(state.visible().len(), 1);

        // Clearing both filters restores the full view.
        let (state, _) = state.apply(ViewOp::SearchChanged(String::new()));
        let (state, _) = state.apply(ViewOp::LocationChanged(None));
        assert_eq!(state.visible().len(), 4);
    }

    #[test]
    fn test_empty_string_location_is_an_active_predicate() {
        let mut state = loaded(FilterSemantics::Composed, sample());
        state.location_filter = Some(String::new());
        assert!(state.visible().is_empty());

        let mut records = sample();
        records.push(record("Gale", "", "Logistics"));
        let mut state = loaded(FilterSemantics::Composed, records);
        state.location_filter = Some(String::new());
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.visible()[0].customer_name, "Gale");
    }

    // ── effects and page resets ─────────────────────────────────────────

    #[test]
    fn test_industry_change_requests_one_refetch_in_both_semantics() {
        for semantics in [FilterSemantics::Composed, FilterSemantics::Legacy] {
            let mut state = loaded(semantics, sample());
            state.page = 2;

            let (state, effect) =
                state.apply(ViewOp::IndustryChanged(Some("Finance".to_string())));
            assert_eq!(effect, Some(Effect::Refetch));
            assert_eq!(state.page, 1);
        }
    }

    #[test]
    fn test_page_change_refetches_only_under_legacy() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, effect) = state.apply(ViewOp::PageChanged(2));
        assert_eq!(effect, Some(Effect::Refetch));
        assert_eq!(state.page, 2);

        let state = loaded(FilterSemantics::Composed, sample());
        let (state, effect) = state.apply(ViewOp::PageChanged(2));
        assert_eq!(effect, None);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_search_and_location_changes_reset_page_without_refetch() {
        let mut state = loaded(FilterSemantics::Composed, sample());
        state.page = 2;
        let (state, effect) = state.apply(ViewOp::SearchChanged("a".to_string()));
        assert_eq!(effect, None);
        assert_eq!(state.page, 1);

        let mut state = loaded(FilterSemantics::Composed, sample());
        state.page = 2;
        let (state, effect) = state.apply(ViewOp::LocationChanged(Some("London".to_string())));
        assert_eq!(effect, None);
        assert_eq!(state.page, 1);
    }

    // ── semantics switching and dialog values ──────────────────────────

    #[test]
    fn test_entering_legacy_restarts_working_from_source() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged("Quartz".to_string()));
        assert_eq!(state.working.len(), 1);

        let state = state
            .with_semantics(FilterSemantics::Composed)
            .with_semantics(FilterSemantics::Legacy);
        assert_eq!(state.working.len(), 4);
    }

    #[test]
    fn test_dialog_values_are_distinct_and_sorted() {
        let state = loaded(FilterSemantics::Composed, sample());
        assert_eq!(state.location_values(), ["London", "New York", "Toronto"]);
        assert_eq!(state.industry_values(), ["Finance", "Healthcare", "Retail"]);
    }

    #[test]
    fn test_legacy_dialog_values_come_from_working_collection() {
        let state = loaded(FilterSemantics::Legacy, sample());
        let (state, _) = state.apply(ViewOp::SearchChanged("Quartz".to_string()));
        assert_eq!(state.location_values(), ["New York"]);
    }

    // ── the two-record load scenario ────────────────────────────────────

    #[test]
    fn test_two_record_catalog_scenario() {
        let records = vec![
            record("Quartz", "New York", "Finance"),
            record("Pinetree", "Tokyo", ""),
        ];
        let state = loaded(FilterSemantics::Legacy, records);

        assert_eq!(state.working.len(), 2);
        let industries: Vec<&str> = state
            .working
            .iter()
            .map(|r| r.industry.as_str())
            .collect();
        assert_eq!(industries, ["Finance", ""]);

        let (state, _) = state.apply(ViewOp::SearchChanged("Quar".to_string()));
        assert_eq!(state.working.len(), 1);
        assert_eq!(state.working[0].customer_name, "Quartz");

        let (state, _) = state.apply(ViewOp::LocationChanged(Some("Mumbai".to_string())));
        assert!(state.working.is_empty());
    }
}
