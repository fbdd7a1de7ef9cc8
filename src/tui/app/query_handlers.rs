//! Search, category, and sort message handlers.
//!
//! Search keystrokes land in a draft buffer and are debounced: each edit
//! schedules the draft with a fresh generation and arms a timer command;
//! only the timer carrying the newest generation commits the draft into the
//! applied query. Category and sort mutations apply immediately. Every
//! applied mutation rebuilds the visible sequence and rewrites the
//! shareable URL so the state stays navigable.

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::engine::debounce::DEBOUNCE_INTERVAL;
use crate::engine::query::Query;
use crate::tui::components::COLUMN_SORT_FIELDS;
use crate::tui::messages::AppMsg;

use super::CatalogApp;

impl CatalogApp {
    /// Dispatches query mutation messages to their handlers.
    pub(super) fn handle_query_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SearchStarted => {
                self.query_state.search_focused = true;
                None
            }
            AppMsg::SearchInput(ch) => {
                self.query_state.draft_search.push(*ch);
                Some(self.schedule_search_debounce())
            }
            AppMsg::SearchBackspace => {
                self.query_state.draft_search.pop();
                Some(self.schedule_search_debounce())
            }
            AppMsg::SearchSubmitted => {
                self.query_state.search_focused = false;
                None
            }
            AppMsg::SearchCleared => self.handle_search_cleared(),
            AppMsg::SearchDebounced { generation } => self.handle_search_debounced(*generation),
            AppMsg::CycleCategory => self.handle_cycle_category(),
            AppMsg::SortColumn(column) => self.handle_sort_column(*column),
            _ => {
                debug_assert!(false, "non-query message routed to handle_query_msg");
                None
            }
        }
    }

    /// Schedules the current draft and arms the debounce timer.
    ///
    /// The returned command sleeps for the quiet interval and then reports
    /// back with the generation it was armed for; superseded generations
    /// are discarded on arrival.
    fn schedule_search_debounce(&mut self) -> Cmd {
        let draft = self.query_state.draft_search.clone();
        let generation = self.debouncer.schedule(draft);
        Box::pin(async move {
            tokio::time::sleep(DEBOUNCE_INTERVAL).await;
            Some(Box::new(AppMsg::SearchDebounced { generation }) as Box<dyn Any + Send>)
        })
    }

    /// Commits the debounced draft into the applied query.
    fn handle_search_debounced(&mut self, generation: u64) -> Option<Cmd> {
        let Some(search) = self.debouncer.try_fire(generation) else {
            return None;
        };
        if self.query_state.query.search == search {
            return None;
        }
        self.query_state.query.search = search;
        self.apply_query_change();
        None
    }

    /// Clears the search text immediately and leaves the search field.
    fn handle_search_cleared(&mut self) -> Option<Cmd> {
        self.query_state.search_focused = false;
        self.debouncer.cancel();
        if self.query_state.draft_search.is_empty() && self.query_state.query.search.is_empty() {
            return None;
        }
        self.query_state.draft_search.clear();
        self.query_state.query.search.clear();
        self.apply_query_change();
        None
    }

    /// Cycles the category filter through All and the derived vocabulary.
    fn handle_cycle_category(&mut self) -> Option<Cmd> {
        let current = self.query_state.query.category.clone();
        let next = if current == Query::CATEGORY_ALL {
            self.categories.first().cloned()
        } else {
            let position = self
                .categories
                .iter()
                .position(|category| *category == current);
            position.and_then(|index| self.categories.get(index + 1).cloned())
        };
        self.query_state.query.category = next.unwrap_or_else(|| Query::CATEGORY_ALL.to_owned());
        self.apply_query_change();
        None
    }

    /// Applies a column-header sort action by column index.
    ///
    /// Out-of-range columns are ignored; the active column toggles its
    /// direction, any other column becomes active ascending.
    fn handle_sort_column(&mut self, column: usize) -> Option<Cmd> {
        let Some(&field) = COLUMN_SORT_FIELDS.get(column) else {
            return None;
        };
        self.query_state.query.sort_by(field);
        self.apply_query_change();
        None
    }

    /// Recomputes the pipeline after an applied query mutation and rewrites
    /// the shareable URL.
    pub(super) fn apply_query_change(&mut self) {
        let mut share_url = self.share_url.clone();
        self.query_state.query.apply_to_url(&mut share_url);
        self.share_url = share_url;
        self.rebuild_visible_preserving_selection();
    }
}
