//! Fetch, detail, edit, and delete message handlers.
//!
//! Fetch and detail lookups run as async commands against the product
//! gateway; their completions re-enter the update loop as messages. Edits
//! and deletes apply to the dataset itself, never to the derived sequence
//! or window, and trigger recomputation of both.

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::catalog::error::CatalogError;
use crate::catalog::models::Item;
use crate::catalog::vocab;
use crate::tui::messages::AppMsg;
use crate::tui::state::{DetailState, EditForm, related_items};

use super::{CatalogApp, ViewMode};

impl CatalogApp {
    /// Dispatches data, detail, edit, and delete messages.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::RefreshComplete { items, latency_ms } => {
                self.handle_refresh_complete(items, *latency_ms)
            }
            AppMsg::RefreshFailed(message) => self.handle_refresh_failed(message),
            AppMsg::DetailRequested => self.handle_detail_requested(),
            AppMsg::DetailLoaded(item) => self.handle_detail_loaded(item),
            AppMsg::DetailNotFound { id } => self.handle_detail_not_found(*id),
            AppMsg::DetailFailed(message) => self.handle_detail_failed(message),
            AppMsg::DetailClosed => self.handle_detail_closed(),
            AppMsg::EditRequested => self.handle_edit_requested(),
            AppMsg::EditInput(ch) => self.handle_edit_input(*ch),
            AppMsg::EditBackspace => self.with_edit_form(EditForm::backspace),
            AppMsg::EditNextField => self.with_edit_form(|form| form.focus_next()),
            AppMsg::EditPrevField => self.with_edit_form(|form| form.focus_previous()),
            AppMsg::EditCycled => self.handle_edit_cycled(),
            AppMsg::EditSubmitted => self.handle_edit_submitted(),
            AppMsg::EditCancelled => self.handle_edit_cancelled(),
            AppMsg::DeleteRequested => self.handle_delete_requested(),
            AppMsg::DeleteConfirmed => self.handle_delete_confirmed(),
            AppMsg::DeleteCancelled => {
                self.delete_target = None;
                None
            }
            _ => {
                debug_assert!(false, "unexpected message routed to handle_data_msg");
                None
            }
        }
    }

    // Catalogue refresh

    /// Starts a catalogue fetch unless one is already outstanding.
    fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(fetch_catalog_cmd())
    }

    /// Replaces the dataset wholesale with a fresh fetch.
    ///
    /// Vocabularies are re-derived from the new collection, and the
    /// selection is restored by id where the item survived.
    fn handle_refresh_complete(&mut self, items: &[Item], latency_ms: u64) -> Option<Cmd> {
        self.items = items.to_vec();
        self.categories = vocab::derive_categories(&self.items);
        self.brands = vocab::derive_brands(&self.items);
        self.loading = false;
        self.error = None;
        self.rebuild_visible_preserving_selection();

        crate::tui::record_fetch_telemetry(self.items.len(), latency_ms);
        None
    }

    fn handle_refresh_failed(&mut self, message: &str) -> Option<Cmd> {
        self.loading = false;
        self.error = Some(message.to_owned());
        tracing::warn!("catalogue fetch failed: {message}");
        None
    }

    // Detail view

    /// Opens the detail view for the row under the cursor and starts the
    /// lookup.
    fn handle_detail_requested(&mut self) -> Option<Cmd> {
        let id = self.current_selected_id()?;
        self.view_mode = ViewMode::Detail;
        self.detail = Some(DetailState::Loading { id });
        Some(fetch_detail_cmd(id))
    }

    /// Stores a completed detail lookup, deriving related items locally.
    ///
    /// A completion for an item other than the one currently shown is a
    /// superseded lookup and is discarded.
    fn handle_detail_loaded(&mut self, item: &Item) -> Option<Cmd> {
        if self.pending_detail_id() != Some(item.id) {
            return None;
        }
        let related = related_items(&self.items, item);
        self.detail = Some(DetailState::Loaded {
            item: Box::new(item.clone()),
            related,
        });
        None
    }

    fn handle_detail_not_found(&mut self, id: u64) -> Option<Cmd> {
        if self.pending_detail_id() == Some(id) {
            self.detail = Some(DetailState::NotFound { id });
        }
        None
    }

    fn handle_detail_failed(&mut self, message: &str) -> Option<Cmd> {
        if self.detail.is_some() {
            self.detail = Some(DetailState::Failed {
                message: message.to_owned(),
            });
        }
        None
    }

    fn handle_detail_closed(&mut self) -> Option<Cmd> {
        self.detail = None;
        self.view_mode = ViewMode::Table;
        None
    }

    /// Identity the detail view is currently waiting on or showing.
    fn pending_detail_id(&self) -> Option<u64> {
        match &self.detail {
            Some(DetailState::Loading { id } | DetailState::NotFound { id }) => Some(*id),
            Some(DetailState::Loaded { item, .. }) => Some(item.id),
            Some(DetailState::Failed { .. }) | None => None,
        }
    }

    // Edit form

    fn handle_edit_requested(&mut self) -> Option<Cmd> {
        let item = self.selected_item()?;
        self.edit_form = Some(EditForm::for_item(item));
        self.view_mode = ViewMode::EditForm;
        None
    }

    fn handle_edit_input(&mut self, ch: char) -> Option<Cmd> {
        if let Some(form) = &mut self.edit_form {
            form.input_char(ch);
        }
        None
    }

    fn handle_edit_cycled(&mut self) -> Option<Cmd> {
        let categories = self.categories.clone();
        if let Some(form) = &mut self.edit_form {
            form.cycle_choice(&categories);
        }
        None
    }

    fn with_edit_form(&mut self, action: impl FnOnce(&mut EditForm)) -> Option<Cmd> {
        if let Some(form) = &mut self.edit_form {
            action(form);
        }
        None
    }

    /// Applies the edit form as a field-level patch to the dataset.
    ///
    /// The patch is optimistic and client-only; it never reaches the data
    /// source. The pipeline recomputes so the patched item re-sorts and
    /// re-filters under the applied query.
    fn handle_edit_submitted(&mut self) -> Option<Cmd> {
        if let Some(form) = self.edit_form.take() {
            let patch = form.to_patch();
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|candidate| candidate.id == form.item_id)
            {
                item.apply_patch(&patch);
            }
            self.rebuild_visible_preserving_selection();
        }
        self.view_mode = ViewMode::Table;
        None
    }

    fn handle_edit_cancelled(&mut self) -> Option<Cmd> {
        self.edit_form = None;
        self.view_mode = ViewMode::Table;
        None
    }

    // Delete

    fn handle_delete_requested(&mut self) -> Option<Cmd> {
        self.delete_target = self.current_selected_id();
        None
    }

    /// Removes the pending item from the dataset and recomputes.
    fn handle_delete_confirmed(&mut self) -> Option<Cmd> {
        if let Some(id) = self.delete_target.take() {
            self.items.retain(|item| item.id != id);
            if self.selected_item_id == Some(id) {
                self.selected_item_id = None;
            }
            self.rebuild_visible_preserving_selection();
        }
        None
    }
}

/// Creates a command that fetches the catalogue and reports the outcome.
fn fetch_catalog_cmd() -> Cmd {
    Box::pin(async {
        let start = std::time::Instant::now();
        match crate::tui::fetch_catalog().await {
            Ok(items) => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "latency over u64::MAX milliseconds is unrealistic"
                )]
                let latency_ms = start.elapsed().as_millis() as u64;
                Some(Box::new(AppMsg::RefreshComplete { items, latency_ms }) as Box<dyn Any + Send>)
            }
            Err(error) => Some(Box::new(AppMsg::from_error(&error)) as Box<dyn Any + Send>),
        }
    })
}

/// Creates a command that fetches one item, mapping 404 to the not-found
/// state.
fn fetch_detail_cmd(id: u64) -> Cmd {
    Box::pin(async move {
        let msg = match crate::tui::fetch_item(id).await {
            Ok(item) => AppMsg::DetailLoaded(Box::new(item)),
            Err(CatalogError::NotFound { id: missing }) => AppMsg::DetailNotFound { id: missing },
            Err(error) => AppMsg::DetailFailed(error.to_string()),
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
