//! Rendering logic for the catalogue TUI application.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use crate::tui::components::{ItemDetailComponent, ItemDetailViewContext};
use crate::tui::state::{DetailState, EditField, EditForm};

use super::CatalogApp;

impl CatalogApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Waretable - Product Catalogue";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the query bar showing search, category, and result counts.
    pub(super) fn render_query_bar(&self) -> String {
        let search = if self.query_state.search_focused {
            format!("/{}_", self.query_state.draft_search)
        } else if self.query_state.draft_search.is_empty() {
            "(press / to search)".to_owned()
        } else {
            format!("/{}", self.query_state.draft_search)
        };
        let category = &self.query_state.query.category;
        let count = self.visible_count();
        let total = self.items.len();
        format!("Search: {search}  Category: {category}  ({count}/{total})\n")
    }

    /// Renders the status bar with errors, prompts, or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(id) = self.delete_target {
            let name = self
                .items
                .iter()
                .find(|item| item.id == id)
                .map_or_else(|| format!("#{id}"), |item| item.name.clone());
            return format!("Delete \"{name}\"? This cannot be undone. [y/n]\n");
        }

        if let Some(error) = &self.error {
            return format!("Error: {error}  r:retry  q:quit\n");
        }

        let hints = self.status_hints();
        format!("{hints} | {}\n", self.share_url)
    }

    const fn status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  /:search  c:category  1-6:sort"
        } else {
            "j/k:move  /:search  c:category  1-6:sort  Enter:detail  e:edit  x:delete  r:refresh  ?:help  q:quit"
        }
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first row
  End, G     Go to last row

Query:
  /          Focus the search field
  Esc        Clear the search text
  c          Cycle category filter
  1-6        Sort by column (again to flip direction)

Rows:
  Enter      Open item detail
  e          Edit item
  x, Del     Delete item (asks to confirm)

Other:
  r          Refresh from the products API
  ?          Toggle this help
  q          Quit

Search field:
  text keys  Edit the search text
  Enter      Keep text, leave the field
  Esc        Clear text, leave the field

Edit form:
  Tab/Down   Next field
  S-Tab/Up   Previous field
  Left/Right Cycle choice fields
  Enter      Apply changes
  Esc        Discard changes

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Renders the detail view body.
    pub(super) fn render_detail_view(&self) -> String {
        let fallback = DetailState::Failed {
            message: "no detail lookup in progress".to_owned(),
        };
        let state = self.detail.as_ref().unwrap_or(&fallback);
        let ctx = ItemDetailViewContext {
            state,
            max_width: self.terminal_width(),
            max_height: self.table_body_height(),
        };
        ItemDetailComponent::view(&ctx)
    }

    /// Renders the edit form body.
    pub(super) fn render_edit_form(&self) -> String {
        let Some(form) = &self.edit_form else {
            return String::new();
        };

        let mut output = String::new();
        output.push_str(&format!("  Edit item #{}\n\n", form.item_id));
        for field in EditField::ORDER {
            let marker = if form.focused() == field { ">" } else { " " };
            let value = field_display(form, field);
            output.push_str(&format!(" {marker} {:<12} {value}\n", field.label()));
        }
        output.push_str("\n  Enter: save   Esc: cancel\n");
        output
    }

    pub(super) const fn terminal_width(&self) -> usize {
        self.width as usize
    }
}

/// Display form of one edit field's current value.
fn field_display(form: &EditForm, field: EditField) -> String {
    let focused = form.focused() == field;
    let text = match field {
        EditField::Name => form.name.clone(),
        EditField::Description => form.description.clone(),
        EditField::Category => form.category.clone(),
        EditField::Brand => form.brand.clone(),
        EditField::Price => form.price.clone(),
        EditField::Status => form.status.label().to_owned(),
        EditField::Color => form.color.clone(),
    };
    if field.is_choice() {
        if focused {
            format!("< {text} >")
        } else {
            text
        }
    } else if focused {
        format!("{text}_")
    } else {
        text
    }
}
