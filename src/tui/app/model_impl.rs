//! `Model` trait implementation for the catalogue TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `CatalogApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::tui::components::{ItemTableComponent, ItemTableViewContext};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

use super::{CatalogApp, ViewMode};

impl Model for CatalogApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let seed = crate::tui::get_initial_catalog();
        let model = Self::new(seed);
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            if let Some(mapped) = map_key_to_message(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_query_bar());
        output.push('\n');

        let body = match self.view_mode {
            ViewMode::Table => self.render_table_view(),
            ViewMode::Detail => self.render_detail_view(),
            ViewMode::EditForm => self.render_edit_form(),
        };
        output.push_str(&body);
        output.push_str(&self.render_status_bar());

        output
    }
}

impl CatalogApp {
    /// Renders the windowed table body.
    fn render_table_view(&self) -> String {
        let ctx = ItemTableViewContext {
            items: &self.items,
            visible_indices: self.visible_indices(),
            window: self.window(),
            widths: self.column_widths(),
            query: &self.query_state.query,
            cursor_position: self.cursor_position(),
            scroll_offset: self.query_state.scroll_offset,
            viewport_height: self.viewport_units(),
        };
        ItemTableComponent::view(&ctx)
    }
}
