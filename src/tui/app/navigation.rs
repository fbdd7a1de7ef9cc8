//! Navigation handlers and cursor management.
//!
//! Each navigation method updates the cursor position, re-tracks the
//! selected item id, and then adjusts the scroll offset so the cursor stays
//! inside the materialised window.

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.move_cursor_up(1),
            AppMsg::CursorDown => self.move_cursor_down(1),
            AppMsg::PageUp => self.move_cursor_up(self.table_body_height()),
            AppMsg::PageDown => self.move_cursor_down(self.table_body_height()),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        self.ensure_cursor_visible();
        self.refresh_window();
        None
    }

    fn move_cursor_up(&mut self, step: usize) {
        let new_pos = self.query_state.cursor_position.saturating_sub(step);
        self.set_cursor(new_pos);
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.visible_count().saturating_sub(1);
        let new_pos = self
            .query_state
            .cursor_position
            .saturating_add(step)
            .min(max_index);
        self.set_cursor(new_pos);
    }

    fn handle_home(&mut self) {
        self.query_state.scroll_offset = 0;
        self.set_cursor(0);
    }

    fn handle_end(&mut self) {
        let max_index = self.visible_count().saturating_sub(1);
        self.set_cursor(max_index);
    }
}
