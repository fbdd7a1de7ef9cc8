//! Input handling for the TUI application.
//!
//! This module provides context-aware key-to-message mapping for translating
//! terminal key events into application messages. The active context decides
//! whether a printable character navigates, types into the search field, or
//! edits a form buffer.

use super::messages::AppMsg;

/// Input contexts with distinct key maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Navigating the table.
    Table,
    /// Typing into the search field.
    Search,
    /// Reading the item detail view.
    Detail,
    /// Editing the item form.
    EditForm,
    /// Confirming a pending delete.
    ConfirmDelete,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Table => map_table_key(key),
        InputContext::Search => map_search_key(key),
        InputContext::Detail => map_detail_key(key),
        InputContext::EditForm => map_edit_key(key),
        InputContext::ConfirmDelete => map_confirm_delete_key(key),
    }
}

fn map_table_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('/') => Some(AppMsg::SearchStarted),
        KeyCode::Esc => Some(AppMsg::SearchCleared),
        KeyCode::Char('c') => Some(AppMsg::CycleCategory),
        KeyCode::Char(digit @ '1'..='6') => map_sort_digit(digit),
        KeyCode::Enter => Some(AppMsg::DetailRequested),
        KeyCode::Char('e') => Some(AppMsg::EditRequested),
        KeyCode::Char('x') | KeyCode::Delete => Some(AppMsg::DeleteRequested),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

/// Maps a digit key to a sort-column message (1-based on the keyboard).
fn map_sort_digit(digit: char) -> Option<AppMsg> {
    let column = (digit as usize).checked_sub('1' as usize)?;
    Some(AppMsg::SortColumn(column))
}

fn map_search_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Enter => Some(AppMsg::SearchSubmitted),
        KeyCode::Esc => Some(AppMsg::SearchCleared),
        KeyCode::Backspace => Some(AppMsg::SearchBackspace),
        KeyCode::Char(ch) => Some(AppMsg::SearchInput(ch)),
        _ => None,
    }
}

fn map_detail_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => Some(AppMsg::DetailClosed),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('e') => Some(AppMsg::EditRequested),
        _ => None,
    }
}

fn map_edit_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(AppMsg::EditCancelled),
        KeyCode::Enter => Some(AppMsg::EditSubmitted),
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::EditNextField),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::EditPrevField),
        KeyCode::Left | KeyCode::Right => Some(AppMsg::EditCycled),
        KeyCode::Backspace => Some(AppMsg::EditBackspace),
        KeyCode::Char(ch) => Some(AppMsg::EditInput(ch)),
        _ => None,
    }
}

fn map_confirm_delete_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(AppMsg::DeleteConfirmed),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(AppMsg::DeleteCancelled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::{AppMsg, InputContext, map_key_to_message};

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn table_context_navigates() {
        let msg = map_key_to_message(&key(KeyCode::Char('j')), InputContext::Table);
        assert!(matches!(msg, Some(AppMsg::CursorDown)));
    }

    #[test]
    fn table_context_maps_digits_to_sort_columns() {
        let msg = map_key_to_message(&key(KeyCode::Char('3')), InputContext::Table);
        assert!(matches!(msg, Some(AppMsg::SortColumn(2))));
    }

    #[test]
    fn search_context_captures_printable_characters() {
        let msg = map_key_to_message(&key(KeyCode::Char('j')), InputContext::Search);
        assert!(matches!(msg, Some(AppMsg::SearchInput('j'))));
    }

    #[test]
    fn confirm_delete_only_accepts_yes_or_no() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Char('y')), InputContext::ConfirmDelete),
            Some(AppMsg::DeleteConfirmed)
        ));
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Esc), InputContext::ConfirmDelete),
            Some(AppMsg::DeleteCancelled)
        ));
        assert!(
            map_key_to_message(&key(KeyCode::Char('j')), InputContext::ConfirmDelete).is_none()
        );
    }

    #[test]
    fn unrecognised_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::F(5)), InputContext::Table).is_none());
    }
}
