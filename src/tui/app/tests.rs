//! Tests for the catalogue TUI application model.

use rstest::{fixture, rstest};

use crate::catalog::models::Item;
use crate::engine::query::{SortDirection, SortField};
use crate::tui::CatalogSeed;
use crate::tui::messages::AppMsg;
use crate::tui::state::DetailState;

use super::{CatalogApp, ViewMode};

fn greek_catalog() -> Vec<Item> {
    ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]
        .into_iter()
        .enumerate()
        .map(|(index, name)| Item::sample(index as u64 + 1, name))
        .collect()
}

fn app_with(items: Vec<Item>) -> CatalogApp {
    let categories = crate::catalog::vocab::derive_categories(&items);
    CatalogApp::new(CatalogSeed {
        items,
        categories,
        ..CatalogSeed::default()
    })
}

#[fixture]
fn app() -> CatalogApp {
    app_with(greek_catalog())
}

fn visible_names(app: &CatalogApp) -> Vec<String> {
    app.visible_indices()
        .iter()
        .filter_map(|&index| app.items.get(index))
        .map(|item| item.name.clone())
        .collect()
}

/// Drives the search draft through the debounce path to an applied query.
fn apply_search(app: &mut CatalogApp, text: &str) {
    let _cmd = app.handle_message(&AppMsg::SearchStarted);
    for ch in text.chars() {
        let _cmd = app.handle_message(&AppMsg::SearchInput(ch));
    }
    let generation = app.debouncer.generation();
    let _cmd = app.handle_message(&AppMsg::SearchDebounced { generation });
}

#[test]
fn empty_app_has_no_visible_rows() {
    let app = CatalogApp::empty();
    assert_eq!(app.visible_count(), 0);
    assert!(app.window().is_empty());
}

#[rstest]
fn seeded_app_shows_the_whole_catalogue(app: CatalogApp) {
    assert_eq!(app.visible_count(), 5);
    assert_eq!(app.selected_item_id, Some(1));
}

#[rstest]
fn debounced_search_narrows_the_sequence(mut app: CatalogApp) {
    apply_search(&mut app, "pha");
    assert_eq!(visible_names(&app), vec!["Alpha"]);
}

#[rstest]
fn stale_debounce_generations_are_discarded(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::SearchStarted);
    let _cmd = app.handle_message(&AppMsg::SearchInput('p'));
    let stale = app.debouncer.generation();
    let _cmd = app.handle_message(&AppMsg::SearchInput('h'));

    let _cmd = app.handle_message(&AppMsg::SearchDebounced { generation: stale });
    // The stale timer must not have applied the partial draft.
    assert_eq!(app.visible_count(), 5);

    let fresh = app.debouncer.generation();
    let _cmd = app.handle_message(&AppMsg::SearchDebounced { generation: fresh });
    assert_eq!(visible_names(&app), vec!["Alpha"]);
}

#[rstest]
fn clearing_the_search_restores_everything(mut app: CatalogApp) {
    apply_search(&mut app, "pha");
    assert_eq!(app.visible_count(), 1);

    let _cmd = app.handle_message(&AppMsg::SearchCleared);
    assert_eq!(app.visible_count(), 5);
    assert!(app.share_url.query().is_none());
}

#[rstest]
fn sorting_by_name_descending_reverses_the_alphabet(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::SortColumn(1));
    let _cmd = app.handle_message(&AppMsg::SortColumn(1));
    assert_eq!(app.query_state.query.sort_field, SortField::Name);
    assert_eq!(app.query_state.query.sort_direction, SortDirection::Descending);
    assert_eq!(
        visible_names(&app),
        vec!["Epsilon", "Delta", "Gamma", "Beta", "Alpha"]
    );
}

#[rstest]
fn sort_mutations_rewrite_the_share_url(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::SortColumn(4));
    let query = app.share_url.query().unwrap_or_default();
    assert!(query.contains("sortField=price"));
}

#[rstest]
fn category_cycle_walks_the_vocabulary_and_returns_to_all(mut app: CatalogApp) {
    assert_eq!(app.query_state.query.category, "all");
    let _cmd = app.handle_message(&AppMsg::CycleCategory);
    assert_eq!(app.query_state.query.category, "Electronics");
    let _cmd = app.handle_message(&AppMsg::CycleCategory);
    assert_eq!(app.query_state.query.category, "all");
}

#[rstest]
fn cursor_follows_the_selected_item_across_sorts(mut app: CatalogApp) {
    // Select Gamma (id 3).
    let _cmd = app.handle_message(&AppMsg::CursorDown);
    let _cmd = app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.selected_item_id, Some(3));

    let _cmd = app.handle_message(&AppMsg::SortColumn(1));
    let _cmd = app.handle_message(&AppMsg::SortColumn(1));
    assert_eq!(app.selected_item_id, Some(3));
    let cursor_item = app.selected_item().map(|item| item.id);
    assert_eq!(cursor_item, Some(3));
}

#[rstest]
fn delete_asks_for_confirmation_then_removes_by_id(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::CursorDown);
    let _cmd = app.handle_message(&AppMsg::CursorDown);
    let _cmd = app.handle_message(&AppMsg::DeleteRequested);
    assert_eq!(app.delete_target, Some(3));
    // Nothing removed until confirmed.
    assert_eq!(app.items.len(), 5);

    let _cmd = app.handle_message(&AppMsg::DeleteConfirmed);
    assert_eq!(app.items.len(), 4);
    assert_eq!(app.visible_count(), 4);
    assert!(app.items.iter().all(|item| item.id != 3));
    assert!(!visible_names(&app).contains(&"Gamma".to_owned()));
}

#[rstest]
fn delete_cancel_leaves_the_dataset_alone(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::DeleteRequested);
    let _cmd = app.handle_message(&AppMsg::DeleteCancelled);
    assert_eq!(app.delete_target, None);
    assert_eq!(app.items.len(), 5);
}

#[rstest]
fn edit_applies_a_field_level_patch(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::EditRequested);
    assert_eq!(app.view_mode, ViewMode::EditForm);

    // Append to the name field and submit.
    let _cmd = app.handle_message(&AppMsg::EditInput(' '));
    let _cmd = app.handle_message(&AppMsg::EditInput('2'));
    let _cmd = app.handle_message(&AppMsg::EditSubmitted);

    assert_eq!(app.view_mode, ViewMode::Table);
    let renamed = app.items.iter().find(|item| item.id == 1);
    assert_eq!(renamed.map(|item| item.name.as_str()), Some("Alpha 2"));
}

#[rstest]
fn edit_cancel_discards_the_form(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::EditRequested);
    let _cmd = app.handle_message(&AppMsg::EditInput('!'));
    let _cmd = app.handle_message(&AppMsg::EditCancelled);
    let untouched = app.items.first().map(|item| item.name.as_str());
    assert_eq!(untouched, Some("Alpha"));
}

#[rstest]
fn detail_not_found_is_a_state_not_an_error(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::DetailRequested);
    assert_eq!(app.view_mode, ViewMode::Detail);

    let _cmd = app.handle_message(&AppMsg::DetailNotFound { id: 1 });
    assert!(matches!(app.detail, Some(DetailState::NotFound { id: 1 })));
    assert_eq!(app.error, None);

    let _cmd = app.handle_message(&AppMsg::DetailClosed);
    assert_eq!(app.view_mode, ViewMode::Table);
}

#[rstest]
fn superseded_detail_completion_is_discarded(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::DetailRequested);
    // A completion for a different identity must not overwrite the state.
    let stray = Item::sample(99, "Stray");
    let _cmd = app.handle_message(&AppMsg::DetailLoaded(Box::new(stray)));
    assert!(matches!(app.detail, Some(DetailState::Loading { id: 1 })));
}

#[rstest]
fn refresh_replaces_the_dataset_wholesale(mut app: CatalogApp) {
    let mut replacement = vec![Item::sample(10, "Zeta"), Item::sample(11, "Eta")];
    if let Some(item) = replacement.first_mut() {
        item.category = "Home".to_owned();
    }

    let _cmd = app.handle_message(&AppMsg::RefreshComplete {
        items: replacement,
        latency_ms: 12,
    });

    assert_eq!(app.items.len(), 2);
    assert_eq!(app.visible_count(), 2);
    // Vocabularies re-derive from the new collection.
    assert!(app.categories.contains(&"Home".to_owned()));
    assert!(!app.loading);
}

#[rstest]
fn refresh_failure_surfaces_an_error_and_keeps_the_pipeline(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::RefreshFailed("boom".to_owned()));
    assert_eq!(app.error.as_deref(), Some("boom"));
    // The previous sequence keeps rendering under the error banner.
    assert_eq!(app.visible_count(), 5);
}

#[test]
fn large_catalogue_materialises_a_bounded_window() {
    let items: Vec<Item> = (1..=10_000)
        .map(|id| Item::sample(id, &format!("Item {id}")))
        .collect();
    let mut app = app_with(items);
    let _cmd = app.handle_message(&AppMsg::WindowResized {
        width: 100,
        height: 30,
    });

    let window = app.window().clone();
    assert_eq!(window.start_index, 0);
    // Body height (30 - chrome 4 - header 1 = 25) plus one overscan side.
    assert!(window.rows.len() <= 25 + 10);
    assert!(!window.is_empty());

    let _cmd = app.handle_message(&AppMsg::End);
    let end_window = app.window().clone();
    assert_eq!(end_window.end_index, 9_999);
    assert!(end_window.rows.len() <= 25 + 10 + 1);
}

#[rstest]
fn resize_remeasures_columns(mut app: CatalogApp) {
    let before = app.column_widths().clone();
    let _cmd = app.handle_message(&AppMsg::WindowResized {
        width: 140,
        height: 40,
    });
    let after = app.column_widths().clone();
    assert_ne!(before, after);
    assert_eq!(before.len(), after.len());
}

#[rstest]
fn help_overlay_toggles(mut app: CatalogApp) {
    let _cmd = app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.show_help);
    let _cmd = app.handle_message(&AppMsg::ToggleHelp);
    assert!(!app.show_help);
}

#[rstest]
fn view_renders_the_visible_rows(app: CatalogApp) {
    use bubbletea_rs::Model;

    let output = app.view();
    assert!(output.contains("Alpha"));
    assert!(output.contains("Epsilon"));
    assert!(output.contains("(5/5)"));
}

#[rstest]
fn empty_filter_result_renders_the_empty_state(mut app: CatalogApp) {
    use bubbletea_rs::Model;

    apply_search(&mut app, "zzz");
    let output = app.view();
    assert!(output.contains("No results found."));
}
