//! Virtualised table component for the catalogue.
//!
//! Renders the column header plus only the rows the window calculator
//! materialised. Each row is placed at its absolute offset translated into
//! the viewport, so overscan rows above and below the fold are formatted but
//! never blitted; the same measured column widths are applied to header and
//! rows so the absolutely-positioned rows align into the header grid.

use crate::catalog::models::Item;
use crate::engine::layout::{ColumnSizing, ColumnSpec, ColumnWidths};
use crate::engine::query::{Query, SortDirection, SortField};
use crate::engine::window::Window;

use super::text_fit::fit_cell;

/// Gutter cells reserved for the cursor marker.
const GUTTER: &str = "  ";
/// Gutter shown on the selected row.
const CURSOR_GUTTER: &str = "> ";

/// The static column structure of the catalogue table.
pub const TABLE_COLUMNS: [ColumnSpec; 6] = [
    ColumnSpec {
        title: "ID",
        sizing: ColumnSizing::Fixed(6),
    },
    ColumnSpec {
        title: "Name",
        sizing: ColumnSizing::Flex(3),
    },
    ColumnSpec {
        title: "Brand",
        sizing: ColumnSizing::Flex(2),
    },
    ColumnSpec {
        title: "Category",
        sizing: ColumnSizing::Flex(2),
    },
    ColumnSpec {
        title: "Price",
        sizing: ColumnSizing::Fixed(10),
    },
    ColumnSpec {
        title: "Status",
        sizing: ColumnSizing::Fixed(12),
    },
];

/// Sort field backing each table column, by column index.
pub const COLUMN_SORT_FIELDS: [SortField; 6] = [
    SortField::Id,
    SortField::Name,
    SortField::Brand,
    SortField::Category,
    SortField::Price,
    SortField::Status,
];

/// Context for rendering the table view.
///
/// Bundles the dataset, the derived sequence, and the window so rendering
/// needs no per-frame allocation beyond the output string.
#[derive(Debug, Clone)]
pub struct ItemTableViewContext<'a> {
    /// Full dataset slice.
    pub items: &'a [Item],
    /// Ordered indices of items in the visible sequence.
    pub visible_indices: &'a [usize],
    /// The materialised window over the visible sequence.
    pub window: &'a Window,
    /// Measured column widths shared by header and rows.
    pub widths: &'a ColumnWidths,
    /// The applied query, for sort indicators.
    pub query: &'a Query,
    /// Cursor position within the visible sequence.
    pub cursor_position: usize,
    /// Scroll offset in row-size units.
    pub scroll_offset: u64,
    /// Viewport height in row-size units.
    pub viewport_height: u64,
}

/// Component rendering the virtualised catalogue table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemTableComponent;

impl ItemTableComponent {
    /// Renders the header and the windowed rows as a string.
    ///
    /// Rows outside the viewport (the overscan margin) are materialised but
    /// not emitted; rows inside it land on the line given by their absolute
    /// offset minus the scroll offset.
    #[must_use]
    pub fn view(ctx: &ItemTableViewContext<'_>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header_line(ctx));
        output.push('\n');

        if ctx.visible_indices.is_empty() {
            output.push_str("  No results found.\n");
            return output;
        }

        let viewport_lines = usize::try_from(ctx.viewport_height).unwrap_or(usize::MAX);
        let mut lines: Vec<String> = vec![String::new(); viewport_lines];

        for slot in &ctx.window.rows {
            if slot.offset < ctx.scroll_offset {
                continue;
            }
            let line_index = usize::try_from(slot.offset - ctx.scroll_offset).unwrap_or(usize::MAX);
            let Some(line) = lines.get_mut(line_index) else {
                continue;
            };
            let Some(item) = ctx
                .visible_indices
                .get(slot.index)
                .and_then(|&dataset_index| ctx.items.get(dataset_index))
            else {
                continue;
            };
            let selected = slot.index == ctx.cursor_position;
            *line = Self::format_row(item, ctx.widths, selected);
        }

        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Formats the header line with sort indicators.
    fn header_line(ctx: &ItemTableViewContext<'_>) -> String {
        let cells: Vec<String> = TABLE_COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let marker = sort_marker(index, ctx.query);
                let title = format!("{}{marker}", column.title);
                fit_cell(&title, ctx.widths.get(index) as usize)
            })
            .collect();
        format!("{GUTTER}{}", cells.join(" "))
    }

    /// Formats a single item row with the shared column widths.
    fn format_row(item: &Item, widths: &ColumnWidths, selected: bool) -> String {
        let gutter = if selected { CURSOR_GUTTER } else { GUTTER };
        let price = format!("${:.2}", item.price);
        let cells = [
            item.id.to_string(),
            item.name.clone(),
            item.brand.clone().unwrap_or_else(|| "-".to_owned()),
            item.category.clone(),
            price,
            item.status.label().to_owned(),
        ];
        let fitted: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| fit_cell(cell, widths.get(index) as usize))
            .collect();
        format!("{gutter}{}", fitted.join(" "))
    }
}

/// Marker appended to the active sort column's header title.
fn sort_marker(column: usize, query: &Query) -> &'static str {
    let Some(&field) = COLUMN_SORT_FIELDS.get(column) else {
        return "";
    };
    if field != query.sort_field {
        return "";
    }
    match query.sort_direction {
        SortDirection::Ascending => " ^",
        SortDirection::Descending => " v",
    }
}
