//! Detail pane for a single catalogue item.
//!
//! Renders the loading, loaded, not-found, and failed states of a detail
//! lookup. Not-found is rendered as its own state, never as an error
//! banner.

use crate::catalog::models::Item;
use crate::tui::state::DetailState;

use super::text_fit::truncate_with_ellipsis;

/// Context for rendering the detail view.
#[derive(Debug, Clone)]
pub struct ItemDetailViewContext<'a> {
    /// Current detail state.
    pub state: &'a DetailState,
    /// Maximum width in cells.
    pub max_width: usize,
    /// Maximum height in lines.
    pub max_height: usize,
}

/// Component rendering the item detail view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemDetailComponent;

impl ItemDetailComponent {
    /// Renders the detail view as a string.
    #[must_use]
    pub fn view(ctx: &ItemDetailViewContext<'_>) -> String {
        let body = match ctx.state {
            DetailState::Loading { id } => format!("  Loading product {id}...\n"),
            DetailState::NotFound { id } => {
                format!("  Product {id} not found.\n\n  It may have been removed. Esc: back\n")
            }
            DetailState::Failed { message } => {
                format!("  Could not load product details: {message}\n\n  r: retry  Esc: back\n")
            }
            DetailState::Loaded { item, related } => Self::render_item(item, related, ctx),
        };

        clamp_lines(&body, ctx.max_height)
    }

    fn render_item(item: &Item, related: &[Item], ctx: &ItemDetailViewContext<'_>) -> String {
        let mut output = String::new();
        let width = ctx.max_width.saturating_sub(4).max(20);

        output.push_str(&format!("  {}\n", item.name));
        output.push_str(&format!(
            "  #{}  SKU {}\n",
            item.id,
            item.sku.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!(
            "  {} / {}\n",
            item.category,
            item.brand.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!(
            "  ${:.2}  {}\n",
            item.price,
            item.status.label()
        ));
        if let Some(color) = &item.color {
            output.push_str(&format!("  Colour: {color}\n"));
        }
        if let Some(description) = &item.description {
            output.push_str(&format!(
                "  {}\n",
                truncate_with_ellipsis(description, width)
            ));
        }
        if let Some(weight) = item.weight {
            output.push_str(&format!("  Weight: {weight}\n"));
        }
        if let Some(dimension) = &item.dimension {
            output.push_str(&format!("  Dimensions: {dimension}\n"));
        }
        if let Some(created) = item.created_at {
            output.push_str(&format!("  Added: {}\n", created.format("%Y-%m-%d")));
        }
        if let Some(updated) = item.updated_at {
            output.push_str(&format!("  Updated: {}\n", updated.format("%Y-%m-%d")));
        }

        if !related.is_empty() {
            output.push('\n');
            output.push_str("  Related:\n");
            for relation in related {
                output.push_str(&format!("    {} (#{})\n", relation.name, relation.id));
            }
        }

        output
    }
}

fn clamp_lines(body: &str, max_height: usize) -> String {
    let mut output = String::new();
    for line in body.lines().take(max_height) {
        output.push_str(line);
        output.push('\n');
    }
    output
}
