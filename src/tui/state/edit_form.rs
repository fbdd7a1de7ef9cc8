//! Edit form state producing field-level item patches.
//!
//! The form mirrors the edit dialog of the catalogue UI: free-text fields
//! for name, description, brand, and price; cycling choice fields for
//! category, status, and colour. Submitting yields an [`ItemPatch`] applied
//! to the dataset by id.

use crate::catalog::models::{Item, ItemPatch, Status};

/// Colour choices offered by the edit form.
pub const COLOR_CHOICES: [&str; 7] = ["Red", "Blue", "Green", "Black", "White", "Gray", "Yellow"];

/// Fields of the edit form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// Item name (text).
    Name,
    /// Item description (text).
    Description,
    /// Category (choice over the derived vocabulary).
    Category,
    /// Brand (text).
    Brand,
    /// Price (text, parsed on submit).
    Price,
    /// Stock status (choice).
    Status,
    /// Colour (choice).
    Color,
}

impl EditField {
    /// Focus traversal order.
    pub const ORDER: [Self; 7] = [
        Self::Name,
        Self::Description,
        Self::Category,
        Self::Brand,
        Self::Price,
        Self::Status,
        Self::Color,
    ];

    /// Display label for the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Brand => "Brand",
            Self::Price => "Price",
            Self::Status => "Status",
            Self::Color => "Color",
        }
    }

    /// Returns true for fields edited by cycling rather than typing.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Category | Self::Status | Self::Color)
    }
}

/// In-progress edit of a single item.
#[derive(Debug, Clone)]
pub struct EditForm {
    /// Identity of the item under edit.
    pub item_id: u64,
    /// Index into [`EditField::ORDER`] of the focused field.
    focus: usize,
    /// Name buffer.
    pub name: String,
    /// Description buffer.
    pub description: String,
    /// Selected category.
    pub category: String,
    /// Brand buffer.
    pub brand: String,
    /// Price buffer, parsed on submit.
    pub price: String,
    /// Selected status.
    pub status: Status,
    /// Selected colour.
    pub color: String,
}

impl EditForm {
    /// Prefills a form from the item under the cursor.
    #[must_use]
    pub fn for_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            focus: 0,
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            category: item.category.clone(),
            brand: item.brand.clone().unwrap_or_default(),
            price: format!("{:.2}", item.price),
            status: item.status,
            color: item.color.clone().unwrap_or_default(),
        }
    }

    /// The currently focused field.
    #[must_use]
    pub fn focused(&self) -> EditField {
        EditField::ORDER
            .get(self.focus)
            .copied()
            .unwrap_or(EditField::Name)
    }

    /// Moves focus to the next field, wrapping at the end.
    pub const fn focus_next(&mut self) {
        self.focus = if self.focus + 1 >= EditField::ORDER.len() {
            0
        } else {
            self.focus + 1
        };
    }

    /// Moves focus to the previous field, wrapping at the start.
    pub const fn focus_previous(&mut self) {
        self.focus = match self.focus.checked_sub(1) {
            Some(previous) => previous,
            None => EditField::ORDER.len() - 1,
        };
    }

    /// Appends a character to the focused text field.
    ///
    /// Choice fields ignore typed characters; they change via
    /// [`EditForm::cycle_choice`].
    pub fn input_char(&mut self, ch: char) {
        match self.focused() {
            EditField::Name => self.name.push(ch),
            EditField::Description => self.description.push(ch),
            EditField::Brand => self.brand.push(ch),
            EditField::Price => self.price.push(ch),
            EditField::Category | EditField::Status | EditField::Color => {}
        }
    }

    /// Removes the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focused() {
            EditField::Name => {
                self.name.pop();
            }
            EditField::Description => {
                self.description.pop();
            }
            EditField::Brand => {
                self.brand.pop();
            }
            EditField::Price => {
                self.price.pop();
            }
            EditField::Category | EditField::Status | EditField::Color => {}
        }
    }

    /// Advances the focused choice field to its next option.
    ///
    /// Text fields are unaffected. Categories cycle through the derived
    /// vocabulary; unknown current values restart at the first option.
    pub fn cycle_choice(&mut self, categories: &[String]) {
        match self.focused() {
            EditField::Category => {
                self.category = next_in(categories.iter().map(String::as_str), &self.category);
            }
            EditField::Status => {
                self.status = match self.status {
                    Status::InStock => Status::LowStock,
                    Status::LowStock => Status::OutOfStock,
                    Status::OutOfStock => Status::InStock,
                };
            }
            EditField::Color => {
                self.color = next_in(COLOR_CHOICES.iter().copied(), &self.color);
            }
            EditField::Name | EditField::Description | EditField::Brand | EditField::Price => {}
        }
    }

    /// Builds the field-level patch this form represents.
    ///
    /// Empty description/brand/colour buffers patch nothing. A price buffer
    /// that fails to parse as a non-negative number leaves the price
    /// unpatched.
    #[must_use]
    pub fn to_patch(&self) -> ItemPatch {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| *value >= 0.0 && value.is_finite());

        ItemPatch {
            name: Some(self.name.clone()),
            description: non_empty(&self.description),
            category: Some(self.category.clone()),
            brand: non_empty(&self.brand),
            price,
            status: Some(self.status),
            color: non_empty(&self.color),
        }
    }
}

fn non_empty(buffer: &str) -> Option<String> {
    if buffer.is_empty() {
        None
    } else {
        Some(buffer.to_owned())
    }
}

/// The option after `current` in `options`, wrapping; falls back to the
/// first option when `current` is unknown or the list is exhausted.
fn next_in<'a>(options: impl Iterator<Item = &'a str> + Clone, current: &str) -> String {
    let mut found = false;
    for option in options.clone() {
        if found {
            return option.to_owned();
        }
        if option == current {
            found = true;
        }
    }
    options.into_iter().next().unwrap_or_default().to_owned()
}
