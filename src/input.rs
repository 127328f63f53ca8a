//! Form-side helpers for the Add Item screen.
//!
//! Sanitizing here only keeps obviously bad keystrokes out of the price
//! field. The catalogue validates every draft again on `add`.

use crate::catalog::{Course, DraftItem, DraftPrice, MenuCatalogue, MenuItemId, Rejection};

/// Keep ASCII digits and the first decimal separator (`.` or `,`, stored as
/// `.`); drop everything else.
pub fn sanitize_price_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_separator = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' | ',' if !seen_separator => {
                seen_separator = true;
                out.push('.');
            }
            _ => {}
        }
    }
    out
}

/// Field values of the Add Item form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddItemForm {
    pub name: String,
    pub course: Course,
    pub description: String,
    price_text: String,
}

impl AddItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store price keystrokes, sanitized.
    pub fn set_price_text(&mut self, raw: &str) {
        self.price_text = sanitize_price_text(raw);
    }

    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    pub fn to_draft(&self) -> DraftItem {
        DraftItem {
            name: self.name.clone(),
            category: self.course.label().to_string(),
            price: DraftPrice::Text(self.price_text.clone()),
            description: self.description.clone(),
        }
    }

    /// Send the form to the catalogue. Fields are cleared only when the item
    /// was accepted, so a rejected entry can be corrected in place.
    pub fn submit(&mut self, catalogue: &mut MenuCatalogue) -> Result<MenuItemId, Rejection> {
        let id = catalogue.add(self.to_draft())?;
        self.reset();
        Ok(id)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
