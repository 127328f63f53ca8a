//! The menu catalogue: an ordered list of dishes plus its mutation and query
//! operations.
//!
//! Additions go to the front, so `list_all` reads newest-first followed by
//! the seed in its original order. Filters are stable and never re-sort.

use crate::catalog::draft::{DraftItem, Rejection};
use crate::catalog::ids::IdAllocator;
use crate::catalog::model::{Course, ImageRef, MenuItem, MenuItemId};
use crate::catalog::seed::Seed;
use serde::Serialize;
use tracing::{debug, warn};

/// Item count and mean price for one course.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CourseSummary {
    pub course: Course,
    pub items: usize,
    pub average_price: f64,
}

/// In-memory menu owned by a single session.
#[derive(Clone, Debug)]
pub struct MenuCatalogue {
    items: Vec<MenuItem>,
    ids: IdAllocator,
    placeholder_image: ImageRef,
}

impl MenuCatalogue {
    /// Build a catalogue holding the seed items in seed order.
    pub fn new(seed: Seed) -> Self {
        let items = seed.into_items();
        let mut ids = IdAllocator::default();
        for item in &items {
            ids.reserve(item.id());
        }
        Self {
            items,
            ids,
            placeholder_image: ImageRef::placeholder(),
        }
    }

    /// Image handle given to dishes added through `add`.
    pub fn with_placeholder_image(mut self, image: ImageRef) -> Self {
        self.placeholder_image = image;
        self
    }

    pub fn placeholder_image(&self) -> &ImageRef {
        &self.placeholder_image
    }

    /// Validate a draft and put the resulting item at the front of the menu.
    ///
    /// On rejection the menu is left exactly as it was and the reason is
    /// logged as well as returned.
    pub fn add(&mut self, draft: DraftItem) -> Result<MenuItemId, Rejection> {
        let normalized = match draft.normalize() {
            Ok(normalized) => normalized,
            Err(rejection) => {
                warn!(
                    dish = draft.name.trim(),
                    category = draft.category.trim(),
                    %rejection,
                    "rejected menu item"
                );
                return Err(rejection);
            }
        };
        let id = self.ids.issue();
        let item = MenuItem::from_draft(id.clone(), normalized, self.placeholder_image.clone());
        debug!(
            id = %id,
            course = %item.course(),
            price = %item.price(),
            "added menu item"
        );
        self.items.insert(0, item);
        Ok(id)
    }

    /// Remove the item with this id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &MenuItemId) -> Option<MenuItem> {
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            debug!(id = %id, "remove ignored, no such menu item");
            return None;
        };
        let removed = self.items.remove(position);
        debug!(id = %id, dish = removed.name(), "removed menu item");
        Some(removed)
    }

    /// Every item, newest addition first.
    pub fn list_all(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items of one course in menu order.
    pub fn list_by_course(&self, course: Course) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(move |item| item.course() == course)
    }

    /// Mean price of a course, unrounded; `0.0` for an empty course.
    ///
    /// Summed in cents so the mean carries no accumulated float error.
    pub fn average_price(&self, course: Course) -> f64 {
        let (count, total_cents) = self
            .list_by_course(course)
            .fold((0u64, 0u128), |(count, total), item| {
                (count + 1, total + u128::from(item.price().cents()))
            });
        if count == 0 {
            return 0.0;
        }
        total_cents as f64 / count as f64 / 100.0
    }

    /// Per-course counts and averages in menu order.
    pub fn summary(&self) -> Vec<CourseSummary> {
        Course::ALL
            .into_iter()
            .map(|course| CourseSummary {
                course,
                items: self.list_by_course(course).count(),
                average_price: self.average_price(course),
            })
            .collect()
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalogue {
    /// The built-in Christofel menu.
    fn default() -> Self {
        MenuCatalogue::new(Seed::builtin())
    }
}
