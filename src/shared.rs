//! One catalogue, several consumers.
//!
//! Screens that share a menu each hold a clone of `SharedCatalogue`. Every
//! mutation runs under the lock so id issuance and ordering stay consistent;
//! queries hand back owned copies so callers cannot reach into the list.

use crate::catalog::{
    Course, CourseSummary, DraftItem, MenuCatalogue, MenuItem, MenuItemId, Rejection,
};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Debug)]
pub struct SharedCatalogue {
    inner: Arc<Mutex<MenuCatalogue>>,
}

impl SharedCatalogue {
    pub fn new(catalogue: MenuCatalogue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalogue)),
        }
    }

    // A panic mid-call cannot leave the Vec half-updated, so a poisoned lock
    // still guards a consistent catalogue.
    fn lock(&self) -> MutexGuard<'_, MenuCatalogue> {
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }

    pub fn add(&self, draft: DraftItem) -> Result<MenuItemId, Rejection> {
        self.lock().add(draft)
    }

    pub fn remove(&self, id: &MenuItemId) -> Option<MenuItem> {
        self.lock().remove(id)
    }

    pub fn list_all(&self) -> Vec<MenuItem> {
        self.lock().list_all().to_vec()
    }

    pub fn list_by_course(&self, course: Course) -> Vec<MenuItem> {
        self.lock().list_by_course(course).cloned().collect()
    }

    pub fn average_price(&self, course: Course) -> f64 {
        self.lock().average_price(course)
    }

    pub fn summary(&self) -> Vec<CourseSummary> {
        self.lock().summary()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run a read-only closure against the catalogue under the lock.
    pub fn with<R>(&self, read: impl FnOnce(&MenuCatalogue) -> R) -> R {
        read(&self.lock())
    }
}

impl From<MenuCatalogue> for SharedCatalogue {
    fn from(catalogue: MenuCatalogue) -> Self {
        SharedCatalogue::new(catalogue)
    }
}
