use crate::catalog::model::MenuItemId;
use std::collections::BTreeSet;

const ISSUED_PREFIX: &str = "item-";

/// Hands out menu item ids that have never been seen by the catalogue.
///
/// Every id the catalogue has held (seeded or issued) stays reserved even
/// after its item is removed.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdAllocator {
    reserved: BTreeSet<MenuItemId>,
    counter: u64,
}

impl IdAllocator {
    /// Reserve an externally supplied id. Returns false when already taken.
    pub fn reserve(&mut self, id: &MenuItemId) -> bool {
        self.reserved.insert(id.clone())
    }

    pub fn issue(&mut self) -> MenuItemId {
        loop {
            self.counter += 1;
            let candidate = MenuItemId(format!("{ISSUED_PREFIX}{}", self.counter));
            if self.reserved.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
