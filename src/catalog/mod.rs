//! Menu catalogue wiring.
//!
//! `MenuCatalogue` owns the ordered list of dishes; `Seed` supplies the list
//! it starts from; `DraftItem` is what callers hand to `add`. The value types
//! in `model` carry the normalization invariants so stored items never need
//! re-checking.

pub mod draft;
mod ids;
pub mod menu;
pub mod model;
pub mod seed;

pub use draft::{DraftItem, DraftPrice, Rejection};
pub use menu::{CourseSummary, MenuCatalogue};
pub use model::{Course, ImageRef, MenuItem, MenuItemId, PLACEHOLDER_IMAGE, Price, format_amount};
pub use seed::{SEED_SCHEMA_VERSION, Seed};
