//! Christofel menu catalogue.
//!
//! The kitchen's menu lives in memory for the length of a session: it starts
//! from a seed list, takes new dishes from the Add Item form, drops removed
//! ones, and answers per-course queries for the Home and Filter screens.
//! Nothing is persisted; a restart returns to the seed.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod input;
mod schema_loader;
pub mod shared;

pub use catalog::{
    Course, CourseSummary, DraftItem, DraftPrice, ImageRef, MenuCatalogue, MenuItem, MenuItemId,
    PLACEHOLDER_IMAGE, Price, Rejection, SEED_SCHEMA_VERSION, Seed, format_amount,
};
pub use commands::{
    CommandOutcome, MenuCommand, apply_command, apply_commands, parse_command_stream,
};
pub use config::{ENV_PLACEHOLDER_IMAGE, ENV_SEED_PATH, MenuConfig};
pub use input::{AddItemForm, sanitize_price_text};
pub use shared::SharedCatalogue;
