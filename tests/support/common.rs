#![allow(dead_code)]

use anyhow::Result;
use christofel::{DraftItem, MenuCatalogue, MenuItemId, SEED_SCHEMA_VERSION, Seed};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

// Ids in list order, for before/after comparisons.
pub fn ids(catalogue: &MenuCatalogue) -> Vec<MenuItemId> {
    catalogue
        .list_all()
        .iter()
        .map(|item| item.id().clone())
        .collect()
}

pub fn house_catalogue() -> MenuCatalogue {
    MenuCatalogue::new(Seed::builtin())
}

pub fn valid_draft(name: &str) -> DraftItem {
    DraftItem::new(name, "Main Courses", 120.0, "fixture dish")
}

pub fn seed_entry(id: &str, name: &str, price: f64, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "category": category,
        "description": format!("{name} fixture"),
        "image": format!("assets/test/{id}.jpg")
    })
}

// Writes a seed document with the current schema version.
pub fn write_seed(items: Vec<Value>) -> Result<NamedTempFile> {
    write_seed_document(&json!({
        "schema_version": SEED_SCHEMA_VERSION,
        "items": items
    }))
}

pub fn write_seed_document(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, document)?;
    file.flush()?;
    Ok(file)
}
