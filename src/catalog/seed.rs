//! Seed lists the catalogue starts from.
//!
//! The built-in seed is the Christofel house menu. Seed files are JSON
//! documents checked against `schema/menu_seed.schema.json` and then against
//! the same normalization rules `add` applies. Seeds are authored data, so any
//! bad entry fails the whole load instead of being skipped.

use crate::catalog::model::{Course, ImageRef, MenuItem, MenuItemId, Price};
use crate::schema_loader::{load_json_schema, validate};
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Version marker every seed file must carry.
pub const SEED_SCHEMA_VERSION: &str = "christofel_menu_seed_v1";

const SEED_SCHEMA: &str = include_str!("../../schema/menu_seed.schema.json");

// id, name, price, course, description, image
const HOUSE_MENU: &[(&str, &str, Price, Course, &str, &str)] = &[
    (
        "1",
        "Beef Carpaccio",
        Price::fixed(9599),
        Course::Starters,
        "Thinly sliced beef fillet, rocket, parmesan shavings and truffle oil.",
        "assets/menu/beef_carpaccio.jpg",
    ),
    (
        "2",
        "Seared Scallops",
        Price::fixed(13999),
        Course::Starters,
        "Pan-seared scallops on cauliflower purée with crispy pancetta.",
        "assets/menu/seared_scallops.jpg",
    ),
    (
        "3",
        "Roasted Tomato Soup",
        Price::fixed(8499),
        Course::Starters,
        "Slow-roasted tomatoes, basil oil and a toasted sourdough crouton.",
        "assets/menu/tomato_soup.jpg",
    ),
    (
        "4",
        "Burrata & Heirloom Tomato",
        Price::fixed(9799),
        Course::Starters,
        "Creamy burrata, heirloom tomatoes, balsamic reduction.",
        "assets/menu/burrata.jpg",
    ),
    (
        "5",
        "Rack of Lamb",
        Price::fixed(28999),
        Course::MainCourses,
        "Herb-crusted Karoo lamb, rosemary jus and fondant potato.",
        "assets/menu/rack_of_lamb.jpg",
    ),
    (
        "6",
        "Pan-Roasted Kingklip",
        Price::fixed(24550),
        Course::MainCourses,
        "Kingklip fillet, lemon beurre blanc and seasonal greens.",
        "assets/menu/kingklip.jpg",
    ),
    (
        "7",
        "Wild Mushroom Risotto",
        Price::fixed(18900),
        Course::MainCourses,
        "Arborio rice, porcini and parmesan, finished with chives.",
        "assets/menu/mushroom_risotto.jpg",
    ),
    (
        "8",
        "Malva Pudding",
        Price::fixed(7999),
        Course::Desserts,
        "Warm apricot sponge with vanilla custard.",
        "assets/menu/malva_pudding.jpg",
    ),
    (
        "9",
        "Dark Chocolate Fondant",
        Price::fixed(9250),
        Course::Desserts,
        "Molten centre, salted caramel ice cream.",
        "assets/menu/chocolate_fondant.jpg",
    ),
    (
        "10",
        "Lemon Tart",
        Price::fixed(7499),
        Course::Desserts,
        "Sharp lemon curd, Italian meringue, shortcrust pastry.",
        "assets/menu/lemon_tart.jpg",
    ),
];

/// Validated initial menu: unique ids, items in seed order.
#[derive(Clone, Debug)]
pub struct Seed {
    items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    schema_version: String,
    items: Vec<SeedEntry>,
}

#[derive(Debug, Deserialize)]
struct SeedEntry {
    id: String,
    name: String,
    price: f64,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
}

impl Seed {
    /// The Christofel house menu.
    pub fn builtin() -> Self {
        let items = HOUSE_MENU
            .iter()
            .map(|&(id, name, price, course, description, image)| {
                MenuItem::fixed(id, name, price, course, description, image)
            })
            .collect();
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap already-built items, rejecting duplicate ids.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen: BTreeSet<&MenuItemId> = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id()) {
                bail!("duplicate menu item id {}", item.id());
            }
        }
        Ok(Self { items })
    }

    /// Load and validate a seed file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let seed = Self::from_json_str(&data)
            .with_context(|| format!("loading seed file {}", path.display()))?;
        info!(path = %path.display(), items = seed.len(), "loaded menu seed");
        Ok(seed)
    }

    /// Parse and validate a seed document.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).context("parsing seed JSON")?;

        let schema = load_json_schema(SEED_SCHEMA, "menu_seed", SEED_SCHEMA_VERSION)?;
        validate(&schema, &value, "seed")?;

        let file: SeedFile = serde_json::from_value(value).context("decoding seed items")?;
        if file.schema_version != schema.schema_version {
            bail!(
                "seed schema_version '{}' does not match {}",
                file.schema_version,
                schema.schema_version
            );
        }

        let items = file
            .items
            .into_iter()
            .map(build_item)
            .collect::<Result<Vec<_>>>()?;
        Self::from_items(items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_items(self) -> Vec<MenuItem> {
        self.items
    }
}

fn build_item(entry: SeedEntry) -> Result<MenuItem> {
    let id = entry.id.trim();
    if id.is_empty() {
        bail!("encountered seed item with no id");
    }
    let course = Course::parse(&entry.category)
        .ok_or_else(|| anyhow!("seed item {id} has unknown category '{}'", entry.category))?;
    let price =
        Price::from_amount(entry.price).with_context(|| format!("seed item {id} has a bad price"))?;
    let image = entry
        .image
        .map(ImageRef::new)
        .unwrap_or_else(ImageRef::placeholder);
    MenuItem::new(
        MenuItemId::from(id),
        &entry.name,
        price,
        course,
        &entry.description,
        image,
    )
    .with_context(|| format!("seed item {id} is invalid"))
}
