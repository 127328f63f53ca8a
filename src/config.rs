//! Environment-driven settings for building a catalogue.
//!
//! `CHRISTOFEL_SEED` points at a seed file and `CHRISTOFEL_PLACEHOLDER_IMAGE`
//! overrides the image handle given to new dishes. Command-line flags win
//! over the environment; with neither set, the built-in menu is used.

use crate::catalog::{ImageRef, MenuCatalogue, Seed};
use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const ENV_SEED_PATH: &str = "CHRISTOFEL_SEED";
pub const ENV_PLACEHOLDER_IMAGE: &str = "CHRISTOFEL_PLACEHOLDER_IMAGE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuConfig {
    pub seed_path: Option<PathBuf>,
    pub placeholder_image: Option<ImageRef>,
}

impl MenuConfig {
    pub fn from_env() -> Self {
        Self {
            seed_path: env_non_empty(ENV_SEED_PATH).map(PathBuf::from),
            placeholder_image: env_non_empty(ENV_PLACEHOLDER_IMAGE).map(ImageRef::new),
        }
    }

    /// Replace the seed path when an override is given.
    pub fn with_seed_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.seed_path = path;
        }
        self
    }

    pub fn load_seed(&self) -> Result<Seed> {
        match &self.seed_path {
            Some(path) => Seed::load(path),
            None => Ok(Seed::builtin()),
        }
    }

    pub fn build_catalogue(&self) -> Result<MenuCatalogue> {
        let catalogue = MenuCatalogue::new(self.load_seed()?);
        Ok(match &self.placeholder_image {
            Some(image) => catalogue.with_placeholder_image(image.clone()),
            None => catalogue,
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
