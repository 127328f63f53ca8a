//! Draft items and the validation pipeline that turns them into menu entries.

use crate::catalog::model::{Course, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a draft was refused. The catalogue is never modified on rejection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("menu item name must not be empty")]
    EmptyName,
    #[error("unknown course '{0}' (expected Starters, Main Courses or Desserts)")]
    UnknownCourse(String),
    #[error("price '{0}' is not a number")]
    PriceNotANumber(String),
    #[error("price must be greater than zero, got {0}")]
    NonPositivePrice(String),
}

/// Price as submitted: a number, or the raw text typed into a form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftPrice {
    Amount(f64),
    Text(String),
}

impl DraftPrice {
    /// Coerce to a finite number. Text is trimmed and parsed as a decimal;
    /// blank text is not a number.
    pub fn coerce(&self) -> Result<f64, Rejection> {
        let amount = match self {
            DraftPrice::Amount(amount) => *amount,
            DraftPrice::Text(raw) => {
                let trimmed = raw.trim();
                trimmed
                    .parse::<f64>()
                    .map_err(|_| Rejection::PriceNotANumber(trimmed.to_string()))?
            }
        };
        if amount.is_finite() {
            Ok(amount)
        } else {
            Err(Rejection::PriceNotANumber(self.to_string()))
        }
    }
}

impl Default for DraftPrice {
    fn default() -> Self {
        DraftPrice::Text(String::new())
    }
}

impl std::fmt::Display for DraftPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftPrice::Amount(amount) => write!(f, "{amount}"),
            DraftPrice::Text(raw) => f.write_str(raw.trim()),
        }
    }
}

impl From<f64> for DraftPrice {
    fn from(amount: f64) -> Self {
        DraftPrice::Amount(amount)
    }
}

impl From<&str> for DraftPrice {
    fn from(raw: &str) -> Self {
        DraftPrice::Text(raw.to_string())
    }
}

impl From<String> for DraftPrice {
    fn from(raw: String) -> Self {
        DraftPrice::Text(raw)
    }
}

/// Unvalidated input for a new menu entry. Ids and images are assigned by
/// the catalogue, so drafts carry neither.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftItem {
    pub name: String,
    pub category: String,
    pub price: DraftPrice,
    #[serde(default)]
    pub description: String,
}

/// A draft that passed every check.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NormalizedDraft {
    pub name: String,
    pub course: Course,
    pub price: Price,
    pub description: String,
}

impl DraftItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<DraftPrice>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Run the validation pipeline.
    ///
    /// Text is trimmed and the course resolved first, then the price is
    /// coerced, checked and rounded to cents, and only then are the name and
    /// course verdicts applied. A draft with several problems therefore
    /// reports its price problem.
    pub(crate) fn normalize(&self) -> Result<NormalizedDraft, Rejection> {
        let name = self.name.trim();
        let description = self.description.trim();
        let course = self.category.parse::<Course>();

        let price = Price::from_amount(self.price.coerce()?)?;

        if name.is_empty() {
            return Err(Rejection::EmptyName);
        }
        let course = course?;

        Ok(NormalizedDraft {
            name: name.to_string(),
            course,
            price,
            description: description.to_string(),
        })
    }
}
