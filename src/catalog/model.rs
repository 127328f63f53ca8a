//! Value types stored in the menu catalogue.
//!
//! Everything here is normalized on construction: names are trimmed and
//! non-empty, prices are whole positive cents, and courses are a closed enum.
//! The catalogue relies on these types so it never re-checks stored items.

use crate::catalog::draft::{NormalizedDraft, Rejection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image handle assigned to dishes added without a picture.
pub const PLACEHOLDER_IMAGE: &str = "assets/menu/placeholder.png";

/// Course a dish is served in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    #[default]
    #[serde(rename = "Starters")]
    Starters,
    #[serde(rename = "Main Courses")]
    MainCourses,
    #[serde(rename = "Desserts")]
    Desserts,
}

impl Course {
    /// Every course in menu order.
    pub const ALL: [Course; 3] = [Course::Starters, Course::MainCourses, Course::Desserts];

    /// Label shown on the menu and used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::MainCourses => "Main Courses",
            Course::Desserts => "Desserts",
        }
    }

    /// Command-line spelling.
    pub fn slug(self) -> &'static str {
        match self {
            Course::Starters => "starters",
            Course::MainCourses => "main-courses",
            Course::Desserts => "desserts",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::MainCourses => "MainCourses",
            Course::Desserts => "Desserts",
        }
    }

    /// Match free text against the closed set of courses.
    ///
    /// Surrounding whitespace and ASCII case are ignored; the text must then
    /// be the label ("Main Courses"), the slug ("main-courses") or the
    /// variant name ("MainCourses").
    pub fn parse(raw: &str) -> Option<Course> {
        let wanted = raw.trim();
        Course::ALL.into_iter().find(|course| {
            [course.label(), course.slug(), course.variant_name()]
                .iter()
                .any(|spelling| spelling.eq_ignore_ascii_case(wanted))
        })
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Course {
    type Err = Rejection;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Course::parse(raw).ok_or_else(|| Rejection::UnknownCourse(raw.trim().to_string()))
    }
}

/// Positive price held as whole cents.
///
/// Serialized as a plain JSON number (for example `95.99`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Build a price from cents; `None` for zero.
    pub fn from_cents(cents: u64) -> Option<Price> {
        (cents > 0).then_some(Price { cents })
    }

    /// Price for constant menu data. Zero fails const evaluation.
    pub(crate) const fn fixed(cents: u64) -> Price {
        assert!(cents > 0, "menu prices must be positive");
        Price { cents }
    }

    /// Round an amount to cents, half away from zero.
    ///
    /// Rejects non-finite amounts, amounts `<= 0`, and amounts that round down
    /// to zero cents.
    pub fn from_amount(amount: f64) -> Result<Price, Rejection> {
        if amount.is_nan() || amount.is_infinite() {
            return Err(Rejection::PriceNotANumber(amount.to_string()));
        }
        if amount <= 0.0 {
            return Err(Rejection::NonPositivePrice(amount.to_string()));
        }
        let scaled = (amount * 100.0).round();
        if !scaled.is_finite() || scaled >= u64::MAX as f64 {
            return Err(Rejection::PriceNotANumber(amount.to_string()));
        }
        Price::from_cents(scaled as u64)
            .ok_or_else(|| Rejection::NonPositivePrice(amount.to_string()))
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// The price as a decimal amount.
    pub fn amount(self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl TryFrom<f64> for Price {
    type Error = Rejection;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::from_amount(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.amount()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{:02}", self.cents / 100, self.cents % 100))
    }
}

/// Format an amount (such as an average) with the same rounding prices get
/// on the way in: half away from zero, two decimals.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Opaque identifier of a catalogue entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        MenuItemId(value.to_string())
    }
}

impl From<String> for MenuItemId {
    fn from(value: String) -> Self {
        MenuItemId(value)
    }
}

/// Reference to a dish picture. Never interpreted by the catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        ImageRef(handle.into())
    }

    pub fn placeholder() -> Self {
        ImageRef::new(PLACEHOLDER_IMAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single dish on the menu.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    price: Price,
    #[serde(rename = "category")]
    course: Course,
    description: String,
    image: ImageRef,
}

impl MenuItem {
    /// Build an item from already-typed parts, trimming the text fields.
    ///
    /// Fails only when the name is blank.
    pub fn new(
        id: MenuItemId,
        name: &str,
        price: Price,
        course: Course,
        description: &str,
        image: ImageRef,
    ) -> Result<Self, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price,
            course,
            description: description.trim().to_string(),
            image,
        })
    }

    /// Item from trusted constant data; text is taken as written.
    pub(crate) fn fixed(
        id: &str,
        name: &str,
        price: Price,
        course: Course,
        description: &str,
        image: &str,
    ) -> Self {
        Self {
            id: MenuItemId::from(id),
            name: name.to_string(),
            price,
            course,
            description: description.to_string(),
            image: ImageRef::new(image),
        }
    }

    pub(crate) fn from_draft(id: MenuItemId, draft: NormalizedDraft, image: ImageRef) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            course: draft.course,
            description: draft.description,
            image,
        }
    }

    pub fn id(&self) -> &MenuItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}
