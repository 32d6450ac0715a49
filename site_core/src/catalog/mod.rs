//! Static service catalog
//!
//! The catalog is defined once at startup and is read-only for the lifetime
//! of the process. Lookups are by slug id; the listing page partitions the
//! catalog into a core grid and an other grid by category.

mod data;
pub mod icons;

pub use icons::Icon;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Other => "other",
        }
    }
}

/// Cosmetic accent tag; selects a display class only, no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Blue,
    Purple,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub features: &'static [&'static str],
    pub icon: Icon,
    pub category: Category,
    pub accent: Accent,
}

/// Read-only view over the static service data.
#[derive(Clone, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> &'static [ServiceItem] {
        data::SERVICES
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static ServiceItem> {
        data::SERVICES.iter().find(|item| item.id == id)
    }

    /// Entries of one category, in catalog declaration order.
    pub fn by_category(&self, category: Category) -> Vec<&'static ServiceItem> {
        data::SERVICES
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        data::SERVICES.len()
    }

    pub fn is_empty(&self) -> bool {
        data::SERVICES.is_empty()
    }
}
