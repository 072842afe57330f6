//! Resource library models

use serde::{Deserialize, Serialize};

/// A document in the resource library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document name
    pub name: String,
    /// Category, e.g. "Important Tools"
    pub category: String,
    /// Audience label, e.g. "All Employees" or "Leaders"
    pub stakeholder: String,
    /// Country restriction, "All Countries" when unrestricted
    pub country: String,
    /// Owning department or person
    pub owner: Option<String>,
    /// Link to the document
    pub link: String,
}

/// Documents grouped under one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCategory {
    /// Stable category id, kebab-case of the name
    pub id: String,
    /// Category name
    pub name: String,
    /// Number of documents in this category
    pub count: usize,
    /// Documents in catalog order
    pub documents: Vec<Document>,
}

impl Document {
    /// Whether the document is unrestricted by country
    pub fn is_global(&self) -> bool {
        self.country.eq_ignore_ascii_case("all countries")
    }
}

/// Kebab-case slug for a category name
pub fn category_slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
