//! Per-resource configuration.
//!
//! Each served collection is described by one `ResourceSpec`: its path
//! name, the singular used in not-found messages, and the key rule applied
//! to create and update bodies. The differing strictness between resources
//! (recipes validate exactly, book creation only requires `title`) lives
//! here as data instead of being scattered across handlers.

use crate::store::seed::{BOOKS, RECIPES};
use crate::validation::KeyRule;

/// Configuration for one collection resource.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// Path segment and store collection name ("recipes").
    pub name: &'static str,

    /// Singular form used in not-found messages ("Recipe").
    pub singular: &'static str,

    /// Key rule for POST bodies.
    pub create_rule: KeyRule,

    /// Key rule for PUT bodies.
    pub update_rule: KeyRule,
}

/// The set of resources this server exposes.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    specs: Vec<ResourceSpec>,
}

impl ResourceRegistry {
    pub fn new(specs: Vec<ResourceSpec>) -> Self {
        Self { specs }
    }

    /// The recipes and books resources.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            ResourceSpec {
                name: RECIPES,
                singular: "Recipe",
                create_rule: KeyRule::exact(&["id", "name", "ingredients"]),
                update_rule: KeyRule::exact(&["name", "ingredients"]),
            },
            ResourceSpec {
                name: BOOKS,
                singular: "Book",
                create_rule: KeyRule::superset_of(&["title"]),
                update_rule: KeyRule::exact(&["id", "title", "author"]),
            },
        ])
    }

    /// Look up a resource by its path name. Exact, case-sensitive.
    pub fn get(&self, name: &str) -> Option<&ResourceSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }
}
