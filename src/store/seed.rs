//! Seed data for the collections served at boot.

use serde_json::json;

use super::{InMemoryStore, Store};

/// Collection name for recipes.
pub const RECIPES: &str = "recipes";

/// Collection name for books.
pub const BOOKS: &str = "books";

/// A store pre-loaded with the starter recipes and books.
///
/// Seeding happens through the public `Store` contract, so the seed records
/// go through the same id bookkeeping as client inserts.
pub fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();

    let recipes = [
        json!({"id": 1, "name": "Pancakes", "ingredients": ["flour", "milk", "eggs"]}),
        json!({"id": 2, "name": "Spaghetti Bolognese", "ingredients": ["spaghetti", "ground beef", "tomato sauce"]}),
        json!({"id": 3, "name": "Chicken Soup", "ingredients": ["chicken", "carrots", "celery"]}),
    ];

    let books = [
        json!({"id": 1, "title": "The Fellowship of the Ring", "author": "J.R.R. Tolkien"}),
        json!({"id": 2, "title": "The Two Towers", "author": "J.R.R. Tolkien"}),
        json!({"id": 3, "title": "The Return of the King", "author": "J.R.R. Tolkien"}),
        json!({"id": 4, "title": "The Hobbit", "author": "J.R.R. Tolkien"}),
        json!({"id": 5, "title": "The Silmarillion", "author": "J.R.R. Tolkien"}),
    ];

    for recipe in recipes {
        store
            .insert_one(RECIPES, recipe)
            .expect("seed recipes have unique ids");
    }
    for book in books {
        store
            .insert_one(BOOKS, book)
            .expect("seed books have unique ids");
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_both_collections() {
        let store = seeded_store();

        assert_eq!(store.find(RECIPES).unwrap().len(), 3);
        assert_eq!(store.find(BOOKS).unwrap().len(), 5);
    }

    #[test]
    fn test_seeded_records_carry_expected_fields() {
        let store = seeded_store();

        let pancakes = store.find_one(RECIPES, 1).unwrap();
        assert_eq!(pancakes["name"], "Pancakes");
        assert_eq!(pancakes["ingredients"], serde_json::json!(["flour", "milk", "eggs"]));

        let fellowship = store.find_one(BOOKS, 1).unwrap();
        assert_eq!(fellowship["title"], "The Fellowship of the Ring");
        assert_eq!(fellowship["author"], "J.R.R. Tolkien");
    }
}
