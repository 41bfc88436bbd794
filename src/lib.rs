//! cookshelf - a small, self-hostable CRUD API server for recipe and book
//! collections, with user registration, login, and security-question
//! verification.

pub mod api;
pub mod auth;
pub mod cli;
pub mod observability;
pub mod server;
pub mod store;
pub mod validation;
