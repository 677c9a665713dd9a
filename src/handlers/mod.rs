//! HTTP handlers: one store operation and one response translation each.

pub mod brands;
pub mod cars;
pub mod models;
