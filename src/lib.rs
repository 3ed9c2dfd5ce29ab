pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod recipe;

pub use error::{PlannerError, Result};
pub use models::{Catalog, CatalogItem, Selection};
pub use planner::{select, select_items, Selector};
