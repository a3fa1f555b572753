//! Affiliates

pub mod models;
mod repositories;

pub use repositories::*;
