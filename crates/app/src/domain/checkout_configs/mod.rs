//! Checkout Configurations

pub mod models;
mod repository;

pub use repository::*;
