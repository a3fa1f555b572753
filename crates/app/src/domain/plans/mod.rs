//! Subscription Plans

pub mod models;
mod repository;

pub use repository::*;
