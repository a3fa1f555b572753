//! Order Bumps

pub mod models;
mod repository;

pub use repository::*;
