//! Affiliate Repositories

mod affiliates;
mod settings;

pub use affiliates::*;
pub use settings::*;
