//! Checkout page domain, persistence and orchestration.

pub mod context;
pub mod database;
pub mod domain;
pub mod media;
pub mod settings;
pub mod show_checkout;

#[cfg(test)]
mod test;

pub mod uuids;
