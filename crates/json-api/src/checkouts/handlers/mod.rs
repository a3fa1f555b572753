//! Checkout Handlers

pub(crate) mod show;
