//! Show Checkout
//!
//! Resolves an offer's checkout page: validates the request, walks the
//! eligibility chain, attributes affiliates, records the visit and assembles
//! the view model.

mod assembler;
mod deadline;
pub mod errors;
pub mod request;
pub mod response;
mod service;
mod tracking;
pub mod validation;

pub use service::*;
