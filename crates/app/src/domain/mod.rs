//! Checkout Domain Concerns

pub mod affiliates;
pub mod checkout_configs;
pub mod checkouts;
pub mod companies;
pub mod discounts;
pub mod errors;
pub mod formats;
pub mod offers;
pub mod order_bumps;
pub mod pixels;
pub mod plans;
pub mod products;
pub mod reviews;
pub mod users;
