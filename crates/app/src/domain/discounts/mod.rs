//! Discount Coupons

mod repository;

pub use repository::*;
