//! Review Models

pub const REVIEW_STATUS_ACTIVE: &str = "ACTIVE";

/// Review Model
///
/// A testimonial configured on a checkout config.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub checkout_config_id: i64,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub stars: i32,
    pub status: String,
}
