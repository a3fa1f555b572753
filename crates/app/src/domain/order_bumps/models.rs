//! Order Bump Models

/// Order Bump Model
///
/// An add-on offered alongside the main offer. `offered_offer_id` points at
/// the offer being upsold; `offer_id` at the offer whose checkout shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBump {
    pub id: i64,
    pub offer_id: i64,
    pub offered_offer_id: i64,
    pub name: String,
    pub tag: String,
    pub description: String,
    pub sort_order: i32,
}
