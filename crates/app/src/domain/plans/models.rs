//! Plan Models

use crate::uuids::TypedUuid;

/// Plan UUID
pub type PlanUuid = TypedUuid<Plan>;

/// Tag value that means "no tag".
pub const PLAN_TAG_NONE: &str = "Nenhum";

/// Plan Model
///
/// A recurring billing option of an offer. Prices are integer minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i64,
    pub uuid: PlanUuid,
    pub offer_id: i64,
    pub title: String,
    pub tag: String,
    pub price: i64,
    pub promotional_price: i64,
    pub first_charge_price_enabled: bool,
    pub first_charge_price: i64,
    pub charge_frequency: String,
    pub is_default: bool,
}

impl Plan {
    /// The display tag, absent when empty or the "no tag" sentinel.
    #[must_use]
    pub fn display_tag(&self) -> Option<&str> {
        (!self.tag.is_empty() && self.tag != PLAN_TAG_NONE).then_some(self.tag.as_str())
    }
}
