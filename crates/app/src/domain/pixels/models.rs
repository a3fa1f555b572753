//! Pixel Models

use crate::uuids::TypedUuid;

/// Pixel UUID
pub type PixelUuid = TypedUuid<Pixel>;

/// Pixel Model
///
/// A tracking pixel a seller or affiliate configured for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixel {
    pub id: i64,
    pub uuid: PixelUuid,
    pub user_id: i64,
    pub product_id: i64,
    pub events: String,
    pub platform: String,
    pub code: String,
    pub status: bool,
    pub is_api: bool,
    pub enable_bankslip_purchase_percentage: bool,
    pub enable_pix_purchase_percentage: bool,
    pub bank_slip_purchase_percentage: f64,
    pub pix_purchase_percentage: f64,
    pub google_ads_conversion_label: String,
}

impl Pixel {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status
    }
}
