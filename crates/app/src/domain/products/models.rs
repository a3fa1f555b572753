//! Product Models

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

pub const PRODUCT_STATUS_ACTIVE: &str = "ACTIVE";
pub const EVALUATION_STATUS_REFUSED: &str = "REFUSED";

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub uuid: ProductUuid,
    pub name: String,
    pub user_id: i64,
    pub company_id: i64,
    pub format_id: i64,
    pub status: String,
    pub evaluation_status: String,
    pub currency: String,
    pub photo_url: String,
    pub seller_name: String,
}

impl Product {
    /// Active and not refused at evaluation.
    #[must_use]
    pub fn is_sellable(&self) -> bool {
        self.status == PRODUCT_STATUS_ACTIVE && self.evaluation_status != EVALUATION_STATUS_REFUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(status: &str, evaluation_status: &str) -> Product {
        Product {
            id: 1,
            uuid: ProductUuid::new(),
            name: "Course".to_string(),
            user_id: 1,
            company_id: 1,
            format_id: 1,
            status: status.to_string(),
            evaluation_status: evaluation_status.to_string(),
            currency: "BRL".to_string(),
            photo_url: String::new(),
            seller_name: String::new(),
        }
    }

    #[test]
    fn refused_products_are_not_sellable_even_when_active() {
        assert!(!product("ACTIVE", "REFUSED").is_sellable());
    }

    #[test]
    fn active_products_pending_evaluation_are_sellable() {
        assert!(product("ACTIVE", "PENDING").is_sellable());
        assert!(!product("INACTIVE", "APPROVED").is_sellable());
    }
}
