//! Company Models

pub const COMPANY_TYPE_LEGAL_PERSON: &str = "LEGAL_PERSON";

/// Company Model
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    pub company_type: String,

    /// Payment processor merchant id; empty when the company is not onboarded.
    pub movingpay_ec_id: String,
}

impl Company {
    #[must_use]
    pub fn is_legal_person(&self) -> bool {
        self.company_type == COMPANY_TYPE_LEGAL_PERSON
    }

    #[must_use]
    pub fn has_merchant_account(&self) -> bool {
        !self.movingpay_ec_id.is_empty()
    }
}
