//! User Models

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<User>;

pub const USER_STATUS_ACTIVE: &str = "ACTIVE";

/// `block_checkout` value meaning checkout is allowed.
pub const BLOCK_CHECKOUT_ACTIVE: &str = "ACTIVE";

/// User Model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub uuid: UserUuid,
    pub status: String,
    pub block_checkout: String,
}

impl User {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == USER_STATUS_ACTIVE
    }

    /// Sellers pass when unflagged or explicitly `ACTIVE`.
    #[must_use]
    pub fn can_sell(&self) -> bool {
        self.is_active()
            && (self.block_checkout.is_empty() || self.block_checkout == BLOCK_CHECKOUT_ACTIVE)
    }

    /// Affiliates must be explicitly `ACTIVE`; an empty flag does not pass.
    #[must_use]
    pub fn can_promote(&self) -> bool {
        self.is_active() && self.block_checkout == BLOCK_CHECKOUT_ACTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(status: &str, block_checkout: &str) -> User {
        User {
            id: 1,
            uuid: UserUuid::new(),
            status: status.to_string(),
            block_checkout: block_checkout.to_string(),
        }
    }

    #[test]
    fn sellers_with_empty_block_flag_can_sell() {
        assert!(user("ACTIVE", "").can_sell());
        assert!(user("ACTIVE", "ACTIVE").can_sell());
        assert!(!user("ACTIVE", "BLOCKED").can_sell());
        assert!(!user("INACTIVE", "").can_sell());
    }

    #[test]
    fn affiliates_need_explicit_active_flag() {
        assert!(user("ACTIVE", "ACTIVE").can_promote());
        assert!(!user("ACTIVE", "").can_promote());
        assert!(!user("INACTIVE", "ACTIVE").can_promote());
    }
}
