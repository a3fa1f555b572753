//! Reviews Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::{
        errors::RepositoryError,
        reviews::models::{REVIEW_STATUS_ACTIVE, Review},
    },
};

const FIND_REVIEWS_BY_CHECKOUT_CONFIG_ID_SQL: &str =
    include_str!("sql/find_reviews_by_checkout_config_id.sql");

#[automock]
#[async_trait]
pub trait ReviewsRepository: Send + Sync {
    /// Active reviews of a checkout config.
    async fn find_by_checkout_config_id(
        &self,
        checkout_config_id: i64,
    ) -> Result<Vec<Review>, RepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgReviewsRepository {
    db: Db,
}

impl PgReviewsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewsRepository for PgReviewsRepository {
    async fn find_by_checkout_config_id(
        &self,
        checkout_config_id: i64,
    ) -> Result<Vec<Review>, RepositoryError> {
        Ok(
            query_as::<Postgres, Review>(FIND_REVIEWS_BY_CHECKOUT_CONFIG_ID_SQL)
                .bind(checkout_config_id)
                .bind(REVIEW_STATUS_ACTIVE)
                .fetch_all(self.db.pool())
                .await?,
        )
    }
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            checkout_config_id: row.try_get("checkout_config_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            photo_url: row.try_get("photo_url")?,
            stars: row.try_get("stars")?,
            status: row.try_get("status")?,
        })
    }
}
