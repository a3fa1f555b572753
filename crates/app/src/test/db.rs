//! Postgres test databases backed by a shared testcontainers instance.

use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "checkout_test";
const PASSWORD: &str = "checkout_test_password";

static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);
static DROPPER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);
static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Generated names only: lowercase ASCII, digits and underscores.
fn is_safe_database_name(name: &str) -> bool {
    (1..=63).contains(&name.len())
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("checkout_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn server_url(database: &str) -> String {
    let container = CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

/// Drops databases in the background as their `TestDb` handles go away.
async fn start_dropper() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if !is_safe_database_name(&name) {
                continue;
            }

            if let Ok(mut conn) = PgConnection::connect(&server_url("postgres").await).await {
                _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
                    .execute(&mut conn)
                    .await;
                _ = conn.close().await;
            }
        }
    });

    sender
}

/// A freshly migrated database of its own for one test.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        DROPPER.get_or_init(start_dropper).await;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before unix epoch")
            .as_nanos();

        let name = format!(
            "checkout_{nanos}_{}",
            SEQUENCE.fetch_add(1, Ordering::Relaxed)
        );

        assert!(is_safe_database_name(&name), "unsafe database name {name}");

        let mut admin = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin.close().await.expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for test database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROPPER.get() {
            _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_safe() {
        assert!(is_safe_database_name("checkout_1718000000000_3"));
    }

    #[test]
    fn unsafe_names_are_rejected() {
        for name in ["", "1abc", "Checkout", "drop table", "a\"b", &"a".repeat(64)] {
            assert!(!is_safe_database_name(name), "{name:?} should be rejected");
        }
    }

    #[tokio::test]
    #[ignore = "requires docker for the postgres test container"]
    async fn migrated_database_is_reachable() {
        let db = TestDb::new().await;

        let offers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offers")
            .fetch_one(db.pool())
            .await
            .expect("Failed to query offers");

        assert_eq!(offers, 0);
    }
}
