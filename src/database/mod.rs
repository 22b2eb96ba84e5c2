use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::future::Future;
use std::pin::Pin;
use tracing::{info, warn};

const CREATE_SCHEMA_SQL: &str = include_str!("../sql/01-create-schema.sql");

/// 커넥션 풀과 트랜잭션 경계를 소유한다.
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 데이터베이스 연결. 실패 시 호출자가 프로세스를 종료한다.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        info!(
            "{:<12} --> 데이터베이스 연결 완료 (max connections: {})",
            "Database", config.max_connections
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 트랜잭션 실행. 클로저가 오류를 반환하면 롤백한다.
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Postgres>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error> + std::fmt::Display,
    {
        let mut tx = self.pool.begin().await?;
        match f(&mut tx).await {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                warn!("{:<12} --> 트랜잭션 롤백: {}", "Database", e);
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    /// 스키마 생성 (이미 있으면 유지). 전체 문장을 하나의 트랜잭션으로 적용한다.
    pub async fn initialize_database(&self) -> Result<(), sqlx::Error> {
        let statements = schema_statements(CREATE_SCHEMA_SQL);
        let count = statements.len();
        self.transaction(|tx| {
            Box::pin(async move {
                for statement in statements {
                    sqlx::query(statement).execute(&mut **tx).await?;
                }
                Ok::<(), sqlx::Error>(())
            })
        })
        .await?;
        info!("{:<12} --> 스키마 초기화 완료 ({} statements)", "Database", count);
        Ok(())
    }
}

/// `;` 로 구분된 SQL 을 빈 문장을 제외하고 나눈다.
fn schema_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_skip_blank_segments() {
        let statements = schema_statements("CREATE TABLE a (x INT);\n\n ;CREATE INDEX i ON a (x);\n");
        assert_eq!(statements, vec!["CREATE TABLE a (x INT)", "CREATE INDEX i ON a (x)"]);
    }

    #[test]
    fn test_bundled_schema_creates_tables_and_index() {
        let statements = schema_statements(CREATE_SCHEMA_SQL);
        assert_eq!(statements.len(), 3);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS items"));
        assert!(statements[1].starts_with("CREATE TABLE IF NOT EXISTS bids"));
        assert!(statements[2].starts_with("CREATE INDEX IF NOT EXISTS bids_item_id_idx"));
    }
}
