use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// SeaORM pools this URL as a single connection, so every clone of the
/// connection sees the same data. While a transaction is open, statements must
/// go through it or they wait forever on the pool.
const IN_MEMORY_URL: &str = "sqlite::memory:";

/// The database of one test. Dropping the context discards every row.
pub struct TestContext {
    /// Always `Some` once built; kept optional so tests read it the same way
    /// whether they need the database or not.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Connects a fresh in-memory database and runs `tables` in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context with every table created
    /// - `Err(TestError::Database)` - Connection or a CREATE TABLE failed
    pub async fn create(tables: &[TableCreateStatement]) -> Result<Self, TestError> {
        let db = Database::connect(IN_MEMORY_URL).await?;

        for table in tables {
            db.execute(table).await?;
        }

        Ok(Self { db: Some(db) })
    }
}
