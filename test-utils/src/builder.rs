use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order, then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, BlogPost};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(BlogPost)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Table names already queued, so the table groups below can overlap.
    names: Vec<String>,
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Queues the table of `entity`. Adding the same entity twice is a no-op.
    ///
    /// Tables with foreign keys should come after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let name = entity.table_name().to_string();
        if self.names.contains(&name) {
            return self;
        }

        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.names.push(name);
        self
    }

    /// Adds the tables required for authentication.
    ///
    /// - User
    /// - BlacklistedToken
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(BlacklistedToken)
    }

    /// Adds the tables required for tagged fan-fiction.
    ///
    /// - User
    /// - Tag
    /// - FanFiction
    /// - FanFictionTag
    /// - Chapter
    pub fn with_fan_fiction_tables(self) -> Self {
        self.with_table(User)
            .with_table(Tag)
            .with_table(FanFiction)
            .with_table(FanFictionTag)
            .with_table(Chapter)
    }

    /// Adds every table in the schema.
    ///
    /// Use this for tests that drive the HTTP router end to end.
    pub fn with_all_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(TeamMember)
            .with_table(Announcement)
            .with_table(Tag)
            .with_table(Event)
            .with_table(EventTag)
            .with_table(FanArt)
            .with_table(SeasonalReport)
            .with_table(BlogPost)
            .with_table(FanFiction)
            .with_table(FanFictionTag)
            .with_table(Chapter)
            .with_table(Comment)
    }

    /// Connects a fresh in-memory database with the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::create(&self.tables).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
