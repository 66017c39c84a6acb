/// All database primary keys are PostgreSQL BIGINT identities.
pub type DbId = i64;
