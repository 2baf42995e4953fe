use thiserror::Error;

#[derive(Error, Debug)]
pub enum SQLError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("execution error: {0}")]
    Execution(String),

    /// A UNIQUE/CHECK/NOT NULL constraint rejected the statement.
    /// Callers rely on this variant to distinguish duplicate keys from
    /// other storage failures.
    #[error("constraint violation: {0}")]
    Constraint(String),
}
