mod job;
mod report;
mod schema;

use serde::Serialize;
use serde::de::DeserializeOwned;

use flexerp_core::{FieldError, ListResult, ServiceError};
use flexerp_sql::{SQLError, SQLStore, Value};

use crate::schema::RecordSchema;

/// Jobsheet service: the persistence gateway for both record shapes.
///
/// Pass-through CRUD over the SQL document store. Every create
/// re-validates server-side; the caller is never trusted.
pub struct JobsheetService {
    pub(crate) sql: Box<dyn SQLStore>,
}

impl JobsheetService {
    pub fn new(sql: Box<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }

    // ── Generic CRUD helpers ──

    /// Run the schema validator over an incoming body, converting
    /// violations into the service-level validation failure.
    pub(crate) fn check_body(
        schema: &RecordSchema,
        body: &serde_json::Value,
    ) -> Result<(), ServiceError> {
        schema.validate(body).map_err(|violations| {
            ServiceError::Validation(
                violations
                    .into_iter()
                    .map(|v| FieldError::new(v.path, v.message))
                    .collect(),
            )
        })
    }

    /// Insert a record as JSON into a table with indexed columns. A
    /// constraint rejection (duplicate flx_tag_no) becomes a conflict.
    pub(crate) fn insert_record<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        record: &T,
        indexes: &[(&str, Value)],
    ) -> Result<(), ServiceError> {
        let json = serde_json::to_string(record)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut placeholders = vec!["?1".to_string(), "?2".to_string()];
        let mut params = vec![Value::Text(id.to_string()), Value::Text(json)];

        for (i, (col, val)) in indexes.iter().enumerate() {
            cols.push(col);
            placeholders.push(format!("?{}", i + 3));
            params.push(val.clone());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            cols.join(", "),
            placeholders.join(", "),
        );

        self.sql.exec(&sql, &params).map_err(|e| match e {
            SQLError::Constraint(msg) => {
                tracing::debug!("duplicate key on {}: {}", table, msg);
                ServiceError::Conflict("Duplicate entry found".into())
            }
            other => ServiceError::Storage(other.to_string()),
        })?;

        Ok(())
    }

    /// Get a record by id, deserializing the JSON `data` column.
    pub(crate) fn get_record<T: DeserializeOwned>(
        &self,
        table: &str,
        noun: &str,
        id: &str,
    ) -> Result<T, ServiceError> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", table);
        let rows = self
            .sql
            .query(&sql, &[Value::Text(id.to_string())])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("{} {} not found", noun, id)))?;
        let data = row
            .get_str("data")
            .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
        serde_json::from_str(data).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// List records newest first, with pagination and total count.
    pub(crate) fn list_records<T: DeserializeOwned + Serialize>(
        &self,
        table: &str,
        limit: usize,
        offset: usize,
    ) -> Result<ListResult<T>, ServiceError> {
        let count_sql = format!("SELECT COUNT(*) as cnt FROM {}", table);
        let rows = self
            .sql
            .query(&count_sql, &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let total = rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as usize;

        let sql = format!(
            "SELECT data FROM {} ORDER BY created_at DESC LIMIT ?1 OFFSET ?2",
            table,
        );
        let rows = self
            .sql
            .query(&sql, &[
                Value::Integer(limit as i64),
                Value::Integer(offset as i64),
            ])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut items = Vec::new();
        for row in &rows {
            let data = row
                .get_str("data")
                .ok_or_else(|| ServiceError::Internal("missing data column".into()))?;
            let item: T = serde_json::from_str(data)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            items.push(item);
        }

        Ok(ListResult { items, total })
    }
}

#[cfg(test)]
pub(crate) fn test_service() -> JobsheetService {
    let store = flexerp_sql::SqliteStore::open_in_memory().unwrap();
    JobsheetService::new(Box::new(store)).unwrap()
}
