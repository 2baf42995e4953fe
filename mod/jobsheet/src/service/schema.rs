use flexerp_core::ServiceError;
use flexerp_sql::SQLStore;

/// SQL DDL to initialize the jobsheet tables.
///
/// Each table stores the full JSON document in a `data` TEXT column,
/// with indexed columns extracted for filtering and uniqueness. The
/// UNIQUE constraint on `flx_tag_no` is the designated duplicate-key
/// surface: a second record with the same tag fails the insert and is
/// reported as a conflict.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS inspection_reports (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        customer TEXT,
        flx_tag_no TEXT UNIQUE,
        hose_type TEXT,
        created_at TEXT,
        updated_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS jobs (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        customer TEXT,
        flx_tag_no TEXT UNIQUE,
        hose_type TEXT,
        created_at TEXT,
        updated_at TEXT
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_report_customer ON inspection_reports(customer)",
    "CREATE INDEX IF NOT EXISTS idx_report_created ON inspection_reports(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_job_customer ON jobs(customer)",
    "CREATE INDEX IF NOT EXISTS idx_job_created ON jobs(created_at)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(format!("schema init failed: {}", e)))?;
    }
    Ok(())
}
