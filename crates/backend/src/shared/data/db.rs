use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Minimal schema bootstrap: the settlement cache table is populated by an
/// external sync job; this service only ever reads it.
async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let check_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='sales_commission_cache';
    "#;
    let table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_table.to_string(),
        ))
        .await?;

    if table_exists.is_empty() {
        tracing::info!("Creating sales_commission_cache table");
        let create_table_sql = r#"
            CREATE TABLE sales_commission_cache (
                id TEXT PRIMARY KEY NOT NULL,
                sales_id TEXT NOT NULL DEFAULT '',
                invoice_id TEXT NOT NULL DEFAULT '',
                rec_id TEXT NOT NULL DEFAULT '',
                dimension_key TEXT NOT NULL DEFAULT '',
                last_settle_voucher TEXT NOT NULL DEFAULT '',
                qty REAL NOT NULL DEFAULT 0,
                invoice_date TEXT,
                settle_date TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_table_sql.to_string(),
        ))
        .await?;

        for index_sql in [
            "CREATE INDEX idx_scc_invoice_date ON sales_commission_cache (invoice_date);",
            "CREATE INDEX idx_scc_settle_date ON sales_commission_cache (settle_date);",
            "CREATE INDEX idx_scc_dimension_key ON sales_commission_cache (dimension_key);",
        ] {
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                index_sql.to_string(),
            ))
            .await?;
        }
    }

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
