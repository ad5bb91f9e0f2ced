use crate::domain::master_data::MasterDataError;
use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_MASTER_DATA_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS master_data_record (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        collection TEXT NOT NULL,
        code TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        payload TEXT NOT NULL,
        created_at TEXT,
        updated_at TEXT
    );
"#;

const CREATE_MASTER_DATA_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_master_data_record_collection_code
        ON master_data_record (collection, code);
"#;

/// Create the tables the service relies on when they are missing
pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for sql in [CREATE_MASTER_DATA_TABLE, CREATE_MASTER_DATA_INDEX] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Windows paths need a leading slash in the URL
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> Result<&'static DatabaseConnection, MasterDataError> {
    DB_CONN.get().ok_or(MasterDataError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/data/app.db")).unwrap();
        assert_eq!(url, "sqlite:///var/data/app.db?mode=rwc");
    }

    #[tokio::test]
    async fn test_bootstrap_is_repeatable() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
    }
}
